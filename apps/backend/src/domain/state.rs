use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::roster::Roster;
use crate::domain::voting::Ballots;

/// Opaque participant identifier, stable for the lifetime of a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(Uuid);

impl ParticipantId {
    /// Mint a fresh identifier for a new connection.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for ParticipantId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl Display for ParticipantId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt(f)
    }
}

impl FromStr for ParticipantId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Wolf,
    Guard,
    Witch,
    Villager,
}

impl Role {
    pub fn faction(self) -> Faction {
        match self {
            Role::Wolf => Faction::Wolves,
            Role::Guard | Role::Witch | Role::Villager => Faction::Villagers,
        }
    }
}

/// The two sides a game can be won by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Faction {
    Wolves,
    Villagers,
}

/// Orchestrator phases, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Lobby: players join until someone starts the game.
    Waiting,
    /// Guard picks a protection target.
    Protect,
    /// Wolves pick a kill target.
    Wolf,
    /// Witch may heal the wolves' target or poison someone.
    Witch,
    /// Night result is published; untimed.
    Announce,
    /// Open chat.
    Discussion,
    /// Day elimination vote.
    Vote,
    /// First tied candidate is presented.
    Trial1,
    /// Second tied candidate is presented.
    Trial2,
    /// Execute/spare ballot on the first candidate.
    TrialVote,
}

impl Phase {
    pub const fn label(self) -> &'static str {
        match self {
            Phase::Waiting => "waiting",
            Phase::Protect => "protect",
            Phase::Wolf => "wolf",
            Phase::Witch => "witch",
            Phase::Announce => "announce",
            Phase::Discussion => "discussion",
            Phase::Vote => "vote",
            Phase::Trial1 => "trial1",
            Phase::Trial2 => "trial2",
            Phase::TrialVote => "trial_vote",
        }
    }

    pub const fn is_night(self) -> bool {
        matches!(self, Phase::Protect | Phase::Wolf | Phase::Witch)
    }
}

/// Per-night scratch data plus the few facts that persist for the whole game.
#[derive(Debug, Clone, Default)]
pub struct RoundState {
    /// Current ballots (day vote or trial vote), one per voter.
    pub ballots: Ballots,
    /// Wolves' pending kill target.
    pub night_kill: Option<ParticipantId>,
    /// Guard's target for the current night.
    pub protected_tonight: Option<ParticipantId>,
    /// Guard's target from the previous night; persists across nights.
    pub protected_last_night: Option<ParticipantId>,
    /// Game-wide one-shot flags.
    pub witch_heal_used: bool,
    pub witch_kill_used: bool,
    /// Tonight's heal, held until resolution so a later poison can replace it.
    pub heal_pending: bool,
    /// Participant poisoned by the witch tonight, announced at day break.
    pub poisoned_tonight: Option<ParticipantId>,
}

impl RoundState {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Clear everything scoped to a single night.
    pub fn begin_night(&mut self) {
        self.ballots.clear();
        self.night_kill = None;
        self.protected_tonight = None;
        self.heal_pending = false;
        self.poisoned_tonight = None;
    }
}

/// The two tied candidates carried into a trial, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialCandidates {
    pub first: ParticipantId,
    pub second: ParticipantId,
}

/// Entire room state, owned by the orchestrator.
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: Phase,
    /// Seconds left on the current phase timer (0 for untimed phases).
    pub remaining_secs: u32,
    pub roster: Roster,
    pub round: RoundState,
    pub trial: Option<TrialCandidates>,
    /// 1-based night counter; 0 before the first night.
    pub night_no: u32,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Waiting,
            remaining_secs: 0,
            roster: Roster::new(),
            round: RoundState::empty(),
            trial: None,
            night_no: 0,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
