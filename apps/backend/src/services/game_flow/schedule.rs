//! Phase transition table.
//!
//! Each timed phase maps to a duration and the resolution that runs when its
//! countdown reaches zero. `Waiting` and `Announce` are untimed.

use crate::config::game::GameConfig;
use crate::domain::Phase;

/// What happens when a phase's timer expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// protect → wolf
    OpenWolfPhase,
    /// wolf → witch
    OpenWitchPhase,
    /// witch → announce → discussion (or game over)
    ResolveNight,
    /// discussion → vote
    OpenVote,
    /// vote → eliminate / trial1 / next night
    ResolveVote,
    /// trial1 → trial2
    PresentSecondCandidate,
    /// trial2 → trial vote
    OpenTrialVote,
    /// trial vote → eliminate / next night
    ResolveTrial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseRule {
    pub duration_secs: u32,
    pub resolution: Resolution,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseTable {
    rules: Vec<(Phase, PhaseRule)>,
}

impl PhaseTable {
    pub fn from_config(config: &GameConfig) -> Self {
        let rule = |duration_secs: u32, resolution: Resolution| PhaseRule {
            duration_secs,
            resolution,
        };
        Self {
            rules: vec![
                (Phase::Protect, rule(config.protect_secs, Resolution::OpenWolfPhase)),
                (Phase::Wolf, rule(config.wolf_secs, Resolution::OpenWitchPhase)),
                (Phase::Witch, rule(config.witch_secs, Resolution::ResolveNight)),
                (Phase::Discussion, rule(config.discussion_secs, Resolution::OpenVote)),
                (Phase::Vote, rule(config.vote_secs, Resolution::ResolveVote)),
                (Phase::Trial1, rule(config.trial_secs, Resolution::PresentSecondCandidate)),
                (Phase::Trial2, rule(config.trial_secs, Resolution::OpenTrialVote)),
                (Phase::TrialVote, rule(config.trial_vote_secs, Resolution::ResolveTrial)),
            ],
        }
    }

    /// Rule for a timed phase; `None` for untimed ones.
    pub fn rule(&self, phase: Phase) -> Option<PhaseRule> {
        self.rules
            .iter()
            .find(|(p, _)| *p == phase)
            .map(|(_, rule)| *rule)
    }
}
