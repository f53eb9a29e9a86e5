use tracing::{debug, info};

use super::{GameFlow, Notification, NotificationSink};
use crate::domain::night::{submit_protect, submit_witch_action, submit_wolf_kill};
use crate::domain::{Ballot, ParticipantId, Phase, WitchAction};
use crate::errors::domain::DomainError;

/// A participant's request, already decoded from the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    Join { name: String },
    Start,
    Protect { target: ParticipantId },
    WolfKill { target: ParticipantId },
    WitchAction(WitchAction),
    Vote(Ballot),
    Chat { message: String },
}

impl InboundEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            InboundEvent::Join { .. } => "join",
            InboundEvent::Start => "start",
            InboundEvent::Protect { .. } => "protect",
            InboundEvent::WolfKill { .. } => "wolf_kill",
            InboundEvent::WitchAction(_) => "witch_action",
            InboundEvent::Vote(_) => "vote",
            InboundEvent::Chat { .. } => "chat",
        }
    }
}

impl<S: NotificationSink> GameFlow<S> {
    /// Apply one inbound event from `from`.
    ///
    /// A rejected event leaves the game untouched. The error is for the
    /// caller to log or report; the room itself never reacts to it.
    pub fn handle(&mut self, from: ParticipantId, event: InboundEvent) -> Result<(), DomainError> {
        let kind = event.kind();
        let result = match event {
            InboundEvent::Join { name } => self.join(from, &name),
            InboundEvent::Start => self.start(),
            InboundEvent::Protect { target } => {
                self.require_phase(Phase::Protect)?;
                submit_protect(&self.state.roster, &mut self.state.round, from, target)
            }
            InboundEvent::WolfKill { target } => {
                self.require_phase(Phase::Wolf)?;
                submit_wolf_kill(&self.state.roster, &mut self.state.round, from, target)
            }
            InboundEvent::WitchAction(action) => {
                self.require_phase(Phase::Witch)?;
                submit_witch_action(&mut self.state.roster, &mut self.state.round, from, action)
            }
            InboundEvent::Vote(ballot) => self.vote(from, ballot),
            InboundEvent::Chat { message } => self.chat(from, &message),
        };

        if result.is_ok() {
            debug!(participant = %from, kind, phase = self.state.phase.label(), "Event applied");
        }
        result
    }

    fn require_phase(&self, expected: Phase) -> Result<(), DomainError> {
        if self.state.phase == expected {
            Ok(())
        } else {
            Err(DomainError::PhaseMismatch(self.state.phase))
        }
    }

    /// Joining is open in every phase; late joiners are never dealt a role.
    fn join(&mut self, id: ParticipantId, name: &str) -> Result<(), DomainError> {
        if !self.state.roster.join(id, name) {
            return Err(DomainError::AlreadyJoined);
        }
        info!(participant = %id, players = self.state.roster.len(), "Participant joined");
        self.sink
            .broadcast(Notification::Players(self.state.roster.views()));
        Ok(())
    }

    fn start(&mut self) -> Result<(), DomainError> {
        self.require_phase(Phase::Waiting)?;
        let have = self.state.roster.len();
        let need = self.config.min_players;
        if have < need {
            return Err(DomainError::NotEnoughPlayers { have, need });
        }
        self.start_game()
    }

    /// Day ballots must name a target; trial ballots may be anything, and
    /// only `kill`/`spare` count.
    fn vote(&mut self, voter: ParticipantId, ballot: Ballot) -> Result<(), DomainError> {
        match self.state.phase {
            Phase::Vote => {
                if !matches!(ballot, Ballot::Target(_)) {
                    return Err(DomainError::InvalidBallot);
                }
            }
            Phase::TrialVote => {}
            other => return Err(DomainError::PhaseMismatch(other)),
        }

        let participant = self
            .state
            .roster
            .get(voter)
            .ok_or(DomainError::NotJoined)?;
        if !participant.alive {
            return Err(DomainError::NotEligible);
        }

        self.state.round.ballots.cast(voter, ballot);
        Ok(())
    }

    fn chat(&mut self, from: ParticipantId, message: &str) -> Result<(), DomainError> {
        self.require_phase(Phase::Discussion)?;
        let name = self
            .state
            .roster
            .get(from)
            .map(|p| p.name.clone())
            .ok_or(DomainError::NotJoined)?;

        let message = message.trim();
        if message.is_empty() {
            return Err(DomainError::EmptyMessage);
        }

        self.sink.broadcast(Notification::Chat {
            from,
            name,
            message: message.to_string(),
        });
        Ok(())
    }
}
