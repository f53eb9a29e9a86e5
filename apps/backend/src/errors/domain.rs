//! Domain-level rejection type used by the game core.
//!
//! None of these are surfaced to participants: the core absorbs invalid input
//! by ignoring it. Callers log the reason and move on.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::state::Phase;

/// One-shot witch abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WitchAbility {
    Heal,
    Kill,
}

impl Display for WitchAbility {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            WitchAbility::Heal => write!(f, "heal"),
            WitchAbility::Kill => write!(f, "kill"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The action is not legal in the current phase.
    PhaseMismatch(Phase),
    /// The sender never joined the roster.
    NotJoined,
    /// The connection already holds a seat.
    AlreadyJoined,
    NotEnoughPlayers { have: usize, need: usize },
    /// The sender is dead or lacks the role the action requires.
    NotEligible,
    /// Guard tried to protect last night's target again.
    RepeatProtection,
    AbilityUsed(WitchAbility),
    /// The witch already poisoned someone this night.
    AlreadyActed,
    InvalidTarget,
    InvalidBallot,
    EmptyMessage,
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::PhaseMismatch(phase) => {
                write!(f, "action not allowed during {}", phase.label())
            }
            DomainError::NotJoined => write!(f, "sender has not joined"),
            DomainError::AlreadyJoined => write!(f, "sender already joined"),
            DomainError::NotEnoughPlayers { have, need } => {
                write!(f, "not enough players: have {have}, need {need}")
            }
            DomainError::NotEligible => write!(f, "sender may not perform this action"),
            DomainError::RepeatProtection => write!(f, "cannot protect the same target twice"),
            DomainError::AbilityUsed(ability) => write!(f, "witch {ability} already used"),
            DomainError::AlreadyActed => write!(f, "witch already poisoned tonight"),
            DomainError::InvalidTarget => write!(f, "invalid target"),
            DomainError::InvalidBallot => write!(f, "invalid ballot"),
            DomainError::EmptyMessage => write!(f, "empty chat message"),
        }
    }
}

impl Error for DomainError {}
