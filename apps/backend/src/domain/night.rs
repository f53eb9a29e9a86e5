//! Night actions and their resolution into a single nightly outcome.
//!
//! Submissions only write into [`RoundState`]; nothing dies here except the
//! witch's poison target, which is marked dead at once. Phase legality is
//! checked by the orchestrator before these are called.

use crate::domain::roster::Roster;
use crate::domain::state::{ParticipantId, Role, RoundState};
use crate::errors::domain::{DomainError, WitchAbility};

/// The witch's choice for the night.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WitchAction {
    /// Cancel the wolves' pending kill.
    Heal,
    /// Poison a target immediately.
    Kill(ParticipantId),
}

/// What the night produced, published at day break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NightOutcome {
    /// Wolves' victim, if one actually died.
    pub victim: Option<ParticipantId>,
    /// Witch's poison victim, if any.
    pub poisoned: Option<ParticipantId>,
}

/// Guard chooses tonight's protection target.
///
/// Protecting last night's target again is refused and leaves any earlier
/// choice for tonight untouched.
pub fn submit_protect(
    roster: &Roster,
    round: &mut RoundState,
    guard: ParticipantId,
    target: ParticipantId,
) -> Result<(), DomainError> {
    if !roster.has_living_role(guard, Role::Guard) {
        return Err(DomainError::NotEligible);
    }
    if round.protected_last_night == Some(target) {
        return Err(DomainError::RepeatProtection);
    }
    round.protected_tonight = Some(target);
    Ok(())
}

/// A wolf chooses the night's kill. The last submission from any wolf wins.
pub fn submit_wolf_kill(
    roster: &Roster,
    round: &mut RoundState,
    wolf: ParticipantId,
    target: ParticipantId,
) -> Result<(), DomainError> {
    if !roster.has_living_role(wolf, Role::Wolf) {
        return Err(DomainError::NotEligible);
    }
    round.night_kill = Some(target);
    Ok(())
}

/// Record the witch's action for the night. The last submission wins.
///
/// A heal is only held until resolution, so a later poison replaces it. A
/// poison lands at once and cannot be taken back, so nothing may follow it
/// the same night.
pub fn submit_witch_action(
    roster: &mut Roster,
    round: &mut RoundState,
    witch: ParticipantId,
    action: WitchAction,
) -> Result<(), DomainError> {
    if !roster.has_living_role(witch, Role::Witch) {
        return Err(DomainError::NotEligible);
    }
    if round.poisoned_tonight.is_some() {
        return Err(DomainError::AlreadyActed);
    }

    match action {
        WitchAction::Heal => {
            if round.witch_heal_used {
                return Err(DomainError::AbilityUsed(WitchAbility::Heal));
            }
            round.heal_pending = true;
        }
        WitchAction::Kill(target) => {
            if round.witch_kill_used {
                return Err(DomainError::AbilityUsed(WitchAbility::Kill));
            }
            if !roster.eliminate(target) {
                return Err(DomainError::InvalidTarget);
            }
            round.witch_kill_used = true;
            round.poisoned_tonight = Some(target);
            round.heal_pending = false;
        }
    }

    Ok(())
}

/// Resolve the night: a held heal or matching protection cancels the kill,
/// otherwise the target dies. Tonight's protection becomes last night's.
pub fn resolve_night(roster: &mut Roster, round: &mut RoundState) -> NightOutcome {
    let mut pending = round.night_kill.take();
    let protected = round.protected_tonight.take();

    if round.heal_pending {
        round.heal_pending = false;
        round.witch_heal_used = true;
        pending = None;
    }

    let victim = pending
        .filter(|target| Some(*target) != protected)
        .filter(|target| roster.eliminate(*target));

    round.protected_last_night = protected;

    NightOutcome {
        victim,
        poisoned: round.poisoned_tonight.take(),
    }
}
