//! Domain layer: pure game rules, no transport and no timers.

pub mod night;
pub mod roles;
pub mod roster;
pub mod rules;
pub mod state;
pub mod victory;
pub mod voting;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_props_roles;
#[cfg(test)]
mod tests_props_voting;

// Re-exports for ergonomics
pub use night::{NightOutcome, WitchAction};
pub use roles::{assign_roles, role_distribution};
pub use roster::{Participant, ParticipantView, Roster};
pub use state::{Faction, GameState, ParticipantId, Phase, Role, RoundState, TrialCandidates};
pub use victory::evaluate;
pub use voting::{tally, tally_trial, Ballot, Ballots, TallyOutcome, TrialCount, Verdict};
