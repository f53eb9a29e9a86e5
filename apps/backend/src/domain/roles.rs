//! Role distribution and randomized assignment at game start.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::rules::{wolf_count, MIN_PLAYERS};
use crate::domain::state::{ParticipantId, Role};
use crate::errors::domain::DomainError;

/// Build the role multiset for `player_count` participants.
///
/// `floor(N/3)` wolves, one guard, one witch, and villagers for the rest.
/// The result is in a fixed order; callers shuffle it.
pub fn role_distribution(player_count: usize) -> Result<Vec<Role>, DomainError> {
    if player_count < MIN_PLAYERS {
        return Err(DomainError::NotEnoughPlayers {
            have: player_count,
            need: MIN_PLAYERS,
        });
    }

    let wolves = wolf_count(player_count);
    let mut roles = Vec::with_capacity(player_count);
    roles.resize(wolves, Role::Wolf);
    roles.push(Role::Guard);
    roles.push(Role::Witch);
    roles.resize(player_count, Role::Villager);
    Ok(roles)
}

/// Assign roles to `participants` uniformly at random.
///
/// Every permutation of the role multiset is equally likely: the roles are
/// shuffled with Fisher-Yates and then paired with participants in order.
pub fn assign_roles<R: Rng + ?Sized>(
    participants: &[ParticipantId],
    rng: &mut R,
) -> Result<Vec<(ParticipantId, Role)>, DomainError> {
    let mut roles = role_distribution(participants.len())?;
    roles.shuffle(rng);
    Ok(participants.iter().copied().zip(roles).collect())
}
