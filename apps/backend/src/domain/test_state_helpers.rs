use uuid::Uuid;

use crate::domain::roster::Roster;
use crate::domain::state::{ParticipantId, Role};

/// Deterministic participant id for tests.
pub fn pid(n: u128) -> ParticipantId {
    ParticipantId::from_uuid(Uuid::from_u128(n))
}

/// Build a roster with one participant per role, ids `pid(1)..`.
pub fn roster_with_roles(roles: &[Role]) -> (Roster, Vec<ParticipantId>) {
    let mut roster = Roster::new();
    let ids: Vec<ParticipantId> = (1..=roles.len() as u128).map(pid).collect();
    for id in &ids {
        roster.join(*id, &format!("player-{id}"));
    }
    let assignment: Vec<(ParticipantId, Role)> =
        ids.iter().copied().zip(roles.iter().copied()).collect();
    roster.apply_roles(&assignment);
    (roster, ids)
}

/// The standard six-player table: W W G Wi V V.
pub fn six_player_roster() -> (Roster, Vec<ParticipantId>) {
    roster_with_roles(&[
        Role::Wolf,
        Role::Wolf,
        Role::Guard,
        Role::Witch,
        Role::Villager,
        Role::Villager,
    ])
}
