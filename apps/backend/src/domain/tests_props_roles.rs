//! Property tests for role distribution and assignment (pure domain).
//!
//! Contract:
//! - N >= 5: floor(N/3) wolves, one guard, one witch, villagers for the rest
//! - Every participant receives exactly one role
//! - N < 5 is rejected

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::domain::roles::{assign_roles, role_distribution};
use crate::domain::state::{ParticipantId, Role};
use crate::domain::test_prelude;
use crate::domain::test_state_helpers::pid;

fn count(roles: &[Role], role: Role) -> usize {
    roles.iter().filter(|&&r| r == role).count()
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: the role multiset has the fixed shape for any roster size.
    #[test]
    fn prop_distribution_shape(n in 5usize..=60) {
        let roles = role_distribution(n).unwrap();

        prop_assert_eq!(roles.len(), n);
        prop_assert_eq!(count(&roles, Role::Wolf), n / 3);
        prop_assert_eq!(count(&roles, Role::Guard), 1);
        prop_assert_eq!(count(&roles, Role::Witch), 1);
        prop_assert_eq!(count(&roles, Role::Villager), n - n / 3 - 2);
    }

    /// Property: shuffling never changes the multiset and seats everyone once.
    #[test]
    fn prop_assignment_preserves_distribution(n in 5usize..=40, seed in any::<u64>()) {
        let players: Vec<ParticipantId> = (1..=n as u128).map(pid).collect();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);

        let assignment = assign_roles(&players, &mut rng).unwrap();

        let seated: Vec<ParticipantId> = assignment.iter().map(|(id, _)| *id).collect();
        prop_assert_eq!(seated, players);

        let roles: Vec<Role> = assignment.iter().map(|(_, r)| *r).collect();
        prop_assert_eq!(count(&roles, Role::Wolf), n / 3);
        prop_assert_eq!(count(&roles, Role::Guard), 1);
        prop_assert_eq!(count(&roles, Role::Witch), 1);
    }

    /// Property: small rosters never get roles.
    #[test]
    fn prop_small_rosters_rejected(n in 0usize..5) {
        prop_assert!(role_distribution(n).is_err());
    }
}
