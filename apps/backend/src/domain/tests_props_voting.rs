//! Property tests for the day-vote tally against an independent oracle.

use std::collections::HashMap;

use proptest::prelude::*;

use crate::domain::state::ParticipantId;
use crate::domain::test_prelude;
use crate::domain::test_state_helpers::pid;
use crate::domain::voting::{tally, tally_trial, Ballot, Ballots, TallyOutcome, Verdict};

/// Oracle: the top set, sorted, computed from a plain map.
fn oracle_top(votes: &[(u128, u128)]) -> Vec<ParticipantId> {
    let mut latest: HashMap<u128, u128> = HashMap::new();
    for (voter, target) in votes {
        latest.insert(*voter, *target);
    }
    let mut counts: HashMap<u128, usize> = HashMap::new();
    for target in latest.values() {
        *counts.entry(*target).or_default() += 1;
    }
    let max = counts.values().copied().max().unwrap_or(0);
    let mut top: Vec<ParticipantId> = counts
        .iter()
        .filter(|(_, n)| **n == max)
        .map(|(t, _)| pid(*t))
        .collect();
    top.sort_by_key(|id| id.as_uuid());
    top
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: tally agrees with the oracle on winner / tie / no resolution.
    #[test]
    fn prop_tally_matches_oracle(
        votes in prop::collection::vec((0u128..12, 100u128..105), 0..30),
    ) {
        let mut ballots = Ballots::new();
        for (voter, target) in &votes {
            ballots.cast(pid(*voter), Ballot::Target(pid(*target)));
        }

        let top = oracle_top(&votes);
        match tally(&ballots) {
            TallyOutcome::Elected(id) => {
                prop_assert_eq!(top, vec![id]);
            }
            TallyOutcome::Tie(a, b) => {
                prop_assert_ne!(a, b);
                let mut pair = vec![a, b];
                pair.sort_by_key(|id| id.as_uuid());
                prop_assert_eq!(top, pair);
            }
            TallyOutcome::NoResolution => {
                prop_assert!(top.is_empty() || top.len() >= 3);
            }
        }
    }

    /// Property: execution requires strictly more kill than spare ballots.
    #[test]
    fn prop_trial_requires_strict_kill_majority(kills in 0usize..10, spares in 0usize..10) {
        let mut ballots = Ballots::new();
        for voter in 0..kills {
            ballots.cast(pid(voter as u128), Ballot::Kill);
        }
        for voter in 0..spares {
            ballots.cast(pid(1_000 + voter as u128), Ballot::Spare);
        }

        let expected = if kills > spares { Verdict::Execute } else { Verdict::Spare };
        prop_assert_eq!(tally_trial(&ballots).verdict(), expected);
    }
}
