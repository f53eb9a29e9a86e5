//! Ballot collection and tallying for day votes and trial votes.

use crate::domain::state::ParticipantId;

/// A single submitted ballot.
///
/// Day votes use `Target`; trial votes count `Kill` as "execute" and every
/// other ballot as "spare".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ballot {
    Target(ParticipantId),
    Kill,
    Spare,
}

impl Ballot {
    /// Interpret a raw wire value: `"kill"`, a participant id, or anything
    /// else (which reads as a spare vote).
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw == "kill" {
            return Ballot::Kill;
        }
        match raw.parse::<ParticipantId>() {
            Ok(id) => Ballot::Target(id),
            Err(_) => Ballot::Spare,
        }
    }
}

/// Ballots keyed by voter, one per voter, last write wins.
///
/// Entries are kept in submission order; a re-vote moves the voter to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ballots {
    entries: Vec<(ParticipantId, Ballot)>,
}

impl Ballots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cast(&mut self, voter: ParticipantId, ballot: Ballot) {
        self.entries.retain(|(v, _)| *v != voter);
        self.entries.push((voter, ballot));
    }

    pub fn get(&self, voter: ParticipantId) -> Option<Ballot> {
        self.entries
            .iter()
            .find(|(v, _)| *v == voter)
            .map(|(_, b)| *b)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &(ParticipantId, Ballot)> {
        self.entries.iter()
    }
}

/// Result of a day vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TallyOutcome {
    /// A single target has the strictly highest count.
    Elected(ParticipantId),
    /// Exactly two targets share the highest count; goes to trial.
    Tie(ParticipantId, ParticipantId),
    /// No ballots, or three or more targets share the top.
    NoResolution,
}

/// Count day-vote ballots by target.
///
/// Only `Target` ballots count. Tied candidates come back in the order they
/// first received a vote.
pub fn tally(ballots: &Ballots) -> TallyOutcome {
    let mut counts: Vec<(ParticipantId, usize)> = Vec::new();
    for (_, ballot) in ballots.iter() {
        let Ballot::Target(target) = ballot else {
            continue;
        };
        match counts.iter_mut().find(|(id, _)| id == target) {
            Some((_, n)) => *n += 1,
            None => counts.push((*target, 1)),
        }
    }

    let Some(max) = counts.iter().map(|(_, n)| *n).max() else {
        return TallyOutcome::NoResolution;
    };
    let top: Vec<ParticipantId> = counts
        .iter()
        .filter(|(_, n)| *n == max)
        .map(|(id, _)| *id)
        .collect();

    match top.as_slice() {
        [winner] => TallyOutcome::Elected(*winner),
        [first, second] => TallyOutcome::Tie(*first, *second),
        _ => TallyOutcome::NoResolution,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Execute,
    Spare,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrialCount {
    pub kill: usize,
    pub spare: usize,
}

impl TrialCount {
    pub fn verdict(self) -> Verdict {
        if self.kill > self.spare {
            Verdict::Execute
        } else {
            Verdict::Spare
        }
    }
}

/// Count execute/spare ballots. Anything other than `Kill` is a spare vote.
pub fn tally_trial(ballots: &Ballots) -> TrialCount {
    ballots
        .iter()
        .fold(TrialCount::default(), |mut count, (_, ballot)| {
            match ballot {
                Ballot::Kill => count.kill += 1,
                Ballot::Target(_) | Ballot::Spare => count.spare += 1,
            }
            count
        })
}
