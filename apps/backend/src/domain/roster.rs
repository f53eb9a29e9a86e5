//! Participant roster: seats, roles, and alive/dead status.
//!
//! The roster is the only owner of participant records; every other
//! component refers to participants by [`ParticipantId`]. Mutations here are
//! silent: announcing joins and deaths is the orchestrator's job.

use serde::{Deserialize, Serialize};

use crate::domain::rules::MAX_NAME_CHARS;
use crate::domain::state::{ParticipantId, Role};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    /// Unset until the game starts.
    pub role: Option<Role>,
    pub alive: bool,
}

impl Participant {
    pub fn has_living_role(&self, role: Role) -> bool {
        self.alive && self.role == Some(role)
    }

    pub fn is_wolf(&self) -> bool {
        self.role == Some(Role::Wolf)
    }
}

/// Public view of a participant. Roles are never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantView {
    pub id: ParticipantId,
    pub name: String,
    pub alive: bool,
}

impl From<&Participant> for ParticipantView {
    fn from(p: &Participant) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            alive: p.alive,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    pub fn new() -> Self {
        Self {
            participants: Vec::new(),
        }
    }

    /// Seat a participant. Returns `false` if the id already holds a seat.
    pub fn join(&mut self, id: ParticipantId, name: &str) -> bool {
        if self.get(id).is_some() {
            return false;
        }
        let name = normalize_name(name, self.participants.len() + 1);
        self.participants.push(Participant {
            id,
            name,
            role: None,
            alive: true,
        });
        true
    }

    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }

    /// Ids in join order.
    pub fn ids(&self) -> Vec<ParticipantId> {
        self.participants.iter().map(|p| p.id).collect()
    }

    pub fn is_alive(&self, id: ParticipantId) -> bool {
        self.get(id).is_some_and(|p| p.alive)
    }

    pub fn has_living_role(&self, id: ParticipantId, role: Role) -> bool {
        self.get(id).is_some_and(|p| p.has_living_role(role))
    }

    /// Living participants holding `role`, in join order.
    pub fn living_with_role(&self, role: Role) -> Vec<ParticipantId> {
        self.participants
            .iter()
            .filter(|p| p.has_living_role(role))
            .map(|p| p.id)
            .collect()
    }

    pub fn living_wolf_count(&self) -> usize {
        self.participants
            .iter()
            .filter(|p| p.alive && p.is_wolf())
            .count()
    }

    /// Living participants that are not wolves, including anyone who joined
    /// after roles were dealt.
    pub fn living_non_wolf_count(&self) -> usize {
        self.participants
            .iter()
            .filter(|p| p.alive && !p.is_wolf())
            .count()
    }

    /// Mark a participant dead. No-op (returns `false`) when the id is
    /// unknown or already dead.
    pub fn eliminate(&mut self, id: ParticipantId) -> bool {
        match self.participants.iter_mut().find(|p| p.id == id) {
            Some(p) if p.alive => {
                p.alive = false;
                true
            }
            _ => false,
        }
    }

    /// Apply a role assignment and revive everyone for the new game.
    pub fn apply_roles(&mut self, assignment: &[(ParticipantId, Role)]) {
        for (id, role) in assignment {
            if let Some(p) = self.participants.iter_mut().find(|p| p.id == *id) {
                p.role = Some(*role);
                p.alive = true;
            }
        }
    }

    pub fn views(&self) -> Vec<ParticipantView> {
        self.participants.iter().map(ParticipantView::from).collect()
    }

    pub fn clear(&mut self) {
        self.participants.clear();
    }
}

fn normalize_name(raw: &str, seat_no: usize) -> String {
    let trimmed: String = raw.trim().chars().take(MAX_NAME_CHARS).collect();
    let trimmed = trimmed.trim_end();
    if trimmed.is_empty() {
        format!("Player {seat_no}")
    } else {
        trimmed.to_string()
    }
}
