// Helpers for driving a GameFlow by hand in integration tests.

use backend::domain::{Ballot, ParticipantId, Phase, Role};
use backend::services::game_flow::{GameFlow, InboundEvent, RecordingSink};
use backend::GameConfig;
use uuid::Uuid;

pub type Flow = GameFlow<RecordingSink>;

pub fn pid(n: u128) -> ParticipantId {
    ParticipantId::from_uuid(Uuid::from_u128(n))
}

/// A flow with `n` joined participants (`pid(1)..=pid(n)`), not yet started.
pub fn seated_flow(config: GameConfig, n: u128) -> (Flow, Vec<ParticipantId>) {
    let mut flow = GameFlow::new(config, RecordingSink::new());
    let ids: Vec<ParticipantId> = (1..=n).map(pid).collect();
    for (i, id) in ids.iter().enumerate() {
        flow.handle(
            *id,
            InboundEvent::Join {
                name: format!("player-{}", i + 1),
            },
        )
        .expect("fresh id joins");
    }
    (flow, ids)
}

/// Tick until the current phase resolves.
pub fn expire(flow: &mut Flow) {
    let phase = flow.phase();
    for _ in 0..=flow.remaining_secs() {
        if flow.phase() != phase {
            return;
        }
        flow.tick();
    }
    assert_ne!(flow.phase(), phase, "{phase:?} never expired");
}

pub fn advance_to(flow: &mut Flow, target: Phase) {
    for _ in 0..16 {
        if flow.phase() == target {
            return;
        }
        expire(flow);
    }
    panic!("never reached {target:?}, stuck in {:?}", flow.phase());
}

pub fn with_role(flow: &Flow, role: Role) -> Vec<ParticipantId> {
    flow.roster()
        .iter()
        .filter(|p| p.role == Some(role))
        .map(|p| p.id)
        .collect()
}

pub fn living(flow: &Flow) -> Vec<ParticipantId> {
    flow.roster()
        .iter()
        .filter(|p| p.alive)
        .map(|p| p.id)
        .collect()
}

/// Every living participant votes for `target`.
pub fn unanimous_vote(flow: &mut Flow, target: ParticipantId) {
    for voter in living(flow) {
        flow.handle(voter, InboundEvent::Vote(Ballot::Target(target)))
            .expect("living voter in vote phase");
    }
}
