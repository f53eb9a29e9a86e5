use actix::prelude::*;
use dashmap::DashMap;
use tracing::debug;

use crate::domain::ParticipantId;
use crate::ws::protocol::ServerMsg;

/// A frame queued for one socket.
#[derive(Message, Clone)]
#[rtype(result = "()")]
pub struct Outbound(pub ServerMsg);

/// Live connections keyed by participant id.
///
/// Sessions register on start and unregister on stop; the room fans out
/// through it. Sends are fire-and-forget: a closed mailbox just drops the
/// frame.
#[derive(Default)]
pub struct WsRegistry {
    connections: DashMap<ParticipantId, Recipient<Outbound>>,
}

impl WsRegistry {
    pub fn new() -> Self {
        Self {
            connections: DashMap::new(),
        }
    }

    pub fn register(&self, id: ParticipantId, recipient: Recipient<Outbound>) {
        self.connections.insert(id, recipient);
        debug!(participant = %id, active = self.connections.len(), "[WS HUB] registered");
    }

    pub fn unregister(&self, id: ParticipantId) {
        self.connections.remove(&id);
        debug!(participant = %id, active = self.connections.len(), "[WS HUB] unregistered");
    }

    pub fn broadcast(&self, msg: &ServerMsg) {
        for entry in self.connections.iter() {
            entry.value().do_send(Outbound(msg.clone()));
        }
    }

    /// Returns `false` when `id` has no live connection.
    pub fn send_to(&self, id: ParticipantId, msg: ServerMsg) -> bool {
        match self.connections.get(&id) {
            Some(recipient) => {
                recipient.do_send(Outbound(msg));
                true
            }
            None => false,
        }
    }

    pub fn active_connections_count(&self) -> usize {
        self.connections.len()
    }
}
