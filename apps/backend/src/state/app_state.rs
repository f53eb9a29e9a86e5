use std::sync::Arc;

use actix::prelude::*;

use crate::config::game::GameConfig;
use crate::ws::hub::WsRegistry;
use crate::ws::room::GameRoom;

/// Shared handles for request handlers: the single room and the socket
/// registry it broadcasts through.
#[derive(Clone)]
pub struct AppState {
    room: Addr<GameRoom>,
    registry: Arc<WsRegistry>,
    config: GameConfig,
}

impl AppState {
    /// Start the room actor. Requires a running actix system.
    pub fn new(config: GameConfig) -> Self {
        let registry = Arc::new(WsRegistry::new());
        let room = GameRoom::new(config.clone(), registry.clone()).start();
        Self {
            room,
            registry,
            config,
        }
    }

    pub fn room(&self) -> Addr<GameRoom> {
        self.room.clone()
    }

    pub fn websocket_registry(&self) -> Arc<WsRegistry> {
        self.registry.clone()
    }

    pub fn game_config(&self) -> &GameConfig {
        &self.config
    }
}
