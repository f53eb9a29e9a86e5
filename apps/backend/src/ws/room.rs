use std::sync::Arc;
use std::time::Duration;

use actix::prelude::*;
use tracing::{debug, info};

use crate::config::game::GameConfig;
use crate::domain::ParticipantId;
use crate::services::game_flow::{GameFlow, InboundEvent, Notification, NotificationSink};
use crate::ws::hub::WsRegistry;
use crate::ws::protocol::ServerMsg;

const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Delivers orchestrator notifications to live sockets.
pub struct RegistrySink {
    registry: Arc<WsRegistry>,
}

impl RegistrySink {
    pub fn new(registry: Arc<WsRegistry>) -> Self {
        Self { registry }
    }
}

impl NotificationSink for RegistrySink {
    fn broadcast(&mut self, notification: Notification) {
        self.registry.broadcast(&ServerMsg::from(notification));
    }

    fn unicast(&mut self, to: ParticipantId, notification: Notification) {
        if !self.registry.send_to(to, ServerMsg::from(notification)) {
            debug!(participant = %to, "[GAME ROOM] unicast target has no live connection");
        }
    }
}

/// An inbound event from one connection.
#[derive(Message)]
#[rtype(result = "()")]
pub struct ClientEvent {
    pub from: ParticipantId,
    pub event: InboundEvent,
}

/// Actor that owns the game. Its mailbox serializes events and ticks, so the
/// orchestrator never sees two inputs at once.
pub struct GameRoom {
    flow: GameFlow<RegistrySink>,
    ticker: Option<SpawnHandle>,
    ticker_epoch: u64,
}

impl GameRoom {
    pub fn new(config: GameConfig, registry: Arc<WsRegistry>) -> Self {
        Self {
            flow: GameFlow::new(config, RegistrySink::new(registry)),
            ticker: None,
            ticker_epoch: 0,
        }
    }

    /// Keep exactly one ticker running while a phase counts down.
    ///
    /// A countdown opened by an event (game start) gets a fresh ticker so its
    /// first tick lands a full second later.
    fn sync_ticker(&mut self, ctx: &mut Context<Self>) {
        if !self.flow.is_counting_down() {
            self.stop_ticker(ctx);
            return;
        }

        let epoch = self.flow.countdown_epoch();
        if self.ticker.is_some() && epoch == self.ticker_epoch {
            return;
        }

        self.stop_ticker(ctx);
        self.ticker_epoch = epoch;
        let handle = ctx.run_interval(TICK_INTERVAL, |room, ctx| {
            room.flow.tick();
            if room.flow.is_counting_down() {
                // Phases opened by a tick keep the current cadence.
                room.ticker_epoch = room.flow.countdown_epoch();
            } else {
                room.stop_ticker(ctx);
            }
        });
        self.ticker = Some(handle);
    }

    fn stop_ticker(&mut self, ctx: &mut Context<Self>) {
        if let Some(handle) = self.ticker.take() {
            ctx.cancel_future(handle);
            debug!("[GAME ROOM] ticker stopped");
        }
    }
}

impl Actor for GameRoom {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        info!(
            min_players = self.flow.config().min_players,
            seeded = self.flow.config().seed.is_some(),
            "[GAME ROOM] started"
        );
    }
}

impl Handler<ClientEvent> for GameRoom {
    type Result = ();

    fn handle(&mut self, msg: ClientEvent, ctx: &mut Self::Context) -> Self::Result {
        let ClientEvent { from, event } = msg;
        let kind = event.kind();

        if let Err(err) = self.flow.handle(from, event) {
            debug!(
                participant = %from,
                kind,
                phase = self.flow.phase().label(),
                reason = %err,
                "[GAME ROOM] event ignored"
            );
        }

        self.sync_ticker(ctx);
    }
}
