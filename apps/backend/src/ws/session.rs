use std::sync::Arc;
use std::time::{Duration, Instant};

use actix::prelude::*;
use actix_web::{web, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use tracing::{info, warn};

use crate::domain::ParticipantId;
use crate::services::game_flow::InboundEvent;
use crate::state::app_state::AppState;
use crate::ws::hub::{Outbound, WsRegistry};
use crate::ws::protocol::{ClientMsg, ErrorCode, ServerMsg};
use crate::ws::room::{ClientEvent, GameRoom};
use crate::AppError;

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(20);
const CLIENT_TIMEOUT: Duration = Duration::from_secs(40);

/// Upgrade an HTTP request to a participant socket.
///
/// Each connection gets a fresh participant id; it takes a seat only after
/// sending `join`.
pub async fn upgrade(
    req: HttpRequest,
    stream: web::Payload,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let session = WsSession::new(
        ParticipantId::random(),
        app_state.room(),
        app_state.websocket_registry(),
    );
    ws::start(session, &req, stream)
        .map_err(|err| AppError::bad_request("WS_HANDSHAKE", err.to_string()))
}

pub struct WsSession {
    id: ParticipantId,
    room: Addr<GameRoom>,
    registry: Arc<WsRegistry>,

    last_heartbeat: Instant,
}

impl WsSession {
    fn new(id: ParticipantId, room: Addr<GameRoom>, registry: Arc<WsRegistry>) -> Self {
        Self {
            id,
            room,
            registry,
            last_heartbeat: Instant::now(),
        }
    }

    fn send_json(ctx: &mut ws::WebsocketContext<Self>, msg: &ServerMsg) {
        match serde_json::to_string(msg) {
            Ok(payload) => ctx.text(payload),
            Err(err) => warn!(error = %err, "[WS SESSION] failed to serialize outbound message"),
        }
    }

    fn send_error(ctx: &mut ws::WebsocketContext<Self>, code: ErrorCode, message: impl Into<String>) {
        Self::send_json(
            ctx,
            &ServerMsg::Error {
                code,
                message: message.into(),
            },
        );
    }

    fn send_error_and_close(
        &self,
        ctx: &mut ws::WebsocketContext<Self>,
        code: ErrorCode,
        message: impl Into<String>,
    ) {
        warn!(participant = %self.id, code = code.as_str(), "[WS SESSION] closing on bad frame");
        Self::send_error(ctx, code, message);
        ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
        ctx.stop();
    }

    fn start_heartbeat(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |actor, ctx| {
            if Instant::now().duration_since(actor.last_heartbeat) > CLIENT_TIMEOUT {
                warn!(participant = %actor.id, "[WS SESSION] heartbeat timed out");
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Normal)));
                ctx.stop();
                return;
            }
            ctx.ping(b"keepalive");
        });
    }

    fn handle_text(&mut self, text: &str, ctx: &mut ws::WebsocketContext<Self>) {
        let Ok(msg) = serde_json::from_str::<ClientMsg>(text) else {
            self.send_error_and_close(ctx, ErrorCode::BadRequest, "Malformed JSON");
            return;
        };

        match InboundEvent::try_from(msg) {
            Ok(event) => self.room.do_send(ClientEvent {
                from: self.id,
                event,
            }),
            Err(reason) => Self::send_error(ctx, ErrorCode::InvalidCommand, reason),
        }
    }
}

impl Actor for WsSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!(participant = %self.id, "[WS SESSION] started");

        self.registry
            .register(self.id, ctx.address().recipient::<Outbound>());
        Self::send_json(ctx, &ServerMsg::Welcome { id: self.id });

        self.start_heartbeat(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        // The seat stays in the roster; only the socket goes away.
        self.registry.unregister(self.id);
        info!(participant = %self.id, "[WS SESSION] stopped");
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for WsSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(payload)) => {
                self.last_heartbeat = Instant::now();
                ctx.pong(&payload);
            }
            Ok(ws::Message::Pong(_)) => {
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Text(text)) => {
                self.last_heartbeat = Instant::now();
                self.handle_text(&text, ctx);
            }
            Ok(ws::Message::Binary(_)) => {
                self.last_heartbeat = Instant::now();
                self.send_error_and_close(ctx, ErrorCode::BadRequest, "Binary not supported");
            }
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Ok(ws::Message::Continuation(_)) | Ok(ws::Message::Nop) => {
                self.last_heartbeat = Instant::now();
            }
            Err(err) => {
                warn!(participant = %self.id, error = %err, "[WS SESSION] protocol error");
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
                ctx.stop();
            }
        }
    }
}

impl Handler<Outbound> for WsSession {
    type Result = ();

    fn handle(&mut self, msg: Outbound, ctx: &mut Self::Context) -> Self::Result {
        Self::send_json(ctx, &msg.0);
    }
}
