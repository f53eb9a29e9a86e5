// WebSocket test utilities

use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use backend::routes;
use backend::state::app_state::AppState;
use backend::ws::hub::WsRegistry;
use backend::GameConfig;

pub struct TestServer {
    pub handle: actix_web::dev::ServerHandle,
    pub addr: std::net::SocketAddr,
    pub registry: Arc<WsRegistry>,
    join: actix_web::rt::task::JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
        let _ = self.join.await;
    }
}

/// Start a real HTTP server on a random port with the production routes.
///
/// Must run inside an actix system (`#[actix_web::test]`) because the room
/// is an actor.
pub async fn start_test_server(config: GameConfig) -> Result<TestServer, Box<dyn std::error::Error>> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    let state = AppState::new(config);
    let registry = state.websocket_registry();
    let state_data = web::Data::new(state);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state_data.clone())
            .configure(routes::configure)
    })
    .workers(1)
    .listen(listener)?
    .run();

    let handle = server.handle();
    let join = actix_web::rt::spawn(server);

    Ok(TestServer {
        handle,
        addr,
        registry,
        join,
    })
}

pub async fn wait_for_connections(
    registry: &WsRegistry,
    expected: usize,
    timeout: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = tokio::time::Instant::now();
    loop {
        if registry.active_connections_count() == expected {
            return Ok(());
        }
        if start.elapsed() >= timeout {
            return Err(format!(
                "timeout waiting for active_connections_count == {expected} (got {})",
                registry.active_connections_count()
            )
            .into());
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}
