#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod health;
pub mod routes;
pub mod services;
pub mod state;
pub mod ws;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::game::GameConfig;
pub use config::server::ServerConfig;
pub use error::AppError;
pub use errors::DomainError;
pub use services::game_flow::{GameFlow, InboundEvent, Notification, NotificationSink};
pub use state::app_state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
