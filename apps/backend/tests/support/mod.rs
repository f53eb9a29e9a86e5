#![allow(dead_code)]

pub mod game_driver;
pub mod websocket;
pub mod websocket_client;
