// WebSocket client utilities for testing

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use serde_json::Value;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

const RECV_TIMEOUT: Duration = Duration::from_secs(3);

/// WebSocket test client
pub struct WebSocketClient {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl WebSocketClient {
    /// Connect, retrying until success or timeout.
    pub async fn connect_retry(
        url: &str,
        timeout: Duration,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let start = tokio::time::Instant::now();
        loop {
            match connect_async(url).await {
                Ok((stream, _)) => return Ok(Self { stream }),
                Err(err) => {
                    if start.elapsed() >= timeout {
                        return Err(Box::new(err));
                    }
                    tokio::time::sleep(Duration::from_millis(5)).await;
                }
            }
        }
    }

    /// Receive the next message with a timeout
    pub async fn recv_timeout(
        &mut self,
        timeout: Duration,
    ) -> Result<Option<Message>, Box<dyn std::error::Error>> {
        tokio::time::timeout(timeout, self.stream.next())
            .await
            .map_err(|_| "Timeout waiting for message")?
            .transpose()
            .map_err(|e| e.into())
    }

    pub async fn send_text(&mut self, text: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.stream.send(Message::text(text.to_string())).await?;
        Ok(())
    }

    pub async fn send_json(&mut self, value: &Value) -> Result<(), Box<dyn std::error::Error>> {
        self.send_text(&value.to_string()).await
    }

    pub async fn send_binary(&mut self, bytes: Vec<u8>) -> Result<(), Box<dyn std::error::Error>> {
        self.stream.send(Message::binary(bytes)).await?;
        Ok(())
    }

    pub async fn close(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.stream.close(None).await?;
        Ok(())
    }

    /// Next text frame as JSON; `None` on close or end of stream.
    pub async fn recv_json(&mut self) -> Result<Option<Value>, Box<dyn std::error::Error>> {
        loop {
            match self.recv_timeout(RECV_TIMEOUT).await? {
                Some(Message::Text(text)) => {
                    let json: Value = serde_json::from_str(text.as_str())?;
                    return Ok(Some(json));
                }
                Some(Message::Ping(_)) | Some(Message::Pong(_)) => continue,
                Some(Message::Close(_)) | None => return Ok(None),
                Some(_) => continue,
            }
        }
    }

    /// Skip frames until one with `"type": kind` arrives.
    pub async fn recv_type(&mut self, kind: &str) -> Result<Value, Box<dyn std::error::Error>> {
        loop {
            match self.recv_json().await? {
                Some(msg) if msg["type"] == kind => return Ok(msg),
                Some(_) => continue,
                None => return Err(format!("connection closed before a {kind} frame").into()),
            }
        }
    }

    /// Read the welcome frame and return the participant id it carries.
    pub async fn welcome(&mut self) -> Result<String, Box<dyn std::error::Error>> {
        let msg = self.recv_type("welcome").await?;
        msg["id"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| "welcome without id".into())
    }
}
