//! Status (ping) answers for Bedrock clients.
//!
//! The bridge either answers from its own config or passes the request on to
//! status listeners, such as a hosting proxy's ping handlers. Listeners get a
//! bounded time to answer; a late or failed answer means no ping data.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mc_bridge_core::session::redact_address;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::error;
use uuid::Uuid;

use crate::sessions::SessionManager;

/// Player counts and message of the day for a status response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PingInfo {
    /// Rich-text description as JSON.
    pub description: String,
    pub max_players: u32,
    pub online_players: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
}

impl PingInfo {
    pub fn new(motd: &str, max_players: u32, online_players: u32) -> Self {
        Self {
            description: serde_json::json!({ "text": motd }).to_string(),
            max_players,
            online_players,
            favicon: None,
        }
    }
}

#[async_trait]
pub trait PingPassthrough: Send + Sync {
    /// Status for a client at `address`, `None` when none could be produced.
    async fn ping_information(&self, address: SocketAddr) -> Option<PingInfo>;
}

/// Answers from the bridge's own config and online count.
pub struct LocalPing {
    motd: String,
    max_players: u32,
    sessions: Arc<SessionManager>,
}

impl LocalPing {
    pub fn new(motd: String, max_players: u32, sessions: Arc<SessionManager>) -> Self {
        Self {
            motd,
            max_players,
            sessions,
        }
    }

    pub fn snapshot(&self) -> PingInfo {
        PingInfo::new(&self.motd, self.max_players, self.sessions.len() as u32)
    }
}

#[async_trait]
impl PingPassthrough for LocalPing {
    async fn ping_information(&self, _address: SocketAddr) -> Option<PingInfo> {
        Some(self.snapshot())
    }
}

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("{0} is not supported on a status probe connection")]
    Unsupported(&'static str),
}

/// The connection a status listener sees for a ping. It only exists to carry
/// the client address; anything that would act on a real player fails.
#[derive(Debug, Clone)]
pub struct ProbeConnection {
    address: SocketAddr,
}

impl ProbeConnection {
    /// Protocol version reported to listeners.
    pub const PROTOCOL_VERSION: i32 = 767;

    pub fn new(address: SocketAddr) -> Self {
        Self { address }
    }

    /// Fixed id shared by every probe.
    pub fn unique_id(&self) -> Uuid {
        Uuid::new_v3(&Uuid::NAMESPACE_OID, b"bridge!internal")
    }

    pub fn address(&self) -> SocketAddr {
        self.address
    }

    pub fn protocol_version(&self) -> i32 {
        Self::PROTOCOL_VERSION
    }

    pub fn is_online_mode(&self) -> bool {
        true
    }

    pub fn is_connected(&self) -> bool {
        false
    }

    pub fn virtual_host(&self) -> Option<&str> {
        None
    }

    pub fn name(&self) -> Result<&str, ProbeError> {
        Err(ProbeError::Unsupported("name"))
    }

    pub fn set_unique_id(&mut self, _id: Uuid) -> Result<(), ProbeError> {
        Err(ProbeError::Unsupported("set_unique_id"))
    }

    pub fn set_online_mode(&mut self, _online: bool) -> Result<(), ProbeError> {
        Err(ProbeError::Unsupported("set_online_mode"))
    }

    pub fn disconnect(&self, _reason: &str) -> Result<(), ProbeError> {
        Err(ProbeError::Unsupported("disconnect"))
    }

    pub fn send_plugin_message(&self, _channel: &str, _data: &[u8]) -> Result<(), ProbeError> {
        Err(ProbeError::Unsupported("send_plugin_message"))
    }

    pub fn retrieve_cookie(&self, _key: &str) -> Result<Vec<u8>, ProbeError> {
        Err(ProbeError::Unsupported("retrieve_cookie"))
    }
}

/// A status request handed to listeners. Listeners may edit `response`
/// before calling [`PingEvent::respond`].
#[derive(Debug)]
pub struct PingEvent {
    pub connection: ProbeConnection,
    pub response: PingInfo,
    reply: oneshot::Sender<PingInfo>,
}

impl PingEvent {
    pub fn respond(self) {
        // The requester may have timed out already.
        let _ = self.reply.send(self.response);
    }
}

#[derive(Debug, Error)]
enum PingError {
    #[error("no status listener is running")]
    ListenerClosed,
    #[error("status listener dropped the request")]
    Dropped,
    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

/// Raises a [`PingEvent`] per request and waits for a listener to answer.
pub struct EventPing {
    events: mpsc::Sender<PingEvent>,
    defaults: watch::Receiver<PingInfo>,
    timeout: Duration,
    log_ip_addresses: bool,
}

impl EventPing {
    pub fn new(
        events: mpsc::Sender<PingEvent>,
        defaults: watch::Receiver<PingInfo>,
        timeout: Duration,
        log_ip_addresses: bool,
    ) -> Self {
        Self {
            events,
            defaults,
            timeout,
            log_ip_addresses,
        }
    }

    async fn request(&self, address: SocketAddr) -> Result<PingInfo, PingError> {
        let (reply, answer) = oneshot::channel();
        let event = PingEvent {
            connection: ProbeConnection::new(address),
            response: self.defaults.borrow().clone(),
            reply,
        };
        let exchange = async {
            self.events
                .send(event)
                .await
                .map_err(|_| PingError::ListenerClosed)?;
            answer.await.map_err(|_| PingError::Dropped)
        };
        tokio::time::timeout(self.timeout, exchange)
            .await
            .map_err(|_| PingError::Timeout(self.timeout))?
    }
}

#[async_trait]
impl PingPassthrough for EventPing {
    async fn ping_information(&self, address: SocketAddr) -> Option<PingInfo> {
        match self.request(address).await {
            Ok(info) => Some(info),
            Err(e) => {
                error!(
                    "Failed to get ping information for {}: {e}",
                    redact_address(address, self.log_ip_addresses)
                );
                None
            }
        }
    }
}

/// Stand-in listener that answers every event with the prepared defaults.
pub async fn answer_events(mut events: mpsc::Receiver<PingEvent>) {
    while let Some(event) = events.recv().await {
        event.respond();
    }
}
