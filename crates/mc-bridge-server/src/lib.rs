//! Session layer of the bridge: configuration, the online-session registry,
//! per-player workers and status answers. Transports hand decoded connections
//! to [`Bridge::serve`].

pub mod bridge;
pub mod config;
pub mod ping;
pub mod sessions;
pub mod worker;

pub use bridge::{Bridge, PendingConnection};
pub use config::BridgeConfig;
pub use sessions::SessionManager;
pub use worker::{Inbound, SessionHandle};
