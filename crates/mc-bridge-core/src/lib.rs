//! Translation and container-synchronization core of the bridge.
//!
//! A [`Session`] holds the per-player state. Inbound packets are routed by
//! [`PacketTranslatorRegistry::dispatch`] to a translator which mutates the
//! session and queues packets for the other side.

pub mod bundle;
pub mod error;
pub mod inventory;
pub mod item;
pub mod mappings;
pub mod registries;
pub mod session;
pub mod sound;
pub mod translator;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::TranslateError;
pub use item::BridgeItemStack;
pub use registries::Registries;
pub use session::{Session, SessionIdentity};
pub use translator::PacketTranslatorRegistry;
