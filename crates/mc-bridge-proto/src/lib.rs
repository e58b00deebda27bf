//! Decoded packet model for both sides of the bridge.
//!
//! The wire codecs for the Bedrock and Java protocols live outside this
//! repository. This crate only describes the decoded field values the bridge
//! consumes and the outbound packets it constructs.

pub mod container;
pub mod error;
pub mod item;
pub mod packet;
pub mod packets;
pub mod types;

pub use error::ProtoError;
pub use packet::Packet;
