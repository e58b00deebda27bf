//! Packet definitions, one module per protocol.
//!
//! `bedrock` holds packets exchanged with the client, `java` holds packets
//! exchanged with the server. Java packet names keep the
//! `Clientbound`/`Serverbound` prefix so both sides can be imported together.

pub mod bedrock;
pub mod java;
