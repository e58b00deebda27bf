//! Protocol-level errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtoError {
    #[error("unknown Java container type id: {0}")]
    UnknownContainerType(i32),

    #[error("unknown Bedrock container slot type id: {0}")]
    UnknownSlotType(u8),

    #[error("unknown game mode id: {0}")]
    UnknownGameMode(i32),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
