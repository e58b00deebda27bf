use mc_bridge_proto::container::{ContainerSlotType, JavaContainerType};
use mc_bridge_proto::ProtoError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("no inventory translator registered for {0:?}")]
    MissingTranslator(JavaContainerType),

    #[error("slot {slot} out of range for container {container_id} ({size} slots)")]
    SlotOutOfRange {
        container_id: i32,
        slot: i32,
        size: usize,
    },

    #[error("no Java slot for Bedrock slot {container:?}:{slot}")]
    UnmappedSlot {
        container: ContainerSlotType,
        slot: u8,
    },

    #[error("cannot take {count} of {amount} from slot {slot} in one click")]
    UnsupportedSplit { slot: usize, count: i32, amount: i32 },

    #[error("protocol error: {0}")]
    Proto(#[from] ProtoError),
}

impl TranslateError {
    /// Fatal errors stop the session worker instead of being logged and
    /// dropped at the dispatch boundary.
    pub fn is_fatal(&self) -> bool {
        matches!(self, TranslateError::MissingTranslator(_))
    }
}
