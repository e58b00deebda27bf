//! World feedback packets: sounds and block changes.

use crate::impl_packet;
use crate::item::ItemData;
use crate::types::BlockPos;

/// PlaySound (0x56), server to client. Plays a sound effect at a position.
#[derive(Debug, Clone)]
pub struct PlaySound {
    /// Sound identifier (e.g. "random.door_open", "fire.ignite").
    pub sound_name: String,
    /// Block position (world coordinates multiplied by 8).
    pub position: BlockPos,
    /// Volume (0.0–1.0+).
    pub volume: f32,
    /// Pitch (0.0–2.0, 1.0 = normal).
    pub pitch: f32,
}

impl PlaySound {
    /// Create a PlaySound packet at the given world coordinates.
    pub fn new(
        sound_name: impl Into<String>,
        x: f32,
        y: f32,
        z: f32,
        volume: f32,
        pitch: f32,
    ) -> Self {
        Self {
            sound_name: sound_name.into(),
            position: BlockPos::new((x * 8.0) as i32, (y * 8.0) as i32, (z * 8.0) as i32),
            volume,
            pitch,
        }
    }
}

/// UpdateBlock (0x15), server to client. Places a block client-side only.
#[derive(Debug, Clone)]
pub struct UpdateBlock {
    pub position: BlockPos,
    /// Java block state string, translated by the block mapping collaborator.
    pub block_state: String,
}

/// Block entity payloads the bridge produces.
#[derive(Debug, Clone)]
pub enum BlockActorPayload {
    /// A lectern holding a book.
    Lectern {
        book: ItemData,
        page: i32,
        total_pages: i32,
    },
}

/// BlockActorData (0x38), server to client.
#[derive(Debug, Clone)]
pub struct BlockActorData {
    pub position: BlockPos,
    pub payload: BlockActorPayload,
}

impl_packet!(PlaySound, UpdateBlock, BlockActorData);
