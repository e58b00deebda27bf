//! Player state packets.

use crate::impl_packet;
use crate::types::BlockPos;

/// Player action types the bridge reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerActionType {
    StartSneak,
    StopSneak,
    /// Any action type we don't handle specifically.
    Other(i32),
}

impl PlayerActionType {
    pub fn from_i32(v: i32) -> Self {
        match v {
            11 => Self::StartSneak,
            12 => Self::StopSneak,
            other => Self::Other(other),
        }
    }
}

/// PlayerAction (0x24), client to server.
#[derive(Debug, Clone)]
pub struct PlayerAction {
    pub entity_runtime_id: u64,
    pub action: PlayerActionType,
    pub block_position: BlockPos,
    pub face: i32,
}

/// SetPlayerGameType (0x3E), server to client.
#[derive(Debug, Clone)]
pub struct SetPlayerGameType {
    /// Bedrock game type id.
    pub gamemode: i32,
}

/// PlayerHotbar (0x30), server to client. Selects a hotbar slot.
#[derive(Debug, Clone)]
pub struct PlayerHotbar {
    pub selected_slot: u32,
    pub window_id: u8,
    pub select: bool,
}

impl_packet!(PlayerAction, SetPlayerGameType, PlayerHotbar);
