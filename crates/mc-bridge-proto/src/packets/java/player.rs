//! Player and world interaction packets.

use crate::impl_packet;
use crate::types::{BlockPos, Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Hand {
    #[default]
    MainHand,
    OffHand,
}

/// Game Event: a world or player state change.
#[derive(Debug, Clone)]
pub struct ClientboundGameEvent {
    pub event: u8,
    pub value: f32,
}

impl ClientboundGameEvent {
    pub const CHANGE_GAME_MODE: u8 = 3;
}

/// Synchronize Player Position.
#[derive(Debug, Clone)]
pub struct ClientboundPlayerPosition {
    pub position: Vec3,
}

/// Block Update: a single block changed state.
#[derive(Debug, Clone)]
pub struct ClientboundBlockUpdate {
    pub position: BlockPos,
    /// Full block state string, e.g. `minecraft:lever[face=wall,powered=false]`.
    pub block_state: String,
}

/// Use Item: right click while not targeting a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerboundUseItem {
    pub hand: Hand,
    pub sequence: i32,
}

/// Use Item On: right click on a block face.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerboundUseItemOn {
    pub hand: Hand,
    pub position: BlockPos,
    pub face: i32,
    pub cursor: Vec3,
    pub inside_block: bool,
    pub sequence: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommandAction {
    StartSneaking,
    StopSneaking,
}

/// Player Command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerboundPlayerCommand {
    pub entity_id: i32,
    pub action: PlayerCommandAction,
}

impl_packet!(
    ClientboundGameEvent,
    ClientboundPlayerPosition,
    ClientboundBlockUpdate,
    ServerboundUseItem,
    ServerboundUseItemOn,
    ServerboundPlayerCommand,
);
