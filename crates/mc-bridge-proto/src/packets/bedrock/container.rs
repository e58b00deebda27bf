//! Container window packets.

use crate::container::ContainerType;
use crate::impl_packet;
use crate::types::BlockPos;

/// ContainerOpen (0x2E), server to client. Opens a container window.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerOpen {
    /// Unique window ID for this container session.
    pub window_id: u8,
    pub container_type: ContainerType,
    /// Position of the container block.
    pub position: BlockPos,
    /// Entity unique ID (-1 for block containers).
    pub entity_unique_id: i64,
}

/// ContainerClose (0x2F), bidirectional.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerClose {
    /// The window ID of the container to close.
    pub window_id: u8,
    /// Window type being closed; the client ignores the close if it differs
    /// from the open window's type.
    pub container_type: ContainerType,
    /// Whether the server initiated this close.
    pub server_initiated: bool,
}

/// ContainerSetData (0x33), server to client. Updates a single container
/// property (furnace progress, brewing time, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerSetData {
    pub window_id: u8,
    pub property: i32,
    pub value: i32,
}

impl ContainerSetData {
    pub const FURNACE_TICK_COUNT: i32 = 0;
    pub const FURNACE_LIT_TIME: i32 = 1;
    pub const FURNACE_LIT_DURATION: i32 = 2;
    pub const BREWING_STAND_BREW_TIME: i32 = 0;
    pub const BREWING_STAND_FUEL_AMOUNT: i32 = 1;
    pub const BREWING_STAND_FUEL_TOTAL: i32 = 2;
}

impl_packet!(ContainerOpen, ContainerClose, ContainerSetData);
