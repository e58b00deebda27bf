//! Inventory content and item stack request packets.

use crate::container::ContainerSlotType;
use crate::impl_packet;
use crate::item::ItemData;
use crate::types::{BlockPos, Vec3};

/// InventoryContent (0x31), server to client. Full contents of a window.
#[derive(Debug, Clone)]
pub struct InventoryContent {
    /// Container window ID: 0 = inventory, 119 = offhand, 120 = armor, 124 = UI.
    pub window_id: u32,
    /// All item slots in the container, indexed by Bedrock slot.
    pub items: Vec<ItemData>,
}

/// InventorySlot (0x32), server to client. Updates a single slot.
#[derive(Debug, Clone)]
pub struct InventorySlot {
    pub window_id: u32,
    /// Slot index within the container.
    pub slot: u32,
    pub item: ItemData,
}

/// A reference to a specific container slot inside an item stack request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackRequestSlot {
    pub container: ContainerSlotType,
    /// Slot index within the container region.
    pub slot: u8,
    /// Server-assigned stack network ID for the item in this slot.
    pub stack_network_id: i32,
}

impl StackRequestSlot {
    pub fn new(container: ContainerSlotType, slot: u8) -> Self {
        Self {
            container,
            slot,
            stack_network_id: 0,
        }
    }
}

/// Individual action within an ItemStackRequest.
#[derive(Debug, Clone)]
pub enum StackAction {
    Take {
        count: u8,
        src: StackRequestSlot,
        dst: StackRequestSlot,
    },
    Place {
        count: u8,
        src: StackRequestSlot,
        dst: StackRequestSlot,
    },
    Swap {
        src: StackRequestSlot,
        dst: StackRequestSlot,
    },
    Drop {
        count: u8,
        src: StackRequestSlot,
        randomly: bool,
    },
    /// Any action type we don't handle yet.
    Unknown { action_type: u8 },
}

/// A single request containing one or more actions.
#[derive(Debug, Clone)]
pub struct StackRequest {
    pub request_id: i32,
    pub actions: Vec<StackAction>,
}

/// ItemStackRequest (0x93), client to server.
#[derive(Debug, Clone)]
pub struct ItemStackRequest {
    pub requests: Vec<StackRequest>,
}

/// Response for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackResponseEntry {
    /// 0 = success, non-zero = error.
    pub status: u8,
    /// Must match the request_id from the ItemStackRequest.
    pub request_id: i32,
}

impl StackResponseEntry {
    pub const OK: u8 = 0;
    pub const ERROR: u8 = 1;
}

/// ItemStackResponse (0x94), server to client.
#[derive(Debug, Clone)]
pub struct ItemStackResponse {
    pub responses: Vec<StackResponseEntry>,
}

/// MobEquipment (0x1F), bidirectional. Sent by the client when the selected
/// hotbar slot changes.
#[derive(Debug, Clone)]
pub struct MobEquipment {
    pub entity_runtime_id: u64,
    pub item: ItemData,
    pub inventory_slot: u8,
    pub hotbar_slot: u8,
    pub window_id: u8,
}

/// Action of a use-item transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseItemAction {
    ClickBlock,
    ClickAir,
    BreakBlock,
}

/// Fields of a use-item transaction.
#[derive(Debug, Clone)]
pub struct UseItemData {
    pub action: UseItemAction,
    pub block_position: BlockPos,
    pub face: i32,
    pub hotbar_slot: i32,
    pub held_item: ItemData,
    pub player_position: Vec3,
    pub click_position: Vec3,
    pub block_runtime_id: u32,
}

/// Transaction payloads the bridge distinguishes.
#[derive(Debug, Clone)]
pub enum TransactionData {
    UseItem(UseItemData),
    /// Normal, mismatch, release and use-on-entity transactions.
    Other { transaction_type: u32 },
}

/// InventoryTransaction (0x1E), client to server.
#[derive(Debug, Clone)]
pub struct InventoryTransaction {
    pub data: TransactionData,
}

impl_packet!(
    InventoryContent,
    InventorySlot,
    ItemStackRequest,
    ItemStackResponse,
    MobEquipment,
    InventoryTransaction,
);
