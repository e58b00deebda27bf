//! Inventories as the session tracks them.
//!
//! Java addresses every window with a flat slot index. For an open container
//! the first `size` indices are the container itself and the next 36 are the
//! player's main inventory followed by the hotbar. Those 36 slots are stored
//! once, in [`PlayerInventory`], and shared by every container window.

pub mod registry;
pub mod translator;
pub mod updater;

use mc_bridge_proto::container::JavaContainerType;
use mc_bridge_proto::packets::java::Hand;
use mc_bridge_proto::types::BlockPos;

use crate::item::BridgeItemStack;

pub use registry::InventoryTranslatorRegistry;
pub use translator::{BaseTranslator, BedrockContainerSlot, FurnaceKind, InventoryTranslator};

/// Window id used for the lectern opened to show a book. Java servers only
/// issue positive window ids, so this can never collide with a real window.
pub const VIRTUAL_LECTERN_WINDOW_ID: i32 = -69;

/// Java slot count of the player inventory window.
pub const PLAYER_INVENTORY_SIZE: usize = 46;
/// Player-owned slots appended to every container window.
pub const PLAYER_SLOTS_IN_CONTAINER: usize = 36;
/// First main-inventory slot of the player window.
pub const MAIN_INVENTORY_START: usize = 9;
/// First hotbar slot of the player window.
pub const HOTBAR_START: usize = 36;
pub const OFFHAND_SLOT: usize = 45;

static EMPTY_SLOT: BridgeItemStack = BridgeItemStack::EMPTY;

/// Hands out Bedrock stack network ids.
#[derive(Debug)]
pub struct NetIdAllocator {
    next: i32,
}

impl Default for NetIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl NetIdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn allocate(&mut self) -> i32 {
        let id = self.next;
        self.next = self.next.wrapping_add(1).max(1);
        id
    }
}

/// A window's slots and identifiers.
#[derive(Debug, Clone)]
pub struct Inventory {
    java_id: i32,
    bedrock_id: u8,
    title: String,
    container_type: Option<JavaContainerType>,
    items: Vec<BridgeItemStack>,
    state_id: i32,
    holder_position: BlockPos,
    /// Generic 3x3 windows opened from a dropper.
    dropper: bool,
}

impl Inventory {
    pub fn new(
        java_id: i32,
        bedrock_id: u8,
        size: usize,
        container_type: Option<JavaContainerType>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            java_id,
            bedrock_id,
            title: title.into(),
            container_type,
            items: vec![BridgeItemStack::EMPTY; size],
            state_id: 0,
            holder_position: BlockPos::ZERO,
            dropper: false,
        }
    }

    pub fn java_id(&self) -> i32 {
        self.java_id
    }

    pub fn bedrock_id(&self) -> u8 {
        self.bedrock_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn container_type(&self) -> Option<JavaContainerType> {
        self.container_type
    }

    /// Slots owned by this window, not counting the shared player slots.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn item(&self, slot: usize) -> &BridgeItemStack {
        self.items.get(slot).unwrap_or(&EMPTY_SLOT)
    }

    pub fn items(&self) -> &[BridgeItemStack] {
        &self.items
    }

    /// Replace a slot and return the stack that was there. Non-empty stacks
    /// without a network id keep the id of the stack they replace when it is
    /// the same item, otherwise they get a fresh one.
    pub fn set_item(
        &mut self,
        slot: usize,
        mut item: BridgeItemStack,
        net_ids: &mut NetIdAllocator,
    ) -> BridgeItemStack {
        let Some(current) = self.items.get_mut(slot) else {
            return BridgeItemStack::EMPTY;
        };
        if !item.is_empty() && item.net_id() == 0 {
            let net_id = if current.is_same_item(&item) && current.net_id() != 0 {
                current.net_id()
            } else {
                net_ids.allocate()
            };
            item.set_net_id(net_id);
        }
        std::mem::replace(current, item)
    }

    /// Put the displayed book into a locally opened lectern. The stack keeps
    /// its network id.
    pub fn set_virtual_lectern_book(&mut self, book: BridgeItemStack) {
        if let Some(slot) = self.items.get_mut(0) {
            *slot = book;
        }
    }

    pub fn state_id(&self) -> i32 {
        self.state_id
    }

    pub fn set_state_id(&mut self, state_id: i32) {
        self.state_id = state_id;
    }

    pub fn holder_position(&self) -> BlockPos {
        self.holder_position
    }

    pub fn set_holder_position(&mut self, position: BlockPos) {
        self.holder_position = position;
    }

    pub fn is_dropper(&self) -> bool {
        self.dropper
    }

    pub fn set_dropper(&mut self, dropper: bool) {
        self.dropper = dropper;
    }

    /// Whether this is the lectern opened locally to display a book.
    pub fn is_virtual_lectern(&self) -> bool {
        self.java_id == VIRTUAL_LECTERN_WINDOW_ID
    }
}

/// An open inventory bound to the translator that created it.
#[derive(Debug, Clone)]
pub struct InventoryHolder {
    pub inventory: Inventory,
    pub translator: InventoryTranslator,
}

impl InventoryHolder {
    pub fn new(inventory: Inventory, translator: InventoryTranslator) -> Self {
        Self {
            inventory,
            translator,
        }
    }

    /// Java slot count of the window, including the shared player slots.
    pub fn java_size(&self) -> usize {
        self.inventory.size() + PLAYER_SLOTS_IN_CONTAINER
    }
}

/// The player's own 46-slot window plus cursor and selected hotbar slot.
#[derive(Debug, Clone)]
pub struct PlayerInventory {
    inventory: Inventory,
    cursor: BridgeItemStack,
    held_slot: u8,
}

impl Default for PlayerInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerInventory {
    pub fn new() -> Self {
        Self {
            inventory: Inventory::new(0, 0, PLAYER_INVENTORY_SIZE, None, ""),
            cursor: BridgeItemStack::EMPTY,
            held_slot: 0,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn item(&self, slot: usize) -> &BridgeItemStack {
        self.inventory.item(slot)
    }

    pub fn cursor(&self) -> &BridgeItemStack {
        &self.cursor
    }

    /// Replace the cursor and return the stack it held.
    pub fn set_cursor(&mut self, mut item: BridgeItemStack, net_ids: &mut NetIdAllocator) -> BridgeItemStack {
        if !item.is_empty() && item.net_id() == 0 {
            item.set_net_id(net_ids.allocate());
        }
        std::mem::replace(&mut self.cursor, item)
    }

    pub fn held_slot(&self) -> u8 {
        self.held_slot
    }

    /// Select a hotbar slot. Values outside 0..=8 are ignored.
    pub fn set_held_slot(&mut self, slot: u8) {
        if slot < 9 {
            self.held_slot = slot;
        }
    }

    pub fn item_in_hand(&self) -> &BridgeItemStack {
        self.item(HOTBAR_START + self.held_slot as usize)
    }

    pub fn offhand(&self) -> &BridgeItemStack {
        self.item(OFFHAND_SLOT)
    }

    pub fn item_in(&self, hand: Hand) -> &BridgeItemStack {
        match hand {
            Hand::MainHand => self.item_in_hand(),
            Hand::OffHand => self.offhand(),
        }
    }
}
