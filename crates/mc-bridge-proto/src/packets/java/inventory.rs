//! Container and inventory packets.

use crate::container::JavaContainerType;
use crate::impl_packet;
use crate::item::JavaItemStack;
use crate::packets::java::player::Hand;

/// Open Screen: the server opened a container window.
#[derive(Debug, Clone)]
pub struct ClientboundOpenScreen {
    pub container_id: i32,
    pub container_type: JavaContainerType,
    /// Window title as a JSON text component.
    pub title: String,
}

/// Set Container Content: full contents of a window plus the cursor item.
#[derive(Debug, Clone)]
pub struct ClientboundContainerSetContent {
    pub container_id: i32,
    pub state_id: i32,
    pub items: Vec<Option<JavaItemStack>>,
    pub carried_item: Option<JavaItemStack>,
}

/// Set Container Slot: a single slot changed.
///
/// `container_id == -1 && slot == -1` addresses the cursor.
#[derive(Debug, Clone)]
pub struct ClientboundContainerSetSlot {
    pub container_id: i32,
    pub state_id: i32,
    pub slot: i32,
    pub item: Option<JavaItemStack>,
}

impl ClientboundContainerSetSlot {
    pub const CURSOR_CONTAINER_ID: i32 = -1;
    pub const CURSOR_SLOT: i32 = -1;
}

/// Set Container Property: a window property (furnace progress etc.).
#[derive(Debug, Clone)]
pub struct ClientboundContainerSetData {
    pub container_id: i32,
    pub key: i32,
    pub value: i32,
}

/// Close Container, sent by the server.
#[derive(Debug, Clone)]
pub struct ClientboundContainerClose {
    pub container_id: i32,
}

/// Open Book: the client should show the book held in `hand`.
#[derive(Debug, Clone)]
pub struct ClientboundOpenBook {
    pub hand: Hand,
}

/// Set Held Item: the server changed the selected hotbar slot.
#[derive(Debug, Clone)]
pub struct ClientboundSetHeldSlot {
    pub slot: i32,
}

/// Close Container, sent by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerboundContainerClose {
    pub container_id: i32,
}

/// Click modes of the Click Container packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickMode {
    Pickup,
    QuickMove,
    Swap,
    Clone,
    Throw,
    QuickCraft,
    PickupAll,
}

/// Click Container, sent by the client.
#[derive(Debug, Clone)]
pub struct ServerboundContainerClick {
    pub container_id: i32,
    pub state_id: i32,
    pub slot: i32,
    pub button: i8,
    pub mode: ClickMode,
    /// Slots the client predicts to have changed.
    pub changed_slots: Vec<(i32, Option<JavaItemStack>)>,
    pub carried_item: Option<JavaItemStack>,
}

/// Set Held Item, sent by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerboundSetCarriedItem {
    pub slot: i16,
}

impl_packet!(
    ClientboundOpenScreen,
    ClientboundContainerSetContent,
    ClientboundContainerSetSlot,
    ClientboundContainerSetData,
    ClientboundContainerClose,
    ClientboundOpenBook,
    ClientboundSetHeldSlot,
    ServerboundContainerClose,
    ServerboundContainerClick,
    ServerboundSetCarriedItem,
);
