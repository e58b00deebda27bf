//! Per-archetype inventory translation.
//!
//! Each Java container archetype maps its flat slot indices onto Bedrock
//! `(ContainerSlotType, slot)` pairs and knows which Bedrock window to open.
//! Slots past the container's own size belong to the player and use the
//! linear [`BaseTranslator`] mapping for every archetype.

use mc_bridge_proto::container::{
    container_id, ui_slot, ContainerSlotType, ContainerType, JavaContainerType,
};
use mc_bridge_proto::packets::bedrock::{
    ContainerClose, ContainerOpen, ContainerSetData, StackRequestSlot, UpdateBlock,
};
use mc_bridge_proto::types::BlockPos;

use super::updater;
use super::{Inventory, PLAYER_INVENTORY_SIZE, VIRTUAL_LECTERN_WINDOW_ID};
use crate::session::Session;

/// Block state placed client-side for the book lectern.
const VIRTUAL_LECTERN_BLOCK: &str = "minecraft:lectern[facing=north,has_book=true,powered=false]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FurnaceKind {
    Furnace,
    BlastFurnace,
    Smoker,
}

impl FurnaceKind {
    fn container_type(self) -> ContainerType {
        match self {
            FurnaceKind::Furnace => ContainerType::Furnace,
            FurnaceKind::BlastFurnace => ContainerType::BlastFurnace,
            FurnaceKind::Smoker => ContainerType::Smoker,
        }
    }

    fn ingredient_slot(self) -> ContainerSlotType {
        match self {
            FurnaceKind::Furnace => ContainerSlotType::FurnaceIngredient,
            FurnaceKind::BlastFurnace => ContainerSlotType::BlastFurnaceIngredient,
            FurnaceKind::Smoker => ContainerSlotType::SmokerIngredient,
        }
    }

    /// Blast furnaces and smokers cook twice as fast; Bedrock expects the
    /// progress scaled to a regular furnace.
    fn progress_multiplier(self) -> i32 {
        match self {
            FurnaceKind::Furnace => 1,
            FurnaceKind::BlastFurnace | FurnaceKind::Smoker => 2,
        }
    }
}

/// A Bedrock slot address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BedrockContainerSlot {
    pub container: ContainerSlotType,
    pub slot: u8,
}

impl BedrockContainerSlot {
    pub fn new(container: ContainerSlotType, slot: u8) -> Self {
        Self { container, slot }
    }
}

/// Linear mapping shared by every archetype for the player-owned slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseTranslator {
    pub size: usize,
}

impl BaseTranslator {
    pub fn java_slot_to_bedrock(&self, slot: usize) -> usize {
        if slot >= self.size {
            let player_slot = slot - self.size;
            if player_slot < 27 {
                return player_slot + 9;
            }
            return player_slot - 27;
        }
        slot
    }

    /// `region` is the slot type used for the container's own slots.
    pub fn java_slot_to_bedrock_container(
        &self,
        slot: usize,
        region: ContainerSlotType,
    ) -> BedrockContainerSlot {
        if slot >= self.size {
            let player_slot = slot - self.size;
            if player_slot < 27 {
                return BedrockContainerSlot::new(ContainerSlotType::Inventory, (player_slot + 9) as u8);
            }
            return BedrockContainerSlot::new(ContainerSlotType::Hotbar, (player_slot - 27) as u8);
        }
        BedrockContainerSlot::new(region, slot as u8)
    }

    /// `None` for the cursor and for offsets outside their region.
    pub fn bedrock_slot_to_java(&self, slot: StackRequestSlot) -> Option<usize> {
        let index = slot.slot as usize;
        match slot.container {
            ContainerSlotType::Hotbar if index < 9 => Some(self.size + index + 27),
            ContainerSlotType::Inventory if (9..36).contains(&index) => Some(self.size + index - 9),
            ContainerSlotType::HotbarAndInventory if index < 9 => Some(self.size + index + 27),
            ContainerSlotType::HotbarAndInventory if index < 36 => Some(self.size + index - 9),
            c if c.is_player_inventory() => None,
            ContainerSlotType::Cursor => None,
            _ => (index < self.size).then_some(index),
        }
    }
}

/// How an archetype pushes its contents to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UpdaterKind {
    /// One `InventoryContent` for the Bedrock window.
    Container,
    /// Per-slot `InventorySlot` packets into the UI container.
    Ui,
    Player,
}

/// One variant per Java container archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryTranslator {
    Player,
    Chest { rows: u8 },
    ShulkerBox,
    Generic3x3,
    Hopper,
    Furnace(FurnaceKind),
    Brewing,
    Anvil,
    Smithing,
    Crafting,
    Lectern,
}

impl InventoryTranslator {
    /// Translator for a Java window type, `None` for unsupported windows.
    pub fn for_container_type(container_type: JavaContainerType) -> Option<Self> {
        if let Some(rows) = container_type.chest_rows() {
            return Some(InventoryTranslator::Chest { rows });
        }
        let translator = match container_type {
            JavaContainerType::ShulkerBox => InventoryTranslator::ShulkerBox,
            JavaContainerType::Generic3x3 => InventoryTranslator::Generic3x3,
            JavaContainerType::Hopper => InventoryTranslator::Hopper,
            JavaContainerType::Furnace => InventoryTranslator::Furnace(FurnaceKind::Furnace),
            JavaContainerType::BlastFurnace => InventoryTranslator::Furnace(FurnaceKind::BlastFurnace),
            JavaContainerType::Smoker => InventoryTranslator::Furnace(FurnaceKind::Smoker),
            JavaContainerType::BrewingStand => InventoryTranslator::Brewing,
            JavaContainerType::Anvil => InventoryTranslator::Anvil,
            JavaContainerType::Smithing => InventoryTranslator::Smithing,
            JavaContainerType::Crafting => InventoryTranslator::Crafting,
            JavaContainerType::Lectern => InventoryTranslator::Lectern,
            _ => return None,
        };
        Some(translator)
    }

    /// Number of container-owned Java slots.
    pub fn size(&self) -> usize {
        match self {
            InventoryTranslator::Player => PLAYER_INVENTORY_SIZE,
            InventoryTranslator::Chest { rows } => 9 * *rows as usize,
            InventoryTranslator::ShulkerBox => 27,
            InventoryTranslator::Generic3x3 => 9,
            InventoryTranslator::Hopper => 5,
            InventoryTranslator::Furnace(_) => 3,
            InventoryTranslator::Brewing => 5,
            InventoryTranslator::Anvil => 3,
            InventoryTranslator::Smithing => 4,
            InventoryTranslator::Crafting => 10,
            InventoryTranslator::Lectern => 1,
        }
    }

    pub fn base(&self) -> BaseTranslator {
        BaseTranslator { size: self.size() }
    }

    pub(crate) fn updater(&self) -> UpdaterKind {
        match self {
            InventoryTranslator::Player => UpdaterKind::Player,
            InventoryTranslator::Anvil | InventoryTranslator::Smithing | InventoryTranslator::Crafting => {
                UpdaterKind::Ui
            }
            _ => UpdaterKind::Container,
        }
    }

    /// Java slot whose content the client derives itself and must be pushed
    /// explicitly after every content update.
    pub fn content_output_slot(&self) -> Option<usize> {
        match self {
            InventoryTranslator::Smithing => Some(3),
            _ => None,
        }
    }

    pub fn bedrock_container_type(&self, inventory: &Inventory) -> ContainerType {
        match self {
            InventoryTranslator::Player => ContainerType::Inventory,
            InventoryTranslator::Chest { .. } | InventoryTranslator::ShulkerBox => ContainerType::Container,
            InventoryTranslator::Generic3x3 => {
                if inventory.is_dropper() {
                    ContainerType::Dropper
                } else {
                    ContainerType::Dispenser
                }
            }
            InventoryTranslator::Hopper => ContainerType::Hopper,
            InventoryTranslator::Furnace(kind) => kind.container_type(),
            InventoryTranslator::Brewing => ContainerType::BrewingStand,
            InventoryTranslator::Anvil => ContainerType::Anvil,
            InventoryTranslator::Smithing => ContainerType::SmithingTable,
            InventoryTranslator::Crafting => ContainerType::Workbench,
            InventoryTranslator::Lectern => ContainerType::Lectern,
        }
    }

    /// Window type the Bedrock close packet must carry.
    pub fn close_container_type(&self, inventory: &Inventory) -> ContainerType {
        self.bedrock_container_type(inventory)
    }

    /// Slot index inside the Bedrock window (or UI container) for a Java slot.
    pub fn java_slot_to_bedrock(&self, slot: usize) -> usize {
        match (self, slot) {
            (InventoryTranslator::Player, _) => player_java_slot_to_bedrock(slot),
            (InventoryTranslator::Brewing, 0..=2) => slot + 1,
            (InventoryTranslator::Brewing, 3) => 0,
            (InventoryTranslator::Anvil, 0) => ui_slot::ANVIL_INPUT as usize,
            (InventoryTranslator::Anvil, 1) => ui_slot::ANVIL_MATERIAL as usize,
            (InventoryTranslator::Anvil, 2) => ui_slot::CREATED_OUTPUT as usize,
            (InventoryTranslator::Smithing, 0) => ui_slot::SMITHING_TEMPLATE as usize,
            (InventoryTranslator::Smithing, 1) => ui_slot::SMITHING_INPUT as usize,
            (InventoryTranslator::Smithing, 2) => ui_slot::SMITHING_MATERIAL as usize,
            (InventoryTranslator::Smithing, 3) => ui_slot::CREATED_OUTPUT as usize,
            (InventoryTranslator::Crafting, 0) => ui_slot::CREATED_OUTPUT as usize,
            (InventoryTranslator::Crafting, 1..=9) => slot + ui_slot::CRAFTING_TABLE_INPUT_START as usize - 1,
            _ => self.base().java_slot_to_bedrock(slot),
        }
    }

    pub fn java_slot_to_bedrock_container(&self, slot: usize) -> BedrockContainerSlot {
        use ContainerSlotType as T;

        let ui = |container, slot: u32| BedrockContainerSlot::new(container, slot as u8);
        match (self, slot) {
            (InventoryTranslator::Player, _) => player_java_slot_to_bedrock_container(slot),
            (InventoryTranslator::ShulkerBox, _) => self.base().java_slot_to_bedrock_container(slot, T::ShulkerBox),
            (InventoryTranslator::Furnace(kind), 0) => BedrockContainerSlot::new(kind.ingredient_slot(), 0),
            (InventoryTranslator::Furnace(_), 1) => BedrockContainerSlot::new(T::FurnaceFuel, 1),
            (InventoryTranslator::Furnace(_), 2) => BedrockContainerSlot::new(T::FurnaceResult, 2),
            (InventoryTranslator::Brewing, 0..=2) => {
                BedrockContainerSlot::new(T::BrewingResult, self.java_slot_to_bedrock(slot) as u8)
            }
            (InventoryTranslator::Brewing, 3) => BedrockContainerSlot::new(T::BrewingInput, 0),
            (InventoryTranslator::Brewing, 4) => BedrockContainerSlot::new(T::BrewingFuel, 4),
            (InventoryTranslator::Anvil, 0) => ui(T::AnvilInput, ui_slot::ANVIL_INPUT),
            (InventoryTranslator::Anvil, 1) => ui(T::AnvilMaterial, ui_slot::ANVIL_MATERIAL),
            (InventoryTranslator::Anvil, 2) => ui(T::CreatedOutput, ui_slot::CREATED_OUTPUT),
            (InventoryTranslator::Smithing, 0) => ui(T::SmithingTableTemplate, ui_slot::SMITHING_TEMPLATE),
            (InventoryTranslator::Smithing, 1) => ui(T::SmithingTableInput, ui_slot::SMITHING_INPUT),
            (InventoryTranslator::Smithing, 2) => ui(T::SmithingTableMaterial, ui_slot::SMITHING_MATERIAL),
            (InventoryTranslator::Smithing, 3) => ui(T::CreatedOutput, ui_slot::CREATED_OUTPUT),
            (InventoryTranslator::Crafting, 0) => ui(T::CreatedOutput, ui_slot::CREATED_OUTPUT),
            (InventoryTranslator::Crafting, 1..=9) => {
                BedrockContainerSlot::new(T::CraftingInput, self.java_slot_to_bedrock(slot) as u8)
            }
            _ => self.base().java_slot_to_bedrock_container(slot, T::LevelEntity),
        }
    }

    /// Java slot for a Bedrock slot address, `None` when the address has no
    /// Java counterpart (the cursor, or a region this window does not use).
    pub fn bedrock_slot_to_java(&self, slot: StackRequestSlot) -> Option<usize> {
        use ContainerSlotType as T;

        let index = slot.slot as usize;
        match (self, slot.container) {
            (InventoryTranslator::Player, _) => player_bedrock_slot_to_java(slot),
            (InventoryTranslator::Furnace(_), T::FurnaceIngredient | T::BlastFurnaceIngredient | T::SmokerIngredient) => {
                Some(0)
            }
            (InventoryTranslator::Furnace(_), T::FurnaceFuel) => Some(1),
            (InventoryTranslator::Furnace(_), T::FurnaceResult) => Some(2),
            (InventoryTranslator::Brewing, T::BrewingInput) => Some(3),
            (InventoryTranslator::Brewing, T::BrewingResult) => (1..=3).contains(&index).then(|| index - 1),
            (InventoryTranslator::Brewing, T::BrewingFuel) => Some(4),
            (InventoryTranslator::Anvil, T::AnvilInput) => Some(0),
            (InventoryTranslator::Anvil, T::AnvilMaterial) => Some(1),
            (InventoryTranslator::Anvil, T::CreatedOutput) => Some(2),
            (InventoryTranslator::Smithing, T::SmithingTableTemplate) => Some(0),
            (InventoryTranslator::Smithing, T::SmithingTableInput) => Some(1),
            (InventoryTranslator::Smithing, T::SmithingTableMaterial) => Some(2),
            (InventoryTranslator::Smithing, T::CreatedOutput | T::SmithingTableResult) => Some(3),
            (InventoryTranslator::Crafting, T::CraftingInput) => {
                let start = ui_slot::CRAFTING_TABLE_INPUT_START as usize;
                (start..start + 9).contains(&index).then(|| index - start + 1)
            }
            (InventoryTranslator::Crafting, T::CreatedOutput | T::CraftingOutput) => Some(0),
            _ => self.base().bedrock_slot_to_java(slot),
        }
    }

    /// Build the session-side inventory for a newly opened Java window.
    pub fn create_inventory(
        &self,
        session: &mut Session,
        title: &str,
        java_id: i32,
        container_type: JavaContainerType,
    ) -> Inventory {
        let bedrock_id = session.bedrock_window_id_for(java_id);
        let mut inventory = Inventory::new(java_id, bedrock_id, self.size(), Some(container_type), title);

        let interaction = session.last_interaction();
        let position = if java_id == VIRTUAL_LECTERN_WINDOW_ID {
            // Below the player's feet, inside interaction range.
            BlockPos::from_vec3(&session.position()).offset(0, -2, 0)
        } else {
            interaction
                .map(|i| i.position)
                .unwrap_or_else(|| BlockPos::from_vec3(&session.position()))
        };
        inventory.set_holder_position(position);

        if *self == InventoryTranslator::Generic3x3 {
            let dropper = interaction.is_some_and(|i| i.block_state.contains("dropper"));
            inventory.set_dropper(dropper);
        }
        inventory
    }

    pub fn open_inventory(&self, session: &Session, inventory: &Inventory) {
        let position = inventory.holder_position();

        if inventory.is_virtual_lectern() {
            session.send_upstream(UpdateBlock {
                position,
                block_state: VIRTUAL_LECTERN_BLOCK.to_string(),
            });
            updater::send_lectern_book(session, inventory, 0);
        }

        session.send_upstream(ContainerOpen {
            window_id: inventory.bedrock_id(),
            container_type: self.bedrock_container_type(inventory),
            position,
            entity_unique_id: -1,
        });

        if *self == InventoryTranslator::Brewing {
            session.send_upstream(ContainerSetData {
                window_id: inventory.bedrock_id(),
                property: ContainerSetData::BREWING_STAND_FUEL_TOTAL,
                value: 20,
            });
        }
    }

    /// Tear down client-side state for a window and send the Bedrock close.
    pub fn close_inventory(&self, session: &Session, inventory: &Inventory, server_initiated: bool) {
        if inventory.is_virtual_lectern() {
            let position = inventory.holder_position();
            let block_state = session
                .block_state_at(position)
                .unwrap_or("minecraft:air")
                .to_string();
            session.send_upstream(UpdateBlock {
                position,
                block_state,
            });
        }

        session.send_upstream(ContainerClose {
            window_id: inventory.bedrock_id(),
            container_type: self.close_container_type(inventory),
            server_initiated,
        });
    }

    /// Translate a Java window property. Keys without a Bedrock counterpart
    /// are dropped.
    pub fn update_property(&self, session: &Session, inventory: &Inventory, key: i32, value: i32) {
        let (property, value) = match (self, key) {
            (InventoryTranslator::Furnace(_), 0) => (ContainerSetData::FURNACE_LIT_TIME, value),
            (InventoryTranslator::Furnace(_), 1) => (ContainerSetData::FURNACE_LIT_DURATION, value),
            (InventoryTranslator::Furnace(kind), 2) => {
                (ContainerSetData::FURNACE_TICK_COUNT, value * kind.progress_multiplier())
            }
            (InventoryTranslator::Brewing, 0) => (ContainerSetData::BREWING_STAND_BREW_TIME, value),
            (InventoryTranslator::Brewing, 1) => (ContainerSetData::BREWING_STAND_FUEL_AMOUNT, value),
            (InventoryTranslator::Lectern, 0) => {
                updater::send_lectern_book(session, inventory, value);
                return;
            }
            _ => return,
        };
        session.send_upstream(ContainerSetData {
            window_id: inventory.bedrock_id(),
            property,
            value,
        });
    }

    /// Push every slot of the window to the client.
    pub fn update_inventory(&self, session: &Session, inventory: &Inventory) {
        match self.updater() {
            UpdaterKind::Player => updater::update_player(session, self, inventory),
            UpdaterKind::Container => {
                updater::update_player_main(session);
                updater::update_container(session, self, inventory);
                if *self == InventoryTranslator::Lectern {
                    updater::send_lectern_book(session, inventory, 0);
                }
            }
            UpdaterKind::Ui => {
                updater::update_player_main(session);
                updater::update_ui(session, self, inventory);
            }
        }
    }

    /// Push a single Java slot to the client.
    pub fn update_slot(&self, session: &Session, inventory: &Inventory, slot: usize) {
        match self.updater() {
            UpdaterKind::Player => updater::update_player_slot(session, inventory, slot),
            _ if slot >= inventory.size() => updater::update_player_part_slot(session, self, slot),
            UpdaterKind::Container => updater::update_container_slot(session, self, inventory, slot),
            UpdaterKind::Ui => updater::update_ui_slot(session, self, inventory, slot),
        }
    }
}

fn player_java_slot_to_bedrock(slot: usize) -> usize {
    match slot {
        0 => ui_slot::CREATED_OUTPUT as usize,
        1..=4 => slot + ui_slot::PLAYER_CRAFTING_INPUT_START as usize - 1,
        5..=8 => slot - 5,
        36..=44 => slot - 36,
        45 => 1,
        _ => slot,
    }
}

fn player_java_slot_to_bedrock_container(slot: usize) -> BedrockContainerSlot {
    use ContainerSlotType as T;

    let bedrock = player_java_slot_to_bedrock(slot) as u8;
    let container = match slot {
        0 => T::CreatedOutput,
        1..=4 => T::CraftingInput,
        5..=8 => T::Armor,
        36..=44 => T::Hotbar,
        45 => T::Offhand,
        _ => T::Inventory,
    };
    BedrockContainerSlot::new(container, bedrock)
}

fn player_bedrock_slot_to_java(slot: StackRequestSlot) -> Option<usize> {
    use ContainerSlotType as T;

    let index = slot.slot as usize;
    let crafting_start = ui_slot::PLAYER_CRAFTING_INPUT_START as usize;
    match slot.container {
        T::CreatedOutput | T::CraftingOutput => Some(0),
        T::CraftingInput if (crafting_start..crafting_start + 4).contains(&index) => {
            Some(index - crafting_start + 1)
        }
        T::Armor if index < 4 => Some(index + 5),
        T::Offhand => Some(45),
        T::Hotbar if index < 9 => Some(index + 36),
        T::Inventory if (9..36).contains(&index) => Some(index),
        T::HotbarAndInventory if index < 9 => Some(index + 36),
        T::HotbarAndInventory if index < 36 => Some(index),
        _ => None,
    }
}

/// Bedrock window ids of the player's own windows, by Java slot.
pub(crate) fn player_window_for_slot(slot: usize) -> (u8, u32) {
    match slot {
        0 | 1..=4 => (container_id::UI, player_java_slot_to_bedrock(slot) as u32),
        5..=8 => (container_id::ARMOR, (slot - 5) as u32),
        45 => (container_id::OFFHAND, 0),
        _ => (container_id::INVENTORY, player_java_slot_to_bedrock(slot) as u32),
    }
}
