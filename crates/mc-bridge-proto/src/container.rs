//! Container window types and slot regions for both protocols.

use crate::error::ProtoError;

/// Bedrock window ids with a fixed meaning.
pub mod container_id {
    /// The player's own inventory window.
    pub const INVENTORY: u8 = 0;
    /// First id handed out for opened containers.
    pub const FIRST: u8 = 1;
    /// Last id handed out for opened containers.
    pub const LAST: u8 = 100;
    pub const OFFHAND: u8 = 119;
    pub const ARMOR: u8 = 120;
    /// Shared UI container: cursor, crafting grids, anvil/smithing slots.
    pub const UI: u8 = 124;
}

/// Well-known slots inside the Bedrock UI container.
pub mod ui_slot {
    pub const CURSOR: u32 = 0;
    pub const ANVIL_INPUT: u32 = 1;
    pub const ANVIL_MATERIAL: u32 = 2;
    pub const PLAYER_CRAFTING_INPUT_START: u32 = 28;
    pub const CRAFTING_TABLE_INPUT_START: u32 = 32;
    pub const CREATED_OUTPUT: u32 = 50;
    pub const SMITHING_INPUT: u32 = 51;
    pub const SMITHING_MATERIAL: u32 = 52;
    pub const SMITHING_TEMPLATE: u32 = 53;
}

/// Bedrock container window type, sent in ContainerOpen and ContainerClose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerType {
    Inventory,
    Container,
    Workbench,
    Furnace,
    BrewingStand,
    Anvil,
    Dispenser,
    Dropper,
    Hopper,
    Lectern,
    BlastFurnace,
    Smoker,
    SmithingTable,
}

impl ContainerType {
    /// Wire id of this window type.
    pub fn id(&self) -> i8 {
        match self {
            ContainerType::Inventory => -1,
            ContainerType::Container => 0,
            ContainerType::Workbench => 1,
            ContainerType::Furnace => 2,
            ContainerType::BrewingStand => 4,
            ContainerType::Anvil => 5,
            ContainerType::Dispenser => 6,
            ContainerType::Dropper => 7,
            ContainerType::Hopper => 8,
            ContainerType::Lectern => 25,
            ContainerType::BlastFurnace => 27,
            ContainerType::Smoker => 28,
            ContainerType::SmithingTable => 33,
        }
    }
}

/// Semantic slot region used by Bedrock item stack requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerSlotType {
    AnvilInput,
    AnvilMaterial,
    SmithingTableInput,
    SmithingTableMaterial,
    SmithingTableResult,
    Armor,
    LevelEntity,
    BrewingInput,
    BrewingResult,
    BrewingFuel,
    HotbarAndInventory,
    CraftingInput,
    CraftingOutput,
    FurnaceFuel,
    FurnaceIngredient,
    FurnaceResult,
    Hotbar,
    Inventory,
    ShulkerBox,
    Offhand,
    BlastFurnaceIngredient,
    SmokerIngredient,
    Barrel,
    Cursor,
    CreatedOutput,
    SmithingTableTemplate,
}

impl ContainerSlotType {
    pub fn id(&self) -> u8 {
        match self {
            ContainerSlotType::AnvilInput => 0,
            ContainerSlotType::AnvilMaterial => 1,
            ContainerSlotType::SmithingTableInput => 3,
            ContainerSlotType::SmithingTableMaterial => 4,
            ContainerSlotType::SmithingTableResult => 5,
            ContainerSlotType::Armor => 6,
            ContainerSlotType::LevelEntity => 7,
            ContainerSlotType::BrewingInput => 9,
            ContainerSlotType::BrewingResult => 10,
            ContainerSlotType::BrewingFuel => 11,
            ContainerSlotType::HotbarAndInventory => 12,
            ContainerSlotType::CraftingInput => 13,
            ContainerSlotType::CraftingOutput => 14,
            ContainerSlotType::FurnaceFuel => 24,
            ContainerSlotType::FurnaceIngredient => 25,
            ContainerSlotType::FurnaceResult => 26,
            ContainerSlotType::Hotbar => 28,
            ContainerSlotType::Inventory => 29,
            ContainerSlotType::ShulkerBox => 30,
            ContainerSlotType::Offhand => 34,
            ContainerSlotType::BlastFurnaceIngredient => 45,
            ContainerSlotType::SmokerIngredient => 46,
            ContainerSlotType::Barrel => 57,
            ContainerSlotType::Cursor => 58,
            ContainerSlotType::CreatedOutput => 59,
            ContainerSlotType::SmithingTableTemplate => 60,
        }
    }

    pub fn from_id(id: u8) -> Result<Self, ProtoError> {
        let slot_type = match id {
            0 => ContainerSlotType::AnvilInput,
            1 => ContainerSlotType::AnvilMaterial,
            3 => ContainerSlotType::SmithingTableInput,
            4 => ContainerSlotType::SmithingTableMaterial,
            5 => ContainerSlotType::SmithingTableResult,
            6 => ContainerSlotType::Armor,
            7 => ContainerSlotType::LevelEntity,
            9 => ContainerSlotType::BrewingInput,
            10 => ContainerSlotType::BrewingResult,
            11 => ContainerSlotType::BrewingFuel,
            12 => ContainerSlotType::HotbarAndInventory,
            13 => ContainerSlotType::CraftingInput,
            14 => ContainerSlotType::CraftingOutput,
            24 => ContainerSlotType::FurnaceFuel,
            25 => ContainerSlotType::FurnaceIngredient,
            26 => ContainerSlotType::FurnaceResult,
            28 => ContainerSlotType::Hotbar,
            29 => ContainerSlotType::Inventory,
            30 => ContainerSlotType::ShulkerBox,
            34 => ContainerSlotType::Offhand,
            45 => ContainerSlotType::BlastFurnaceIngredient,
            46 => ContainerSlotType::SmokerIngredient,
            57 => ContainerSlotType::Barrel,
            58 => ContainerSlotType::Cursor,
            59 => ContainerSlotType::CreatedOutput,
            60 => ContainerSlotType::SmithingTableTemplate,
            other => return Err(ProtoError::UnknownSlotType(other)),
        };
        Ok(slot_type)
    }

    /// Whether this region addresses the player's own main inventory or hotbar.
    pub fn is_player_inventory(&self) -> bool {
        matches!(
            self,
            ContainerSlotType::Hotbar
                | ContainerSlotType::Inventory
                | ContainerSlotType::HotbarAndInventory
        )
    }
}

/// Java menu type, sent in OpenScreen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JavaContainerType {
    Generic9x1,
    Generic9x2,
    Generic9x3,
    Generic9x4,
    Generic9x5,
    Generic9x6,
    Generic3x3,
    Crafter3x3,
    Anvil,
    Beacon,
    BlastFurnace,
    BrewingStand,
    Crafting,
    Enchantment,
    Furnace,
    Grindstone,
    Hopper,
    Lectern,
    Loom,
    Merchant,
    ShulkerBox,
    Smithing,
    Smoker,
    CartographyTable,
    Stonecutter,
}

impl JavaContainerType {
    const ALL: [JavaContainerType; 25] = [
        JavaContainerType::Generic9x1,
        JavaContainerType::Generic9x2,
        JavaContainerType::Generic9x3,
        JavaContainerType::Generic9x4,
        JavaContainerType::Generic9x5,
        JavaContainerType::Generic9x6,
        JavaContainerType::Generic3x3,
        JavaContainerType::Crafter3x3,
        JavaContainerType::Anvil,
        JavaContainerType::Beacon,
        JavaContainerType::BlastFurnace,
        JavaContainerType::BrewingStand,
        JavaContainerType::Crafting,
        JavaContainerType::Enchantment,
        JavaContainerType::Furnace,
        JavaContainerType::Grindstone,
        JavaContainerType::Hopper,
        JavaContainerType::Lectern,
        JavaContainerType::Loom,
        JavaContainerType::Merchant,
        JavaContainerType::ShulkerBox,
        JavaContainerType::Smithing,
        JavaContainerType::Smoker,
        JavaContainerType::CartographyTable,
        JavaContainerType::Stonecutter,
    ];

    /// Parse the menu registry id carried by OpenScreen.
    pub fn from_id(id: i32) -> Result<Self, ProtoError> {
        usize::try_from(id)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(ProtoError::UnknownContainerType(id))
    }

    pub fn id(&self) -> i32 {
        Self::ALL
            .iter()
            .position(|t| t == self)
            .map(|i| i as i32)
            .unwrap_or(-1)
    }

    /// Row count for the generic chest menus.
    pub fn chest_rows(&self) -> Option<u8> {
        match self {
            JavaContainerType::Generic9x1 => Some(1),
            JavaContainerType::Generic9x2 => Some(2),
            JavaContainerType::Generic9x3 => Some(3),
            JavaContainerType::Generic9x4 => Some(4),
            JavaContainerType::Generic9x5 => Some(5),
            JavaContainerType::Generic9x6 => Some(6),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn java_container_type_ids() {
        assert_eq!(
            JavaContainerType::from_id(0).unwrap(),
            JavaContainerType::Generic9x1
        );
        assert_eq!(
            JavaContainerType::from_id(11).unwrap(),
            JavaContainerType::BrewingStand
        );
        assert_eq!(JavaContainerType::Lectern.id(), 17);
        assert_eq!(JavaContainerType::Stonecutter.id(), 24);
        assert!(JavaContainerType::from_id(25).is_err());
        assert!(JavaContainerType::from_id(-1).is_err());
    }

    #[test]
    fn slot_type_ids_match_wire_values() {
        for id in 0..=u8::MAX {
            if let Ok(slot_type) = ContainerSlotType::from_id(id) {
                assert_eq!(slot_type.id(), id);
            }
        }
        assert_eq!(ContainerSlotType::Cursor.id(), 58);
        assert!(ContainerSlotType::from_id(2).is_err());
    }

    #[test]
    fn chest_rows() {
        assert_eq!(JavaContainerType::Generic9x3.chest_rows(), Some(3));
        assert_eq!(JavaContainerType::Hopper.chest_rows(), None);
    }
}
