//! Process-wide lookup tables, built once at startup and shared read-only by
//! every session.

use crate::inventory::InventoryTranslatorRegistry;
use crate::mappings::ItemMappings;
use crate::sound::SoundInteractionRegistry;
use crate::translator::PacketTranslatorRegistry;

pub struct Registries {
    pub items: ItemMappings,
    pub inventory: InventoryTranslatorRegistry,
    pub sounds: SoundInteractionRegistry,
    /// Packets received from the Java server.
    pub java_translators: PacketTranslatorRegistry,
    /// Packets received from the Bedrock client.
    pub bedrock_translators: PacketTranslatorRegistry,
}

impl Default for Registries {
    fn default() -> Self {
        Self::init()
    }
}

impl Registries {
    pub fn init() -> Self {
        Self {
            items: ItemMappings::new(),
            inventory: InventoryTranslatorRegistry::new(),
            sounds: SoundInteractionRegistry::new(),
            java_translators: PacketTranslatorRegistry::java(),
            bedrock_translators: PacketTranslatorRegistry::bedrock(),
        }
    }
}
