//! Translators for packets received from the Bedrock client.

mod inventory;
mod player;

use mc_bridge_proto::packets::bedrock::{
    ContainerClose, InventoryTransaction, ItemStackRequest, MobEquipment, PlayerAction,
};

use super::PacketTranslatorRegistry;

pub use inventory::{
    ContainerCloseTranslator, InventoryTransactionTranslator, ItemStackRequestTranslator,
    MobEquipmentTranslator,
};
pub use player::PlayerActionTranslator;

pub fn register_all(registry: &mut PacketTranslatorRegistry) {
    registry.register::<ContainerClose, _>(ContainerCloseTranslator);
    registry.register::<InventoryTransaction, _>(InventoryTransactionTranslator);
    registry.register::<ItemStackRequest, _>(ItemStackRequestTranslator);
    registry.register::<MobEquipment, _>(MobEquipmentTranslator);
    registry.register::<PlayerAction, _>(PlayerActionTranslator);
}
