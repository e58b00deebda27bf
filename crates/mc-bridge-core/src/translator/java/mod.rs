//! Translators for packets received from the Java server.

mod inventory;
mod player;

use mc_bridge_proto::packets::java::{
    ClientboundBlockUpdate, ClientboundContainerClose, ClientboundContainerSetContent,
    ClientboundContainerSetData, ClientboundContainerSetSlot, ClientboundGameEvent,
    ClientboundOpenBook, ClientboundOpenScreen, ClientboundPlayerPosition, ClientboundSetHeldSlot,
};

use super::PacketTranslatorRegistry;

pub use inventory::{
    ContainerCloseTranslator, ContainerSetContentTranslator, ContainerSetDataTranslator,
    ContainerSetSlotTranslator, OpenBookTranslator, OpenScreenTranslator, SetHeldSlotTranslator,
};
pub use player::{BlockUpdateTranslator, GameEventTranslator, PlayerPositionTranslator};

pub fn register_all(registry: &mut PacketTranslatorRegistry) {
    registry.register::<ClientboundOpenScreen, _>(OpenScreenTranslator);
    registry.register::<ClientboundContainerSetContent, _>(ContainerSetContentTranslator);
    registry.register::<ClientboundContainerSetSlot, _>(ContainerSetSlotTranslator);
    registry.register::<ClientboundContainerSetData, _>(ContainerSetDataTranslator);
    registry.register::<ClientboundContainerClose, _>(ContainerCloseTranslator);
    registry.register::<ClientboundOpenBook, _>(OpenBookTranslator);
    registry.register::<ClientboundSetHeldSlot, _>(SetHeldSlotTranslator);
    registry.register::<ClientboundGameEvent, _>(GameEventTranslator);
    registry.register::<ClientboundBlockUpdate, _>(BlockUpdateTranslator);
    registry.register::<ClientboundPlayerPosition, _>(PlayerPositionTranslator);
}
