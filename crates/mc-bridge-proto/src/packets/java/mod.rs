//! Java packets.

pub mod inventory;
pub mod player;

pub use inventory::{
    ClickMode, ClientboundContainerClose, ClientboundContainerSetContent,
    ClientboundContainerSetData, ClientboundContainerSetSlot, ClientboundOpenBook,
    ClientboundOpenScreen, ClientboundSetHeldSlot, ServerboundContainerClick,
    ServerboundContainerClose, ServerboundSetCarriedItem,
};
pub use player::{
    ClientboundBlockUpdate, ClientboundGameEvent, ClientboundPlayerPosition, Hand,
    PlayerCommandAction, ServerboundPlayerCommand, ServerboundUseItem, ServerboundUseItemOn,
};
