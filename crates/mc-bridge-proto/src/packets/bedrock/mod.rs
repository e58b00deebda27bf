//! Bedrock packets.

pub mod container;
pub mod inventory;
pub mod player;
pub mod world;

pub use container::{ContainerClose, ContainerOpen, ContainerSetData};
pub use inventory::{
    InventoryContent, InventorySlot, InventoryTransaction, ItemStackRequest, ItemStackResponse,
    MobEquipment, StackAction, StackRequest, StackRequestSlot, StackResponseEntry,
    TransactionData, UseItemAction, UseItemData,
};
pub use player::{PlayerAction, PlayerActionType, PlayerHotbar, SetPlayerGameType};
pub use world::{BlockActorData, BlockActorPayload, PlaySound, UpdateBlock};
