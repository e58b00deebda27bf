//! Packets that push session-side inventory contents to the client.

use mc_bridge_proto::container::{container_id, ui_slot};
use mc_bridge_proto::item::ItemData;
use mc_bridge_proto::packets::bedrock::{
    BlockActorData, BlockActorPayload, InventoryContent, InventorySlot,
};

use super::translator::{player_window_for_slot, InventoryTranslator};
use super::{Inventory, HOTBAR_START, MAIN_INVENTORY_START, OFFHAND_SLOT, PLAYER_SLOTS_IN_CONTAINER};
use crate::item::BridgeItemStack;
use crate::session::Session;

fn item_data(session: &Session, item: &BridgeItemStack) -> ItemData {
    item.item_data(&session.registries().items)
}

/// Main inventory and hotbar, in Bedrock order (hotbar first).
pub(crate) fn update_player_main(session: &Session) {
    let player = session.player_inventory();
    let items = (0..PLAYER_SLOTS_IN_CONTAINER)
        .map(|bedrock| {
            let java = if bedrock < 9 {
                HOTBAR_START + bedrock
            } else {
                bedrock
            };
            item_data(session, player.item(java))
        })
        .collect();
    session.send_upstream(InventoryContent {
        window_id: container_id::INVENTORY as u32,
        items,
    });
}

/// The whole player window: main inventory, armor, offhand and the 2x2
/// crafting grid.
pub(crate) fn update_player(session: &Session, translator: &InventoryTranslator, inventory: &Inventory) {
    update_player_main(session);

    let armor = (5..9).map(|slot| item_data(session, inventory.item(slot))).collect();
    session.send_upstream(InventoryContent {
        window_id: container_id::ARMOR as u32,
        items: armor,
    });
    session.send_upstream(InventoryContent {
        window_id: container_id::OFFHAND as u32,
        items: vec![item_data(session, inventory.item(OFFHAND_SLOT))],
    });

    for slot in 0..5 {
        session.send_upstream(InventorySlot {
            window_id: container_id::UI as u32,
            slot: translator.java_slot_to_bedrock(slot) as u32,
            item: item_data(session, inventory.item(slot)),
        });
    }
}

pub(crate) fn update_player_slot(session: &Session, inventory: &Inventory, slot: usize) {
    let (window_id, bedrock_slot) = player_window_for_slot(slot);
    session.send_upstream(InventorySlot {
        window_id: window_id as u32,
        slot: bedrock_slot,
        item: item_data(session, inventory.item(slot)),
    });
}

/// A player-owned slot addressed through an open container window.
pub(crate) fn update_player_part_slot(session: &Session, translator: &InventoryTranslator, slot: usize) {
    let player_slot = slot - translator.size() + MAIN_INVENTORY_START;
    session.send_upstream(InventorySlot {
        window_id: container_id::INVENTORY as u32,
        slot: translator.java_slot_to_bedrock(slot) as u32,
        item: item_data(session, session.player_inventory().item(player_slot)),
    });
}

pub(crate) fn update_container(session: &Session, translator: &InventoryTranslator, inventory: &Inventory) {
    let size = inventory.size();
    let mut items = vec![ItemData::empty(); size];
    for java in 0..size {
        let bedrock = translator.java_slot_to_bedrock(java);
        if let Some(item) = items.get_mut(bedrock) {
            *item = item_data(session, inventory.item(java));
        }
    }
    session.send_upstream(InventoryContent {
        window_id: inventory.bedrock_id() as u32,
        items,
    });
}

pub(crate) fn update_container_slot(
    session: &Session,
    translator: &InventoryTranslator,
    inventory: &Inventory,
    slot: usize,
) {
    session.send_upstream(InventorySlot {
        window_id: inventory.bedrock_id() as u32,
        slot: translator.java_slot_to_bedrock(slot) as u32,
        item: item_data(session, inventory.item(slot)),
    });
    if *translator == InventoryTranslator::Lectern && slot == 0 {
        send_lectern_book(session, inventory, 0);
    }
}

pub(crate) fn update_ui(session: &Session, translator: &InventoryTranslator, inventory: &Inventory) {
    for slot in 0..inventory.size() {
        update_ui_slot(session, translator, inventory, slot);
    }
}

pub(crate) fn update_ui_slot(
    session: &Session,
    translator: &InventoryTranslator,
    inventory: &Inventory,
    slot: usize,
) {
    session.send_upstream(InventorySlot {
        window_id: container_id::UI as u32,
        slot: translator.java_slot_to_bedrock(slot) as u32,
        item: item_data(session, inventory.item(slot)),
    });
}

/// Output slot the client derives itself (smithing result), pushed from the
/// server's value.
pub(crate) fn update_content_output(
    session: &Session,
    translator: &InventoryTranslator,
    slot: usize,
    item: &BridgeItemStack,
) {
    session.send_upstream(InventorySlot {
        window_id: container_id::UI as u32,
        slot: translator.java_slot_to_bedrock(slot) as u32,
        item: item_data(session, item),
    });
}

/// The cursor lives in slot 0 of the UI container.
pub(crate) fn update_cursor(session: &Session) {
    session.send_upstream(InventorySlot {
        window_id: container_id::UI as u32,
        slot: ui_slot::CURSOR,
        item: item_data(session, session.player_inventory().cursor()),
    });
}

/// Lecterns show their book through block entity data, not slots.
pub(crate) fn send_lectern_book(session: &Session, inventory: &Inventory, page: i32) {
    let book = inventory.item(0);
    let total_pages = book
        .written_book_content()
        .map(|b| b.pages.len())
        .or_else(|| book.writable_book_content().map(|b| b.pages.len()))
        .unwrap_or(0);
    session.send_upstream(BlockActorData {
        position: inventory.holder_position(),
        payload: BlockActorPayload::Lectern {
            book: item_data(session, book),
            page,
            total_pages: total_pages as i32,
        },
    });
}
