use mc_bridge_proto::packets::java::ServerboundContainerClose;
use tracing::debug;

use super::Session;
use crate::inventory::{
    Inventory, InventoryHolder, InventoryTranslator, MAIN_INVENTORY_START, PLAYER_INVENTORY_SIZE,
};
use crate::inventory::updater;
use crate::item::BridgeItemStack;

/// A Java window the session currently tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// The player inventory, Java window 0.
    Player,
    /// The open container.
    Open,
}

impl Session {
    /// Resolve a Java container id to a tracked window.
    pub fn window(&self, container_id: i32) -> Option<Window> {
        if container_id == 0 {
            return Some(Window::Player);
        }
        match &self.inventory_holder {
            Some(holder) if holder.inventory.java_id() == container_id => Some(Window::Open),
            _ => None,
        }
    }

    /// Java slot count of a window, including the player slots of a container.
    pub fn window_size(&self, window: Window) -> usize {
        match (window, &self.inventory_holder) {
            (Window::Open, Some(holder)) => holder.java_size(),
            _ => PLAYER_INVENTORY_SIZE,
        }
    }

    pub fn window_inventory(&self, window: Window) -> &Inventory {
        match (window, &self.inventory_holder) {
            (Window::Open, Some(holder)) => &holder.inventory,
            _ => self.player_inventory.inventory(),
        }
    }

    /// Item in a window slot, reading the shared player slots of a container
    /// from the player inventory.
    pub fn window_item(&self, window: Window, slot: usize) -> &BridgeItemStack {
        match (window, &self.inventory_holder) {
            (Window::Open, Some(holder)) if slot >= holder.inventory.size() => self
                .player_inventory
                .item(slot - holder.inventory.size() + MAIN_INVENTORY_START),
            _ => self.window_inventory(window).item(slot),
        }
    }

    pub fn window_translator(&self, window: Window) -> InventoryTranslator {
        match (window, &self.inventory_holder) {
            (Window::Open, Some(holder)) => holder.translator,
            _ => InventoryTranslator::Player,
        }
    }

    pub fn set_window_state_id(&mut self, window: Window, state_id: i32) {
        match (window, &mut self.inventory_holder) {
            (Window::Open, Some(holder)) => holder.inventory.set_state_id(state_id),
            _ => self.player_inventory.inventory_mut().set_state_id(state_id),
        }
    }

    /// Replace a slot. Slots past a container's own size are written to the
    /// shared player inventory. A bundle refreshed in place keeps its bundle
    /// id; a bundle that leaves the slot is dropped from the cache.
    pub fn set_window_item(&mut self, window: Window, slot: usize, mut item: BridgeItemStack) {
        item.carry_bundle_from(self.window_item(window, slot));
        self.bundle_cache.initialize(&mut item);
        let kept = item.bundle_data().map(|data| data.bundle_id);

        let replaced = match (window, &mut self.inventory_holder) {
            (Window::Open, Some(holder)) => {
                let size = holder.inventory.size();
                if slot < size {
                    holder.inventory.set_item(slot, item, &mut self.net_ids)
                } else {
                    let player_slot = slot - size + MAIN_INVENTORY_START;
                    self.player_inventory
                        .inventory_mut()
                        .set_item(player_slot, item, &mut self.net_ids)
                }
            }
            _ => self
                .player_inventory
                .inventory_mut()
                .set_item(slot, item, &mut self.net_ids),
        };
        self.release_bundle(&replaced, kept);
    }

    /// Resend every slot of a window from local state.
    pub fn update_window(&self, window: Window) {
        let translator = self.window_translator(window);
        translator.update_inventory(self, self.window_inventory(window));
    }

    pub fn update_window_slot(&self, window: Window, slot: usize) {
        let translator = self.window_translator(window);
        translator.update_slot(self, self.window_inventory(window), slot);
    }

    pub fn set_cursor(&mut self, mut item: BridgeItemStack) {
        item.carry_bundle_from(self.player_inventory.cursor());
        self.bundle_cache.initialize(&mut item);
        let kept = item.bundle_data().map(|data| data.bundle_id);
        let replaced = self.player_inventory.set_cursor(item, &mut self.net_ids);
        self.release_bundle(&replaced, kept);
    }

    fn release_bundle(&mut self, replaced: &BridgeItemStack, kept: Option<i32>) {
        if let Some(data) = replaced.bundle_data() {
            if Some(data.bundle_id) != kept {
                self.bundle_cache.release(data);
            }
        }
    }

    pub fn update_cursor(&self) {
        updater::update_cursor(self);
    }

    /// Show a new window on the client and make it the open one.
    pub fn open_inventory(&mut self, holder: InventoryHolder) {
        debug!(
            "Opening {:?} window {} for {}",
            holder.translator,
            holder.inventory.java_id(),
            self.bedrock_username()
        );
        holder.translator.open_inventory(self, &holder.inventory);
        holder.translator.update_inventory(self, &holder.inventory);
        self.inventory_holder = Some(holder);
    }

    /// Drop the open window and send the Bedrock close. No-op when nothing
    /// is open.
    pub fn close_inventory(&mut self, server_initiated: bool) {
        if let Some(holder) = self.inventory_holder.take() {
            holder
                .translator
                .close_inventory(self, &holder.inventory, server_initiated);
            for data in holder.inventory.items().iter().filter_map(BridgeItemStack::bundle_data) {
                self.bundle_cache.release(data);
            }
        }
    }

    /// Tell the Java server the open window was closed. Skipped for the book
    /// lectern, which the server never opened.
    pub fn send_java_container_close(&self) {
        if let Some(holder) = &self.inventory_holder {
            if !holder.inventory.is_virtual_lectern() {
                self.send_downstream(ServerboundContainerClose {
                    container_id: holder.inventory.java_id(),
                });
            }
        }
    }
}
