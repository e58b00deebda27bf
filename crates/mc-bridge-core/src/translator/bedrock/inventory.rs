//! Client-side inventory actions forwarded to the Java server.

use mc_bridge_proto::container::{container_id, ContainerSlotType};
use mc_bridge_proto::packets::bedrock::{
    ContainerClose, InventoryTransaction, ItemStackRequest, ItemStackResponse, MobEquipment,
    StackAction, StackRequest, StackRequestSlot, StackResponseEntry, TransactionData,
    UseItemAction, UseItemData,
};
use mc_bridge_proto::packets::java::{
    ClickMode, Hand, ServerboundContainerClick, ServerboundContainerClose,
    ServerboundSetCarriedItem, ServerboundUseItem, ServerboundUseItemOn,
};
use mc_bridge_proto::ProtoError;
use tracing::debug;

use crate::error::TranslateError;
use crate::inventory::InventoryTranslator;
use crate::session::{BlockInteraction, Session, Window};
use crate::sound;
use crate::translator::PacketTranslator;

pub struct ContainerCloseTranslator;

impl PacketTranslator<ContainerClose> for ContainerCloseTranslator {
    fn translate(&self, session: &mut Session, packet: &ContainerClose) -> Result<(), TranslateError> {
        let open = session
            .inventory_holder()
            .is_some_and(|holder| holder.inventory.bedrock_id() == packet.window_id);
        if open {
            session.send_java_container_close();
            session.close_inventory(false);
            return Ok(());
        }

        if packet.window_id == container_id::INVENTORY {
            // Drops whatever is left in the 2x2 crafting grid.
            session.send_downstream(ServerboundContainerClose { container_id: 0 });
        }
        // The client waits for the echo before it lets go of the screen.
        session.send_upstream(ContainerClose {
            window_id: packet.window_id,
            container_type: packet.container_type,
            server_initiated: false,
        });
        Ok(())
    }
}

pub struct InventoryTransactionTranslator;

impl PacketTranslator<InventoryTransaction> for InventoryTransactionTranslator {
    fn translate(&self, session: &mut Session, packet: &InventoryTransaction) -> Result<(), TranslateError> {
        let TransactionData::UseItem(data) = &packet.data else {
            return Ok(());
        };
        match data.action {
            UseItemAction::ClickBlock => click_block(session, data),
            UseItemAction::ClickAir => click_air(session),
            UseItemAction::BreakBlock => {}
        }
        Ok(())
    }
}

fn click_block(session: &mut Session, data: &UseItemData) {
    let position = data.block_position;
    if let Some(block_state) = session.block_state_at(position).map(str::to_owned) {
        sound::handle_block_interaction(session, position.center(), &block_state);
        session.set_last_interaction(BlockInteraction {
            position,
            block_state,
        });
    } else {
        session.set_last_interaction(BlockInteraction {
            position,
            block_state: "minecraft:air".into(),
        });
    }

    let sequence = session.next_sequence();
    session.send_downstream(ServerboundUseItemOn {
        hand: Hand::MainHand,
        position,
        face: data.face,
        cursor: data.click_position,
        inside_block: false,
        sequence,
    });
}

fn click_air(session: &mut Session) {
    // The client opens books by itself; remember which one so the server's
    // echo is not shown twice.
    let held = session.player_inventory().item_in_hand();
    if held.has_book_content() {
        let book = held.item_data(&session.registries().items);
        session.set_current_book(Some(book));
    }

    let sequence = session.next_sequence();
    session.send_downstream(ServerboundUseItem {
        hand: Hand::MainHand,
        sequence,
    });
}

pub struct MobEquipmentTranslator;

impl PacketTranslator<MobEquipment> for MobEquipmentTranslator {
    fn translate(&self, session: &mut Session, packet: &MobEquipment) -> Result<(), TranslateError> {
        if packet.window_id != container_id::INVENTORY || packet.hotbar_slot >= 9 {
            return Ok(());
        }
        if session.player_inventory().held_slot() == packet.hotbar_slot {
            return Ok(());
        }
        session.player_inventory_mut().set_held_slot(packet.hotbar_slot);
        session.send_downstream(ServerboundSetCarriedItem {
            slot: i16::from(packet.hotbar_slot),
        });
        Ok(())
    }
}

const LEFT_CLICK: i8 = 0;
const RIGHT_CLICK: i8 = 1;
/// Java slot index for a click outside the window.
const OUTSIDE_WINDOW: i32 = -999;

/// Replays Bedrock stack requests as Java window clicks. The server answers
/// with slot updates, which resync both sides.
pub struct ItemStackRequestTranslator;

impl PacketTranslator<ItemStackRequest> for ItemStackRequestTranslator {
    fn translate(&self, session: &mut Session, packet: &ItemStackRequest) -> Result<(), TranslateError> {
        let session: &Session = session;
        let mut responses = Vec::with_capacity(packet.requests.len());
        for request in &packet.requests {
            let status = match replay_request(session, request) {
                Ok(()) => StackResponseEntry::OK,
                Err(e) => {
                    debug!(
                        "Rejecting stack request {} from {}: {e}",
                        request.request_id,
                        session.log_name()
                    );
                    StackResponseEntry::ERROR
                }
            };
            responses.push(StackResponseEntry {
                status,
                request_id: request.request_id,
            });
        }
        session.send_upstream(ItemStackResponse { responses });
        Ok(())
    }
}

struct Clicker<'a> {
    session: &'a Session,
    window: Window,
    translator: InventoryTranslator,
    container_id: i32,
}

impl<'a> Clicker<'a> {
    fn new(session: &'a Session) -> Self {
        let window = if session.inventory_holder().is_some() {
            Window::Open
        } else {
            Window::Player
        };
        Self {
            session,
            window,
            translator: session.window_translator(window),
            container_id: session.window_inventory(window).java_id(),
        }
    }

    fn java_slot(&self, slot: &StackRequestSlot) -> Result<usize, TranslateError> {
        self.translator
            .bedrock_slot_to_java(*slot)
            .ok_or(TranslateError::UnmappedSlot {
                container: slot.container,
                slot: slot.slot,
            })
    }

    fn amount_at(&self, slot: usize) -> i32 {
        self.session.window_item(self.window, slot).amount()
    }

    fn cursor_amount(&self) -> i32 {
        self.session.player_inventory().cursor().amount()
    }

    fn click(&self, slot: i32, button: i8, mode: ClickMode) {
        self.session.send_downstream(ServerboundContainerClick {
            container_id: self.container_id,
            state_id: self.session.window_inventory(self.window).state_id(),
            slot,
            button,
            mode,
            changed_slots: Vec::new(),
            carried_item: self.session.player_inventory().cursor().to_java(),
        });
    }

    fn pickup(&self, slot: usize, button: i8) {
        self.click(slot as i32, button, ClickMode::Pickup);
    }
}

fn is_cursor(slot: &StackRequestSlot) -> bool {
    slot.container == ContainerSlotType::Cursor
}

fn replay_request(session: &Session, request: &StackRequest) -> Result<(), TranslateError> {
    let clicker = Clicker::new(session);
    for action in &request.actions {
        replay_action(&clicker, action)?;
    }
    Ok(())
}

fn replay_action(clicker: &Clicker<'_>, action: &StackAction) -> Result<(), TranslateError> {
    match action {
        StackAction::Take { count, src, dst } | StackAction::Place { count, src, dst } => {
            let count = i32::from(*count);
            match (is_cursor(src), is_cursor(dst)) {
                (false, true) => {
                    let slot = clicker.java_slot(src)?;
                    let amount = clicker.amount_at(slot);
                    // A Java pickup takes the whole stack or half of it,
                    // rounded up. Any other count would desync the cursor.
                    let button = if count >= amount {
                        LEFT_CLICK
                    } else if count == (amount + 1) / 2 {
                        RIGHT_CLICK
                    } else {
                        return Err(TranslateError::UnsupportedSplit { slot, count, amount });
                    };
                    clicker.pickup(slot, button);
                }
                (true, false) => {
                    let slot = clicker.java_slot(dst)?;
                    if count >= clicker.cursor_amount() {
                        clicker.pickup(slot, LEFT_CLICK);
                    } else {
                        // Each right click places exactly one item.
                        for _ in 0..count {
                            clicker.pickup(slot, RIGHT_CLICK);
                        }
                    }
                }
                (false, false) => {
                    let from = clicker.java_slot(src)?;
                    let to = clicker.java_slot(dst)?;
                    clicker.pickup(from, LEFT_CLICK);
                    clicker.pickup(to, LEFT_CLICK);
                }
                (true, true) => {}
            }
        }
        StackAction::Swap { src, dst } => match (is_cursor(src), is_cursor(dst)) {
            (true, true) => {}
            (true, false) => clicker.pickup(clicker.java_slot(dst)?, LEFT_CLICK),
            (false, true) => clicker.pickup(clicker.java_slot(src)?, LEFT_CLICK),
            (false, false) => {
                let a = clicker.java_slot(src)?;
                let b = clicker.java_slot(dst)?;
                clicker.pickup(a, LEFT_CLICK);
                clicker.pickup(b, LEFT_CLICK);
                clicker.pickup(a, LEFT_CLICK);
            }
        },
        StackAction::Drop { count, src, .. } => {
            let count = i32::from(*count);
            if is_cursor(src) {
                if count >= clicker.cursor_amount() {
                    clicker.click(OUTSIDE_WINDOW, LEFT_CLICK, ClickMode::Pickup);
                } else {
                    for _ in 0..count {
                        clicker.click(OUTSIDE_WINDOW, RIGHT_CLICK, ClickMode::Pickup);
                    }
                }
            } else {
                let slot = clicker.java_slot(src)?;
                // Button 1 throws the whole stack, button 0 a single item.
                if count >= clicker.amount_at(slot) {
                    clicker.click(slot as i32, 1, ClickMode::Throw);
                } else {
                    for _ in 0..count {
                        clicker.click(slot as i32, 0, ClickMode::Throw);
                    }
                }
            }
        }
        StackAction::Unknown { action_type } => {
            return Err(ProtoError::InvalidData(format!("unsupported stack action {action_type}")).into());
        }
    }
    Ok(())
}
