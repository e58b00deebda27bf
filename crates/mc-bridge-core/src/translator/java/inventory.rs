//! Window lifecycle and slot sync from the Java server.

use mc_bridge_proto::container::JavaContainerType;
use mc_bridge_proto::packets::bedrock::PlayerHotbar;
use mc_bridge_proto::packets::java::{
    ClientboundContainerClose, ClientboundContainerSetContent, ClientboundContainerSetData,
    ClientboundContainerSetSlot, ClientboundOpenBook, ClientboundOpenScreen,
    ClientboundSetHeldSlot, ServerboundContainerClose,
};
use tracing::{debug, warn, Level};

use crate::error::TranslateError;
use crate::inventory::{updater, InventoryHolder, VIRTUAL_LECTERN_WINDOW_ID};
use crate::item::BridgeItemStack;
use crate::session::{Session, Window};
use crate::translator::PacketTranslator;

pub struct OpenScreenTranslator;

impl PacketTranslator<ClientboundOpenScreen> for OpenScreenTranslator {
    fn translate(&self, session: &mut Session, packet: &ClientboundOpenScreen) -> Result<(), TranslateError> {
        if packet.container_id == 0 {
            return Ok(());
        }
        // A new window replaces whatever is open.
        session.close_inventory(true);

        let Some(translator) = session.registries().inventory.get(packet.container_type) else {
            warn!(
                "Unsupported window type {:?} opened for {}",
                packet.container_type,
                session.log_name()
            );
            session.send_downstream(ServerboundContainerClose {
                container_id: packet.container_id,
            });
            return Ok(());
        };

        let inventory = translator.create_inventory(
            session,
            &packet.title,
            packet.container_id,
            packet.container_type,
        );
        session.open_inventory(InventoryHolder::new(inventory, translator));
        Ok(())
    }
}

pub struct ContainerSetContentTranslator;

impl PacketTranslator<ClientboundContainerSetContent> for ContainerSetContentTranslator {
    fn translate(
        &self,
        session: &mut Session,
        packet: &ClientboundContainerSetContent,
    ) -> Result<(), TranslateError> {
        let Some(window) = session.window(packet.container_id) else {
            return Ok(());
        };
        let size = session.window_size(window);
        let oversized = packet.items.len() > size;

        if oversized {
            warn!(
                "Java window {} of {} got {} items for {} slots",
                packet.container_id,
                session.log_name(),
                packet.items.len(),
                size
            );
            if tracing::enabled!(Level::DEBUG) {
                debug!("{packet:?}");
                debug!("{:?}", session.window_inventory(window));
            }
            // Resync the client from what we already had.
            session.update_window(window);
        } else {
            for (slot, stack) in packet.items.iter().enumerate() {
                let item = BridgeItemStack::from_java(stack.as_ref());
                session.set_window_item(window, slot, item);
            }
            session.update_window(window);

            let local_state_id = session.window_inventory(window).state_id();
            session.set_emulate_post_1_16_logic(packet.state_id > 0 || packet.state_id != local_state_id);
            session.set_window_state_id(window, packet.state_id);
        }

        let cursor = BridgeItemStack::from_java(packet.carried_item.as_ref());
        session.set_cursor(cursor);
        session.update_cursor();

        if !oversized {
            let translator = session.window_translator(window);
            if let Some(slot) = translator.content_output_slot() {
                let view: &Session = session;
                updater::update_content_output(view, &translator, slot, view.window_item(window, slot));
            }
        }
        Ok(())
    }
}

pub struct ContainerSetSlotTranslator;

impl PacketTranslator<ClientboundContainerSetSlot> for ContainerSetSlotTranslator {
    fn translate(&self, session: &mut Session, packet: &ClientboundContainerSetSlot) -> Result<(), TranslateError> {
        if packet.container_id == ClientboundContainerSetSlot::CURSOR_CONTAINER_ID
            && packet.slot == ClientboundContainerSetSlot::CURSOR_SLOT
        {
            let cursor = BridgeItemStack::from_java(packet.item.as_ref());
            session.set_cursor(cursor);
            session.update_cursor();
            return Ok(());
        }

        let Some(window) = session.window(packet.container_id) else {
            return Ok(());
        };
        let size = session.window_size(window);
        let slot = match usize::try_from(packet.slot) {
            Ok(slot) if slot < size => slot,
            _ => {
                return Err(TranslateError::SlotOutOfRange {
                    container_id: packet.container_id,
                    slot: packet.slot,
                    size,
                })
            }
        };

        let item = BridgeItemStack::from_java(packet.item.as_ref());
        session.set_window_state_id(window, packet.state_id);
        session.set_window_item(window, slot, item);
        session.update_window_slot(window, slot);

        let translator = session.window_translator(window);
        if translator.content_output_slot() == Some(slot) {
            let view: &Session = session;
            updater::update_content_output(view, &translator, slot, view.window_item(window, slot));
        }
        Ok(())
    }
}

pub struct ContainerSetDataTranslator;

impl PacketTranslator<ClientboundContainerSetData> for ContainerSetDataTranslator {
    fn translate(&self, session: &mut Session, packet: &ClientboundContainerSetData) -> Result<(), TranslateError> {
        let session: &Session = session;
        if let Some(holder) = session.inventory_holder() {
            if holder.inventory.java_id() == packet.container_id {
                holder
                    .translator
                    .update_property(session, &holder.inventory, packet.key, packet.value);
            }
        }
        Ok(())
    }
}

pub struct ContainerCloseTranslator;

impl PacketTranslator<ClientboundContainerClose> for ContainerCloseTranslator {
    fn translate(&self, session: &mut Session, packet: &ClientboundContainerClose) -> Result<(), TranslateError> {
        if session.window(packet.container_id) == Some(Window::Open) {
            session.close_inventory(true);
        }
        Ok(())
    }
}

/// Bedrock has no book screen, so books are shown on a lectern that exists
/// only on the client.
pub struct OpenBookTranslator;

impl PacketTranslator<ClientboundOpenBook> for OpenBookTranslator {
    fn translate(&self, session: &mut Session, packet: &ClientboundOpenBook) -> Result<(), TranslateError> {
        let book = session.player_inventory().item_in(packet.hand).clone();
        let book_data = book.item_data(&session.registries().items);

        // The client already opened this book itself.
        if session.current_book() == Some(&book_data) {
            session.set_current_book(None);
            return Ok(());
        }
        if !book.has_book_content() {
            return Ok(());
        }

        session.send_java_container_close();
        session.close_inventory(true);

        let translator = session
            .registries()
            .inventory
            .get(JavaContainerType::Lectern)
            .ok_or(TranslateError::MissingTranslator(JavaContainerType::Lectern))?;
        let mut inventory =
            translator.create_inventory(session, "", VIRTUAL_LECTERN_WINDOW_ID, JavaContainerType::Lectern);
        inventory.set_virtual_lectern_book(book);
        session.open_inventory(InventoryHolder::new(inventory, translator));
        Ok(())
    }
}

pub struct SetHeldSlotTranslator;

impl PacketTranslator<ClientboundSetHeldSlot> for SetHeldSlotTranslator {
    fn translate(&self, session: &mut Session, packet: &ClientboundSetHeldSlot) -> Result<(), TranslateError> {
        let slot = match u8::try_from(packet.slot) {
            Ok(slot) if slot < 9 => slot,
            _ => {
                return Err(TranslateError::SlotOutOfRange {
                    container_id: 0,
                    slot: packet.slot,
                    size: 9,
                })
            }
        };
        session.player_inventory_mut().set_held_slot(slot);
        session.send_upstream(PlayerHotbar {
            selected_slot: slot as u32,
            window_id: 0,
            select: true,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{InventoryTranslatorRegistry, HOTBAR_START};
    use crate::registries::Registries;
    use crate::test_support;
    use mc_bridge_proto::container::{container_id, ui_slot, ContainerType};
    use mc_bridge_proto::item::{DataComponents, JavaItemStack, WrittenBookContent};
    use mc_bridge_proto::packets::bedrock::{
        BlockActorData, ContainerClose, ContainerOpen, ContainerSetData, InventoryContent,
        InventorySlot, UpdateBlock,
    };
    use mc_bridge_proto::packets::java::Hand;

    fn open_screen(t: &mut test_support::TestSession, container_id: i32, container_type: JavaContainerType) {
        OpenScreenTranslator
            .translate(
                &mut t.session,
                &ClientboundOpenScreen {
                    container_id,
                    container_type,
                    title: "Window".into(),
                },
            )
            .unwrap();
    }

    fn written_book(t: &test_support::TestSession) -> JavaItemStack {
        t.stack("minecraft:written_book", 1).with_components(DataComponents {
            written_book_content: Some(WrittenBookContent {
                title: "Notes".into(),
                author: "Alex".into(),
                pages: vec!["one".into(), "two".into()],
            }),
            ..Default::default()
        })
    }

    fn hold(t: &mut test_support::TestSession, stack: JavaItemStack) {
        let item = BridgeItemStack::from_java(Some(&stack));
        t.session.set_window_item(Window::Player, HOTBAR_START, item);
    }

    #[test]
    fn open_screen_opens_bedrock_window() {
        let mut t = test_support::session();
        open_screen(&mut t, 4, JavaContainerType::Generic9x3);
        assert_eq!(t.session.window(4), Some(Window::Open));
        let opened = t.upstream_of::<ContainerOpen>();
        assert_eq!(opened.len(), 1);
        assert_eq!(opened[0].window_id, 4);
        assert_eq!(opened[0].container_type, ContainerType::Container);
    }

    #[test]
    fn open_screen_replaces_open_window() {
        let mut t = test_support::session();
        open_screen(&mut t, 4, JavaContainerType::Generic9x3);
        t.drain_upstream();
        open_screen(&mut t, 5, JavaContainerType::Hopper);
        let closed = t.upstream_of::<ContainerClose>();
        assert_eq!(closed.len(), 1);
        assert!(closed[0].server_initiated);
        assert_eq!(t.session.window(5), Some(Window::Open));
    }

    #[test]
    fn unsupported_window_is_closed_on_java() {
        let mut t = test_support::session();
        open_screen(&mut t, 6, JavaContainerType::Merchant);
        assert!(t.session.inventory_holder().is_none());
        assert_eq!(
            t.downstream_of::<ServerboundContainerClose>(),
            vec![ServerboundContainerClose { container_id: 6 }]
        );
        assert!(t.upstream_of::<ContainerOpen>().is_empty());
    }

    #[test]
    fn set_content_fills_window_and_cursor() {
        let mut t = test_support::session();
        let mut items = vec![None; 46];
        items[HOTBAR_START] = Some(t.stack("minecraft:diamond", 3));
        let carried = t.stack("minecraft:coal", 8);
        let packet = ClientboundContainerSetContent {
            container_id: 0,
            state_id: 4,
            items,
            carried_item: Some(carried),
        };
        ContainerSetContentTranslator.translate(&mut t.session, &packet).unwrap();

        assert_eq!(t.session.player_inventory().item_in_hand().amount(), 3);
        assert_eq!(t.session.player_inventory().cursor().amount(), 8);
        assert_eq!(t.session.player_inventory().inventory().state_id(), 4);

        let slots = t.upstream_of::<InventorySlot>();
        let cursor = slots
            .iter()
            .find(|s| s.window_id == container_id::UI as u32 && s.slot == ui_slot::CURSOR)
            .unwrap();
        assert_eq!(cursor.item.count, 8);
    }

    fn bundle_of(t: &test_support::TestSession, inner: &str) -> JavaItemStack {
        t.stack("minecraft:bundle", 1).with_components(DataComponents {
            bundle_contents: Some(vec![t.stack(inner, 4)]),
            ..DataComponents::default()
        })
    }

    fn bundle_id_in_hand(t: &test_support::TestSession) -> i32 {
        t.session
            .player_inventory()
            .item_in_hand()
            .bundle_data()
            .map(|data| data.bundle_id)
            .unwrap()
    }

    #[test]
    fn refreshed_bundle_keeps_its_id() {
        let mut t = test_support::session();
        let mut ids = Vec::new();
        for state_id in 1..=5 {
            let mut items = vec![None; 46];
            items[HOTBAR_START] = Some(bundle_of(&t, "minecraft:diamond"));
            let packet = ClientboundContainerSetContent {
                container_id: 0,
                state_id,
                items,
                carried_item: None,
            };
            ContainerSetContentTranslator.translate(&mut t.session, &packet).unwrap();
            ids.push(bundle_id_in_hand(&t));
        }
        assert!(ids.iter().all(|id| *id == ids[0]));
        assert_eq!(t.session.bundle_cache().len(), 1);
    }

    #[test]
    fn replaced_bundle_leaves_cache() {
        let mut t = test_support::session();
        let set_hand = |t: &mut test_support::TestSession, item: Option<JavaItemStack>| {
            ContainerSetSlotTranslator
                .translate(
                    &mut t.session,
                    &ClientboundContainerSetSlot {
                        container_id: 0,
                        state_id: 1,
                        slot: HOTBAR_START as i32,
                        item,
                    },
                )
                .unwrap();
        };

        let diamonds = bundle_of(&t, "minecraft:diamond");
        set_hand(&mut t, Some(diamonds));
        let first = bundle_id_in_hand(&t);
        let coal = bundle_of(&t, "minecraft:coal");
        set_hand(&mut t, Some(coal));
        assert_ne!(bundle_id_in_hand(&t), first);
        assert_eq!(t.session.bundle_cache().stored(first), None);
        assert_eq!(t.session.bundle_cache().len(), 1);

        set_hand(&mut t, None);
        assert!(t.session.bundle_cache().is_empty());
    }

    #[test]
    fn closing_a_window_releases_its_bundles() {
        let mut t = test_support::session();
        open_screen(&mut t, 3, JavaContainerType::Generic9x3);
        let mut items = vec![None; 63];
        items[0] = Some(bundle_of(&t, "minecraft:diamond"));
        let packet = ClientboundContainerSetContent {
            container_id: 3,
            state_id: 1,
            items,
            carried_item: None,
        };
        ContainerSetContentTranslator.translate(&mut t.session, &packet).unwrap();
        assert_eq!(t.session.bundle_cache().len(), 1);

        ContainerCloseTranslator
            .translate(&mut t.session, &ClientboundContainerClose { container_id: 3 })
            .unwrap();
        assert!(t.session.bundle_cache().is_empty());
    }

    #[test]
    fn oversized_content_keeps_local_slots() {
        let mut t = test_support::session();
        let stone = t.stack("minecraft:stone", 1);
        let packet = ClientboundContainerSetContent {
            container_id: 0,
            state_id: 9,
            items: vec![Some(stone); 47],
            carried_item: Some(t.stack("minecraft:coal", 2)),
        };
        ContainerSetContentTranslator.translate(&mut t.session, &packet).unwrap();

        let player = t.session.player_inventory();
        assert!(player.inventory().items().iter().all(BridgeItemStack::is_empty));
        assert_eq!(player.inventory().state_id(), 0);
        // The cursor still follows the server.
        assert_eq!(player.cursor().amount(), 2);

        let packets = t.drain_upstream();
        assert!(packets.iter().any(|p| p.is::<InventoryContent>()));
        assert!(packets
            .iter()
            .filter_map(|p| p.downcast_ref::<InventorySlot>())
            .any(|s| s.slot == ui_slot::CURSOR && s.item.count == 2));
    }

    #[test]
    fn state_id_decides_emulation() {
        let mut t = test_support::session();
        let content = |state_id| ClientboundContainerSetContent {
            container_id: 0,
            state_id,
            items: vec![None; 46],
            carried_item: None,
        };

        ContainerSetContentTranslator.translate(&mut t.session, &content(0)).unwrap();
        assert!(!t.session.emulate_post_1_16_logic());

        ContainerSetContentTranslator.translate(&mut t.session, &content(7)).unwrap();
        assert!(t.session.emulate_post_1_16_logic());
        assert_eq!(t.session.player_inventory().inventory().state_id(), 7);

        // Negative ids that differ from the local one still count.
        ContainerSetContentTranslator.translate(&mut t.session, &content(-1)).unwrap();
        assert!(t.session.emulate_post_1_16_logic());
    }

    #[test]
    fn smithing_output_is_pushed_after_content() {
        let mut t = test_support::session();
        open_screen(&mut t, 3, JavaContainerType::Smithing);
        t.drain_upstream();

        let sword = t.stack("minecraft:netherite_sword", 1);
        let sword_runtime_id = t
            .session
            .registries()
            .items
            .get(sword.id)
            .map(|m| m.bedrock_runtime_id)
            .unwrap();
        let mut items = vec![None; 40];
        items[3] = Some(sword);
        let packet = ClientboundContainerSetContent {
            container_id: 3,
            state_id: 1,
            items,
            carried_item: None,
        };
        ContainerSetContentTranslator.translate(&mut t.session, &packet).unwrap();

        let outputs: Vec<_> = t
            .upstream_of::<InventorySlot>()
            .into_iter()
            .filter(|s| s.window_id == container_id::UI as u32 && s.slot == ui_slot::CREATED_OUTPUT)
            .collect();
        assert_eq!(outputs.len(), 2);
        assert!(outputs.iter().all(|s| s.item.runtime_id == sword_runtime_id));
    }

    #[test]
    fn oversized_smithing_content_skips_output() {
        let mut t = test_support::session();
        open_screen(&mut t, 3, JavaContainerType::Smithing);
        t.drain_upstream();

        let packet = ClientboundContainerSetContent {
            container_id: 3,
            state_id: 1,
            items: vec![None; 41],
            carried_item: None,
        };
        ContainerSetContentTranslator.translate(&mut t.session, &packet).unwrap();

        let outputs = t
            .upstream_of::<InventorySlot>()
            .into_iter()
            .filter(|s| s.window_id == container_id::UI as u32 && s.slot == ui_slot::CREATED_OUTPUT)
            .count();
        assert_eq!(outputs, 1);
    }

    #[test]
    fn set_slot_updates_single_slot() {
        let mut t = test_support::session();
        open_screen(&mut t, 2, JavaContainerType::Generic9x3);
        t.drain_upstream();

        let packet = ClientboundContainerSetSlot {
            container_id: 2,
            state_id: 11,
            slot: 4,
            item: Some(t.stack("minecraft:iron_ingot", 16)),
        };
        ContainerSetSlotTranslator.translate(&mut t.session, &packet).unwrap();

        assert_eq!(t.session.window_item(Window::Open, 4).amount(), 16);
        assert_eq!(t.session.window_inventory(Window::Open).state_id(), 11);
        let slots = t.upstream_of::<InventorySlot>();
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].window_id, 2);
        assert_eq!(slots[0].slot, 4);
    }

    #[test]
    fn set_slot_cursor() {
        let mut t = test_support::session();
        let packet = ClientboundContainerSetSlot {
            container_id: ClientboundContainerSetSlot::CURSOR_CONTAINER_ID,
            state_id: 0,
            slot: ClientboundContainerSetSlot::CURSOR_SLOT,
            item: Some(t.stack("minecraft:torch", 12)),
        };
        ContainerSetSlotTranslator.translate(&mut t.session, &packet).unwrap();
        assert_eq!(t.session.player_inventory().cursor().amount(), 12);
        let slots = t.upstream_of::<InventorySlot>();
        assert_eq!(slots[0].slot, ui_slot::CURSOR);
    }

    #[test]
    fn set_slot_out_of_range_is_rejected() {
        let mut t = test_support::session();
        let packet = ClientboundContainerSetSlot {
            container_id: 0,
            state_id: 0,
            slot: 46,
            item: Some(t.stack("minecraft:stone", 1)),
        };
        let err = ContainerSetSlotTranslator.translate(&mut t.session, &packet).unwrap_err();
        assert!(matches!(err, TranslateError::SlotOutOfRange { slot: 46, .. }));
        assert!(!err.is_fatal());
        assert!(t.drain_upstream().is_empty());
    }

    #[test]
    fn set_data_reaches_open_furnace() {
        let mut t = test_support::session();
        open_screen(&mut t, 8, JavaContainerType::BlastFurnace);
        t.drain_upstream();

        let data = |container_id| ClientboundContainerSetData {
            container_id,
            key: 2,
            value: 100,
        };
        ContainerSetDataTranslator.translate(&mut t.session, &data(9)).unwrap();
        assert!(t.upstream_of::<ContainerSetData>().is_empty());

        ContainerSetDataTranslator.translate(&mut t.session, &data(8)).unwrap();
        let sent = t.upstream_of::<ContainerSetData>();
        assert_eq!(sent.len(), 1);
        // Blast furnaces report progress at double speed.
        assert_eq!(sent[0].property, ContainerSetData::FURNACE_TICK_COUNT);
        assert_eq!(sent[0].value, 200);
    }

    #[test]
    fn server_close_closes_matching_window() {
        let mut t = test_support::session();
        open_screen(&mut t, 2, JavaContainerType::Hopper);
        ContainerCloseTranslator
            .translate(&mut t.session, &ClientboundContainerClose { container_id: 3 })
            .unwrap();
        assert!(t.session.inventory_holder().is_some());
        ContainerCloseTranslator
            .translate(&mut t.session, &ClientboundContainerClose { container_id: 2 })
            .unwrap();
        assert!(t.session.inventory_holder().is_none());
        // The server closed it, so nothing is echoed back.
        assert!(t.downstream_of::<ServerboundContainerClose>().is_empty());
    }

    #[test]
    fn open_book_shows_virtual_lectern() {
        let mut t = test_support::session();
        let book = written_book(&t);
        hold(&mut t, book);
        t.drain_upstream();

        OpenBookTranslator
            .translate(&mut t.session, &ClientboundOpenBook { hand: Hand::MainHand })
            .unwrap();

        let holder = t.session.inventory_holder().unwrap();
        assert!(holder.inventory.is_virtual_lectern());
        assert!(holder.inventory.item(0).has_book_content());

        let packets = t.drain_upstream();
        assert!(packets.iter().any(|p| p.is::<UpdateBlock>()));
        assert!(packets.iter().any(|p| p.is::<BlockActorData>()));
        let opened = packets
            .iter()
            .find_map(|p| p.downcast_ref::<ContainerOpen>())
            .unwrap();
        assert_eq!(opened.container_type, ContainerType::Lectern);
    }

    #[test]
    fn open_book_echo_is_suppressed() {
        let mut t = test_support::session();
        let book = written_book(&t);
        hold(&mut t, book);
        let data = t
            .session
            .player_inventory()
            .item_in_hand()
            .item_data(&t.session.registries().items);
        t.session.set_current_book(Some(data));
        t.drain_upstream();

        OpenBookTranslator
            .translate(&mut t.session, &ClientboundOpenBook { hand: Hand::MainHand })
            .unwrap();
        assert!(t.session.current_book().is_none());
        assert!(t.session.inventory_holder().is_none());
        assert!(t.drain_upstream().is_empty());
    }

    #[test]
    fn open_book_without_book_does_nothing() {
        let mut t = test_support::session();
        let stone = t.stack("minecraft:stone", 1);
        hold(&mut t, stone);
        OpenBookTranslator
            .translate(&mut t.session, &ClientboundOpenBook { hand: Hand::MainHand })
            .unwrap();
        assert!(t.session.inventory_holder().is_none());
    }

    #[test]
    fn open_book_closes_current_window_first() {
        let mut t = test_support::session();
        open_screen(&mut t, 5, JavaContainerType::Generic9x1);
        let book = written_book(&t);
        hold(&mut t, book);
        t.drain_upstream();

        OpenBookTranslator
            .translate(&mut t.session, &ClientboundOpenBook { hand: Hand::MainHand })
            .unwrap();
        assert_eq!(
            t.downstream_of::<ServerboundContainerClose>(),
            vec![ServerboundContainerClose { container_id: 5 }]
        );
        assert!(t.session.inventory_holder().unwrap().inventory.is_virtual_lectern());
    }

    #[test]
    fn open_book_without_lectern_translator_is_fatal() {
        let mut t = test_support::session_with(Registries {
            inventory: InventoryTranslatorRegistry::empty(),
            ..Registries::init()
        });
        let book = written_book(&t);
        hold(&mut t, book);
        let err = OpenBookTranslator
            .translate(&mut t.session, &ClientboundOpenBook { hand: Hand::MainHand })
            .unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn held_slot_selects_hotbar() {
        let mut t = test_support::session();
        SetHeldSlotTranslator
            .translate(&mut t.session, &ClientboundSetHeldSlot { slot: 4 })
            .unwrap();
        assert_eq!(t.session.player_inventory().held_slot(), 4);
        let hotbar = t.upstream_of::<PlayerHotbar>();
        assert_eq!(hotbar[0].selected_slot, 4);
        assert!(hotbar[0].select);

        assert!(SetHeldSlotTranslator
            .translate(&mut t.session, &ClientboundSetHeldSlot { slot: 9 })
            .is_err());
        assert_eq!(t.session.player_inventory().held_slot(), 4);
    }
}
