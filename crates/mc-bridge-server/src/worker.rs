//! Per-session worker.
//!
//! Every inbound packet of a player goes through one task, in arrival order.
//! The session never leaves that task, so translators mutate it freely.

use std::sync::Arc;

use mc_bridge_core::{Registries, Session, SessionIdentity, TranslateError};
use mc_bridge_proto::Packet;
use tokio::sync::mpsc;
use tracing::debug;

/// Inbound queue depth per session.
pub const INBOUND_CAPACITY: usize = 256;

/// Work for a session worker.
#[derive(Debug)]
pub enum Inbound {
    /// Decoded packet from the Java server.
    Java(Box<dyn Packet>),
    /// Decoded packet from the Bedrock client.
    Bedrock(Box<dyn Packet>),
    /// Either side hung up.
    Disconnect,
}

/// Cheap handle to a running session worker.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    identity: Arc<SessionIdentity>,
    sender: mpsc::Sender<Inbound>,
}

impl SessionHandle {
    pub fn new(identity: SessionIdentity, sender: mpsc::Sender<Inbound>) -> Self {
        Self {
            identity: Arc::new(identity),
            sender,
        }
    }

    pub fn identity(&self) -> &SessionIdentity {
        &self.identity
    }

    /// Queue work for the session. Returns false once the worker is gone.
    pub async fn send(&self, inbound: Inbound) -> bool {
        self.sender.send(inbound).await.is_ok()
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    /// Whether both handles feed the same worker.
    pub fn same_session(&self, other: &SessionHandle) -> bool {
        self.sender.same_channel(&other.sender)
    }
}

/// Drive a session until it disconnects, its queue closes, or a translator
/// fails fatally.
pub async fn run(mut session: Session, mut inbound: mpsc::Receiver<Inbound>) -> Result<(), TranslateError> {
    let registries: Arc<Registries> = session.registries().clone();
    while let Some(message) = inbound.recv().await {
        match message {
            Inbound::Java(packet) => registries
                .java_translators
                .dispatch(&mut session, packet.as_ref())?,
            Inbound::Bedrock(packet) => registries
                .bedrock_translators
                .dispatch(&mut session, packet.as_ref())?,
            Inbound::Disconnect => {
                debug!("{} requested disconnect", session.log_name());
                break;
            }
        }
    }
    // Nothing is sent to the server for the open window; the Java
    // connection is going away with the session.
    session.close_inventory(true);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc_bridge_core::inventory::InventoryTranslatorRegistry;
    use mc_bridge_proto::container::JavaContainerType;
    use mc_bridge_proto::packets::bedrock::{PlayerAction, PlayerActionType};
    use mc_bridge_proto::item::{DataComponents, JavaItemStack, WrittenBookContent};
    use mc_bridge_proto::packets::java::{
        ClientboundContainerSetContent, ClientboundOpenBook, ClientboundOpenScreen, Hand,
        ServerboundPlayerCommand,
    };
    use mc_bridge_proto::types::BlockPos;
    use tokio::sync::mpsc::unbounded_channel;
    use uuid::Uuid;

    fn identity() -> SessionIdentity {
        SessionIdentity {
            bedrock_username: "Alex".into(),
            java_username: "Alex".into(),
            java_uuid: Uuid::nil(),
            java_entity_id: 7,
            address: "127.0.0.1:50000".parse().unwrap(),
        }
    }

    fn sneak() -> Box<dyn Packet> {
        Box::new(PlayerAction {
            entity_runtime_id: 1,
            action: PlayerActionType::StartSneak,
            block_position: BlockPos::default(),
            face: 0,
        })
    }

    #[tokio::test]
    async fn packets_are_translated_in_order() {
        let (up_tx, mut upstream) = unbounded_channel();
        let (down_tx, mut downstream) = unbounded_channel();
        let session = Session::new(identity(), Arc::new(Registries::init()), up_tx, down_tx);
        let (tx, rx) = mpsc::channel(INBOUND_CAPACITY);
        let worker = tokio::spawn(run(session, rx));

        let handle = SessionHandle::new(identity(), tx);
        assert!(handle.send(Inbound::Bedrock(sneak())).await);
        assert!(
            handle
                .send(Inbound::Java(Box::new(ClientboundOpenScreen {
                    container_id: 2,
                    container_type: JavaContainerType::Hopper,
                    title: "Hopper".into(),
                })))
                .await
        );
        assert!(handle.send(Inbound::Disconnect).await);
        worker.await.unwrap().unwrap();

        let command = downstream.recv().await.unwrap();
        let command = command.downcast_ref::<ServerboundPlayerCommand>().unwrap();
        assert_eq!(command.entity_id, 7);
        // The hopper was opened, then closed when the worker stopped.
        let mut names = Vec::new();
        while let Ok(packet) = upstream.try_recv() {
            names.push(packet.name());
        }
        assert_eq!(names.first(), Some(&"ContainerOpen"));
        assert_eq!(names.last(), Some(&"ContainerClose"));
        assert!(handle.is_closed());
    }

    #[tokio::test]
    async fn fatal_error_stops_worker() {
        let (up_tx, _upstream) = unbounded_channel();
        let (down_tx, _downstream) = unbounded_channel();
        let registries = Registries {
            inventory: InventoryTranslatorRegistry::empty(),
            ..Registries::init()
        };
        let book_id = registries.items.java_id("minecraft:written_book").unwrap();
        let session = Session::new(identity(), Arc::new(registries), up_tx, down_tx);
        let (tx, rx) = mpsc::channel(INBOUND_CAPACITY);
        let worker = tokio::spawn(run(session, rx));
        let handle = SessionHandle::new(identity(), tx);

        let book = JavaItemStack::new(book_id, 1).with_components(DataComponents {
            written_book_content: Some(WrittenBookContent {
                title: "Log".into(),
                author: "Alex".into(),
                pages: vec!["page".into()],
            }),
            ..Default::default()
        });
        let mut items = vec![None; 46];
        items[36] = Some(book);
        handle
            .send(Inbound::Java(Box::new(ClientboundContainerSetContent {
                container_id: 0,
                state_id: 1,
                items,
                carried_item: None,
            })))
            .await;
        handle
            .send(Inbound::Java(Box::new(ClientboundOpenBook { hand: Hand::MainHand })))
            .await;

        let err = worker.await.unwrap().unwrap_err();
        assert!(matches!(err, TranslateError::MissingTranslator(JavaContainerType::Lectern)));
        assert!(handle.is_closed());
    }

    #[tokio::test]
    async fn dropped_handle_ends_worker() {
        let (up_tx, _upstream) = unbounded_channel();
        let (down_tx, _downstream) = unbounded_channel();
        let session = Session::new(identity(), Arc::new(Registries::init()), up_tx, down_tx);
        let (tx, rx) = mpsc::channel(INBOUND_CAPACITY);
        let worker = tokio::spawn(run(session, rx));
        drop(tx);
        assert!(worker.await.unwrap().is_ok());
    }
}
