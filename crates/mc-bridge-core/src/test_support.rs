//! Session fixtures for unit tests.

use std::sync::Arc;

use mc_bridge_proto::item::JavaItemStack;
use mc_bridge_proto::Packet;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use uuid::Uuid;

use crate::registries::Registries;
use crate::session::{Session, SessionIdentity};

pub(crate) struct TestSession {
    pub session: Session,
    pub upstream: UnboundedReceiver<Box<dyn Packet>>,
    pub downstream: UnboundedReceiver<Box<dyn Packet>>,
}

impl TestSession {
    pub fn drain_upstream(&mut self) -> Vec<Box<dyn Packet>> {
        std::iter::from_fn(|| self.upstream.try_recv().ok()).collect()
    }

    pub fn drain_downstream(&mut self) -> Vec<Box<dyn Packet>> {
        std::iter::from_fn(|| self.downstream.try_recv().ok()).collect()
    }

    /// Drain the Bedrock queue, keeping packets of type `T`.
    pub fn upstream_of<T: Packet + Clone>(&mut self) -> Vec<T> {
        self.drain_upstream()
            .iter()
            .filter_map(|p| p.downcast_ref::<T>().cloned())
            .collect()
    }

    /// Drain the Java queue, keeping packets of type `T`.
    pub fn downstream_of<T: Packet + Clone>(&mut self) -> Vec<T> {
        self.drain_downstream()
            .iter()
            .filter_map(|p| p.downcast_ref::<T>().cloned())
            .collect()
    }

    /// Java stack of `count` items by identifier.
    pub fn stack(&self, identifier: &str, count: i32) -> JavaItemStack {
        let id = self
            .session
            .registries()
            .items
            .java_id(identifier)
            .unwrap_or_else(|| panic!("{identifier} missing from item mappings"));
        JavaItemStack::new(id, count)
    }
}

pub(crate) fn identity() -> SessionIdentity {
    SessionIdentity {
        bedrock_username: "Steve".into(),
        java_username: "Steve".into(),
        java_uuid: Uuid::nil(),
        java_entity_id: 42,
        address: "127.0.0.1:19132".parse().unwrap(),
    }
}

pub(crate) fn session() -> TestSession {
    session_with(Registries::init())
}

pub(crate) fn session_with(registries: Registries) -> TestSession {
    let (up_tx, upstream) = unbounded_channel();
    let (down_tx, downstream) = unbounded_channel();
    TestSession {
        session: Session::new(identity(), Arc::new(registries), up_tx, down_tx),
        upstream,
        downstream,
    }
}
