//! Wires decoded connections into session workers.

use std::sync::Arc;

use mc_bridge_core::{Registries, Session, SessionIdentity};
use mc_bridge_proto::Packet;
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::sessions::SessionManager;
use crate::worker::{self, Inbound, SessionHandle, INBOUND_CAPACITY};

/// A player whose Bedrock and Java connections are both up, handed over by
/// the transport that decoded them.
#[derive(Debug)]
pub struct PendingConnection {
    pub identity: SessionIdentity,
    /// Outbound queue of the Bedrock connection.
    pub upstream: UnboundedSender<Box<dyn Packet>>,
    /// Outbound queue of the Java connection.
    pub downstream: UnboundedSender<Box<dyn Packet>>,
    /// Receives the handle inbound packets are fed through.
    pub reply: oneshot::Sender<SessionHandle>,
}

pub struct Bridge {
    registries: Arc<Registries>,
    sessions: Arc<SessionManager>,
    log_player_ip_addresses: bool,
}

impl Bridge {
    pub fn new(registries: Arc<Registries>, sessions: Arc<SessionManager>, log_player_ip_addresses: bool) -> Self {
        Self {
            registries,
            sessions,
            log_player_ip_addresses,
        }
    }

    pub fn sessions(&self) -> &Arc<SessionManager> {
        &self.sessions
    }

    /// Start a session for a player whose two connections are up. Outbound
    /// packets are written to `upstream` (Bedrock) and `downstream` (Java).
    pub fn connect(
        &self,
        identity: SessionIdentity,
        upstream: UnboundedSender<Box<dyn Packet>>,
        downstream: UnboundedSender<Box<dyn Packet>>,
    ) -> (SessionHandle, JoinHandle<()>) {
        let mut session = Session::new(identity.clone(), self.registries.clone(), upstream, downstream);
        session.set_log_player_ip_addresses(self.log_player_ip_addresses);
        let log_name = session.log_name();

        let (tx, rx) = mpsc::channel(INBOUND_CAPACITY);
        let handle = SessionHandle::new(identity, tx);
        if let Some(previous) = self.sessions.insert(handle.clone()) {
            info!("{} replaced a stale session", previous.identity().bedrock_username);
        }
        info!("{log_name} connected");

        let sessions = self.sessions.clone();
        let own = handle.clone();
        let task = tokio::spawn(async move {
            match worker::run(session, rx).await {
                Ok(()) => info!("{log_name} disconnected"),
                Err(e) => error!("Session of {log_name} stopped: {e}"),
            }
            // A reconnect from the same address may own the entry by now.
            if !sessions.remove_handle(&own) {
                debug!("{log_name} was already replaced");
            }
        });
        (handle, task)
    }

    /// Accept connections until every transport has dropped its sender.
    pub async fn serve(self: Arc<Self>, mut connections: mpsc::Receiver<PendingConnection>) {
        while let Some(pending) = connections.recv().await {
            let (handle, _task) = self.connect(pending.identity, pending.upstream, pending.downstream);
            if pending.reply.send(handle.clone()).is_err() {
                // The transport gave up on this player while we set it up.
                handle.send(Inbound::Disconnect).await;
            }
        }
        debug!("Connection queue closed");
    }

    /// Ask every session worker to stop.
    pub async fn shutdown(&self) {
        for handle in self.sessions.all() {
            handle.send(Inbound::Disconnect).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;
    use uuid::Uuid;

    fn identity(name: &str) -> SessionIdentity {
        SessionIdentity {
            bedrock_username: name.into(),
            java_username: name.into(),
            java_uuid: Uuid::new_v4(),
            java_entity_id: 3,
            address: "10.1.1.1:40000".parse().unwrap(),
        }
    }

    fn bridge() -> (Arc<Bridge>, Arc<SessionManager>) {
        let sessions = Arc::new(SessionManager::new());
        let bridge = Arc::new(Bridge::new(Arc::new(Registries::init()), sessions.clone(), false));
        (bridge, sessions)
    }

    #[tokio::test]
    async fn session_is_tracked_while_connected() {
        let (bridge, sessions) = bridge();
        let (up_tx, _upstream) = unbounded_channel();
        let (down_tx, _downstream) = unbounded_channel();

        let (handle, task) = bridge.connect(identity("Steve"), up_tx, down_tx);
        assert_eq!(bridge.sessions().len(), 1);
        assert!(bridge.sessions().by_java_username("steve").is_some());

        handle.send(Inbound::Disconnect).await;
        task.await.unwrap();
        assert!(sessions.is_empty());
    }

    #[tokio::test]
    async fn stale_worker_keeps_reconnected_session() {
        let (bridge, sessions) = bridge();
        let (up_tx, _upstream) = unbounded_channel();
        let (down_tx, _downstream) = unbounded_channel();

        let (old, old_task) = bridge.connect(identity("Old"), up_tx.clone(), down_tx.clone());
        let (_new, _new_task) = bridge.connect(identity("New"), up_tx, down_tx);

        old.send(Inbound::Disconnect).await;
        old_task.await.unwrap();
        assert_eq!(sessions.len(), 1);
        assert!(sessions.by_java_username("New").is_some());
    }

    #[tokio::test]
    async fn serve_hands_out_session_handles() {
        let (bridge, sessions) = bridge();
        let (connections_tx, connections_rx) = mpsc::channel(4);
        let server = tokio::spawn(bridge.clone().serve(connections_rx));

        let (up_tx, _upstream) = unbounded_channel();
        let (down_tx, _downstream) = unbounded_channel();
        let (reply, handle_rx) = oneshot::channel();
        connections_tx
            .send(PendingConnection {
                identity: identity("Steve"),
                upstream: up_tx,
                downstream: down_tx,
                reply,
            })
            .await
            .unwrap();

        let handle = handle_rx.await.unwrap();
        assert_eq!(handle.identity().bedrock_username, "Steve");
        assert_eq!(sessions.len(), 1);

        drop(connections_tx);
        server.await.unwrap();

        bridge.shutdown().await;
        let drained = async {
            while !sessions.is_empty() {
                tokio::task::yield_now().await;
            }
        };
        tokio::time::timeout(std::time::Duration::from_secs(1), drained)
            .await
            .unwrap();
    }
}
