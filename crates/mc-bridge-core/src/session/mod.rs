//! Per-player bridge state.
//!
//! A session is owned by a single worker task and every translator receives
//! it mutably, so none of its state needs locking. Outbound packets go into
//! unbounded queues drained by the protocol connections.

mod inventory;

use std::collections::HashMap;
use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;

use mc_bridge_proto::container::container_id;
use mc_bridge_proto::item::ItemData;
use mc_bridge_proto::types::{BlockPos, GameMode, Vec3};
use mc_bridge_proto::Packet;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;
use uuid::Uuid;

use crate::bundle::BundleCache;
use crate::inventory::{InventoryHolder, NetIdAllocator, PlayerInventory};
use crate::registries::Registries;

pub use inventory::Window;

/// Shown in logs instead of a player's address unless IP logging is enabled.
pub const IP_WITHHELD: &str = "<IP address withheld>";

/// Address as it may appear in logs.
pub fn redact_address(address: SocketAddr, log_ip_addresses: bool) -> String {
    if log_ip_addresses {
        address.to_string()
    } else {
        IP_WITHHELD.to_string()
    }
}

/// Who is on the other end of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    pub bedrock_username: String,
    pub java_username: String,
    pub java_uuid: Uuid,
    /// Entity id the Java server assigned at login.
    pub java_entity_id: i32,
    pub address: SocketAddr,
}

/// Block the player last clicked, with its Java block state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockInteraction {
    pub position: BlockPos,
    pub block_state: String,
}

pub struct Session {
    identity: SessionIdentity,
    registries: Arc<Registries>,
    upstream: UnboundedSender<Box<dyn Packet>>,
    downstream: UnboundedSender<Box<dyn Packet>>,
    log_player_ip_addresses: bool,

    player_inventory: PlayerInventory,
    inventory_holder: Option<InventoryHolder>,
    bundle_cache: BundleCache,
    net_ids: NetIdAllocator,
    /// Last temporary Bedrock window id handed out.
    last_window_id: u8,

    game_mode: GameMode,
    sneaking: bool,
    /// Book the client opened by itself; the server's echo is not re-shown.
    current_book: Option<ItemData>,
    emulate_post_1_16_logic: bool,

    position: Vec3,
    last_interaction: Option<BlockInteraction>,
    block_states: HashMap<BlockPos, String>,
    sequence: i32,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("player", &self.identity.bedrock_username)
            .field("open", &self.inventory_holder.as_ref().map(|h| h.inventory.java_id()))
            .field("game_mode", &self.game_mode)
            .field("sneaking", &self.sneaking)
            .finish_non_exhaustive()
    }
}

impl Session {
    pub fn new(
        identity: SessionIdentity,
        registries: Arc<Registries>,
        upstream: UnboundedSender<Box<dyn Packet>>,
        downstream: UnboundedSender<Box<dyn Packet>>,
    ) -> Self {
        Self {
            identity,
            registries,
            upstream,
            downstream,
            log_player_ip_addresses: true,
            player_inventory: PlayerInventory::new(),
            inventory_holder: None,
            bundle_cache: BundleCache::new(),
            net_ids: NetIdAllocator::new(),
            last_window_id: 0,
            game_mode: GameMode::default(),
            sneaking: false,
            current_book: None,
            emulate_post_1_16_logic: true,
            position: Vec3::ZERO,
            last_interaction: None,
            block_states: HashMap::new(),
            sequence: 0,
        }
    }

    pub fn identity(&self) -> &SessionIdentity {
        &self.identity
    }

    pub fn bedrock_username(&self) -> &str {
        &self.identity.bedrock_username
    }

    pub fn registries(&self) -> &Arc<Registries> {
        &self.registries
    }

    pub fn set_log_player_ip_addresses(&mut self, enabled: bool) {
        self.log_player_ip_addresses = enabled;
    }

    /// Remote address, redacted unless IP logging is enabled.
    pub fn display_address(&self) -> String {
        redact_address(self.identity.address, self.log_player_ip_addresses)
    }

    /// Player name and address for log lines.
    pub fn log_name(&self) -> String {
        format!("{} ({})", self.identity.bedrock_username, self.display_address())
    }

    // -----------------------------------------------------------------------
    // Outbound
    // -----------------------------------------------------------------------

    /// Queue a packet for the Bedrock client.
    pub fn send_upstream(&self, packet: impl Packet) {
        if self.upstream.send(Box::new(packet)).is_err() {
            debug!("Bedrock connection of {} closed, dropping packet", self.log_name());
        }
    }

    /// Queue a packet for the Java server.
    pub fn send_downstream(&self, packet: impl Packet) {
        if self.downstream.send(Box::new(packet)).is_err() {
            debug!("Java connection of {} closed, dropping packet", self.log_name());
        }
    }

    // -----------------------------------------------------------------------
    // Inventory state
    // -----------------------------------------------------------------------

    pub fn player_inventory(&self) -> &PlayerInventory {
        &self.player_inventory
    }

    pub fn player_inventory_mut(&mut self) -> &mut PlayerInventory {
        &mut self.player_inventory
    }

    pub fn inventory_holder(&self) -> Option<&InventoryHolder> {
        self.inventory_holder.as_ref()
    }

    pub fn bundle_cache(&self) -> &BundleCache {
        &self.bundle_cache
    }

    /// Bedrock window id for a Java window. Vanilla Java ids already fit the
    /// Bedrock range; anything else gets a temporary id cycling through
    /// 1..=100.
    pub fn bedrock_window_id_for(&mut self, java_id: i32) -> u8 {
        if (container_id::FIRST as i32..=container_id::LAST as i32).contains(&java_id) {
            return java_id as u8;
        }
        self.next_temporary_window_id()
    }

    pub fn next_temporary_window_id(&mut self) -> u8 {
        self.last_window_id = if self.last_window_id >= container_id::LAST {
            container_id::FIRST
        } else {
            self.last_window_id + 1
        };
        self.last_window_id
    }

    // -----------------------------------------------------------------------
    // Player state
    // -----------------------------------------------------------------------

    pub fn game_mode(&self) -> GameMode {
        self.game_mode
    }

    pub fn set_game_mode(&mut self, game_mode: GameMode) {
        self.game_mode = game_mode;
    }

    pub fn is_sneaking(&self) -> bool {
        self.sneaking
    }

    pub fn set_sneaking(&mut self, sneaking: bool) {
        self.sneaking = sneaking;
    }

    pub fn current_book(&self) -> Option<&ItemData> {
        self.current_book.as_ref()
    }

    pub fn set_current_book(&mut self, book: Option<ItemData>) {
        self.current_book = book;
    }

    pub fn emulate_post_1_16_logic(&self) -> bool {
        self.emulate_post_1_16_logic
    }

    pub fn set_emulate_post_1_16_logic(&mut self, emulate: bool) {
        self.emulate_post_1_16_logic = emulate;
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn last_interaction(&self) -> Option<&BlockInteraction> {
        self.last_interaction.as_ref()
    }

    pub fn set_last_interaction(&mut self, interaction: BlockInteraction) {
        self.last_interaction = Some(interaction);
    }

    /// Java block state last reported by the server at `position`.
    pub fn block_state_at(&self, position: BlockPos) -> Option<&str> {
        self.block_states.get(&position).map(String::as_str)
    }

    pub fn set_block_state(&mut self, position: BlockPos, block_state: String) {
        if block_state == "minecraft:air" {
            self.block_states.remove(&position);
        } else {
            self.block_states.insert(position, block_state);
        }
    }

    /// Sequence number for the next block interaction sent to the server.
    pub fn next_sequence(&mut self) -> i32 {
        self.sequence += 1;
        self.sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[test]
    fn address_redaction() {
        let addr: SocketAddr = "10.0.0.5:19132".parse().unwrap();
        assert_eq!(redact_address(addr, true), "10.0.0.5:19132");
        assert_eq!(redact_address(addr, false), IP_WITHHELD);

        let mut t = test_support::session();
        t.session.set_log_player_ip_addresses(false);
        assert_eq!(t.session.log_name(), "Steve (<IP address withheld>)");
    }

    #[test]
    fn java_window_ids_are_reused() {
        let mut t = test_support::session();
        assert_eq!(t.session.bedrock_window_id_for(7), 7);
        assert_eq!(t.session.bedrock_window_id_for(100), 100);
    }

    #[test]
    fn temporary_window_ids_cycle() {
        let mut t = test_support::session();
        assert_eq!(t.session.bedrock_window_id_for(-69), 1);
        assert_eq!(t.session.bedrock_window_id_for(250), 2);
        for _ in 0..98 {
            t.session.next_temporary_window_id();
        }
        assert_eq!(t.session.next_temporary_window_id(), 1);
    }

    #[test]
    fn air_clears_cached_block() {
        let mut t = test_support::session();
        let pos = BlockPos::new(1, 64, 1);
        t.session.set_block_state(pos, "minecraft:lever[face=floor]".into());
        assert_eq!(t.session.block_state_at(pos), Some("minecraft:lever[face=floor]"));
        t.session.set_block_state(pos, "minecraft:air".into());
        assert_eq!(t.session.block_state_at(pos), None);
    }

    #[test]
    fn closed_connection_does_not_panic() {
        let t = test_support::session();
        let session = t.session;
        drop(t.upstream);
        session.send_upstream(mc_bridge_proto::packets::bedrock::PlayerHotbar {
            selected_slot: 0,
            window_id: 0,
            select: true,
        });
    }
}
