//! Player and world state the inventory and sound code depend on.

use mc_bridge_proto::packets::bedrock::SetPlayerGameType;
use mc_bridge_proto::packets::java::{
    ClientboundBlockUpdate, ClientboundGameEvent, ClientboundPlayerPosition,
};
use mc_bridge_proto::types::GameMode;
use tracing::debug;

use crate::error::TranslateError;
use crate::session::Session;
use crate::translator::PacketTranslator;

pub struct GameEventTranslator;

impl PacketTranslator<ClientboundGameEvent> for GameEventTranslator {
    fn translate(&self, session: &mut Session, packet: &ClientboundGameEvent) -> Result<(), TranslateError> {
        if packet.event != ClientboundGameEvent::CHANGE_GAME_MODE {
            return Ok(());
        }
        let game_mode = GameMode::from_java_id(packet.value as i32)?;
        debug!("{} is now in {game_mode:?}", session.bedrock_username());
        session.set_game_mode(game_mode);
        session.send_upstream(SetPlayerGameType {
            gamemode: game_mode.bedrock_id(),
        });
        Ok(())
    }
}

pub struct BlockUpdateTranslator;

impl PacketTranslator<ClientboundBlockUpdate> for BlockUpdateTranslator {
    fn translate(&self, session: &mut Session, packet: &ClientboundBlockUpdate) -> Result<(), TranslateError> {
        session.set_block_state(packet.position, packet.block_state.clone());
        Ok(())
    }
}

pub struct PlayerPositionTranslator;

impl PacketTranslator<ClientboundPlayerPosition> for PlayerPositionTranslator {
    fn translate(&self, session: &mut Session, packet: &ClientboundPlayerPosition) -> Result<(), TranslateError> {
        session.set_position(packet.position);
        Ok(())
    }
}
