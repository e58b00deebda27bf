use mc_bridge_proto::packets::bedrock::{PlayerAction, PlayerActionType};
use mc_bridge_proto::packets::java::{PlayerCommandAction, ServerboundPlayerCommand};

use crate::error::TranslateError;
use crate::session::Session;
use crate::translator::PacketTranslator;

pub struct PlayerActionTranslator;

impl PacketTranslator<PlayerAction> for PlayerActionTranslator {
    fn translate(&self, session: &mut Session, packet: &PlayerAction) -> Result<(), TranslateError> {
        let (sneaking, action) = match packet.action {
            PlayerActionType::StartSneak => (true, PlayerCommandAction::StartSneaking),
            PlayerActionType::StopSneak => (false, PlayerCommandAction::StopSneaking),
            PlayerActionType::Other(_) => return Ok(()),
        };
        session.set_sneaking(sneaking);
        session.send_downstream(ServerboundPlayerCommand {
            entity_id: session.identity().java_entity_id,
            action,
        });
        Ok(())
    }
}
