//! Packet translator dispatch.
//!
//! One registry per direction maps the concrete type of a decoded packet to
//! the translator that handles it. Packets without a translator are ignored.

pub mod bedrock;
pub mod java;

use std::any::{type_name, TypeId};
use std::collections::HashMap;
use std::marker::PhantomData;

use mc_bridge_proto::Packet;
use tracing::{error, warn};

use crate::error::TranslateError;
use crate::session::Session;

/// Translates one packet type. Implementations only mutate the session and
/// queue outbound packets; they never block.
pub trait PacketTranslator<P: Packet>: Send + Sync {
    fn translate(&self, session: &mut Session, packet: &P) -> Result<(), TranslateError>;
}

trait ErasedTranslator: Send + Sync {
    fn translate(&self, session: &mut Session, packet: &dyn Packet) -> Result<(), TranslateError>;
}

struct Typed<P, T> {
    translator: T,
    _packet: PhantomData<fn(&P)>,
}

impl<P: Packet, T: PacketTranslator<P>> ErasedTranslator for Typed<P, T> {
    fn translate(&self, session: &mut Session, packet: &dyn Packet) -> Result<(), TranslateError> {
        match packet.downcast_ref::<P>() {
            Some(packet) => self.translator.translate(session, packet),
            None => Ok(()),
        }
    }
}

/// Which connection a registry's packets arrive on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Received from the Java server.
    Java,
    /// Received from the Bedrock client.
    Bedrock,
}

pub struct PacketTranslatorRegistry {
    direction: Direction,
    translators: HashMap<TypeId, Box<dyn ErasedTranslator>>,
}

impl PacketTranslatorRegistry {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            translators: HashMap::new(),
        }
    }

    /// Translators for packets sent by the Java server.
    pub fn java() -> Self {
        let mut registry = Self::new(Direction::Java);
        java::register_all(&mut registry);
        registry
    }

    /// Translators for packets sent by the Bedrock client.
    pub fn bedrock() -> Self {
        let mut registry = Self::new(Direction::Bedrock);
        bedrock::register_all(&mut registry);
        registry
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Register the translator for packet type `P`.
    ///
    /// # Panics
    ///
    /// If `P` already has a translator in this registry.
    pub fn register<P, T>(&mut self, translator: T)
    where
        P: Packet,
        T: PacketTranslator<P> + 'static,
    {
        let previous = self.translators.insert(
            TypeId::of::<P>(),
            Box::new(Typed {
                translator,
                _packet: PhantomData,
            }),
        );
        assert!(
            previous.is_none(),
            "duplicate {:?} translator for {}",
            self.direction,
            type_name::<P>()
        );
    }

    pub fn contains<P: Packet>(&self) -> bool {
        self.translators.contains_key(&TypeId::of::<P>())
    }

    pub fn len(&self) -> usize {
        self.translators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translators.is_empty()
    }

    /// Route a packet to its translator.
    ///
    /// Translation errors are logged and the packet is dropped. Only fatal
    /// errors are returned; the caller should end the session.
    pub fn dispatch(&self, session: &mut Session, packet: &dyn Packet) -> Result<(), TranslateError> {
        let Some(translator) = self.translators.get(&packet.packet_type()) else {
            return Ok(());
        };
        match translator.translate(session, packet) {
            Ok(()) => Ok(()),
            Err(e) if e.is_fatal() => {
                error!(
                    "Fatal error translating {} for {}: {e}",
                    packet.name(),
                    session.log_name()
                );
                Err(e)
            }
            Err(e) => {
                warn!(
                    "Error translating {} for {}: {e}",
                    packet.name(),
                    session.log_name()
                );
                Ok(())
            }
        }
    }
}
