//! Runtime packet identity.
//!
//! Every decoded packet struct implements [`Packet`]. The dispatch tables in
//! the core crate key handlers by the concrete type behind a `dyn Packet`.

use std::any::{Any, TypeId};
use std::fmt::Debug;

/// A decoded packet of either protocol.
pub trait Packet: Any + Debug + Send + 'static {
    /// Short human-readable packet name, used in log lines.
    fn name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;
}

impl dyn Packet {
    /// `TypeId` of the concrete packet struct.
    pub fn packet_type(&self) -> TypeId {
        self.as_any().type_id()
    }

    pub fn is<T: Packet>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Packet>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// Implements [`Packet`] for a list of packet structs.
#[macro_export]
macro_rules! impl_packet {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl $crate::packet::Packet for $ty {
                fn name(&self) -> &'static str {
                    stringify!($ty)
                }

                fn as_any(&self) -> &dyn ::std::any::Any {
                    self
                }
            }
        )+
    };
}
