//! Java window type to inventory translator lookup.

use std::collections::HashMap;

use mc_bridge_proto::container::JavaContainerType;

use super::translator::InventoryTranslator;

/// Immutable after startup; shared by every session through `Registries`.
#[derive(Debug, Clone, Default)]
pub struct InventoryTranslatorRegistry {
    translators: HashMap<JavaContainerType, InventoryTranslator>,
}

impl InventoryTranslatorRegistry {
    /// Registry with every supported archetype.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for id in 0.. {
            let Ok(container_type) = JavaContainerType::from_id(id) else {
                break;
            };
            if let Some(translator) = InventoryTranslator::for_container_type(container_type) {
                registry.register(container_type, translator);
            }
        }
        registry
    }

    pub fn empty() -> Self {
        Self {
            translators: HashMap::new(),
        }
    }

    pub fn register(&mut self, container_type: JavaContainerType, translator: InventoryTranslator) {
        self.translators.insert(container_type, translator);
    }

    pub fn get(&self, container_type: JavaContainerType) -> Option<InventoryTranslator> {
        self.translators.get(&container_type).copied()
    }

    pub fn len(&self) -> usize {
        self.translators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translators.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::FurnaceKind;

    #[test]
    fn supported_archetypes_are_registered() {
        let registry = InventoryTranslatorRegistry::new();
        // Six chest sizes plus eleven other window types.
        assert_eq!(registry.len(), 17);
        assert_eq!(
            registry.get(JavaContainerType::Lectern),
            Some(InventoryTranslator::Lectern)
        );
        assert_eq!(
            registry.get(JavaContainerType::BlastFurnace),
            Some(InventoryTranslator::Furnace(FurnaceKind::BlastFurnace))
        );
        assert_eq!(registry.get(JavaContainerType::Beacon), None);
    }

    #[test]
    fn empty_registry_has_nothing() {
        let registry = InventoryTranslatorRegistry::empty();
        assert!(registry.is_empty());
        assert_eq!(registry.get(JavaContainerType::Generic9x3), None);
    }
}
