//! Network item representations.
//!
//! [`JavaItemStack`] is what the Java codec hands us: an item id, a count and
//! the structured data components the bridge cares about. [`ItemData`] is the
//! Bedrock `NetworkItemStackDescriptor` the bridge sends to the client.

/// A book page list as written with a book and quill.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WritableBookContent {
    pub pages: Vec<String>,
}

/// A signed book.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WrittenBookContent {
    pub title: String,
    pub author: String,
    pub pages: Vec<String>,
}

/// One `name=value` block state property requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMatcher {
    pub name: String,
    pub value: String,
}

/// A single block predicate of an adventure-mode component.
///
/// `blocks` holds namespaced block identifiers or `#tag` references. `None`
/// matches any block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockPredicate {
    pub blocks: Option<Vec<String>>,
    pub properties: Vec<PropertyMatcher>,
}

/// The `can_place_on` / `can_break` component payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdventureModePredicate {
    pub predicates: Vec<BlockPredicate>,
}

/// Structured item components relevant to the bridge.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DataComponents {
    pub custom_name: Option<String>,
    pub writable_book_content: Option<WritableBookContent>,
    pub written_book_content: Option<WrittenBookContent>,
    pub can_place_on: Option<AdventureModePredicate>,
    /// Items stored inside a bundle.
    pub bundle_contents: Option<Vec<JavaItemStack>>,
}

impl DataComponents {
    pub fn is_empty(&self) -> bool {
        *self == DataComponents::default()
    }
}

/// An item stack as decoded from the Java protocol. Empty slots are `None`
/// at the packet level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaItemStack {
    /// Java item registry id.
    pub id: i32,
    pub count: i32,
    pub components: DataComponents,
}

impl JavaItemStack {
    pub fn new(id: i32, count: i32) -> Self {
        Self {
            id,
            count,
            components: DataComponents::default(),
        }
    }

    pub fn with_components(mut self, components: DataComponents) -> Self {
        self.components = components;
        self
    }
}

/// Tag data attached to a Bedrock item.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemTag {
    pub custom_name: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub pages: Vec<String>,
}

/// A single item stack in the Bedrock protocol.
///
/// `runtime_id == 0` means the slot is empty (air).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemData {
    /// Item runtime ID from the StartGame item table. 0 = air/empty.
    pub runtime_id: i32,
    /// Number of items in this stack.
    pub count: u16,
    /// Item damage/variant metadata.
    pub metadata: u16,
    /// Block runtime ID if this item represents a placeable block.
    pub block_runtime_id: i32,
    pub tag: Option<ItemTag>,
    /// Blocks this item can be placed on (adventure mode).
    pub can_place_on: Vec<String>,
    /// Blocks this item can destroy (adventure mode).
    pub can_destroy: Vec<String>,
    /// Server-assigned unique ID for inventory tracking. 0 = no ID.
    pub stack_network_id: i32,
}

impl ItemData {
    /// An empty slot (air).
    pub fn empty() -> Self {
        Self {
            runtime_id: 0,
            count: 0,
            metadata: 0,
            block_runtime_id: 0,
            tag: None,
            can_place_on: Vec::new(),
            can_destroy: Vec::new(),
            stack_network_id: 0,
        }
    }

    /// Create a simple item stack with no tag or special data.
    pub fn new(runtime_id: i32, count: u16) -> Self {
        Self {
            runtime_id,
            count,
            ..Self::empty()
        }
    }

    /// Whether this slot is empty.
    pub fn is_empty(&self) -> bool {
        self.runtime_id == 0 || self.count == 0
    }
}

impl Default for ItemData {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_item_data() {
        assert!(ItemData::empty().is_empty());
        assert!(ItemData::new(5, 0).is_empty());
        assert!(!ItemData::new(5, 1).is_empty());
    }

    #[test]
    fn components_default_is_empty() {
        let mut components = DataComponents::default();
        assert!(components.is_empty());
        components.custom_name = Some("Named".into());
        assert!(!components.is_empty());
    }
}
