//! Session-side item stacks.

use mc_bridge_proto::item::{
    AdventureModePredicate, DataComponents, ItemData, ItemTag, JavaItemStack, WritableBookContent,
    WrittenBookContent,
};
use tracing::debug;

use crate::bundle::BundleData;
use crate::mappings::ItemMappings;

/// An item stack as the bridge tracks it: the Java item plus the Bedrock
/// stack network id and any bundle state the session attached.
///
/// Empty slots hold [`BridgeItemStack::EMPTY`]. A stack is never patched from
/// an incoming network stack; slots are replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BridgeItemStack {
    java_id: i32,
    amount: i32,
    components: Option<DataComponents>,
    net_id: i32,
    bundle_data: Option<BundleData>,
}

impl BridgeItemStack {
    pub const EMPTY: BridgeItemStack = BridgeItemStack {
        java_id: 0,
        amount: 0,
        components: None,
        net_id: 0,
        bundle_data: None,
    };

    pub fn new(java_id: i32, amount: i32) -> Self {
        Self {
            java_id,
            amount,
            ..Self::EMPTY
        }
    }

    /// Wrap a network stack. Missing stacks and non-positive counts become
    /// [`BridgeItemStack::EMPTY`].
    pub fn from_java(stack: Option<&JavaItemStack>) -> Self {
        match stack {
            Some(stack) if stack.count > 0 => Self {
                java_id: stack.id,
                amount: stack.count,
                components: (!stack.components.is_empty()).then(|| stack.components.clone()),
                net_id: 0,
                bundle_data: None,
            },
            _ => Self::EMPTY,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.amount <= 0 || self.java_id == 0
    }

    pub fn java_id(&self) -> i32 {
        self.java_id
    }

    pub fn amount(&self) -> i32 {
        self.amount
    }

    pub fn components(&self) -> Option<&DataComponents> {
        self.components.as_ref()
    }

    pub fn net_id(&self) -> i32 {
        self.net_id
    }

    pub fn set_net_id(&mut self, net_id: i32) {
        self.net_id = net_id;
    }

    pub fn bundle_data(&self) -> Option<&BundleData> {
        self.bundle_data.as_ref()
    }

    pub(crate) fn set_bundle_data(&mut self, data: BundleData) {
        self.bundle_data = Some(data);
    }

    /// Take over the bundle state of `previous` when it holds the same
    /// bundle, so a refreshed slot keeps its bundle id.
    pub(crate) fn carry_bundle_from(&mut self, previous: &BridgeItemStack) {
        if self.bundle_data.is_none()
            && self.java_id == previous.java_id
            && self.components == previous.components
        {
            self.bundle_data = previous.bundle_data.clone();
        }
    }

    pub fn bundle_contents(&self) -> Option<&[JavaItemStack]> {
        self.components()?.bundle_contents.as_deref()
    }

    pub fn writable_book_content(&self) -> Option<&WritableBookContent> {
        self.components()?.writable_book_content.as_ref()
    }

    pub fn written_book_content(&self) -> Option<&WrittenBookContent> {
        self.components()?.written_book_content.as_ref()
    }

    /// Whether the stack carries writable or written book pages.
    pub fn has_book_content(&self) -> bool {
        self.writable_book_content().is_some() || self.written_book_content().is_some()
    }

    pub fn can_place_on(&self) -> Option<&AdventureModePredicate> {
        self.components()?.can_place_on.as_ref()
    }

    /// Same item type, ignoring count and components.
    pub fn is_same_item(&self, other: &BridgeItemStack) -> bool {
        !self.is_empty() && !other.is_empty() && self.java_id == other.java_id
    }

    pub fn java_identifier<'a>(&self, mappings: &'a ItemMappings) -> &'a str {
        if self.is_empty() {
            return "minecraft:air";
        }
        mappings.java_identifier(self.java_id)
    }

    /// Network form for packets sent to the Java server.
    pub fn to_java(&self) -> Option<JavaItemStack> {
        if self.is_empty() {
            return None;
        }
        Some(JavaItemStack {
            id: self.java_id,
            count: self.amount,
            components: self.components.clone().unwrap_or_default(),
        })
    }

    /// Network form for packets sent to the Bedrock client.
    pub fn item_data(&self, mappings: &ItemMappings) -> ItemData {
        if self.is_empty() {
            return ItemData::empty();
        }
        let Some(mapping) = mappings.get(self.java_id) else {
            debug!("No Bedrock mapping for Java item {}", self.java_id);
            return ItemData::empty();
        };

        let mut data = ItemData::new(
            mapping.bedrock_runtime_id,
            self.amount.clamp(0, u16::MAX as i32) as u16,
        );
        data.metadata = mapping.bedrock_data;
        data.stack_network_id = self.net_id;

        if let Some(components) = &self.components {
            data.tag = item_tag(components);
            if let Some(predicate) = &components.can_place_on {
                data.can_place_on = predicate
                    .predicates
                    .iter()
                    .filter_map(|p| p.blocks.as_ref())
                    .flatten()
                    .filter(|b| !b.starts_with('#'))
                    .cloned()
                    .collect();
            }
        }
        data
    }
}

impl From<Option<JavaItemStack>> for BridgeItemStack {
    fn from(stack: Option<JavaItemStack>) -> Self {
        Self::from_java(stack.as_ref())
    }
}

fn item_tag(components: &DataComponents) -> Option<ItemTag> {
    let mut tag = ItemTag {
        custom_name: components.custom_name.clone(),
        ..ItemTag::default()
    };
    if let Some(book) = &components.written_book_content {
        tag.title = Some(book.title.clone());
        tag.author = Some(book.author.clone());
        tag.pages = book.pages.clone();
    } else if let Some(book) = &components.writable_book_content {
        tag.pages = book.pages.clone();
    }
    (tag != ItemTag::default()).then_some(tag)
}
