//! Per-session bundle bookkeeping.
//!
//! Bedrock addresses the contents of a bundle through a bundle id the server
//! hands out. The cache assigns those ids the first time a bundle stack is
//! seen and attaches the wrapped contents to the stack.

use std::collections::HashMap;

use crate::item::BridgeItemStack;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleData {
    pub bundle_id: i32,
    pub contents: Vec<BridgeItemStack>,
}

#[derive(Debug)]
pub struct BundleCache {
    next_bundle_id: i32,
    /// Bundle id -> number of stacks stored in it.
    bundles: HashMap<i32, usize>,
}

impl Default for BundleCache {
    fn default() -> Self {
        Self::new()
    }
}

impl BundleCache {
    pub fn new() -> Self {
        Self {
            next_bundle_id: 1,
            bundles: HashMap::new(),
        }
    }

    /// Attach bundle data to `stack` if it is a bundle. Stacks that already
    /// carry bundle data are left untouched. Nested bundles are initialized
    /// recursively.
    pub fn initialize(&mut self, stack: &mut BridgeItemStack) {
        if stack.bundle_data().is_some() {
            return;
        }
        let Some(contents) = stack.bundle_contents() else {
            return;
        };

        let contents: Vec<BridgeItemStack> = contents
            .iter()
            .map(|inner| {
                let mut inner = BridgeItemStack::from_java(Some(inner));
                self.initialize(&mut inner);
                inner
            })
            .collect();

        let bundle_id = self.next_bundle_id;
        self.next_bundle_id += 1;
        self.bundles.insert(bundle_id, contents.len());
        stack.set_bundle_data(BundleData {
            bundle_id,
            contents,
        });
    }

    /// Forget a bundle and every bundle nested in it.
    pub fn release(&mut self, data: &BundleData) {
        self.bundles.remove(&data.bundle_id);
        for inner in data.contents.iter().filter_map(BridgeItemStack::bundle_data) {
            self.release(inner);
        }
    }

    /// Number of stacks stored in a known bundle.
    pub fn stored(&self, bundle_id: i32) -> Option<usize> {
        self.bundles.get(&bundle_id).copied()
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}
