//! The host container the surface frame attaches to.

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Identifies a node attached to a [`Container`].
    pub struct NodeId;
}

#[derive(Debug, Default)]
struct ContainerState {
    nodes: SlotMap<NodeId, String>,
}

/// A shared handle to the host's overlay layer.
///
/// Cloning the handle shares the same underlying container, so the host can
/// keep one clone to inspect what the surface has attached.
#[derive(Debug, Clone, Default)]
pub struct Container {
    inner: Arc<Mutex<ContainerState>>,
}

impl Container {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a node with the given class name.
    pub fn attach(&self, class_name: impl Into<String>) -> NodeId {
        self.inner.lock().nodes.insert(class_name.into())
    }

    /// Detach a node. Returns `false` if it was not attached.
    pub fn detach(&self, id: NodeId) -> bool {
        self.inner.lock().nodes.remove(id).is_some()
    }

    /// Check whether a node is currently attached.
    pub fn contains(&self, id: NodeId) -> bool {
        self.inner.lock().nodes.contains_key(id)
    }

    /// Number of attached nodes.
    pub fn child_count(&self) -> usize {
        self.inner.lock().nodes.len()
    }

    /// The class name of an attached node.
    pub fn class_of(&self, id: NodeId) -> Option<String> {
        self.inner.lock().nodes.get(id).cloned()
    }
}

static_assertions::assert_impl_all!(Container: Send, Sync);
