//! Mirror link registry
//!
//! Bidirectional association between native nodes (options, groups) and
//! their rendered counterparts, held in an explicit side-table so no
//! implementation fields leak into the host document's nodes. Links are
//! installed and removed in pairs; the two maps are a bijection at all
//! times.

use std::collections::HashMap;

use csel_dom::NodeId;

/// Side-table linking native nodes to rendered nodes and back
#[derive(Debug, Default)]
pub struct MirrorLinks {
    native_to_rendered: HashMap<NodeId, NodeId>,
    rendered_to_native: HashMap<NodeId, NodeId>,
}

impl MirrorLinks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a link pair atomically
    pub fn link(&mut self, native: NodeId, rendered: NodeId) {
        self.native_to_rendered.insert(native, rendered);
        self.rendered_to_native.insert(rendered, native);
    }

    /// Remove a link pair by its native side, returning the rendered side
    pub fn unlink_native(&mut self, native: NodeId) -> Option<NodeId> {
        let rendered = self.native_to_rendered.remove(&native)?;
        self.rendered_to_native.remove(&rendered);
        Some(rendered)
    }

    /// Rendered counterpart of a native node
    pub fn rendered(&self, native: NodeId) -> Option<NodeId> {
        self.native_to_rendered.get(&native).copied()
    }

    /// Native counterpart of a rendered node
    pub fn native(&self, rendered: NodeId) -> Option<NodeId> {
        self.rendered_to_native.get(&rendered).copied()
    }

    /// Number of link pairs
    pub fn len(&self) -> usize {
        self.native_to_rendered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.native_to_rendered.is_empty()
    }

    /// Drop every link (empty/destroy)
    pub fn clear(&mut self) {
        self.native_to_rendered.clear();
        self.rendered_to_native.clear();
    }

    /// Verify the 1:1 invariant in both directions
    pub fn is_bijective(&self) -> bool {
        self.native_to_rendered.len() == self.rendered_to_native.len()
            && self
                .native_to_rendered
                .iter()
                .all(|(n, r)| self.rendered_to_native.get(r) == Some(n))
    }
}
