//! Document tree (arena-based allocation)
//!
//! Nodes are owned by a flat arena and addressed by NodeId. Removal detaches
//! a subtree without destroying handles, so detached nodes can be re-inserted
//! (the select control is re-homed this way when a widget is destroyed).

use crate::NodeId;
use crate::node::{ElementData, Node, NodeData, OptGroupData, OptionData, SelectData};

/// Result type for document operations
pub type DomResult<T> = Result<T, DomError>;

/// Document tree misuse errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Node ID does not belong to this document
    #[error("node not found")]
    NotFound,
    /// Node is not a child of the given parent
    #[error("node is not a child of the given parent")]
    NotAChild,
    /// Insertion would create a cycle or is otherwise malformed
    #[error("hierarchy request error")]
    HierarchyRequest,
}

/// Arena-backed document tree
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Node>,
    last_revealed: Option<NodeId>,
}

impl Document {
    /// Create a new document holding only the root node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeData::Document)],
            last_revealed: None,
        }
    }

    /// Root node ID
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }

    /// Number of nodes ever allocated (detached nodes included)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    //
    // Node creation
    //

    /// Create a detached generic element
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        self.alloc(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a detached select control
    pub fn create_select(&mut self) -> NodeId {
        self.alloc(NodeData::Select(SelectData::default()))
    }

    /// Create a detached native option
    pub fn create_option(&mut self, data: OptionData) -> NodeId {
        self.alloc(NodeData::Option(data))
    }

    /// Create a detached native option group
    pub fn create_optgroup(&mut self, data: OptGroupData) -> NodeId {
        self.alloc(NodeData::OptGroup(data))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: impl Into<String>) -> NodeId {
        self.alloc(NodeData::Text(content.into()))
    }

    fn alloc(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(data));
        id
    }

    //
    // Tree structure
    //

    /// Parent of a node, if attached
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent.to_option())
    }

    /// First child of a node
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.first_child.to_option())
    }

    /// Last child of a node
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.last_child.to_option())
    }

    /// Next sibling of a node
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.next_sibling.to_option())
    }

    /// Previous sibling of a node
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.prev_sibling.to_option())
    }

    /// Iterate over the children of a node in order
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            doc: self,
            cur: self.get(id).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// Check whether `node` is `ancestor` or a descendant of it
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        if self.get(ancestor).is_none() {
            return false;
        }
        let mut cur = node;
        loop {
            if cur == ancestor {
                return true;
            }
            match self.get(cur).map(|n| n.parent) {
                Some(parent) if parent != NodeId::NONE => cur = parent,
                _ => return false,
            }
        }
    }

    //
    // Mutation
    //

    /// Append a child at the end of a parent's child list.
    ///
    /// An attached child is detached from its current position first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.check_insertable(parent, child)?;
        self.detach(child);

        let last = self.node(parent).last_child;
        if last == NodeId::NONE {
            self.node_mut(parent).first_child = child;
        } else {
            self.node_mut(last).next_sibling = child;
            self.node_mut(child).prev_sibling = last;
        }
        self.node_mut(parent).last_child = child;
        self.node_mut(child).parent = parent;
        Ok(child)
    }

    /// Insert a node immediately before a reference child of `parent`.
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        new: NodeId,
        reference: NodeId,
    ) -> DomResult<NodeId> {
        self.check_insertable(parent, new)?;
        if new == reference {
            return Err(DomError::HierarchyRequest);
        }
        if self.get(reference).map(|n| n.parent) != Some(parent) {
            return Err(DomError::NotAChild);
        }
        self.detach(new);

        let prev = self.node(reference).prev_sibling;
        self.node_mut(new).next_sibling = reference;
        self.node_mut(reference).prev_sibling = new;
        self.node_mut(new).prev_sibling = prev;
        if prev == NodeId::NONE {
            self.node_mut(parent).first_child = new;
        } else {
            self.node_mut(prev).next_sibling = new;
        }
        self.node_mut(new).parent = parent;
        Ok(new)
    }

    /// Remove a child from a parent, leaving it detached but alive.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        if self.get(parent).is_none() {
            return Err(DomError::NotFound);
        }
        if self.get(child).map(|n| n.parent) != Some(parent) {
            return Err(DomError::NotAChild);
        }
        self.detach(child);
        Ok(child)
    }

    /// Replace `old` with `new` under `parent`, returning the removed node.
    pub fn replace_child(
        &mut self,
        parent: NodeId,
        new: NodeId,
        old: NodeId,
    ) -> DomResult<NodeId> {
        if new == old {
            return Ok(old);
        }
        self.insert_before(parent, new, old)?;
        self.detach(old);
        Ok(old)
    }

    /// Unlink a node from its parent and siblings. No-op when detached.
    fn detach(&mut self, id: NodeId) {
        let (parent, prev, next) = {
            let n = self.node(id);
            (n.parent, n.prev_sibling, n.next_sibling)
        };
        if parent == NodeId::NONE {
            return;
        }
        if prev == NodeId::NONE {
            self.node_mut(parent).first_child = next;
        } else {
            self.node_mut(prev).next_sibling = next;
        }
        if next == NodeId::NONE {
            self.node_mut(parent).last_child = prev;
        } else {
            self.node_mut(next).prev_sibling = prev;
        }
        let n = self.node_mut(id);
        n.parent = NodeId::NONE;
        n.prev_sibling = NodeId::NONE;
        n.next_sibling = NodeId::NONE;
    }

    fn check_insertable(&self, parent: NodeId, node: NodeId) -> DomResult<()> {
        if self.get(parent).is_none() || self.get(node).is_none() {
            return Err(DomError::NotFound);
        }
        // Inserting a node into its own subtree would create a cycle
        if self.contains(node, parent) {
            return Err(DomError::HierarchyRequest);
        }
        Ok(())
    }

    //
    // Text content
    //

    /// Concatenated text of a node's subtree
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.get(id) else { return };
        match &node.data {
            NodeData::Text(t) => out.push_str(t),
            NodeData::Option(o) => out.push_str(&o.text),
            _ => {}
        }
        let mut child = node.first_child;
        while child != NodeId::NONE {
            self.collect_text(child, out);
            child = self.node(child).next_sibling;
        }
    }

    /// Replace a node's children with a single text node (none when empty).
    pub fn set_text_content(&mut self, id: NodeId, text: &str) -> DomResult<()> {
        if self.get(id).is_none() {
            return Err(DomError::NotFound);
        }
        while let Some(child) = self.first_child(id) {
            self.detach(child);
        }
        if !text.is_empty() {
            let t = self.create_text(text);
            self.append_child(id, t)?;
        }
        Ok(())
    }

    //
    // Scrolling
    //

    /// Record a node as scrolled into view. There is no layout engine, so
    /// this only tracks the most recently revealed node.
    pub fn scroll_into_view(&mut self, id: NodeId) -> DomResult<()> {
        if self.get(id).is_none() {
            return Err(DomError::NotFound);
        }
        self.last_revealed = Some(id);
        Ok(())
    }

    /// The node most recently passed to scroll_into_view
    pub fn last_revealed(&self) -> Option<NodeId> {
        self.last_revealed
    }

    //
    // Internal accessors, valid-ID invariant already checked
    //

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0 as usize]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0 as usize]
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a node's children
pub struct Children<'a> {
    doc: &'a Document,
    cur: NodeId,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.cur == NodeId::NONE {
            return None;
        }
        let id = self.cur;
        self.cur = self.doc.node(id).next_sibling;
        Some(id)
    }
}
