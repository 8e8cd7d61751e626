//! csel DOM - Host document model
//!
//! Arena-backed element tree with native single-select semantics.
//! This is the document surface the widget engine mirrors and mutates.

mod classlist;
mod dataset;
mod document;
mod events;
mod node;
mod select;

pub use classlist::ClassList;
pub use dataset::Dataset;
pub use document::{Children, Document, DomError, DomResult};
pub use events::{DomInput, EventKind, Key, ListenerMap, SubscriberId};
pub use node::{ElementData, Node, NodeData, OptGroupData, OptionData, SelectData};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for absent tree links
    pub(crate) const NONE: NodeId = NodeId(u32::MAX);

    #[inline]
    pub(crate) fn to_option(self) -> Option<NodeId> {
        if self == Self::NONE { None } else { Some(self) }
    }
}
