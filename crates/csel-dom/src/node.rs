//! DOM Node
//!
//! Compact node representation: tree links are NodeId sentinels instead of
//! pointers, node-specific payloads live in a NodeData enum.

use crate::{ClassList, Dataset, NodeId};

/// DOM node: tree links plus node-specific data.
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if detached or root)
    pub(crate) parent: NodeId,
    /// First child
    pub(crate) first_child: NodeId,
    /// Last child (for O(1) append)
    pub(crate) last_child: NodeId,
    /// Previous sibling
    pub(crate) prev_sibling: NodeId,
    /// Next sibling
    pub(crate) next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    pub(crate) fn new(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Check if this is a generic container element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Check if this is a native option
    #[inline]
    pub fn is_option(&self) -> bool {
        matches!(self.data, NodeData::Option(_))
    }

    /// Check if this is a native option group
    #[inline]
    pub fn is_optgroup(&self) -> bool {
        matches!(self.data, NodeData::OptGroup(_))
    }

    /// Check if this is a native select control
    #[inline]
    pub fn is_select(&self) -> bool {
        matches!(self.data, NodeData::Select(_))
    }

    /// Get element data if this is a generic element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get option data if this is a native option
    #[inline]
    pub fn as_option(&self) -> Option<&OptionData> {
        match &self.data {
            NodeData::Option(o) => Some(o),
            _ => None,
        }
    }

    /// Get mutable option data
    #[inline]
    pub fn as_option_mut(&mut self) -> Option<&mut OptionData> {
        match &mut self.data {
            NodeData::Option(o) => Some(o),
            _ => None,
        }
    }

    /// Get option group data if this is a native group
    #[inline]
    pub fn as_optgroup(&self) -> Option<&OptGroupData> {
        match &self.data {
            NodeData::OptGroup(g) => Some(g),
            _ => None,
        }
    }

    /// Get select data if this is a native select control
    #[inline]
    pub fn as_select(&self) -> Option<&SelectData> {
        match &self.data {
            NodeData::Select(s) => Some(s),
            _ => None,
        }
    }

    /// Get mutable select data
    #[inline]
    pub fn as_select_mut(&mut self) -> Option<&mut SelectData> {
        match &mut self.data {
            NodeData::Select(s) => Some(s),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// Generic container element (div, span, ...)
    Element(ElementData),
    /// Native single-select control
    Select(SelectData),
    /// Native option group
    OptGroup(OptGroupData),
    /// Native option
    Option(OptionData),
    /// Text content
    Text(String),
}

/// Generic element data: tag, classes, data attributes, plain attributes.
#[derive(Debug, Default)]
pub struct ElementData {
    pub tag: String,
    pub classes: ClassList,
    pub dataset: Dataset,
    attrs: Vec<(String, String)>,
}

impl ElementData {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Get an attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing any existing value
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        for (n, v) in self.attrs.iter_mut() {
            if *n == name {
                *v = value.into();
                return;
            }
        }
        self.attrs.push((name, value.into()));
    }

    /// Remove an attribute, returning whether it was present
    pub fn remove_attr(&mut self, name: &str) -> bool {
        let before = self.attrs.len();
        self.attrs.retain(|(n, _)| n != name);
        self.attrs.len() != before
    }
}

/// Native select control state
#[derive(Debug, Clone, Default)]
pub struct SelectData {
    pub disabled: bool,
}

/// Native option state
#[derive(Debug, Clone, Default)]
pub struct OptionData {
    pub value: String,
    pub text: String,
    pub selected: bool,
    pub disabled: bool,
}

impl OptionData {
    /// Create a new option
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
            ..Default::default()
        }
    }

    /// Mark as selected
    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }

    /// Mark as disabled
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Native option group state
#[derive(Debug, Clone, Default)]
pub struct OptGroupData {
    pub label: String,
    pub disabled: bool,
}

impl OptGroupData {
    /// Create a new group with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
        }
    }

    /// Mark as disabled
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}
