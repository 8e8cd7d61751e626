//! Native select semantics
//!
//! Option traversal, selection flags, and value resolution for a select
//! control living in the document tree. The control is authoritative: the
//! widget engine mirrors what these operations report.
//!
//! Programmatic mutation here never synthesizes a change notification; a
//! change is an input the embedder dispatches (see events).

use crate::document::{Document, DomError, DomResult};
use crate::NodeId;

impl Document {
    /// All options of a select in document order, descending into groups.
    pub fn select_options(&self, select: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_options(select, &mut out);
        out
    }

    fn collect_options(&self, parent: NodeId, out: &mut Vec<NodeId>) {
        for child in self.children(parent) {
            let Some(node) = self.get(child) else { continue };
            if node.is_option() {
                out.push(child);
            } else if node.is_optgroup() {
                self.collect_options(child, out);
            }
        }
    }

    /// The first option carrying the selected flag
    pub fn selected_option(&self, select: NodeId) -> Option<NodeId> {
        self.select_options(select)
            .into_iter()
            .find(|&o| self.node(o).as_option().is_some_and(|d| d.selected))
    }

    /// The option the control reports as selected: the first flagged one,
    /// falling back to the first option (the control's natural default).
    pub fn effective_selected_option(&self, select: NodeId) -> Option<NodeId> {
        let options = self.select_options(select);
        options
            .iter()
            .copied()
            .find(|&o| self.node(o).as_option().is_some_and(|d| d.selected))
            .or_else(|| options.first().copied())
    }

    /// Index of the effectively selected option in document order
    pub fn selected_index(&self, select: NodeId) -> Option<usize> {
        let effective = self.effective_selected_option(select)?;
        self.select_options(select)
            .iter()
            .position(|&o| o == effective)
    }

    /// Current value of the control, empty when it has no options
    pub fn select_value(&self, select: NodeId) -> String {
        self.effective_selected_option(select)
            .and_then(|o| self.node(o).as_option())
            .map(|d| d.value.clone())
            .unwrap_or_default()
    }

    /// Resolve a value to an option (falling back to the first option when no
    /// value matches), flag it as the selection, and return it. Returns None
    /// when the control has no options.
    pub fn set_select_value(&mut self, select: NodeId, value: &str) -> Option<NodeId> {
        let options = self.select_options(select);
        let target = options
            .iter()
            .copied()
            .find(|&o| self.node(o).as_option().is_some_and(|d| d.value == value))
            .or_else(|| options.first().copied())?;
        for o in options {
            if let Some(data) = self.get_mut(o).and_then(|n| n.as_option_mut()) {
                data.selected = o == target;
            }
        }
        Some(target)
    }

    /// Exclusively flag one option of a single-select control as selected.
    pub fn set_selected_option(&mut self, select: NodeId, option: NodeId) -> DomResult<()> {
        if !self.contains(select, option) {
            return Err(DomError::NotAChild);
        }
        if self.get(option).is_none_or(|n| !n.is_option()) {
            return Err(DomError::NotFound);
        }
        for o in self.select_options(select) {
            if let Some(data) = self.get_mut(o).and_then(|n| n.as_option_mut()) {
                data.selected = o == option;
            }
        }
        Ok(())
    }

    /// Disabled state of the control
    pub fn select_disabled(&self, select: NodeId) -> bool {
        self.get(select)
            .and_then(|n| n.as_select())
            .is_some_and(|d| d.disabled)
    }

    /// Set the control's disabled state
    pub fn set_select_disabled(&mut self, select: NodeId, disabled: bool) -> DomResult<()> {
        match self.get_mut(select).and_then(|n| n.as_select_mut()) {
            Some(data) => {
                data.disabled = disabled;
                Ok(())
            }
            None => Err(DomError::NotFound),
        }
    }

    /// Display text of an option
    pub fn option_text(&self, option: NodeId) -> Option<&str> {
        self.get(option).and_then(|n| n.as_option()).map(|d| d.text.as_str())
    }

    /// Value string of an option
    pub fn option_value(&self, option: NodeId) -> Option<&str> {
        self.get(option)
            .and_then(|n| n.as_option())
            .map(|d| d.value.as_str())
    }

    /// Check if a node is a native option
    pub fn is_option(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(|n| n.is_option())
    }

    /// Check if a node is a native option group
    pub fn is_optgroup(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(|n| n.is_optgroup())
    }

    /// Check if a node is a native select control
    pub fn is_select(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(|n| n.is_select())
    }
}
