//! Live instance registry
//!
//! Process-wide table of widget instances plus a single active-open slot.
//! The at-most-one-open invariant is enforced against this slot at the
//! moment of opening, not by scanning the document, so it self-heals when
//! an open instance is destroyed.

use std::collections::HashMap;

use crate::widget::Widget;

/// Opaque widget instance handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(pub(crate) u64);

/// Registry of live widget instances
#[derive(Debug, Default)]
pub(crate) struct Registry {
    widgets: HashMap<WidgetId, Widget>,
    active_open: Option<WidgetId>,
    next_id: u64,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn next_id(&mut self) -> WidgetId {
        let id = WidgetId(self.next_id);
        self.next_id += 1;
        id
    }

    pub(crate) fn insert(&mut self, widget: Widget) {
        self.widgets.insert(widget.id, widget);
    }

    pub(crate) fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.widgets.get_mut(&id)
    }

    /// Remove an instance, vacating the active slot if it held it
    pub(crate) fn remove(&mut self, id: WidgetId) -> Option<Widget> {
        if self.active_open == Some(id) {
            self.active_open = None;
        }
        self.widgets.remove(&id)
    }

    /// The instance currently holding the open panel, if any
    pub(crate) fn active_open(&self) -> Option<WidgetId> {
        self.active_open
    }

    pub(crate) fn set_active(&mut self, id: WidgetId) {
        self.active_open = Some(id);
    }

    pub(crate) fn clear_active(&mut self, id: WidgetId) {
        if self.active_open == Some(id) {
            self.active_open = None;
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Widget> {
        self.widgets.values()
    }

    pub(crate) fn len(&self) -> usize {
        self.widgets.len()
    }
}
