//! Widget instance
//!
//! One attached control: the chrome node ids, the mirror link table, and the
//! interaction state machine. The widget layer turns machine effects into
//! document mutations (classes, opener label, native selection flags).

use csel_dom::{Document, EventKind, ListenerMap, NodeId, SubscriberId};

use crate::Config;
use crate::links::MirrorLinks;
use crate::machine::{Effect, Machine, PanelView};
use crate::registry::WidgetId;
use crate::{WidgetError, WidgetResult, sync};

/// Marker class every container carries, regardless of configuration
pub const CONTAINER_MARKER_CLASS: &str = "customSelect";
/// State class of the selected rendered option
pub const IS_SELECTED_CLASS: &str = "is-selected";
/// State class of the focused rendered option
pub const HAS_FOCUS_CLASS: &str = "has-focus";
/// State class of a disabled container
pub const IS_DISABLED_CLASS: &str = "is-disabled";
/// State class of the opener while the panel is open
pub const IS_ACTIVE_CLASS: &str = "is-active";
/// State class of the open panel
pub const IS_OPEN_CLASS: &str = "is-open";

#[derive(Debug)]
pub(crate) struct Widget {
    pub(crate) id: WidgetId,
    pub(crate) select: NodeId,
    pub(crate) container: NodeId,
    pub(crate) opener: NodeId,
    pub(crate) opener_label: NodeId,
    pub(crate) panel: NodeId,
    pub(crate) config: Config,
    pub(crate) links: MirrorLinks,
    pub(crate) machine: Machine,
}

impl Widget {
    /// Build the chrome around an attached select, mirror its children, and
    /// initialize the machine on the control's current selection.
    pub(crate) fn assemble(
        doc: &mut Document,
        select: NodeId,
        config: Config,
        id: WidgetId,
    ) -> WidgetResult<Self> {
        if !doc.is_select(select) {
            return Err(WidgetError::InvalidArgument(
                "node is not a select control",
            ));
        }
        let Some(host_parent) = doc.parent(select) else {
            return Err(WidgetError::InvalidArgument(
                "select control is not attached to a document",
            ));
        };
        // Validate before creating any chrome so a bad control leaves the
        // document untouched
        sync::validate_control(doc, select)?;

        let container = doc.create_element("div");
        if let Some(el) = doc.get_mut(container).and_then(|n| n.as_element_mut()) {
            el.classes.add(&config.container_class);
            el.classes.add(CONTAINER_MARKER_CLASS);
        }
        let opener = doc.create_element("span");
        if let Some(el) = doc.get_mut(opener).and_then(|n| n.as_element_mut()) {
            el.classes.add(&config.opener_class);
        }
        let opener_label = doc.create_element("span");
        let panel = doc.create_element("div");
        if let Some(el) = doc.get_mut(panel).and_then(|n| n.as_element_mut()) {
            el.classes.add(&config.panel_class);
        }

        // The container takes the select's place; the select moves inside
        doc.replace_child(host_parent, container, select)?;
        doc.append_child(container, opener)?;
        doc.append_child(opener, opener_label)?;
        doc.append_child(container, select)?;
        doc.append_child(container, panel)?;

        let mut links = MirrorLinks::new();
        let initial = sync::build(doc, &mut links, &config, select, panel)?;

        let mut widget = Self {
            id,
            select,
            container,
            opener,
            opener_label,
            panel,
            config,
            links,
            machine: Machine::default(),
        };
        let effects = widget.machine.reconcile(initial);
        widget.apply(doc, &effects);
        widget.set_enabled_chrome(doc, !doc.select_disabled(select));
        Ok(widget)
    }

    pub(crate) fn subscriber(&self) -> SubscriberId {
        SubscriberId(self.id.0)
    }

    /// Apply machine effects to the document
    pub(crate) fn apply(&self, doc: &mut Document, effects: &[Effect]) {
        for effect in effects {
            match *effect {
                Effect::OpenPanel => {
                    add_class(doc, self.opener, IS_ACTIVE_CLASS);
                    add_class(doc, self.panel, IS_OPEN_CLASS);
                    if self.config.scroll_to_selected {
                        if let Some(selected) = self.machine.selected() {
                            let _ = doc.scroll_into_view(selected);
                        }
                    }
                }
                Effect::ClosePanel => {
                    remove_class(doc, self.opener, IS_ACTIVE_CLASS);
                    remove_class(doc, self.panel, IS_OPEN_CLASS);
                }
                Effect::MoveFocus { from, to } => {
                    if let Some(from) = from {
                        remove_class(doc, from, HAS_FOCUS_CLASS);
                    }
                    add_class(doc, to, HAS_FOCUS_CLASS);
                }
                Effect::MoveSelection { from, to } => {
                    if let Some(from) = from {
                        remove_class(doc, from, IS_SELECTED_CLASS);
                    }
                    add_class(doc, to, IS_SELECTED_CLASS);
                    let text = doc.text_content(to);
                    let _ = doc.set_text_content(self.opener_label, &text);
                }
                Effect::CommitNative { rendered } => {
                    if let Some(native) = self.links.native(rendered) {
                        let _ = doc.set_selected_option(self.select, native);
                    }
                }
            }
        }
    }

    /// Register the user-input subscriptions: document-wide click, panel
    /// mouseover, container keydown.
    pub(crate) fn register_interactive(&self, doc: &Document, listeners: &mut ListenerMap) {
        listeners.add(doc.root(), EventKind::Click, self.subscriber());
        listeners.add(self.panel, EventKind::MouseOver, self.subscriber());
        listeners.add(self.container, EventKind::KeyDown, self.subscriber());
    }

    pub(crate) fn unregister_interactive(&self, doc: &Document, listeners: &mut ListenerMap) {
        listeners.remove(doc.root(), EventKind::Click, self.subscriber());
        listeners.remove(self.panel, EventKind::MouseOver, self.subscriber());
        listeners.remove(self.container, EventKind::KeyDown, self.subscriber());
    }

    /// The change subscription outlives disablement: the control stays
    /// authoritative even while refusing user input.
    pub(crate) fn register_change(&self, listeners: &mut ListenerMap) {
        listeners.add(self.select, EventKind::Change, self.subscriber());
    }

    /// Disabled visual state and keyboard focusability
    pub(crate) fn set_enabled_chrome(&self, doc: &mut Document, enabled: bool) {
        if enabled {
            remove_class(doc, self.container, IS_DISABLED_CLASS);
            if let Some(el) = doc.get_mut(self.opener).and_then(|n| n.as_element_mut()) {
                el.set_attr("tabindex", "0");
            }
        } else {
            add_class(doc, self.container, IS_DISABLED_CLASS);
            if let Some(el) = doc.get_mut(self.opener).and_then(|n| n.as_element_mut()) {
                el.remove_attr("tabindex");
            }
        }
    }

    /// Resolve a pointer target inside the panel to the rendered option it
    /// lands on, if any.
    pub(crate) fn rendered_option_at(&self, doc: &Document, target: NodeId) -> Option<NodeId> {
        if !doc.contains(self.panel, target) {
            return None;
        }
        let mut cur = target;
        while cur != self.panel {
            if let Some(native) = self.links.native(cur) {
                return doc.is_option(native).then_some(cur);
            }
            cur = doc.parent(cur)?;
        }
        None
    }
}

/// Rendered option order and text, backed by the live document
pub(crate) struct DocPanelView<'a> {
    pub(crate) doc: &'a Document,
    pub(crate) links: &'a MirrorLinks,
    pub(crate) select: NodeId,
}

impl PanelView for DocPanelView<'_> {
    fn options(&self) -> Vec<NodeId> {
        self.doc
            .select_options(self.select)
            .into_iter()
            .filter_map(|native| self.links.rendered(native))
            .collect()
    }

    fn text_of(&self, rendered: NodeId) -> String {
        self.doc.text_content(rendered)
    }
}

fn add_class(doc: &mut Document, node: NodeId, class: &str) {
    if let Some(el) = doc.get_mut(node).and_then(|n| n.as_element_mut()) {
        el.classes.add(class);
    }
}

fn remove_class(doc: &mut Document, node: NodeId, class: &str) {
    if let Some(el) = doc.get_mut(node).and_then(|n| n.as_element_mut()) {
        el.classes.remove(class);
    }
}
