//! Page facade
//!
//! Owns the host document, the live-instance registry, and the listener
//! registry, and exposes the external operations: attach, open/close, value,
//! disabled, append/insert/remove/empty, destroy. All user input and change
//! notifications enter through dispatch; routing is decided by containment
//! checks against each widget's chrome, never by subscription order.

use csel_dom::{Document, DomInput, ListenerMap, NodeId};
use tracing::debug;

use crate::machine::{Effect, InputEvent};
use crate::registry::{Registry, WidgetId};
use crate::widget::{DocPanelView, Widget};
use crate::{Config, WidgetError, WidgetResult, sync};

const UNKNOWN_WIDGET: WidgetError =
    WidgetError::InvalidArgument("unknown or destroyed widget instance");

/// Chrome and control node ids of an attached widget, for external styling
/// and inspection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetParts {
    pub container: NodeId,
    pub opener: NodeId,
    pub panel: NodeId,
    pub select: NodeId,
}

/// The widget engine's host: document plus every attached widget
#[derive(Debug)]
pub struct Page {
    doc: Document,
    registry: Registry,
    listeners: ListenerMap,
}

impl Page {
    /// Take ownership of a prepared document
    pub fn new(doc: Document) -> Self {
        Self {
            doc,
            registry: Registry::new(),
            listeners: ListenerMap::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Mutable document access for the embedder (building native nodes to
    /// insert, external value writes). Structural changes to an attached
    /// control must go through the facade operations; external value writes
    /// are announced by dispatching a change input.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    /// Number of live widget instances
    pub fn widget_count(&self) -> usize {
        self.registry.len()
    }

    /// The instance currently holding the open panel
    pub fn active_open(&self) -> Option<WidgetId> {
        self.registry.active_open()
    }

    //
    // Lifecycle
    //

    /// Build a widget around an attached select control
    pub fn attach(&mut self, select: NodeId, config: Config) -> WidgetResult<WidgetId> {
        if self.registry.iter().any(|w| w.select == select) {
            return Err(WidgetError::InvalidArgument(
                "control already has a widget attached",
            ));
        }
        let id = self.registry.next_id();
        let widget = Widget::assemble(&mut self.doc, select, config, id)?;
        widget.register_change(&mut self.listeners);
        if !self.doc.select_disabled(select) {
            widget.register_interactive(&self.doc, &mut self.listeners);
        }
        self.registry.insert(widget);
        debug!(widget = id.0, "attached widget");
        Ok(id)
    }

    /// Tear a widget down: drop all links and subscriptions, restore the
    /// select to its original document position, discard the rendered tree.
    /// The id is invalid afterwards; further calls with it are rejected.
    pub fn destroy(&mut self, id: WidgetId) -> WidgetResult<()> {
        let mut widget = self.registry.remove(id).ok_or(UNKNOWN_WIDGET)?;
        self.listeners.remove_subscriber(widget.subscriber());
        sync::restore_native(
            &mut self.doc,
            &mut widget.links,
            widget.select,
            widget.container,
        )?;
        debug!(widget = id.0, "destroyed widget");
        Ok(())
    }

    //
    // Input dispatch
    //

    /// Feed one raw input to every subscribed widget
    pub fn dispatch(&mut self, input: DomInput) {
        for (id, event) in self.route(input) {
            self.deliver(id, event);
        }
    }

    /// Translate raw input into tagged machine events per widget
    fn route(&self, input: DomInput) -> Vec<(WidgetId, InputEvent)> {
        let mut out = Vec::new();
        for (scope, sub) in self.listeners.entries(input.kind()) {
            let id = WidgetId(sub.0);
            let Some(widget) = self.registry.get(id) else {
                continue;
            };
            match input {
                DomInput::Click { target } => {
                    if scope != self.doc.root() {
                        continue;
                    }
                    if self.doc.contains(widget.opener, target) {
                        out.push((id, InputEvent::Activate));
                    } else if let Some(rendered) = widget.rendered_option_at(&self.doc, target) {
                        out.push((id, InputEvent::OptionClicked(rendered)));
                    } else if !self.doc.contains(widget.container, target) {
                        out.push((id, InputEvent::OutsideClick));
                    }
                    // Clicks inside the container that hit neither opener
                    // nor option are ignored
                }
                DomInput::MouseOver { target } => {
                    if scope != widget.panel {
                        continue;
                    }
                    if let Some(rendered) = widget.rendered_option_at(&self.doc, target) {
                        out.push((id, InputEvent::OptionHovered(rendered)));
                    }
                }
                DomInput::KeyDown { target, key, at_ms } => {
                    if scope != widget.container || !self.doc.contains(widget.container, target) {
                        continue;
                    }
                    out.push((id, InputEvent::Key { key, at_ms }));
                }
                DomInput::Change { select } => {
                    if scope != select || widget.select != select {
                        continue;
                    }
                    let Some(rendered) = self
                        .doc
                        .effective_selected_option(select)
                        .and_then(|native| widget.links.rendered(native))
                    else {
                        continue;
                    };
                    out.push((id, InputEvent::NativeChanged(rendered)));
                }
            }
        }
        out
    }

    /// Run one tagged event through a widget's machine and apply the effects
    fn deliver(&mut self, id: WidgetId, event: InputEvent) {
        let effects = {
            let Some(widget) = self.registry.get_mut(id) else {
                return;
            };
            let view = DocPanelView {
                doc: &self.doc,
                links: &widget.links,
                select: widget.select,
            };
            widget.machine.handle(event, &view)
        };
        self.apply_effects(id, &effects);
    }

    /// Apply effects, keeping the single-open-instance slot consistent
    fn apply_effects(&mut self, id: WidgetId, effects: &[Effect]) {
        if effects.iter().any(|e| matches!(e, Effect::OpenPanel)) {
            if let Some(prev) = self.registry.active_open() {
                if prev != id {
                    self.force_close(prev);
                }
            }
            self.registry.set_active(id);
        }
        if effects.iter().any(|e| matches!(e, Effect::ClosePanel)) {
            self.registry.clear_active(id);
        }
        let Self { doc, registry, .. } = self;
        if let Some(widget) = registry.get(id) {
            widget.apply(doc, effects);
        }
    }

    /// Close another instance so a new one can open
    fn force_close(&mut self, id: WidgetId) {
        let effects = match self.registry.get_mut(id) {
            Some(widget) => widget.machine.close(),
            None => return,
        };
        self.registry.clear_active(id);
        let Self { doc, registry, .. } = self;
        if let Some(widget) = registry.get(id) {
            widget.apply(doc, &effects);
        }
    }

    //
    // State facade
    //

    /// Open the panel. Idempotent, except that any other open instance is
    /// closed first. A disabled widget stays closed.
    pub fn open(&mut self, id: WidgetId) -> WidgetResult<()> {
        let select = self.widget(id)?.select;
        if self.doc.select_disabled(select) {
            return Ok(());
        }
        let effects = match self.registry.get_mut(id) {
            Some(widget) => widget.machine.open(),
            None => return Err(UNKNOWN_WIDGET),
        };
        self.apply_effects(id, &effects);
        Ok(())
    }

    /// Close the panel. Idempotent.
    pub fn close(&mut self, id: WidgetId) -> WidgetResult<()> {
        let effects = match self.registry.get_mut(id) {
            Some(widget) => widget.machine.close(),
            None => return Err(UNKNOWN_WIDGET),
        };
        self.apply_effects(id, &effects);
        Ok(())
    }

    pub fn is_open(&self, id: WidgetId) -> WidgetResult<bool> {
        Ok(self.widget(id)?.machine.is_open())
    }

    /// The control's current value
    pub fn value(&self, id: WidgetId) -> WidgetResult<String> {
        let select = self.widget(id)?.select;
        Ok(self.doc.select_value(select))
    }

    /// Resolve a value to an option (falling back to the first option) and
    /// perform a full selection-change commit.
    pub fn set_value(&mut self, id: WidgetId, value: &str) -> WidgetResult<()> {
        let select = self.widget(id)?.select;
        let Some(chosen) = self.doc.set_select_value(select, value) else {
            return Ok(());
        };
        let Some(rendered) = self.widget(id)?.links.rendered(chosen) else {
            return Err(WidgetError::InvalidArgument(
                "selected option has no mirror",
            ));
        };
        self.deliver(id, InputEvent::NativeChanged(rendered));
        Ok(())
    }

    pub fn disabled(&self, id: WidgetId) -> WidgetResult<bool> {
        let select = self.widget(id)?.select;
        Ok(self.doc.select_disabled(select))
    }

    /// Enter or leave the disabled state. Disabling removes the user-input
    /// subscriptions and keyboard focusability, and closes the panel first;
    /// the change subscription stays so external value changes still
    /// reconcile. Enabling restores input and focusability but leaves the
    /// widget closed.
    pub fn set_disabled(&mut self, id: WidgetId, disabled: bool) -> WidgetResult<()> {
        let select = self.widget(id)?.select;
        if self.doc.select_disabled(select) == disabled {
            return Ok(());
        }
        if disabled {
            let effects = match self.registry.get_mut(id) {
                Some(widget) => widget.machine.close(),
                None => return Err(UNKNOWN_WIDGET),
            };
            self.apply_effects(id, &effects);
        }
        self.doc.set_select_disabled(select, disabled)?;
        let Self {
            doc,
            registry,
            listeners,
        } = self;
        let widget = registry.get(id).ok_or(UNKNOWN_WIDGET)?;
        widget.set_enabled_chrome(doc, !disabled);
        if disabled {
            widget.unregister_interactive(doc, listeners);
        } else {
            widget.register_interactive(doc, listeners);
        }
        debug!(widget = id.0, disabled, "toggled disabled state");
        Ok(())
    }

    //
    // Mutation facade
    //

    /// Append native option/group nodes (and their mirrors) under the
    /// control or one of its groups
    pub fn append(
        &mut self,
        id: WidgetId,
        nodes: &[NodeId],
        target: Option<NodeId>,
    ) -> WidgetResult<Vec<NodeId>> {
        let widget = self.registry.get_mut(id).ok_or(UNKNOWN_WIDGET)?;
        let out = sync::append(
            &mut self.doc,
            &mut widget.links,
            &widget.config,
            widget.select,
            widget.panel,
            nodes,
            target,
        )?;
        self.reconcile_selection(id);
        Ok(out)
    }

    /// Insert a native node (and its mirror) before an attached reference
    pub fn insert_before(
        &mut self,
        id: WidgetId,
        node: NodeId,
        reference: NodeId,
    ) -> WidgetResult<NodeId> {
        let widget = self.registry.get_mut(id).ok_or(UNKNOWN_WIDGET)?;
        let out = sync::insert_before(
            &mut self.doc,
            &mut widget.links,
            &widget.config,
            node,
            reference,
        )?;
        self.reconcile_selection(id);
        Ok(out)
    }

    /// Remove an attached native node and its mirror from both trees
    pub fn remove(&mut self, id: WidgetId, node: NodeId) -> WidgetResult<NodeId> {
        let widget = self.registry.get_mut(id).ok_or(UNKNOWN_WIDGET)?;
        let out = sync::remove(&mut self.doc, &mut widget.links, node)?;
        self.reconcile_selection(id);
        Ok(out)
    }

    /// Remove every native option/group and its mirror, returning the
    /// removed native nodes in original order
    pub fn empty(&mut self, id: WidgetId) -> WidgetResult<Vec<NodeId>> {
        let widget = self.registry.get_mut(id).ok_or(UNKNOWN_WIDGET)?;
        let out = sync::empty(&mut self.doc, &mut widget.links, widget.select)?;
        self.reconcile_selection(id);
        Ok(out)
    }

    //
    // Inspection
    //

    /// Chrome and control node ids
    pub fn parts(&self, id: WidgetId) -> WidgetResult<WidgetParts> {
        let widget = self.widget(id)?;
        Ok(WidgetParts {
            container: widget.container,
            opener: widget.opener,
            panel: widget.panel,
            select: widget.select,
        })
    }

    /// The configuration the widget was built with
    pub fn config(&self, id: WidgetId) -> WidgetResult<&Config> {
        Ok(&self.widget(id)?.config)
    }

    fn widget(&self, id: WidgetId) -> WidgetResult<&Widget> {
        self.registry.get(id).ok_or(UNKNOWN_WIDGET)
    }

    /// After a mutation, re-point focus and selection at the control's
    /// effective selection; an optionless control clears both and blanks
    /// the opener label.
    fn reconcile_selection(&mut self, id: WidgetId) {
        let (effects, opener_label, clear_label) = {
            let Some(widget) = self.registry.get_mut(id) else {
                return;
            };
            let opener_label = widget.opener_label;
            let Widget {
                machine,
                links,
                select,
                ..
            } = widget;
            let pruned = machine.prune(|r| links.native(r).is_some());
            let target = self
                .doc
                .effective_selected_option(*select)
                .and_then(|native| links.rendered(native));
            let effects = if pruned || machine.selected() != target {
                machine.reconcile(target)
            } else {
                Vec::new()
            };
            (effects, opener_label, target.is_none())
        };
        self.apply_effects(id, &effects);
        if clear_label {
            let _ = self.doc.set_text_content(opener_label, "");
        }
    }
}
