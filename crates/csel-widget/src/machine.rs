//! Interaction state machine
//!
//! Single source of truth for open/closed, focused option, and selected
//! option. Input arrives as tagged events; the machine updates its state and
//! returns the side effects the widget layer must apply to the document.
//! Selection change and native commit are separate effects so the control's
//! own change notification can re-enter the selection path without
//! re-triggering the commit.
//!
//! Focused and selected are rendered-option handles and are present whenever
//! the control has at least one option.

use csel_dom::{Key, NodeId};

use crate::search::SearchBuffer;

/// Option order and display text, as the machine sees the panel
pub trait PanelView {
    /// Rendered options in native document order
    fn options(&self) -> Vec<NodeId>;
    /// Display text of a rendered option
    fn text_of(&self, rendered: NodeId) -> String;
}

/// Tagged input events feeding the machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The opener was activated (click)
    Activate,
    /// A rendered option was clicked
    OptionClicked(NodeId),
    /// The pointer moved over a rendered option
    OptionHovered(NodeId),
    /// A key was pressed inside the container
    Key { key: Key, at_ms: u64 },
    /// A click landed outside the widget's container
    OutsideClick,
    /// The native control reports a new selection
    NativeChanged(NodeId),
}

/// Side effects for the widget layer to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Show the panel, apply the open/active visual state
    OpenPanel,
    /// Hide the panel, clear the open/active visual state
    ClosePanel,
    /// Move the focus marker between rendered options
    MoveFocus { from: Option<NodeId>, to: NodeId },
    /// Move the selection marker and update the opener label
    MoveSelection { from: Option<NodeId>, to: NodeId },
    /// Flag the native counterpart of a rendered option as selected
    CommitNative { rendered: NodeId },
}

/// Machine state snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MachineState {
    pub open: bool,
    pub focused: Option<NodeId>,
    pub selected: Option<NodeId>,
}

/// The interaction state machine of one widget instance
#[derive(Debug, Default)]
pub struct Machine {
    state: MachineState,
    search: SearchBuffer,
}

impl Machine {
    /// Create a closed machine focused and selected on the initial option
    pub fn new(initial: Option<NodeId>) -> Self {
        Self {
            state: MachineState {
                open: false,
                focused: initial,
                selected: initial,
            },
            search: SearchBuffer::new(),
        }
    }

    pub fn state(&self) -> MachineState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.open
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.state.focused
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.state.selected
    }

    /// Feed one input event, returning the effects to apply
    pub fn handle(&mut self, event: InputEvent, view: &dyn PanelView) -> Vec<Effect> {
        tracing::trace!(?event, open = self.state.open, "machine input");
        match event {
            InputEvent::Activate => {
                if self.state.open {
                    self.close()
                } else {
                    self.open()
                }
            }
            InputEvent::OptionClicked(rendered) => self.commit(rendered),
            InputEvent::OptionHovered(rendered) => {
                if self.state.open {
                    self.focus(rendered).into_iter().collect()
                } else {
                    Vec::new()
                }
            }
            InputEvent::OutsideClick => self.close(),
            InputEvent::NativeChanged(rendered) => self.select(rendered),
            InputEvent::Key { key, at_ms } => self.handle_key(key, at_ms, view),
        }
    }

    /// Transition to open. Idempotent; cross-instance exclusivity is the
    /// caller's concern.
    pub fn open(&mut self) -> Vec<Effect> {
        if self.state.open {
            return Vec::new();
        }
        self.state.open = true;
        vec![Effect::OpenPanel]
    }

    /// Transition to closed, snapping focus back to the selection
    pub fn close(&mut self) -> Vec<Effect> {
        if !self.state.open {
            return Vec::new();
        }
        self.state.open = false;
        let mut effects = Vec::new();
        if self.state.focused != self.state.selected {
            if let Some(selected) = self.state.selected {
                effects.extend(self.focus(selected));
            }
        }
        effects.push(Effect::ClosePanel);
        effects
    }

    /// Drop focus/selection handles that are no longer alive (after a
    /// mutation removed their options). Returns whether anything was dropped.
    pub fn prune(&mut self, alive: impl Fn(NodeId) -> bool) -> bool {
        let mut changed = false;
        if self.state.focused.is_some_and(|r| !alive(r)) {
            self.state.focused = None;
            changed = true;
        }
        if self.state.selected.is_some_and(|r| !alive(r)) {
            self.state.selected = None;
            changed = true;
        }
        changed
    }

    /// Re-point focus and selection at the control's current selection
    /// after a mutation. No native commit: the control already reports it.
    pub fn reconcile(&mut self, target: Option<NodeId>) -> Vec<Effect> {
        match target {
            Some(rendered) => self.select(rendered),
            None => {
                self.state.focused = None;
                self.state.selected = None;
                Vec::new()
            }
        }
    }

    fn handle_key(&mut self, key: Key, at_ms: u64, view: &dyn PanelView) -> Vec<Effect> {
        if !self.state.open {
            return match key {
                Key::ArrowUp | Key::ArrowDown | Key::Space => self.open(),
                _ => Vec::new(),
            };
        }
        match key {
            Key::Enter | Key::Space => match self.state.focused {
                Some(focused) => self.commit(focused),
                None => Vec::new(),
            },
            Key::Escape => self.close(),
            Key::ArrowUp => self.step(view, -1),
            Key::ArrowDown => self.step(view, 1),
            Key::Char(c) if c.is_ascii_alphanumeric() => self.typeahead(view, c, at_ms),
            Key::Char(_) => Vec::new(),
        }
    }

    /// Choose an option: move selection, commit the native side, close
    fn commit(&mut self, rendered: NodeId) -> Vec<Effect> {
        let mut effects = self.select(rendered);
        effects.push(Effect::CommitNative { rendered });
        effects.extend(self.close());
        effects
    }

    /// Move focus and selection markers, without the native commit
    fn select(&mut self, to: NodeId) -> Vec<Effect> {
        let mut effects: Vec<Effect> = self.focus(to).into_iter().collect();
        if self.state.selected != Some(to) {
            let from = self.state.selected.replace(to);
            effects.push(Effect::MoveSelection { from, to });
        }
        effects
    }

    fn focus(&mut self, to: NodeId) -> Option<Effect> {
        if self.state.focused == Some(to) {
            return None;
        }
        let from = self.state.focused.replace(to);
        Some(Effect::MoveFocus { from, to })
    }

    /// Move focus to the neighbor option in native order; no-op at the ends
    fn step(&mut self, view: &dyn PanelView, delta: isize) -> Vec<Effect> {
        let Some(focused) = self.state.focused else {
            return Vec::new();
        };
        let order = view.options();
        let Some(idx) = order.iter().position(|&r| r == focused) else {
            return Vec::new();
        };
        let Some(&next) = idx.checked_add_signed(delta).and_then(|i| order.get(i)) else {
            return Vec::new();
        };
        self.focus(next).into_iter().collect()
    }

    /// Append to the search buffer and focus the first prefix match
    fn typeahead(&mut self, view: &dyn PanelView, c: char, at_ms: u64) -> Vec<Effect> {
        self.search.push(c, at_ms);
        let target = view
            .options()
            .into_iter()
            .find(|&r| self.search.matches(&view.text_of(r)));
        match target {
            Some(rendered) => self.focus(rendered).into_iter().collect(),
            None => Vec::new(),
        }
    }
}
