//! csel widget engine
//!
//! Renders a styled substitute for a native single-select control while the
//! native control stays authoritative for form submission. The engine keeps
//! the native option tree and its rendered mirror in lockstep across user
//! interaction and programmatic mutation, and runs the open/focus/select
//! interaction state machine on top.

mod config;
mod links;
mod machine;
mod page;
mod registry;
mod search;
mod sync;
mod widget;

pub use config::Config;
pub use links::MirrorLinks;
pub use machine::{Effect, InputEvent, Machine, MachineState, PanelView};
pub use page::{Page, WidgetParts};
pub use registry::WidgetId;
pub use search::{SEARCH_RESET_MS, SearchBuffer};
pub use widget::{
    CONTAINER_MARKER_CLASS, HAS_FOCUS_CLASS, IS_ACTIVE_CLASS, IS_DISABLED_CLASS, IS_OPEN_CLASS,
    IS_SELECTED_CLASS,
};

/// Result type for widget operations
pub type WidgetResult<T> = Result<T, WidgetError>;

/// Widget errors. All misuse surfaces as one developer-facing kind, raised
/// synchronously before either tree is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

impl From<csel_dom::DomError> for WidgetError {
    fn from(_: csel_dom::DomError) -> Self {
        WidgetError::InvalidArgument("host document rejected the mutation")
    }
}
