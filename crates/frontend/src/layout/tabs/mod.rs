//! Tab bar, tab links and tab panels of a tabbed layout.
//!
//! A link and its panel read the same active-id signal, see
//! [`crate::layout::coordinator`].

pub mod panel;
pub mod tab_bar;
pub mod tab_link;

pub use panel::Panel;
pub use tab_bar::TabBar;
pub use tab_link::TabLink;

use leptos::prelude::*;

/// Whether pane `id` is the active one, derived from the layout's active id.
pub fn pane_active(active: Signal<Option<String>>, id: String) -> Signal<bool> {
    Signal::derive(move || active.with(|current| current.as_deref() == Some(id.as_str())))
}
