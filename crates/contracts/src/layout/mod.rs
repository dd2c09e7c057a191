//! Configuration of the Material Design Lite layout components.
//!
//! Every struct here is plain data: the frontend crate renders it, hosts may
//! build it in code or ship it as JSON (`LayoutConfig::from_json`).

pub mod drawer;
pub mod error;
pub mod header;
pub mod layout;
pub mod navigation;
pub mod tabs;

pub use drawer::DrawerConfig;
pub use error::ConfigError;
pub use header::{HeaderConfig, HeaderRowConfig, TitleConfig};
pub use layout::LayoutConfig;
pub use navigation::{NavConfig, NavLinkConfig};
pub use tabs::{PaneConfig, TabsConfig};

/// Shows an element only on small screens.
pub const SMALL_SCREEN_ONLY: &str = "mdl-layout--small-screen-only";
/// Shows an element only on large screens.
pub const LARGE_SCREEN_ONLY: &str = "mdl-layout--large-screen-only";

/// Marks both halves of the selected tab/panel pair.
pub const IS_ACTIVE: &str = "is-active";
