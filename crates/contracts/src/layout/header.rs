use serde::{Deserialize, Serialize};

use super::navigation::NavConfig;
use crate::shared::ClassList;

pub const HEADER_CLASS: &str = "mdl-layout__header";
pub const HEADER_ROW_CLASS: &str = "mdl-layout__header-row";
pub const ICON_CLASS: &str = "mdl-layout-icon";
pub const TITLE_CLASS: &str = "mdl-layout-title";
pub const SPACER_CLASS: &str = "mdl-layout-spacer";

// ============================================================================
// Header
// ============================================================================

/// `header.mdl-layout__header` and its display modifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Text of the `mdl-layout-icon` block, usually a material icon name.
    pub icon: Option<String>,
    pub row: Option<HeaderRowConfig>,
    pub scroll: bool,
    pub waterfall: bool,
    pub waterfall_hide_top: bool,
    pub transparent: bool,
    pub seamed: bool,
}

impl HeaderConfig {
    pub fn classes(&self) -> ClassList {
        ClassList::new(HEADER_CLASS)
            .with("mdl-layout__header--scroll", self.scroll)
            .with("mdl-layout__header--waterfall", self.waterfall)
            .with(
                "mdl-layout__header--waterfall-hide-top",
                self.waterfall_hide_top,
            )
            .with("mdl-layout__header--transparent", self.transparent)
            .with("mdl-layout__header--seamed", self.seamed)
    }
}

// ============================================================================
// Header row
// ============================================================================

/// One `mdl-layout__header-row`: title, optional spacer, then navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderRowConfig {
    pub title: Option<TitleConfig>,
    pub add_spacer: bool,
    pub nav: Option<NavConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleConfig {
    pub text: String,
}

impl TitleConfig {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
