use serde::{Deserialize, Serialize};

use super::IS_ACTIVE;
use crate::shared::ClassList;

pub const TAB_BAR_CLASS: &str = "mdl-layout__tab-bar";
pub const TAB_CLASS: &str = "mdl-layout__tab";
pub const TAB_PANEL_CLASS: &str = "mdl-layout__tab-panel";

/// Tabbed mode of a layout: the panes in tab order and the pane shown first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    pub panes: Vec<PaneConfig>,
    /// Pane active before any click. `None` leaves every tab inactive.
    pub active: Option<String>,
    /// Lets the host drive tab switching instead of the MDL script.
    pub manual_switch: bool,
}

impl TabsConfig {
    pub fn new(panes: impl IntoIterator<Item = PaneConfig>) -> Self {
        Self {
            panes: panes.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn with_active(mut self, id: impl Into<String>) -> Self {
        self.active = Some(id.into());
        self
    }

    pub fn pane_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.panes.iter().map(|pane| pane.id.as_str())
    }

    pub fn tab_bar_classes(&self) -> ClassList {
        ClassList::new(TAB_BAR_CLASS).with("mdl-layout__tab-manual-switch", self.manual_switch)
    }
}

/// A content section selected by its tab. `id` is unique within a layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaneConfig {
    pub id: String,
    pub name: String,
}

impl PaneConfig {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// `<pane id>-bar`, the element id of a pane's tab link.
pub fn tab_link_id(pane_id: &str) -> String {
    format!("{}-bar", pane_id)
}

pub fn tab_link_classes(active: bool) -> ClassList {
    ClassList::new(TAB_CLASS).with(IS_ACTIVE, active)
}

pub fn tab_panel_classes(active: bool) -> ClassList {
    ClassList::new(TAB_PANEL_CLASS).with(IS_ACTIVE, active)
}
