use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::drawer::DrawerConfig;
use super::error::ConfigError;
use super::header::HeaderConfig;
use super::tabs::TabsConfig;
use super::LARGE_SCREEN_ONLY;
use crate::shared::ClassList;

pub const LAYOUT_CLASS: &str = "mdl-layout";
pub const CONTENT_CLASS: &str = "mdl-layout__content";

/// Root `div.mdl-layout`.
///
/// Setting `tabs` switches the layout to tabbed mode: the header gains a tab
/// bar and the content area holds one panel per pane.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Adds `mdl-js-layout` so the MDL script upgrades the element.
    pub js: bool,
    pub fixed_drawer: bool,
    pub fixed_header: bool,
    pub no_drawer_button: bool,
    pub no_desktop_drawer_button: bool,
    pub large_screen_only: bool,
    pub header: Option<HeaderConfig>,
    pub drawer: Option<DrawerConfig>,
    pub tabs: Option<TabsConfig>,
}

impl LayoutConfig {
    /// Parses a JSON layout and validates it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: LayoutConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn is_tabbed(&self) -> bool {
        self.tabs.is_some()
    }

    /// Header to render. Tabbed layouts always get one, since it carries the tab bar.
    pub fn effective_header(&self) -> Option<HeaderConfig> {
        match (&self.header, self.is_tabbed()) {
            (Some(header), _) => Some(header.clone()),
            (None, true) => Some(HeaderConfig::default()),
            (None, false) => None,
        }
    }

    pub fn classes(&self) -> ClassList {
        ClassList::new(LAYOUT_CLASS)
            .with("mdl-js-layout", self.js)
            .with("mdl-layout--fixed-drawer", self.fixed_drawer)
            .with("mdl-layout--fixed-header", self.fixed_header)
            .with("mdl-layout--no-drawer-button", self.no_drawer_button)
            .with(
                "mdl-layout--no-desktop-drawer-button",
                self.no_desktop_drawer_button,
            )
            .with(LARGE_SCREEN_ONLY, self.large_screen_only)
    }

    /// Rejects pane sets that would make the active tab ambiguous.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some(tabs) = &self.tabs else {
            return Ok(());
        };

        let mut seen = HashSet::new();
        for (index, pane) in tabs.panes.iter().enumerate() {
            if pane.id.is_empty() {
                return Err(ConfigError::EmptyPaneId { index });
            }
            if !seen.insert(pane.id.as_str()) {
                return Err(ConfigError::DuplicatePane(pane.id.clone()));
            }
        }

        if let Some(active) = &tabs.active {
            if !seen.contains(active.as_str()) {
                return Err(ConfigError::UnknownActivePane(active.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::PaneConfig;

    fn tabbed(panes: &[&str]) -> LayoutConfig {
        LayoutConfig {
            tabs: Some(TabsConfig::new(
                panes.iter().map(|id| PaneConfig::new(*id, id.to_uppercase())),
            )),
            ..Default::default()
        }
    }

    #[test]
    fn test_layout_classes() {
        let config = LayoutConfig {
            js: true,
            fixed_header: true,
            no_desktop_drawer_button: true,
            large_screen_only: true,
            ..Default::default()
        };
        assert_eq!(
            config.classes().to_string(),
            "mdl-layout mdl-js-layout mdl-layout--fixed-header \
             mdl-layout--no-desktop-drawer-button mdl-layout--large-screen-only"
        );
        assert_eq!(LayoutConfig::default().classes().to_string(), "mdl-layout");
    }

    #[test]
    fn test_tabbed_layout_gets_default_header() {
        assert_eq!(
            tabbed(&["tab1"]).effective_header(),
            Some(HeaderConfig::default())
        );
        assert_eq!(LayoutConfig::default().effective_header(), None);
    }

    #[test]
    fn test_validate_accepts_unique_panes() {
        assert!(tabbed(&["tab1", "tab2"]).validate().is_ok());
        assert!(LayoutConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_pane() {
        let err = tabbed(&["tab1", "tab2", "tab1"]).validate().unwrap_err();
        assert!(matches!(err, ConfigError::DuplicatePane(id) if id == "tab1"));
    }

    #[test]
    fn test_validate_rejects_empty_id() {
        let err = tabbed(&["tab1", ""]).validate().unwrap_err();
        assert!(matches!(err, ConfigError::EmptyPaneId { index: 1 }));
    }

    #[test]
    fn test_validate_rejects_unknown_seed() {
        let mut config = tabbed(&["tab1", "tab2"]);
        if let Some(tabs) = config.tabs.as_mut() {
            tabs.active = Some("tab3".to_string());
        }
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownActivePane(id) if id == "tab3"));
    }

    #[test]
    fn test_from_json() {
        let config = LayoutConfig::from_json(
            r#"{
                "js": true,
                "header": { "waterfall": true, "row": { "title": { "text": "Docs" } } },
                "tabs": {
                    "panes": [ { "id": "tab1", "name": "One" }, { "id": "tab2", "name": "Two" } ],
                    "active": "tab2"
                }
            }"#,
        )
        .unwrap();
        assert!(config.js);
        assert!(config.is_tabbed());
        let tabs = config.tabs.unwrap();
        assert_eq!(tabs.panes.len(), 2);
        assert_eq!(tabs.active.as_deref(), Some("tab2"));
    }

    #[test]
    fn test_from_json_validates() {
        let err = LayoutConfig::from_json(
            r#"{ "tabs": { "panes": [ { "id": "a" }, { "id": "a" } ] } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicatePane(_)));

        let err = LayoutConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
