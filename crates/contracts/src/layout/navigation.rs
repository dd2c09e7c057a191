use serde::{Deserialize, Serialize};

pub const NAV_CLASS: &str = "mdl-navigation";
pub const NAV_LINK_CLASS: &str = "mdl-navigation__link";

/// `nav.mdl-navigation` with its links in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub links: Vec<NavLinkConfig>,
}

impl NavConfig {
    pub fn new(links: impl IntoIterator<Item = NavLinkConfig>) -> Self {
        Self {
            links: links.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavLinkConfig {
    pub href: String,
    pub text: String,
}

impl NavLinkConfig {
    pub fn new(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            text: text.into(),
        }
    }
}
