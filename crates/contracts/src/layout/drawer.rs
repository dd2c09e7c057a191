use serde::{Deserialize, Serialize};

use super::header::TitleConfig;
use super::navigation::NavConfig;

pub const DRAWER_CLASS: &str = "mdl-layout__drawer";

/// Side drawer: optional title followed by optional navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawerConfig {
    pub title: Option<TitleConfig>,
    pub nav: Option<NavConfig>,
}
