use std::collections::HashSet;

/// One applied change of the active pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneSwitch {
    /// Pane that lost the active state, `None` when nothing was active.
    pub deactivated: Option<String>,
    pub activated: String,
}

/// Authoritative active-pane state of a tabbed layout.
///
/// Only the coordinator's listener owns one of these; everything else reads
/// the active id through the signal the listener publishes.
#[derive(Debug, Clone, Default)]
pub struct ActivePane {
    panes: HashSet<String>,
    active: Option<String>,
}

impl ActivePane {
    pub fn new(panes: impl IntoIterator<Item = String>, active: Option<String>) -> Self {
        Self {
            panes: panes.into_iter().collect(),
            active,
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Makes `id` the active pane.
    ///
    /// Returns `None` when nothing changes: `id` is already active or names no
    /// pane of this layout.
    pub fn apply(&mut self, id: String) -> Option<PaneSwitch> {
        if self.active.as_deref() == Some(id.as_str()) {
            return None;
        }
        if !self.panes.contains(&id) {
            log::warn!("pane coordinator: ignoring unknown pane '{}'", id);
            return None;
        }

        let deactivated = self.active.replace(id.clone());
        Some(PaneSwitch {
            deactivated,
            activated: id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panes() -> ActivePane {
        ActivePane::new(["tab1".to_string(), "tab2".to_string()], None)
    }

    #[test]
    fn test_first_activation_has_nothing_to_deactivate() {
        let mut state = panes();
        assert_eq!(
            state.apply("tab1".to_string()),
            Some(PaneSwitch {
                deactivated: None,
                activated: "tab1".to_string(),
            })
        );
        assert_eq!(state.active(), Some("tab1"));
    }

    #[test]
    fn test_switch_reports_previous_pane() {
        let mut state = panes();
        state.apply("tab1".to_string());
        let switch = state.apply("tab2".to_string()).unwrap();
        assert_eq!(switch.deactivated.as_deref(), Some("tab1"));
        assert_eq!(switch.activated, "tab2");
    }

    #[test]
    fn test_same_pane_is_noop() {
        let mut state = panes();
        state.apply("tab1".to_string());
        assert_eq!(state.apply("tab1".to_string()), None);
        assert_eq!(state.active(), Some("tab1"));
    }

    #[test]
    fn test_unknown_pane_is_ignored() {
        let mut state = ActivePane::new(["tab1".to_string()], Some("tab1".to_string()));
        assert_eq!(state.apply("nope".to_string()), None);
        assert_eq!(state.active(), Some("tab1"));
    }
}
