use thiserror::Error;

/// Malformed layout configuration, reported when a layout is constructed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("pane id '{0}' is used by more than one pane")]
    DuplicatePane(String),

    #[error("pane #{index} has an empty id")]
    EmptyPaneId { index: usize },

    #[error("active pane '{0}' does not match any pane")]
    UnknownActivePane(String),

    #[error("invalid layout JSON: {0}")]
    Json(#[from] serde_json::Error),
}
