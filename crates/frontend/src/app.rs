use std::sync::Arc;

use crate::layout::{Layout, LayoutModel, PaneContentFn};
use contracts::layout::{LayoutConfig, PaneConfig};
use leptos::prelude::*;

/// Layout of the demo page.
const DEMO_LAYOUT: &str = r##"{
    "js": true,
    "fixed_header": true,
    "header": {
        "waterfall": true,
        "row": {
            "title": { "text": "Material Layout" },
            "add_spacer": true,
            "nav": {
                "links": [
                    { "href": "#overview", "text": "Overview" },
                    { "href": "#source", "text": "Source" }
                ]
            }
        }
    },
    "drawer": {
        "title": { "text": "Material Layout" },
        "nav": { "links": [ { "href": "#overview", "text": "Overview" } ] }
    },
    "tabs": {
        "panes": [
            { "id": "tab1", "name": "Layout" },
            { "id": "tab2", "name": "Tabs" },
            { "id": "tab3", "name": "Drawer" }
        ],
        "active": "tab1"
    }
}"##;

#[component]
pub fn App() -> impl IntoView {
    let model = LayoutConfig::from_json(DEMO_LAYOUT).and_then(LayoutModel::new);

    match model {
        Ok(layout) => {
            let pane_content: PaneContentFn = Arc::new(|pane: &PaneConfig| {
                let text = format!("Content of the '{}' pane.", pane.name);
                view! { <div class="page-content">{text}</div> }.into_any()
            });
            view! { <Layout layout=layout pane_content=pane_content /> }.into_any()
        }
        Err(err) => {
            log::error!("demo layout rejected: {}", err);
            view! { <div class="layout-error">{err.to_string()}</div> }.into_any()
        }
    }
}
