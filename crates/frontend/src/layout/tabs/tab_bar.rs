use super::{pane_active, TabLink};
use contracts::layout::TabsConfig;
use leptos::prelude::*;

/// `div.mdl-layout__tab-bar` with one link per pane, in pane order.
#[component]
pub fn TabBar(tabs: TabsConfig, #[prop(into)] active: Signal<Option<String>>) -> impl IntoView {
    let classes = tabs.tab_bar_classes().to_string();
    let links = tabs
        .panes
        .into_iter()
        .map(|pane| {
            let is_active = pane_active(active, pane.id.clone());
            view! { <TabLink id={pane.id} text={pane.name} active=is_active /> }
        })
        .collect_view();

    view! { <div class=classes>{links}</div> }
}
