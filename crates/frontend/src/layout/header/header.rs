use super::{HeaderRow, Icon};
use contracts::layout::HeaderConfig;
use leptos::prelude::*;

/// `header.mdl-layout__header`: extra children, icon, row and, in tabbed
/// layouts, the tab bar.
#[component]
pub fn Header(
    config: HeaderConfig,
    /// Tab bar rendered below the row; set by tabbed layouts.
    #[prop(optional_no_strip)]
    tab_bar: Option<AnyView>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let classes = config.classes().to_string();
    let HeaderConfig { icon, row, .. } = config;

    view! {
        <header class=classes>
            {children.map(|children| children())}
            {icon.map(|text| view! { <Icon>{text}</Icon> })}
            {row.map(|row| view! { <HeaderRow config=row /> })}
            {tab_bar}
        </header>
    }
}
