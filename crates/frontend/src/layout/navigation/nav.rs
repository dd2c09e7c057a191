use super::NavLink;
use contracts::layout::navigation::NAV_CLASS;
use contracts::layout::NavConfig;
use leptos::prelude::*;

#[component]
pub fn Nav(config: NavConfig, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    let links = config
        .links
        .into_iter()
        .map(|link| view! { <NavLink href={link.href} text={link.text} /> })
        .collect_view();

    view! {
        <nav class=NAV_CLASS>
            {children.map(|children| children())}
            {links}
        </nav>
    }
}
