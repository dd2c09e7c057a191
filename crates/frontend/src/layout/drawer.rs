use crate::layout::header::Title;
use crate::layout::navigation::Nav;
use contracts::layout::drawer::DRAWER_CLASS;
use contracts::layout::DrawerConfig;
use leptos::prelude::*;

/// `div.mdl-layout__drawer` with an optional title and navigation.
#[component]
pub fn Drawer(
    config: DrawerConfig,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let DrawerConfig { title, nav } = config;

    view! {
        <div class=DRAWER_CLASS>
            {title.map(|title| view! { <Title text={title.text} /> })}
            {nav.map(|nav| view! { <Nav config=nav /> })}
            {children.map(|children| children())}
        </div>
    }
}
