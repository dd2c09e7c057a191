use super::Title;
use crate::layout::navigation::Nav;
use contracts::layout::header::{HEADER_ROW_CLASS, SPACER_CLASS};
use contracts::layout::HeaderRowConfig;
use leptos::prelude::*;

/// `div.mdl-layout__header-row`: title, spacer, navigation.
#[component]
pub fn HeaderRow(
    config: HeaderRowConfig,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let HeaderRowConfig {
        title,
        add_spacer,
        nav,
    } = config;

    view! {
        <div class=HEADER_ROW_CLASS>
            {children.map(|children| children())}
            {title.map(|title| view! { <Title text={title.text} /> })}
            {add_spacer.then(|| view! { <div class=SPACER_CLASS></div> })}
            {nav.map(|nav| view! { <Nav config=nav /> })}
        </div>
    }
}
