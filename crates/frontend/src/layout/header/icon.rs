use contracts::layout::header::ICON_CLASS;
use leptos::prelude::*;

#[component]
pub fn Icon(children: Children) -> impl IntoView {
    view! { <div class=ICON_CLASS>{children()}</div> }
}
