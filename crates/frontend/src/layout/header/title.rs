use contracts::layout::header::TITLE_CLASS;
use leptos::prelude::*;

/// `span.mdl-layout-title`, used in header rows and drawers.
#[component]
pub fn Title(
    #[prop(into)] text: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <span class=TITLE_CLASS>
            {children.map(|children| children())}
            {text}
        </span>
    }
}
