use contracts::layout::navigation::NAV_LINK_CLASS;
use leptos::prelude::*;

#[component]
pub fn NavLink(
    #[prop(into)] href: String,
    #[prop(into)] text: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <a class=NAV_LINK_CLASS href=href>
            {children.map(|children| children())}
            {text}
        </a>
    }
}
