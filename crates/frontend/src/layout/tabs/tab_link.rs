use crate::layout::coordinator::PaneRequester;
use contracts::layout::tabs::{tab_link_classes, tab_link_id};
use leptos::prelude::*;

/// `a.mdl-layout__tab` selecting pane `id`.
///
/// A click enqueues the pane with the [`PaneRequester`] found in context.
/// Outside a tabbed layout there is none and the click does nothing.
#[component]
pub fn TabLink(
    #[prop(into)] id: String,
    #[prop(into)] text: String,
    #[prop(into)] active: Signal<bool>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let href = format!("#{}", id);
    let element_id = tab_link_id(&id);
    let activate = activate_from_context(id);

    view! {
        <a
            href=href
            id=element_id
            class=move || tab_link_classes(active.get()).to_string()
            on:click=move |_| activate()
        >
            {children.map(|children| children())}
            {text}
        </a>
    }
}

/// Resolves the requester of the enclosing layout once and returns the
/// action a click on the link for pane `id` runs.
pub(crate) fn activate_from_context(id: String) -> impl Fn() + Send + Sync + 'static {
    let requester = use_context::<PaneRequester>();
    move || {
        if let Some(requester) = &requester {
            requester.request_activate(id.clone());
        }
    }
}
