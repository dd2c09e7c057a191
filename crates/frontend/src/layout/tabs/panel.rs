use contracts::layout::tabs::tab_panel_classes;
use leptos::prelude::*;

/// `section.mdl-layout__tab-panel` holding one pane's content.
#[component]
pub fn Panel(
    #[prop(into)] id: String,
    #[prop(into)] active: Signal<bool>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <section id=id class=move || tab_panel_classes(active.get()).to_string()>
            {children.map(|children| children())}
        </section>
    }
}
