//! Material Design Lite layout shell.
//!
//! ```text
//! div.mdl-layout
//! ├── header.mdl-layout__header
//! │   ├── div.mdl-layout__header-row   (title, spacer, nav)
//! │   └── div.mdl-layout__tab-bar      (tabbed mode only)
//! ├── div.mdl-layout__drawer           (title, nav)
//! └── main.mdl-layout__content         (children, or one panel per pane)
//! ```

pub mod coordinator;
pub mod drawer;
pub mod header;
pub mod navigation;
pub mod tabs;

use std::sync::Arc;

use contracts::layout::layout::CONTENT_CLASS;
use contracts::layout::{ConfigError, LayoutConfig, PaneConfig};
use coordinator::{PaneCoordinator, PaneListener};
use drawer::Drawer;
use header::Header;
use leptos::prelude::*;
use tabs::{pane_active, Panel, TabBar};

/// Builds the content of one pane. Called once per pane on render.
pub type PaneContentFn = Arc<dyn Fn(&PaneConfig) -> AnyView + Send + Sync>;

/// A validated layout, with its coordinator when in tabbed mode.
///
/// The coordinator exists from construction on; its listener starts when the
/// [`Layout`] component mounts and stops when it unmounts. Hosts that drop a
/// model without mounting it, or unmount by hand, call [`LayoutModel::teardown`].
pub struct LayoutModel {
    config: LayoutConfig,
    coordinator: Option<PaneCoordinator>,
    listener: Option<PaneListener>,
}

impl LayoutModel {
    pub fn new(config: LayoutConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let (coordinator, listener) = match &config.tabs {
            Some(tabs) => {
                let (coordinator, listener) = PaneCoordinator::new(tabs);
                (Some(coordinator), Some(listener))
            }
            None => (None, None),
        };

        Ok(Self {
            config,
            coordinator,
            listener,
        })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn coordinator(&self) -> Option<&PaneCoordinator> {
        self.coordinator.as_ref()
    }

    /// Hands out the listener to spawn. Only the first call returns it.
    pub fn take_listener(&mut self) -> Option<PaneListener> {
        self.listener.take()
    }

    /// Stops the coordinator, if any. The active pane stays as it was.
    pub fn teardown(&self) {
        if let Some(coordinator) = &self.coordinator {
            coordinator.stop();
        }
    }
}

/// Root layout component.
///
/// `children` are placed first inside `div.mdl-layout`, before the header.
/// In plain mode `content` fills `main.mdl-layout__content`; the main element
/// is omitted without it. In tabbed mode the main element holds one panel per
/// pane, filled by `pane_content`, and `content` is not used.
#[component]
pub fn Layout(
    layout: LayoutModel,
    #[prop(optional, into)] content: Option<ViewFn>,
    #[prop(optional)] pane_content: Option<PaneContentFn>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let mut layout = layout;

    if let Some(listener) = layout.take_listener() {
        leptos::task::spawn_local(listener.run());
    }

    let active: Signal<Option<String>> = match layout.coordinator() {
        Some(coordinator) => {
            provide_context(coordinator.requester());
            let stop = coordinator.clone();
            on_cleanup(move || stop.stop());

            let reader = coordinator.active();
            Signal::derive(move || reader.get())
        }
        None => Signal::derive(|| None),
    };

    let config = layout.config().clone();
    let classes = config.classes().to_string();
    let header_config = config.effective_header();
    let LayoutConfig { drawer, tabs, .. } = config;

    let tab_bar = tabs
        .clone()
        .map(|tabs| view! { <TabBar tabs=tabs active=active /> }.into_any());
    let header = header_config.map(|header| view! { <Header config=header tab_bar=tab_bar /> });
    let drawer = drawer.map(|drawer| view! { <Drawer config=drawer /> });

    let main = match tabs {
        Some(tabs) => {
            let panels = tabs
                .panes
                .into_iter()
                .map(|pane| {
                    let content = pane_content.as_ref().map(|render| render(&pane));
                    let is_active = pane_active(active, pane.id.clone());
                    view! { <Panel id={pane.id} active=is_active>{content}</Panel> }
                })
                .collect_view();
            Some(view! { <main class=CONTENT_CLASS>{panels}</main> }.into_any())
        }
        None => content.map(|content| {
            view! { <main class=CONTENT_CLASS>{content.run()}</main> }.into_any()
        }),
    };

    view! {
        <div class=classes>
            {children.map(|children| children())}
            {header}
            {drawer}
            {main}
        </div>
    }
}
