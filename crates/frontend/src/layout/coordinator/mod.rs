//! Active-pane coordinator of a tabbed layout.
//!
//! Tab links enqueue the id of the pane they select; a single listener task
//! drains the queue in order and publishes the active id through a signal.
//! Tab links and panels both derive their `is-active` class from that one
//! signal, so a pair can never be observed half switched.
//!
//! Every coordinator owns its own queue: two tabbed layouts on one page never
//! see each other's clicks.

pub mod state;

use contracts::layout::TabsConfig;
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::future::{AbortHandle, AbortRegistration, Abortable};
use futures::StreamExt;
use leptos::prelude::*;

pub use state::{ActivePane, PaneSwitch};

/// Sending half of a coordinator's queue, handed to tab links via context.
#[derive(Debug, Clone)]
pub struct PaneRequester {
    sender: UnboundedSender<String>,
}

impl PaneRequester {
    /// Enqueues a switch to pane `id`. Never blocks.
    ///
    /// After the coordinator is stopped the request is dropped.
    pub fn request_activate(&self, id: impl Into<String>) {
        let id = id.into();
        if self.sender.unbounded_send(id).is_err() {
            log::debug!("pane coordinator stopped, activation request dropped");
        }
    }
}

/// Handle of a running (or stopped) coordinator.
#[derive(Clone)]
pub struct PaneCoordinator {
    requester: PaneRequester,
    active: ArcReadSignal<Option<String>>,
    abort: AbortHandle,
}

impl PaneCoordinator {
    /// Creates the coordinator for `tabs` and the listener that must be
    /// spawned to process its requests.
    pub fn new(tabs: &TabsConfig) -> (Self, PaneListener) {
        let (sender, receiver) = mpsc::unbounded();
        let (abort, registration) = AbortHandle::new_pair();
        let (active, writer) = arc_signal(tabs.active.clone());

        let state = ActivePane::new(tabs.pane_ids().map(str::to_string), tabs.active.clone());

        let coordinator = Self {
            requester: PaneRequester { sender },
            active,
            abort,
        };
        let listener = PaneListener {
            receiver,
            registration,
            state,
            writer,
            observer: None,
        };
        (coordinator, listener)
    }

    pub fn requester(&self) -> PaneRequester {
        self.requester.clone()
    }

    pub fn request_activate(&self, id: impl Into<String>) {
        self.requester.request_activate(id);
    }

    /// Reactive view of the active pane id.
    pub fn active(&self) -> ArcReadSignal<Option<String>> {
        self.active.clone()
    }

    /// Snapshot of the active pane id, without subscribing.
    pub fn active_id(&self) -> Option<String> {
        self.active.get_untracked()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.with_untracked(|active| active.as_deref() == Some(id))
    }

    /// Stops the listener. The last applied active pane stays active.
    pub fn stop(&self) {
        if !self.abort.is_aborted() {
            log::debug!("pane coordinator: stopping");
        }
        self.abort.abort();
        self.requester.sender.close_channel();
    }

    pub fn is_stopped(&self) -> bool {
        self.abort.is_aborted()
    }
}

/// Receiving side of a coordinator: the only writer of the active id.
pub struct PaneListener {
    receiver: UnboundedReceiver<String>,
    registration: AbortRegistration,
    state: ActivePane,
    writer: ArcWriteSignal<Option<String>>,
    observer: Option<Box<dyn FnMut(&PaneSwitch)>>,
}

impl PaneListener {
    /// Calls `observer` after each applied switch.
    pub fn on_switch(mut self, observer: impl FnMut(&PaneSwitch) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Processes requests in arrival order until the coordinator is stopped.
    pub async fn run(self) {
        let PaneListener {
            mut receiver,
            registration,
            mut state,
            writer,
            mut observer,
        } = self;

        let listen = async move {
            while let Some(id) = receiver.next().await {
                let Some(switch) = state.apply(id) else {
                    continue;
                };
                log::debug!(
                    "pane coordinator: {:?} -> '{}'",
                    switch.deactivated,
                    switch.activated
                );
                writer.set(Some(switch.activated.clone()));
                if let Some(observer) = observer.as_mut() {
                    observer(&switch);
                }
            }
        };

        if Abortable::new(listen, registration).await.is_err() {
            log::debug!("pane coordinator: listener exited");
        }
    }
}
