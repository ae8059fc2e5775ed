//! Per-row swipe-to-reveal gesture detector.
//!
//! [`SwipeToReveal`] is the one gesture module every swipeable row is built
//! from. It feeds raw touch/mouse input through a [`GestureTracker`], holds
//! document listeners through a [`ListenerLifecycle`] while a mouse drag is in
//! flight, classifies the finished drag, and drives a [`RevealMachine`].
//!
//! Platform adapters translate their native events into the `on_*` calls (or
//! a [`SwipeInputEvent`] for [`SwipeToReveal::handle_event`]); views read
//! [`SwipeToReveal::reveal_state`] or [`SwipeToReveal::offset`] to render.

use crate::config::SwipeConfig;
use crate::nodes::input::{
    classify, GestureTracker, InputModality, ListenerHost, ListenerLifecycle, NoopListenerHost,
    PointerEventKind, SwipeInputEvent, SwipeResult,
};
use crate::reveal::{RevealMachine, RevealState, RevealTransition};

type TransitionCallback = Box<dyn FnMut()>;

/// Optional hooks fired once per reveal transition.
///
/// Callbacks run while the detector is mutably borrowed and must not call
/// back into it.
#[derive(Default)]
pub struct RevealCallbacks {
    on_open: Option<TransitionCallback>,
    on_close: Option<TransitionCallback>,
}

impl RevealCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_open(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_open = Some(Box::new(callback));
        self
    }

    pub fn on_close(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    fn dispatch(&mut self, transition: RevealTransition) {
        let callback = match transition {
            RevealTransition::Opened => self.on_open.as_mut(),
            RevealTransition::Closed => self.on_close.as_mut(),
        };
        if let Some(callback) = callback {
            callback();
        }
    }
}

impl std::fmt::Debug for RevealCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevealCallbacks")
            .field("on_open", &self.on_open.is_some())
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}

pub struct SwipeToReveal {
    config: SwipeConfig,
    tracker: GestureTracker,
    listeners: ListenerLifecycle,
    reveal: RevealMachine,
    callbacks: RevealCallbacks,
    attached: bool,
}

impl SwipeToReveal {
    /// Creates a mounted detector for rows that only need element-scoped input.
    pub fn new(config: SwipeConfig) -> Self {
        Self::with_listener_host(config, Box::new(NoopListenerHost))
    }

    /// Creates a mounted detector that registers document listeners through `host`.
    pub fn with_listener_host(config: SwipeConfig, host: Box<dyn ListenerHost>) -> Self {
        Self {
            config,
            tracker: GestureTracker::new(),
            listeners: ListenerLifecycle::new(host),
            reveal: RevealMachine::new(),
            callbacks: RevealCallbacks::new(),
            attached: true,
        }
    }

    pub fn with_callbacks(mut self, callbacks: RevealCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn reveal_state(&self) -> RevealState {
        self.reveal.state()
    }

    /// Horizontal offset the row content should be rendered at.
    pub fn offset(&self) -> f32 {
        self.reveal.state().offset(self.config.reveal_width())
    }

    pub fn tracker(&self) -> &GestureTracker {
        &self.tracker
    }

    pub fn is_tracking(&self) -> bool {
        self.tracker.is_active()
    }

    pub fn listeners_attached(&self) -> bool {
        self.listeners.is_attached()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Marks the owning row as mounted. A remount starts `Closed`.
    pub fn on_attach(&mut self) {
        self.attached = true;
    }

    /// Marks the owning row as unmounted and tears down any in-flight drag.
    pub fn on_detach(&mut self) {
        self.teardown();
        self.attached = false;
    }

    pub fn on_press_start(&mut self, coordinate: f32, modality: InputModality) {
        if !self.attached {
            log::trace!("ignoring {modality:?} press on detached row");
            return;
        }
        self.tracker.on_press_start(coordinate, modality);
        self.listeners.acquire(modality);
    }

    pub fn on_move(&mut self, coordinate: f32, modality: InputModality) -> bool {
        self.tracker.on_move(coordinate, modality)
    }

    /// Finalizes the active session, whatever its modality, and applies the swipe.
    pub fn on_press_end(&mut self) -> SwipeResult {
        let distance = self.tracker.on_press_end();
        self.listeners.release();
        let Some(distance) = distance else {
            return SwipeResult::None;
        };
        let swipe = classify(distance, self.config.threshold());
        if let Some(transition) = self.reveal.apply(swipe) {
            log::debug!("swipe {swipe:?} moved row to {:?}", self.reveal.state());
            self.callbacks.dispatch(transition);
        }
        swipe
    }

    /// Handles a release event from `modality`.
    ///
    /// The release is ignored unless it matches the active session. A
    /// reported coordinate counts as the final position of the drag.
    pub fn on_release(&mut self, coordinate: Option<f32>, modality: InputModality) -> SwipeResult {
        if self.tracker.active_modality() != Some(modality) {
            log::trace!("ignoring {modality:?} release without matching session");
            return SwipeResult::None;
        }
        if let Some(coordinate) = coordinate {
            self.tracker.on_move(coordinate, modality);
        }
        self.on_press_end()
    }

    /// Abandons a session of `modality` without classifying it.
    pub fn on_cancel(&mut self, modality: InputModality) -> bool {
        if self.tracker.active_modality() != Some(modality) {
            return false;
        }
        self.tracker.cancel();
        self.listeners.release();
        true
    }

    /// Routes a platform event to the matching `on_*` call.
    pub fn handle_event(&mut self, event: SwipeInputEvent) -> SwipeResult {
        match (event.kind, event.coordinate) {
            (PointerEventKind::Down, Some(coordinate)) => {
                self.on_press_start(coordinate, event.modality);
                SwipeResult::None
            }
            (PointerEventKind::Move, Some(coordinate)) => {
                self.on_move(coordinate, event.modality);
                SwipeResult::None
            }
            (PointerEventKind::Down | PointerEventKind::Move, None) => {
                log::trace!("ignoring {:?} event without coordinate", event.kind);
                SwipeResult::None
            }
            (PointerEventKind::Up, coordinate) => self.on_release(coordinate, event.modality),
            (PointerEventKind::Cancel, _) => {
                self.on_cancel(event.modality);
                SwipeResult::None
            }
        }
    }

    /// Closes the panel, e.g. after the revealed action ran.
    pub fn request_close(&mut self) -> bool {
        match self.reveal.request_close() {
            Some(transition) => {
                self.callbacks.dispatch(transition);
                true
            }
            None => false,
        }
    }

    /// Drops any in-flight drag, releases listeners, and resets to `Closed`.
    ///
    /// No classification is produced and no callback fires.
    pub fn teardown(&mut self) {
        if let Some(session) = self.tracker.cancel() {
            log::debug!(
                "abandoned {:?} swipe session on teardown",
                session.modality()
            );
        }
        self.listeners.release();
        self.reveal.reset();
    }
}

impl std::fmt::Debug for SwipeToReveal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeToReveal")
            .field("config", &self.config)
            .field("tracker", &self.tracker)
            .field("listeners", &self.listeners)
            .field("reveal", &self.reveal)
            .field("attached", &self.attached)
            .finish()
    }
}

impl Drop for SwipeToReveal {
    fn drop(&mut self) {
        self.teardown();
    }
}
