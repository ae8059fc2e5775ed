pub mod gestures;
pub mod listeners;
pub mod session;
pub mod tracker;
pub mod types;

pub use gestures::{classify, SwipeResult};
pub use listeners::{ListenerError, ListenerHost, ListenerLifecycle, NoopListenerHost};
pub use session::PointerSession;
pub use tracker::GestureTracker;
pub use types::{InputModality, PointerEventKind, SwipeInputEvent};

pub mod prelude {
    pub use super::gestures::{classify, SwipeResult};
    pub use super::listeners::{ListenerHost, ListenerLifecycle};
    pub use super::types::{InputModality, PointerEventKind, SwipeInputEvent};
}
