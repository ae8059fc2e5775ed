//! Foundation for Swipekit: swipe-to-reveal gesture detection across touch and mouse input

pub mod config;
pub mod gesture_constants;
pub mod nodes;
pub mod reveal;
pub mod swipe_list;
pub mod swipe_to_reveal;
pub mod swipeable_item;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use config::{ConfigError, SwipeConfig};
pub use nodes::input::{
    classify, GestureTracker, InputModality, ListenerError, ListenerHost, ListenerLifecycle,
    NoopListenerHost, PointerEventKind, PointerSession, SwipeInputEvent, SwipeResult,
};
pub use reveal::{RevealMachine, RevealState, RevealTransition};
pub use swipe_list::SwipeList;
pub use swipe_to_reveal::{RevealCallbacks, SwipeToReveal};
pub use swipeable_item::SwipeableItem;

pub mod prelude {
    pub use crate::config::SwipeConfig;
    pub use crate::gesture_constants::*;
    pub use crate::nodes::input::prelude::*;
    pub use crate::reveal::RevealState;
    pub use crate::swipe_list::SwipeList;
    pub use crate::swipe_to_reveal::{RevealCallbacks, SwipeToReveal};
    pub use crate::swipeable_item::SwipeableItem;
}
