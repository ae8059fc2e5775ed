//! Testing utilities for Swipekit.
//!
//! [`RecordingListenerHost`] stands in for a document: it records every
//! attach/detach so tests can assert listener symmetry after the host has
//! been moved into a detector. [`SwipeRobot`] scripts press/move/release
//! sequences against a [`SwipeToReveal`].

mod host;
mod robot;

pub use host::{ListenerCall, ListenerLog, RecordingListenerHost};
pub use robot::SwipeRobot;

pub use swipekit_foundation::{InputModality, SwipeConfig, SwipeResult, SwipeToReveal};

/// Builds a detector wired to a fresh recording host.
pub fn recorded_detector(config: SwipeConfig) -> (SwipeToReveal, RecordingListenerHost) {
    let host = RecordingListenerHost::new();
    let detector = SwipeToReveal::with_listener_host(config, Box::new(host.clone()));
    (detector, host)
}
