//! Web platform adapter for Swipekit.
//!
//! [`bind`] wires a DOM element's touch and mouse events into a
//! [`SwipeToReveal`](swipekit_foundation::SwipeToReveal). Touch events are
//! element-scoped and handled on the element; a mouse drag registers
//! `mousemove`/`mouseup` on the document through a [`DocumentListenerHost`]
//! for exactly as long as the drag lasts.

mod binding;
mod document;
mod events;

pub use binding::{bind, SwipeBinding};
pub use document::DocumentListenerHost;
pub use events::{event_kind, DOCUMENT_EVENTS, ELEMENT_EVENTS};
