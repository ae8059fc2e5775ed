pub mod swipe;

pub use swipe::{classify, SwipeResult};
