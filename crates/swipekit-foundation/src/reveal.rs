//! Open/closed state of a row's reveal panel.

use crate::nodes::input::SwipeResult;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RevealState {
    #[default]
    Closed,
    Open,
}

impl RevealState {
    /// Horizontal offset to render the row content at.
    pub fn offset(self, reveal_width: f32) -> f32 {
        match self {
            RevealState::Closed => 0.0,
            RevealState::Open => -reveal_width,
        }
    }

    pub fn is_open(self) -> bool {
        self == RevealState::Open
    }
}

/// A state change produced by [`RevealMachine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealTransition {
    Opened,
    Closed,
}

/// Two-state machine driven by classified swipes and close requests.
///
/// `Left` opens, `Right` closes, everything else leaves the state alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealMachine {
    state: RevealState,
}

impl RevealMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Applies a swipe and reports the transition, if one happened.
    pub fn apply(&mut self, swipe: SwipeResult) -> Option<RevealTransition> {
        match (self.state, swipe) {
            (RevealState::Closed, SwipeResult::Left) => {
                self.state = RevealState::Open;
                Some(RevealTransition::Opened)
            }
            (RevealState::Open, SwipeResult::Right) => {
                self.state = RevealState::Closed;
                Some(RevealTransition::Closed)
            }
            _ => None,
        }
    }

    /// Forces the panel closed. No-op while already closed.
    pub fn request_close(&mut self) -> Option<RevealTransition> {
        match self.state {
            RevealState::Open => {
                self.state = RevealState::Closed;
                Some(RevealTransition::Closed)
            }
            RevealState::Closed => None,
        }
    }

    /// Returns to the initial state without reporting a transition.
    pub fn reset(&mut self) {
        self.state = RevealState::Closed;
    }
}
