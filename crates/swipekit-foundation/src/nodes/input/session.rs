//! In-progress drag record.

use super::types::InputModality;
use web_time::{Duration, Instant};

/// One drag gesture between press and release.
///
/// A session is only ever held by a [`GestureTracker`](super::GestureTracker)
/// while it is active; finalizing or discarding it hands the value back out.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerSession {
    modality: InputModality,
    start_coordinate: f32,
    current_coordinate: f32,
    started_at: Instant,
}

impl PointerSession {
    pub(crate) fn new(coordinate: f32, modality: InputModality) -> Self {
        Self {
            modality,
            start_coordinate: coordinate,
            current_coordinate: coordinate,
            started_at: Instant::now(),
        }
    }

    pub fn modality(&self) -> InputModality {
        self.modality
    }

    pub fn start_coordinate(&self) -> f32 {
        self.start_coordinate
    }

    pub fn current_coordinate(&self) -> f32 {
        self.current_coordinate
    }

    /// Travel from the press point, positive toward the left.
    pub fn distance(&self) -> f32 {
        self.start_coordinate - self.current_coordinate
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub(crate) fn accepts(&self, modality: InputModality) -> bool {
        self.modality == modality
    }

    pub(crate) fn update(&mut self, coordinate: f32) {
        self.current_coordinate = coordinate;
    }
}
