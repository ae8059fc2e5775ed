//! Single-session drag tracking across touch and mouse input.
//!
//! The tracker owns at most one [`PointerSession`]. It performs no I/O and
//! never fails: input that does not fit the current session is dropped.

use super::session::PointerSession;
use super::types::InputModality;

#[derive(Debug, Default)]
pub struct GestureTracker {
    session: Option<PointerSession>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Opens a session at `coordinate`.
    ///
    /// A session that is still active is discarded and returned so the caller
    /// can release anything it was holding for it. No distance is produced
    /// for the discarded session.
    pub fn on_press_start(
        &mut self,
        coordinate: f32,
        modality: InputModality,
    ) -> Option<PointerSession> {
        let stale = self
            .session
            .replace(PointerSession::new(coordinate, modality));
        if let Some(stale) = &stale {
            log::debug!(
                "swipe session ({:?}) superseded by {:?} press after {:?}",
                stale.modality(),
                modality,
                stale.elapsed()
            );
        }
        stale
    }

    /// Records the latest position of the active session.
    ///
    /// Returns `false` when there is no active session or the event came from
    /// a different modality than the one that opened it.
    pub fn on_move(&mut self, coordinate: f32, modality: InputModality) -> bool {
        match self.session.as_mut() {
            Some(session) if session.accepts(modality) => {
                session.update(coordinate);
                true
            }
            Some(session) => {
                log::trace!(
                    "ignoring {:?} move during {:?} session",
                    modality,
                    session.modality()
                );
                false
            }
            None => false,
        }
    }

    /// Finalizes the active session and returns `start - current`.
    pub fn on_press_end(&mut self) -> Option<f32> {
        let session = self.session.take()?;
        let distance = session.distance();
        log::debug!(
            "swipe session ({:?}) released after {:?}, distance {distance}",
            session.modality(),
            session.elapsed()
        );
        Some(distance)
    }

    /// Abandons the active session without producing a distance.
    pub fn cancel(&mut self) -> Option<PointerSession> {
        self.session.take()
    }

    pub fn active_session(&self) -> Option<&PointerSession> {
        self.session.as_ref()
    }

    pub fn active_modality(&self) -> Option<InputModality> {
        self.session.as_ref().map(PointerSession::modality)
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }
}
