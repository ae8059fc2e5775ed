//! Scoped ownership of document-level move/release listeners.
//!
//! Mouse drags are not element-scoped: once the cursor leaves the row, its
//! move/release events only reach the document. A [`ListenerLifecycle`]
//! holds the document listeners for exactly as long as such a drag is in
//! progress and releases them on the first of: release, supersede, or drop.

use super::types::InputModality;

/// A listener host could not register or unregister its listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListenerError {
    /// The host has no target to register on (e.g. no document).
    Unavailable { reason: &'static str },
    /// The platform refused the registration.
    Rejected {
        modality: InputModality,
        reason: String,
    },
}

impl std::fmt::Display for ListenerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListenerError::Unavailable { reason } => {
                write!(f, "listener target unavailable: {reason}")
            }
            ListenerError::Rejected { modality, reason } => {
                write!(f, "{modality:?} listeners rejected: {reason}")
            }
        }
    }
}

impl std::error::Error for ListenerError {}

/// Platform hook that installs and removes the global move/release pair.
///
/// Implementations must not call back into the owning gesture detector from
/// `attach`/`detach`; both run while the detector is mutably borrowed.
pub trait ListenerHost {
    fn attach(&mut self, modality: InputModality) -> Result<(), ListenerError>;

    fn detach(&mut self, modality: InputModality) -> Result<(), ListenerError>;
}

/// Host for rows that only ever see element-scoped input.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopListenerHost;

impl ListenerHost for NoopListenerHost {
    fn attach(&mut self, _modality: InputModality) -> Result<(), ListenerError> {
        Ok(())
    }

    fn detach(&mut self, _modality: InputModality) -> Result<(), ListenerError> {
        Ok(())
    }
}

/// Owner of the listener pair for one gesture detector.
///
/// Acquisition is idempotent and release is safe to call at any time.
/// Dropping the lifecycle releases anything still held.
pub struct ListenerLifecycle {
    host: Box<dyn ListenerHost>,
    attached: Option<InputModality>,
}

impl ListenerLifecycle {
    pub fn new(host: Box<dyn ListenerHost>) -> Self {
        Self {
            host,
            attached: None,
        }
    }

    /// Ensures document listeners are held for a session of `modality`.
    ///
    /// Listeners held for a different modality are released first.
    /// Element-scoped modalities never acquire anything. Returns whether the
    /// listeners are held once the call returns.
    pub fn acquire(&mut self, modality: InputModality) -> bool {
        if self.attached == Some(modality) {
            return true;
        }
        self.release();
        if modality.is_element_scoped() {
            return false;
        }
        match self.host.attach(modality) {
            Ok(()) => {
                log::debug!("attached document listeners for {modality:?} drag");
                self.attached = Some(modality);
                true
            }
            Err(err) => {
                log::warn!("could not attach document listeners: {err}");
                false
            }
        }
    }

    /// Removes held listeners. Returns `false` if nothing was held.
    pub fn release(&mut self) -> bool {
        let Some(modality) = self.attached.take() else {
            return false;
        };
        match self.host.detach(modality) {
            Ok(()) => log::debug!("detached document listeners for {modality:?} drag"),
            Err(err) => log::warn!("could not detach document listeners: {err}"),
        }
        true
    }

    pub fn is_attached(&self) -> bool {
        self.attached.is_some()
    }

    pub fn attached_modality(&self) -> Option<InputModality> {
        self.attached
    }
}

impl Default for ListenerLifecycle {
    fn default() -> Self {
        Self::new(Box::new(NoopListenerHost))
    }
}

impl std::fmt::Debug for ListenerLifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerLifecycle")
            .field("attached", &self.attached)
            .finish()
    }
}

impl Drop for ListenerLifecycle {
    fn drop(&mut self) {
        self.release();
    }
}
