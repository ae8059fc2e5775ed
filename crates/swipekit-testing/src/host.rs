use std::cell::RefCell;
use std::rc::Rc;
use swipekit_foundation::{InputModality, ListenerError, ListenerHost};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerCall {
    Attach(InputModality),
    Detach(InputModality),
}

/// Everything a [`RecordingListenerHost`] has been asked to do.
#[derive(Debug, Default)]
pub struct ListenerLog {
    calls: Vec<ListenerCall>,
    live: Option<InputModality>,
    double_attach: bool,
    orphan_detach: bool,
    fail_next_attach: bool,
}

impl ListenerLog {
    pub fn calls(&self) -> &[ListenerCall] {
        &self.calls
    }

    pub fn attach_count(&self) -> usize {
        self.count(|call| matches!(call, ListenerCall::Attach(_)))
    }

    pub fn detach_count(&self) -> usize {
        self.count(|call| matches!(call, ListenerCall::Detach(_)))
    }

    /// Whether listeners are registered right now.
    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    /// Every attach was matched by exactly one detach, in order, and nothing
    /// is left registered.
    pub fn is_balanced(&self) -> bool {
        !self.double_attach
            && !self.orphan_detach
            && self.live.is_none()
            && self.attach_count() == self.detach_count()
    }

    fn count(&self, predicate: impl Fn(&ListenerCall) -> bool) -> usize {
        self.calls.iter().filter(|call| predicate(call)).count()
    }
}

/// In-memory [`ListenerHost`] that records calls into a shared [`ListenerLog`].
///
/// Clones share the same log.
#[derive(Clone, Debug, Default)]
pub struct RecordingListenerHost {
    log: Rc<RefCell<ListenerLog>>,
}

impl RecordingListenerHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `attach` fail as if the document were unavailable.
    pub fn fail_next_attach(&self) {
        self.log.borrow_mut().fail_next_attach = true;
    }

    pub fn with_log<R>(&self, f: impl FnOnce(&ListenerLog) -> R) -> R {
        f(&self.log.borrow())
    }

    pub fn calls(&self) -> Vec<ListenerCall> {
        self.log.borrow().calls.clone()
    }

    pub fn is_live(&self) -> bool {
        self.log.borrow().is_live()
    }

    pub fn is_balanced(&self) -> bool {
        self.log.borrow().is_balanced()
    }
}

impl ListenerHost for RecordingListenerHost {
    fn attach(&mut self, modality: InputModality) -> Result<(), ListenerError> {
        let mut log = self.log.borrow_mut();
        if std::mem::take(&mut log.fail_next_attach) {
            return Err(ListenerError::Unavailable {
                reason: "document unavailable",
            });
        }
        if log.live.is_some() {
            log.double_attach = true;
        }
        log.live = Some(modality);
        log.calls.push(ListenerCall::Attach(modality));
        Ok(())
    }

    fn detach(&mut self, modality: InputModality) -> Result<(), ListenerError> {
        let mut log = self.log.borrow_mut();
        if log.live != Some(modality) {
            log.orphan_detach = true;
        }
        log.live = None;
        log.calls.push(ListenerCall::Detach(modality));
        Ok(())
    }
}
