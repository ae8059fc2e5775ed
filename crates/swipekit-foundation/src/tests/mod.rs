mod listener_tests;

use crate::nodes::input::{InputModality, ListenerError, ListenerHost};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HostCall {
    Attach(InputModality),
    Detach(InputModality),
}

// Mock ListenerHost sharing its call log with the test body.
#[derive(Clone, Default)]
struct MockListenerHost {
    calls: Rc<RefCell<Vec<HostCall>>>,
    fail_attach: bool,
}

impl MockListenerHost {
    fn new() -> Self {
        Self::default()
    }

    fn failing() -> Self {
        Self {
            fail_attach: true,
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<HostCall> {
        self.calls.borrow().clone()
    }

    fn count(&self, call: HostCall) -> usize {
        self.calls.borrow().iter().filter(|c| **c == call).count()
    }
}

impl ListenerHost for MockListenerHost {
    fn attach(&mut self, modality: InputModality) -> Result<(), ListenerError> {
        if self.fail_attach {
            return Err(ListenerError::Unavailable {
                reason: "no document",
            });
        }
        self.calls.borrow_mut().push(HostCall::Attach(modality));
        Ok(())
    }

    fn detach(&mut self, modality: InputModality) -> Result<(), ListenerError> {
        self.calls.borrow_mut().push(HostCall::Detach(modality));
        Ok(())
    }
}
