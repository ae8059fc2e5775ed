//! Document-level mouse listeners for drags that leave the bound element.

use crate::events::{dispatch, EventTranslator, DOCUMENT_EVENTS};
use std::cell::RefCell;
use std::rc::Weak;
use swipekit_foundation::{InputModality, ListenerError, ListenerHost, SwipeToReveal};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event};

/// [`ListenerHost`] that registers `mousemove`/`mouseup` on a document.
///
/// The handler holds only a weak reference to its detector, so the detector
/// can own this host without forming a cycle.
pub struct DocumentListenerHost {
    document: Document,
    handler: Closure<dyn FnMut(Event)>,
}

impl DocumentListenerHost {
    pub fn new(document: Document, target: Weak<RefCell<SwipeToReveal>>) -> Self {
        let mut translator = EventTranslator::default();
        let handler = Closure::wrap(Box::new(move |event: Event| {
            dispatch(&target, &mut translator, &event);
        }) as Box<dyn FnMut(Event)>);
        Self { document, handler }
    }

    fn remove(&self, names: &[&'static str]) -> Result<(), JsValue> {
        for name in names {
            self.document
                .remove_event_listener_with_callback(name, self.handler.as_ref().unchecked_ref())?;
        }
        Ok(())
    }
}

impl ListenerHost for DocumentListenerHost {
    fn attach(&mut self, modality: InputModality) -> Result<(), ListenerError> {
        for (index, name) in DOCUMENT_EVENTS.iter().enumerate() {
            let added = self
                .document
                .add_event_listener_with_callback(name, self.handler.as_ref().unchecked_ref());
            if let Err(err) = added {
                // Roll back so a failed attach leaves nothing registered.
                if let Err(rollback) = self.remove(&DOCUMENT_EVENTS[..index]) {
                    log::warn!("could not roll back document listeners: {rollback:?}");
                }
                return Err(ListenerError::Rejected {
                    modality,
                    reason: format!("{name}: {err:?}"),
                });
            }
        }
        Ok(())
    }

    fn detach(&mut self, modality: InputModality) -> Result<(), ListenerError> {
        self.remove(&DOCUMENT_EVENTS)
            .map_err(|err| ListenerError::Rejected {
                modality,
                reason: format!("{err:?}"),
            })
    }
}
