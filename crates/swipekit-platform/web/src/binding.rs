//! Element binding for a single swipeable row.

use crate::document::DocumentListenerHost;
use crate::events::{dispatch, EventTranslator, ELEMENT_EVENTS};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use swipekit_foundation::{RevealCallbacks, RevealState, SwipeConfig, SwipeToReveal};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

/// Live binding between a DOM element and its swipe detector.
///
/// Dropping the binding unregisters the element listeners and tears the
/// detector down, which also removes any document listeners left by an
/// unfinished mouse drag.
pub struct SwipeBinding {
    element: Element,
    handler: Closure<dyn FnMut(Event)>,
    registered: Vec<&'static str>,
    detector: Rc<RefCell<SwipeToReveal>>,
}

/// Attaches swipe handling to `element`.
///
/// Registers touch handlers and `mousedown` on the element; document
/// `mousemove`/`mouseup` are only registered while a mouse drag is active.
pub fn bind(
    element: &Element,
    config: SwipeConfig,
    callbacks: RevealCallbacks,
) -> Result<SwipeBinding, JsValue> {
    let window = web_sys::window().ok_or("no global window exists")?;
    let document = window.document().ok_or("should have a document on window")?;

    let detector = Rc::new_cyclic(|weak: &Weak<RefCell<SwipeToReveal>>| {
        let host = DocumentListenerHost::new(document, weak.clone());
        RefCell::new(
            SwipeToReveal::with_listener_host(config, Box::new(host)).with_callbacks(callbacks),
        )
    });

    let handler = {
        let target = Rc::downgrade(&detector);
        let mut translator = EventTranslator::default();
        Closure::wrap(Box::new(move |event: Event| {
            dispatch(&target, &mut translator, &event);
        }) as Box<dyn FnMut(Event)>)
    };

    let mut binding = SwipeBinding {
        element: element.clone(),
        handler,
        registered: Vec::with_capacity(ELEMENT_EVENTS.len()),
        detector,
    };
    // On error the partially registered binding is dropped and unregisters itself.
    for name in ELEMENT_EVENTS {
        binding
            .element
            .add_event_listener_with_callback(name, binding.handler.as_ref().unchecked_ref())?;
        binding.registered.push(name);
    }
    log::debug!("bound swipe handlers to <{}>", element.tag_name());
    Ok(binding)
}

/// Accessors return `None`/`false` while the detector is busy, which is the
/// case inside [`RevealCallbacks`] callbacks.
impl SwipeBinding {
    pub fn reveal_state(&self) -> Option<RevealState> {
        read(&self.detector, SwipeToReveal::reveal_state)
    }

    /// Horizontal offset to apply to the row content, in CSS pixels.
    pub fn offset(&self) -> Option<f32> {
        read(&self.detector, SwipeToReveal::offset)
    }

    /// Closes the panel; call after the revealed action has run.
    pub fn request_close(&self) -> bool {
        close(&self.detector)
    }

    pub fn detector(&self) -> Rc<RefCell<SwipeToReveal>> {
        self.detector.clone()
    }
}

fn read<T>(detector: &RefCell<SwipeToReveal>, get: impl FnOnce(&SwipeToReveal) -> T) -> Option<T> {
    match detector.try_borrow() {
        Ok(detector) => Some(get(&detector)),
        Err(_) => {
            log::warn!("swipe detector is busy; state unavailable");
            None
        }
    }
}

fn close(detector: &RefCell<SwipeToReveal>) -> bool {
    match detector.try_borrow_mut() {
        Ok(mut detector) => detector.request_close(),
        Err(_) => {
            log::warn!("cannot close swipe row while its detector is busy");
            false
        }
    }
}

impl Drop for SwipeBinding {
    fn drop(&mut self) {
        for name in self.registered.drain(..) {
            if let Err(err) = self
                .element
                .remove_event_listener_with_callback(name, self.handler.as_ref().unchecked_ref())
            {
                log::warn!("could not remove {name} listener: {err:?}");
            }
        }
        match self.detector.try_borrow_mut() {
            Ok(mut detector) => detector.on_detach(),
            Err(_) => log::warn!("swipe detector busy during unbind; teardown deferred to drop"),
        }
    }
}
