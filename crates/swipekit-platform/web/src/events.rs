//! DOM event names and their translation into swipe input.

use std::cell::RefCell;
use std::rc::Weak;
use swipekit_foundation::{InputModality, PointerEventKind, SwipeInputEvent, SwipeToReveal};
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, TouchEvent};

/// Events registered on the bound element for the element's whole lifetime.
pub const ELEMENT_EVENTS: [&str; 5] = [
    "touchstart",
    "touchmove",
    "touchend",
    "touchcancel",
    "mousedown",
];

/// Events registered on the document only while a mouse drag is in progress.
pub const DOCUMENT_EVENTS: [&str; 2] = ["mousemove", "mouseup"];

/// Maps a DOM event type to the modality and phase it represents.
pub fn event_kind(event_type: &str) -> Option<(InputModality, PointerEventKind)> {
    let kind = match event_type {
        "touchstart" => (InputModality::Touch, PointerEventKind::Down),
        "touchmove" => (InputModality::Touch, PointerEventKind::Move),
        "touchend" => (InputModality::Touch, PointerEventKind::Up),
        "touchcancel" => (InputModality::Touch, PointerEventKind::Cancel),
        "mousedown" => (InputModality::Mouse, PointerEventKind::Down),
        "mousemove" => (InputModality::Mouse, PointerEventKind::Move),
        "mouseup" => (InputModality::Mouse, PointerEventKind::Up),
        _ => return None,
    };
    Some(kind)
}

/// `MouseEvent.button` value of the primary (usually left) button.
const PRIMARY_BUTTON: i16 = 0;

/// Turns DOM events into [`SwipeInputEvent`]s for one detector.
///
/// Touch input follows a single finger: the first one to land while no other
/// finger is down. Touches from other fingers are dropped, so a second finger
/// can neither start a new session nor end the tracked one. Mouse presses and
/// releases only count for the primary button.
#[derive(Debug, Default)]
pub(crate) struct EventTranslator {
    finger: Option<i32>,
}

impl EventTranslator {
    pub(crate) fn translate(&mut self, event: &Event) -> Option<SwipeInputEvent> {
        let (modality, kind) = event_kind(&event.type_())?;
        match modality {
            InputModality::Touch => {
                let event = event.dyn_ref::<TouchEvent>()?;
                let list = event.changed_touches();
                let changed: Vec<(i32, f32)> = (0..list.length())
                    .filter_map(|index| list.get(index))
                    .map(|touch| (touch.identifier(), touch.client_x() as f32))
                    .collect();
                self.touch(kind, &changed, event.touches().length())
            }
            InputModality::Mouse => {
                let event = event.dyn_ref::<MouseEvent>()?;
                self.mouse(kind, event.button(), event.client_x() as f32)
            }
        }
    }

    /// Translates a touch event given its changed touches as
    /// `(identifier, clientX)` pairs and the number of touches still on the
    /// surface.
    pub(crate) fn touch(
        &mut self,
        kind: PointerEventKind,
        changed: &[(i32, f32)],
        on_surface: u32,
    ) -> Option<SwipeInputEvent> {
        let modality = InputModality::Touch;
        if kind == PointerEventKind::Down {
            // Every finger on the surface just landed, so a tracked finger
            // whose touchend never arrived is gone.
            let others_down = on_surface as usize > changed.len();
            if self.finger.is_some() && others_down {
                log::trace!("ignoring extra finger on swipe row");
                return None;
            }
            let &(finger, x) = changed.first()?;
            self.finger = Some(finger);
            return Some(SwipeInputEvent::down(modality, x));
        }

        let finger = self.finger?;
        let &(_, x) = changed.iter().find(|(id, _)| *id == finger)?;
        match kind {
            PointerEventKind::Move => Some(SwipeInputEvent::moved(modality, x)),
            // The last touchmove is the final position.
            PointerEventKind::Up => {
                self.finger = None;
                Some(SwipeInputEvent::up(modality, None))
            }
            PointerEventKind::Cancel => {
                self.finger = None;
                Some(SwipeInputEvent::cancel(modality))
            }
            PointerEventKind::Down => None,
        }
    }

    pub(crate) fn mouse(
        &mut self,
        kind: PointerEventKind,
        button: i16,
        x: f32,
    ) -> Option<SwipeInputEvent> {
        let modality = InputModality::Mouse;
        match kind {
            PointerEventKind::Down | PointerEventKind::Up if button != PRIMARY_BUTTON => {
                log::trace!("ignoring mouse button {button}");
                None
            }
            PointerEventKind::Up => Some(SwipeInputEvent::up(modality, Some(x))),
            _ => Some(SwipeInputEvent::new(kind, modality, Some(x))),
        }
    }
}

/// Delivers a DOM event to the detector behind `target`, if it is still alive.
pub(crate) fn dispatch(
    target: &Weak<RefCell<SwipeToReveal>>,
    translator: &mut EventTranslator,
    event: &Event,
) {
    let Some(detector) = target.upgrade() else {
        return;
    };
    let Some(input) = translator.translate(event) else {
        log::trace!("ignoring {} event", event.type_());
        return;
    };
    let borrowed = detector.try_borrow_mut();
    match borrowed {
        Ok(mut detector) => {
            detector.handle_event(input);
        }
        Err(_) => log::warn!("dropping {} event: swipe detector is busy", event.type_()),
    }
}
