//! A list row with a swipe-revealed remove action.

use crate::reveal::RevealState;
use crate::swipe_to_reveal::SwipeToReveal;

type RemoveCallback<Id> = Box<dyn FnMut(&Id)>;

/// One swipeable row.
///
/// The item id is opaque to the gesture logic; it is only handed to the
/// remove callback.
pub struct SwipeableItem<Id> {
    id: Id,
    detector: SwipeToReveal,
    on_remove: RemoveCallback<Id>,
}

impl<Id> SwipeableItem<Id> {
    pub fn new(id: Id, detector: SwipeToReveal, on_remove: impl FnMut(&Id) + 'static) -> Self {
        Self {
            id,
            detector,
            on_remove: Box::new(on_remove),
        }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn detector(&self) -> &SwipeToReveal {
        &self.detector
    }

    pub fn detector_mut(&mut self) -> &mut SwipeToReveal {
        &mut self.detector
    }

    pub fn reveal_state(&self) -> RevealState {
        self.detector.reveal_state()
    }

    pub fn offset(&self) -> f32 {
        self.detector.offset()
    }

    /// Runs the revealed action: notifies `on_remove`, then closes the panel.
    pub fn remove(&mut self) {
        (self.on_remove)(&self.id);
        self.detector.request_close();
    }
}

impl<Id: std::fmt::Debug> std::fmt::Debug for SwipeableItem<Id> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeableItem")
            .field("id", &self.id)
            .field("detector", &self.detector)
            .finish()
    }
}
