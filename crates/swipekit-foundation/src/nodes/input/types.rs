/// Input channel that produced an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputModality {
    Touch,
    Mouse,
}

impl InputModality {
    /// Whether move/release events for a drag are always delivered to the
    /// element that received the press.
    ///
    /// Touch points stay targeted at their originating element. A mouse drag
    /// can leave the element bounds, so its move/release events must be
    /// observed at document level while the drag is in progress.
    pub fn is_element_scoped(self) -> bool {
        match self {
            InputModality::Touch => true,
            InputModality::Mouse => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A raw input event as delivered by a platform adapter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeInputEvent {
    pub kind: PointerEventKind,
    pub modality: InputModality,
    /// Horizontal position in logical pixels, when the platform reports one.
    pub coordinate: Option<f32>,
}

impl SwipeInputEvent {
    pub fn new(kind: PointerEventKind, modality: InputModality, coordinate: Option<f32>) -> Self {
        Self {
            kind,
            modality,
            coordinate,
        }
    }

    pub fn down(modality: InputModality, coordinate: f32) -> Self {
        Self::new(PointerEventKind::Down, modality, Some(coordinate))
    }

    pub fn moved(modality: InputModality, coordinate: f32) -> Self {
        Self::new(PointerEventKind::Move, modality, Some(coordinate))
    }

    pub fn up(modality: InputModality, coordinate: Option<f32>) -> Self {
        Self::new(PointerEventKind::Up, modality, coordinate)
    }

    pub fn cancel(modality: InputModality) -> Self {
        Self::new(PointerEventKind::Cancel, modality, None)
    }
}
