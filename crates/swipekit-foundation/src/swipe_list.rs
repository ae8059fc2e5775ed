//! Ordered collection of swipeable rows keyed by item id.

use crate::nodes::input::{SwipeInputEvent, SwipeResult};
use crate::swipeable_item::SwipeableItem;

pub struct SwipeList<Id> {
    items: Vec<SwipeableItem<Id>>,
}

impl<Id: PartialEq> SwipeList<Id> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends a row. A row with the same id is replaced in place.
    pub fn push(&mut self, item: SwipeableItem<Id>) {
        match self.position(item.id()) {
            Some(index) => {
                let mut old = std::mem::replace(&mut self.items[index], item);
                old.detector_mut().on_detach();
            }
            None => self.items.push(item),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &Id) -> Option<&SwipeableItem<Id>> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: &Id) -> Option<&mut SwipeableItem<Id>> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SwipeableItem<Id>> {
        self.items.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &Id> {
        self.items.iter().map(SwipeableItem::id)
    }

    /// Ids of rows whose panel is currently revealed.
    pub fn open_ids(&self) -> impl Iterator<Item = &Id> {
        self.items
            .iter()
            .filter(|item| item.reveal_state().is_open())
            .map(SwipeableItem::id)
    }

    /// Routes an input event to the row with `id`.
    pub fn dispatch(&mut self, id: &Id, event: SwipeInputEvent) -> SwipeResult {
        match self.get_mut(id) {
            Some(item) => item.detector_mut().handle_event(event),
            None => SwipeResult::None,
        }
    }

    /// Runs the row's remove action and unmounts it.
    ///
    /// The list has already dropped the row from its order when `on_remove`
    /// runs, so the callback only needs to update state outside the list.
    ///
    /// Any drag in progress on the row is abandoned and its listeners are
    /// released. Returns the unmounted row, or `None` if no row has `id`.
    pub fn remove(&mut self, id: &Id) -> Option<SwipeableItem<Id>> {
        let index = self.position(id)?;
        let mut item = self.items.remove(index);
        item.remove();
        item.detector_mut().on_detach();
        Some(item)
    }

    /// Closes every open row.
    pub fn close_all(&mut self) -> usize {
        let mut closed = 0;
        for item in &mut self.items {
            if item.detector_mut().request_close() {
                closed += 1;
            }
        }
        closed
    }

    fn position(&self, id: &Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}

impl<Id: PartialEq> Default for SwipeList<Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id: std::fmt::Debug> std::fmt::Debug for SwipeList<Id> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}
