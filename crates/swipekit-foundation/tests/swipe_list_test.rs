//! Friend-list style rows: swipe to reveal, remove, unmount.

use std::cell::RefCell;
use std::rc::Rc;
use swipekit_foundation::{
    InputModality, RevealState, SwipeConfig, SwipeInputEvent, SwipeList, SwipeResult,
    SwipeToReveal, SwipeableItem,
};
use swipekit_testing::{recorded_detector, RecordingListenerHost, SwipeRobot};

type Removed = Rc<RefCell<Vec<u32>>>;

fn row(id: u32, removed: &Removed) -> (SwipeableItem<u32>, RecordingListenerHost) {
    let (detector, host) = recorded_detector(SwipeConfig::default());
    let removed = removed.clone();
    let item = SwipeableItem::new(id, detector, move |id: &u32| removed.borrow_mut().push(*id));
    (item, host)
}

fn friends(ids: &[u32]) -> (SwipeList<u32>, Vec<RecordingListenerHost>, Removed) {
    let removed = Removed::default();
    let mut list = SwipeList::new();
    let mut hosts = Vec::new();
    for &id in ids {
        let (item, host) = row(id, &removed);
        list.push(item);
        hosts.push(host);
    }
    (list, hosts, removed)
}

#[test]
fn swipe_reveals_only_the_touched_row() {
    let (mut list, _hosts, _removed) = friends(&[1, 2, 3]);

    let item = list.get_mut(&2).expect("row 2");
    SwipeRobot::touch(item.detector_mut()).swipe_left();

    assert_eq!(list.open_ids().copied().collect::<Vec<_>>(), vec![2]);
    assert_eq!(list.get(&2).map(SwipeableItem::offset), Some(-80.0));
    assert_eq!(list.get(&1).map(SwipeableItem::offset), Some(0.0));
}

#[test]
fn item_remove_notifies_then_closes() {
    let removed = Removed::default();
    let (mut item, _host) = row(7, &removed);
    SwipeRobot::touch(item.detector_mut()).swipe_left();
    assert_eq!(item.reveal_state(), RevealState::Open);

    item.remove();

    assert_eq!(*removed.borrow(), vec![7]);
    assert_eq!(item.reveal_state(), RevealState::Closed);
}

#[test]
fn list_remove_drops_row_and_reports_id() {
    let (mut list, _hosts, removed) = friends(&[1, 2, 3]);

    let item = list.get_mut(&2).expect("row 2");
    SwipeRobot::touch(item.detector_mut()).swipe_left();
    let gone = list.remove(&2).expect("row removed");

    assert_eq!(*gone.id(), 2);
    assert_eq!(*removed.borrow(), vec![2]);
    assert_eq!(list.ids().copied().collect::<Vec<_>>(), vec![1, 3]);
    assert!(list.remove(&2).is_none());
}

#[test]
fn removing_row_mid_drag_releases_its_listeners() {
    let (mut list, hosts, _removed) = friends(&[1, 2]);

    list.dispatch(&1, SwipeInputEvent::down(InputModality::Mouse, 200.0));
    list.dispatch(&1, SwipeInputEvent::moved(InputModality::Mouse, 40.0));
    assert!(hosts[0].is_live());

    let gone = list.remove(&1).expect("row removed");

    assert!(hosts[0].is_balanced());
    assert!(!gone.detector().is_tracking());
    assert_eq!(gone.reveal_state(), RevealState::Closed);
    assert!(hosts[1].calls().is_empty());
}

#[test]
fn dispatch_to_unknown_row_is_ignored() {
    let (mut list, _hosts, _removed) = friends(&[1]);
    let result = list.dispatch(&99, SwipeInputEvent::down(InputModality::Touch, 0.0));
    assert_eq!(result, SwipeResult::None);
}

#[test]
fn dispatch_runs_full_gesture() {
    let (mut list, _hosts, _removed) = friends(&[1]);

    list.dispatch(&1, SwipeInputEvent::down(InputModality::Touch, 200.0));
    list.dispatch(&1, SwipeInputEvent::moved(InputModality::Touch, 120.0));
    let result = list.dispatch(&1, SwipeInputEvent::up(InputModality::Touch, None));

    assert_eq!(result, SwipeResult::Left);
    assert_eq!(list.open_ids().count(), 1);
}

#[test]
fn close_all_closes_open_rows() {
    let (mut list, _hosts, _removed) = friends(&[1, 2, 3]);
    for id in [1, 3] {
        let item = list.get_mut(&id).expect("row");
        SwipeRobot::touch(item.detector_mut()).swipe_left();
    }

    assert_eq!(list.close_all(), 2);
    assert_eq!(list.open_ids().count(), 0);
    assert_eq!(list.close_all(), 0);
}

#[test]
fn push_with_existing_id_replaces_row() {
    let removed = Removed::default();
    let mut list = SwipeList::new();
    let (first, first_host) = row(5, &removed);
    list.push(first);
    let item = list.get_mut(&5).expect("row");
    SwipeRobot::mouse(item.detector_mut()).press(100.0);

    let replacement = SwipeableItem::new(5, SwipeToReveal::new(SwipeConfig::default()), |_: &u32| {});
    list.push(replacement);

    assert_eq!(list.len(), 1);
    assert!(first_host.is_balanced());
    assert!(removed.borrow().is_empty());
}
