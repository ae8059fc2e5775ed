use super::{HostCall, MockListenerHost};
use crate::nodes::input::{InputModality, ListenerLifecycle};

#[test]
fn mouse_acquire_attaches_once() {
    let host = MockListenerHost::new();
    let mut lifecycle = ListenerLifecycle::new(Box::new(host.clone()));

    assert!(lifecycle.acquire(InputModality::Mouse));
    assert!(lifecycle.acquire(InputModality::Mouse));

    assert_eq!(host.calls(), vec![HostCall::Attach(InputModality::Mouse)]);
    assert_eq!(lifecycle.attached_modality(), Some(InputModality::Mouse));
}

#[test]
fn touch_never_needs_document_listeners() {
    let host = MockListenerHost::new();
    let mut lifecycle = ListenerLifecycle::new(Box::new(host.clone()));

    assert!(!lifecycle.acquire(InputModality::Touch));
    assert!(!lifecycle.is_attached());
    assert!(host.calls().is_empty());
}

#[test]
fn release_detaches_once_and_is_safe_to_repeat() {
    let host = MockListenerHost::new();
    let mut lifecycle = ListenerLifecycle::new(Box::new(host.clone()));

    assert!(!lifecycle.release());

    lifecycle.acquire(InputModality::Mouse);
    assert!(lifecycle.release());
    assert!(!lifecycle.release());

    assert_eq!(
        host.calls(),
        vec![
            HostCall::Attach(InputModality::Mouse),
            HostCall::Detach(InputModality::Mouse),
        ]
    );
}

#[test]
fn drop_releases_held_listeners() {
    let host = MockListenerHost::new();
    {
        let mut lifecycle = ListenerLifecycle::new(Box::new(host.clone()));
        lifecycle.acquire(InputModality::Mouse);
    }
    assert_eq!(host.count(HostCall::Attach(InputModality::Mouse)), 1);
    assert_eq!(host.count(HostCall::Detach(InputModality::Mouse)), 1);
}

#[test]
fn drop_without_acquire_does_nothing() {
    let host = MockListenerHost::new();
    drop(ListenerLifecycle::new(Box::new(host.clone())));
    assert!(host.calls().is_empty());
}

#[test]
fn switching_to_touch_releases_mouse_listeners() {
    let host = MockListenerHost::new();
    let mut lifecycle = ListenerLifecycle::new(Box::new(host.clone()));

    lifecycle.acquire(InputModality::Mouse);
    assert!(!lifecycle.acquire(InputModality::Touch));

    assert!(!lifecycle.is_attached());
    assert_eq!(host.count(HostCall::Detach(InputModality::Mouse)), 1);
}

#[test]
fn failed_attach_leaves_nothing_to_release() {
    let host = MockListenerHost::failing();
    let mut lifecycle = ListenerLifecycle::new(Box::new(host.clone()));

    assert!(!lifecycle.acquire(InputModality::Mouse));
    assert!(!lifecycle.is_attached());
    assert!(!lifecycle.release());
    assert!(host.calls().is_empty());
}
