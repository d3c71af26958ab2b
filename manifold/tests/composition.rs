use manifold::{Action, Delegate, Multicast};
use parking_lot::Mutex;
use std::sync::Arc;

mod common;
use common::{constants, log_id, registry_of};

#[test]
fn test_compose_appends_in_other_order() {
    let a = registry_of(&constants(&[1, 2]));
    let b = registry_of(&constants(&[3, 4]));

    a.compose(&b);
    assert_eq!(a.invoke(()).unwrap(), vec![1, 2, 3, 4]);
    assert_eq!(b.invoke(()).unwrap(), vec![3, 4]);
}

#[test]
fn test_decompose_restores_previous_state() {
    let originals = constants(&[1, 2]);
    let a = registry_of(&originals);
    let b = registry_of(&constants(&[3, 4]));

    a.compose(&b).decompose(&b);
    assert_eq!(a.handles(), originals);
    assert_eq!(b.len(), 2);
}

#[test]
fn test_decompose_skips_missing() {
    let a = registry_of(&constants(&[1]));
    let b = registry_of(&constants(&[2, 3]));

    a.decompose(&b);
    assert_eq!(a.invoke(()).unwrap(), vec![1]);
}

#[test]
fn test_compose_with_self_doubles() {
    let a = registry_of(&constants(&[1, 2]));
    a.compose(&a);
    assert_eq!(a.invoke(()).unwrap(), vec![1, 2, 1, 2]);
}

#[test]
fn test_handles_shared_between_registries() {
    let shared = constants(&[7]);
    let a = registry_of(&shared);
    let b = registry_of(&shared);
    assert_eq!(shared[0].strong_count(), 3);

    drop(a);
    assert_eq!(shared[0].strong_count(), 2);
    assert_eq!(b.invoke(()).unwrap(), vec![7]);
}

#[test]
fn test_take_moves_everything_out() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let source = Action::<()>::named("source");
    source.add(log_id(&log, 1)).add(log_id(&log, 2));

    let moved = source.take();
    assert!(source.is_empty());
    source.invoke(()).unwrap();
    assert!(log.lock().is_empty());

    moved.invoke(()).unwrap();
    assert_eq!(*log.lock(), vec![1, 2]);

    // The source stays usable.
    source.add(log_id(&log, 3));
    source.invoke(()).unwrap();
    assert_eq!(*log.lock(), vec![1, 2, 3]);
}

#[test]
fn test_take_on_delegate_keeps_sequence() {
    let handles = constants(&[4, 5, 6]);
    let source = registry_of(&handles);

    let moved: Delegate<(), i32> = source.take();
    assert_eq!(moved.handles(), handles);
    assert!(source.invoke(()).unwrap().is_empty());
}

#[test]
fn test_duplicate_is_independent() {
    let handles = constants(&[1, 2]);
    let original = registry_of(&handles);
    let copy = original.duplicate();

    copy.remove(&handles[0]);
    assert_eq!(original.invoke(()).unwrap(), vec![1, 2]);
    assert_eq!(copy.invoke(()).unwrap(), vec![2]);
}

#[test]
fn test_operator_compose() {
    let mut a = registry_of(&constants(&[1]));
    let b = registry_of(&constants(&[2]));
    a += &b;
    assert_eq!(a.invoke(()).unwrap(), vec![1, 2]);
    a -= &b;
    assert_eq!(a.invoke(()).unwrap(), vec![1]);
}
