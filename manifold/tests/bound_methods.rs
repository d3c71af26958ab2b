use manifold::{
    BoundMethod, Delegate, FreeFunction, Handle, InvokeError, ManifoldError, Multicast,
};
use std::sync::{Arc, Weak};

mod common;
use common::Counter;

#[test]
fn test_bound_method_dispatches_on_target() {
    let counter = Counter::new(2);
    let bumps = Delegate::<(), u32>::from_method(&counter, Counter::bump);

    assert_eq!(bumps.invoke(()).unwrap(), vec![2]);
    assert_eq!(bumps.invoke(()).unwrap(), vec![4]);
    assert_eq!(*counter.hits.lock(), 4);
}

#[test]
fn test_methods_with_arguments() {
    let counter = Counter::new(1);
    let bumps = Delegate::<(u32,), u32>::new();
    bumps.subscribe(BoundMethod::<Counter, (u32,), u32>::bind(&counter, Counter::bump_by));
    bumps.subscribe(BoundMethod::<Counter, (u32,), u32>::bind(&counter, Counter::bump_by));

    assert_eq!(bumps.invoke((10,)).unwrap(), vec![11, 22]);
}

#[test]
fn test_registry_does_not_own_target() {
    let counter = Counter::new(1);
    let bumps = Delegate::<(), u32>::from_method(&counter, Counter::bump);
    assert_eq!(Arc::strong_count(&counter), 1);

    drop(counter);
    assert!(matches!(bumps.invoke(()), Err(InvokeError::TargetDropped)));
}

#[test]
fn test_prune_expired_keeps_live_subscribers() {
    let gone = Counter::new(1);
    let kept = Counter::new(5);
    let bumps = Delegate::<(), u32>::new();
    bumps.add(Handle::<(), u32>::from_method(&gone, Counter::bump));
    bumps.add(Handle::<(), u32>::from_method(&kept, Counter::bump));
    bumps.connect(|| 0u32);

    drop(gone);
    assert_eq!(bumps.prune_expired(), 1);
    assert_eq!(bumps.invoke(()).unwrap(), vec![5, 0]);
}

#[test]
fn test_invalid_registrations_fail_fast() {
    let dead: Weak<Counter> = Weak::new();
    let err = BoundMethod::<Counter, (), u32>::new(&dead, Counter::bump).unwrap_err();
    assert!(matches!(err, ManifoldError::InvalidCallable(_)));

    let err = FreeFunction::<(), i32>::try_new(None).unwrap_err();
    assert!(matches!(err, ManifoldError::InvalidCallable(_)));
}
