//! Bound method subscribers.
//!
//! A [`BoundMethod`] pairs a method pointer with a `Weak` reference to its
//! receiver. The registry never keeps the receiver alive: once the last
//! `Arc` to it is dropped, the subscriber reports itself as expired and any
//! invocation fails with [`InvokeError::TargetDropped`].
//!
//! Methods take `&self`, so receivers that need to mutate state use interior
//! mutability.

use crate::{
    error::{InvokeError, ManifoldError},
    invocable::Invocable,
    signature::Signature,
};
use std::{
    fmt,
    sync::{Arc, Weak},
};

/// A method pointer bound to a non-owned receiver.
///
/// # Example
///
/// ```rust,ignore
/// struct Counter(AtomicUsize);
///
/// impl Counter {
///     fn bump(&self, by: usize) -> usize {
///         self.0.fetch_add(by, Ordering::SeqCst) + by
///     }
/// }
///
/// let counter = Arc::new(Counter(AtomicUsize::new(0)));
/// let bound = BoundMethod::<_, (usize,), usize>::bind(&counter, Counter::bump);
/// assert_eq!(bound.invoke((2,))?, 2);
/// ```
pub struct BoundMethod<T: 'static, Args: Signature<R>, R> {
    target: Weak<T>,
    method: Args::MethodPtr<T>,
}

impl<T, Args, R> BoundMethod<T, Args, R>
where
    T: Send + Sync + 'static,
    Args: Signature<R>,
{
    /// Binds `method` to a live receiver.
    pub fn bind(target: &Arc<T>, method: Args::MethodPtr<T>) -> Self {
        Self {
            target: Arc::downgrade(target),
            method,
        }
    }

    /// Binds `method` to a weak receiver, rejecting one that is already gone.
    pub fn new(target: &Weak<T>, method: Args::MethodPtr<T>) -> Result<Self, ManifoldError> {
        if target.strong_count() == 0 {
            return Err(ManifoldError::InvalidCallable("bound method target is not alive"));
        }
        Ok(Self {
            target: target.clone(),
            method,
        })
    }

    /// Returns the receiver, if it is still alive.
    pub fn target(&self) -> Option<Arc<T>> {
        self.target.upgrade()
    }
}

impl<T: 'static, Args: Signature<R>, R> Clone for BoundMethod<T, Args, R> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            method: self.method,
        }
    }
}

impl<T: 'static, Args: Signature<R>, R> fmt::Debug for BoundMethod<T, Args, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundMethod")
            .field("target", &std::any::type_name::<T>())
            .field("alive", &(self.target.strong_count() > 0))
            .finish()
    }
}

impl<T, Args, R> Invocable<Args, R> for BoundMethod<T, Args, R>
where
    T: Send + Sync + 'static,
    Args: Signature<R>,
    R: 'static,
{
    fn invoke(&self, args: Args) -> Result<R, InvokeError> {
        let target = self.target.upgrade().ok_or(InvokeError::TargetDropped)?;
        Ok(Args::call_method(self.method, &target, args))
    }

    fn is_expired(&self) -> bool {
        self.target.strong_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI64, Ordering};

    struct Account {
        balance: AtomicI64,
    }

    impl Account {
        fn deposit(&self, amount: i64) -> i64 {
            self.balance.fetch_add(amount, Ordering::SeqCst) + amount
        }
    }

    fn account() -> Arc<Account> {
        Arc::new(Account {
            balance: AtomicI64::new(0),
        })
    }

    #[test]
    fn test_bound_method_dispatches_through_target() {
        let acct = account();
        let bound = BoundMethod::<_, (i64,), i64>::bind(&acct, Account::deposit);

        assert_eq!(bound.invoke((10,)).unwrap(), 10);
        assert_eq!(bound.invoke((5,)).unwrap(), 15);
        assert_eq!(acct.balance.load(Ordering::SeqCst), 15);
    }

    #[test]
    fn test_bound_method_does_not_own_target() {
        let acct = account();
        let bound = BoundMethod::<_, (i64,), i64>::bind(&acct, Account::deposit);
        assert_eq!(Arc::strong_count(&acct), 1);

        drop(acct);
        assert!(bound.is_expired());
        assert!(bound.target().is_none());
        assert!(matches!(
            bound.invoke((1,)),
            Err(InvokeError::TargetDropped)
        ));
    }

    #[test]
    fn test_new_rejects_dead_target() {
        let weak = Arc::downgrade(&account());
        let err = BoundMethod::<_, (i64,), i64>::new(&weak, Account::deposit).unwrap_err();
        assert!(matches!(err, ManifoldError::InvalidCallable(_)));
    }

    #[test]
    fn test_new_accepts_live_weak() {
        let acct = account();
        let bound =
            BoundMethod::<_, (i64,), i64>::new(&Arc::downgrade(&acct), Account::deposit).unwrap();
        assert_eq!(bound.invoke((3,)).unwrap(), 3);
    }
}
