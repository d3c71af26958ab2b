//! # Shared Subscriber Handle
//!
//! A [`Handle`] is the unit a registry stores: a reference-counted,
//! type-erased [`Invocable`]. Cloning a handle shares the wrapper, so the
//! same subscriber can sit in several registries at once and is freed when
//! the last handle goes away.
//!
//! Equality is identity. Two handles are equal only when they point at the
//! same wrapper allocation, never because their callables look alike:
//!
//! ```rust,ignore
//! let a = Handle::<(), i32>::from_closure(|| 1);
//! let b = Handle::<(), i32>::from_closure(|| 1);
//! assert_eq!(a, a.clone());
//! assert_ne!(a, b);
//! ```

use crate::{
    closure::{Closure, TryClosure},
    error::InvokeError,
    function::FreeFunction,
    invocable::Invocable,
    method::BoundMethod,
    signature::Signature,
};
use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

/// A shared, identity-compared reference to a subscriber.
pub struct Handle<Args, R> {
    inner: Arc<dyn Invocable<Args, R>>,
}

impl<Args: 'static, R: 'static> Handle<Args, R> {
    /// Wraps any invocable.
    pub fn new<I: Invocable<Args, R>>(invocable: I) -> Self {
        Self {
            inner: Arc::new(invocable),
        }
    }

    /// Wraps a closure.
    pub fn from_closure<F>(func: F) -> Self
    where
        Closure<F>: Invocable<Args, R>,
    {
        Self::new(Closure::new(func))
    }

    /// Wraps a fallible closure.
    pub fn try_from_closure<F>(func: F) -> Self
    where
        TryClosure<F>: Invocable<Args, R>,
    {
        Self::new(TryClosure::new(func))
    }

    /// Wraps a plain function pointer.
    pub fn from_fn(function: Args::FnPtr) -> Self
    where
        Args: Signature<R>,
    {
        Self::new(FreeFunction::<Args, R>::new(function))
    }

    /// Wraps a method bound to a non-owned receiver.
    pub fn from_method<T>(target: &Arc<T>, method: Args::MethodPtr<T>) -> Self
    where
        Args: Signature<R>,
        T: Send + Sync + 'static,
    {
        Self::new(BoundMethod::<T, Args, R>::bind(target, method))
    }

    /// Calls the subscriber.
    pub fn invoke(&self, args: Args) -> Result<R, InvokeError> {
        self.inner.invoke(args)
    }

    /// Whether the subscriber can never succeed again.
    pub fn is_expired(&self) -> bool {
        self.inner.is_expired()
    }

    /// Whether both handles refer to the same wrapper.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Returns the number of handles sharing this wrapper.
    pub fn strong_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.inner) as *const ()
    }
}

impl<Args: 'static, R: 'static> Clone for Handle<Args, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<Args: 'static, R: 'static> PartialEq for Handle<Args, R> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<Args: 'static, R: 'static> Eq for Handle<Args, R> {}

impl<Args: 'static, R: 'static> Hash for Handle<Args, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl<Args: 'static, R: 'static> fmt::Debug for Handle<Args, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handle").field(&self.addr()).finish()
    }
}

// A handle is itself a subscriber, forwarding to the shared wrapper.
impl<Args: 'static, R: 'static> Invocable<Args, R> for Handle<Args, R> {
    fn invoke(&self, args: Args) -> Result<R, InvokeError> {
        self.inner.invoke(args)
    }

    fn is_expired(&self) -> bool {
        self.inner.is_expired()
    }
}

impl<Args: Signature<R>, R: 'static> From<FreeFunction<Args, R>> for Handle<Args, R> {
    fn from(function: FreeFunction<Args, R>) -> Self {
        Self::new(function)
    }
}

impl<T, Args, R> From<BoundMethod<T, Args, R>> for Handle<Args, R>
where
    T: Send + Sync + 'static,
    Args: Signature<R>,
    R: 'static,
{
    fn from(method: BoundMethod<T, Args, R>) -> Self {
        Self::new(method)
    }
}

impl<F, Args: 'static, R: 'static> From<Closure<F>> for Handle<Args, R>
where
    Closure<F>: Invocable<Args, R>,
{
    fn from(closure: Closure<F>) -> Self {
        Self::new(closure)
    }
}
