//! Plain function pointer subscribers.

use crate::{
    error::{InvokeError, ManifoldError},
    invocable::Invocable,
    signature::Signature,
};
use std::fmt;

/// Wraps a plain function pointer.
///
/// Stateless beyond the pointer itself, so it is `Copy`.
///
/// # Example
///
/// ```rust,ignore
/// fn on_saved(path: String) { println!("saved {path}"); }
///
/// let f = FreeFunction::<(String,), ()>::new(on_saved);
/// f.invoke(("a.txt".into(),))?;
/// ```
pub struct FreeFunction<Args: Signature<R>, R> {
    function: Args::FnPtr,
}

impl<Args: Signature<R>, R> FreeFunction<Args, R> {
    /// Wraps a function pointer. Function items coerce automatically.
    pub const fn new(function: Args::FnPtr) -> Self {
        Self { function }
    }

    /// Wraps a nullable function pointer, rejecting `None`.
    ///
    /// This is the boundary for pointers handed over by foreign code.
    pub fn try_new(function: Option<Args::FnPtr>) -> Result<Self, ManifoldError> {
        function
            .map(Self::new)
            .ok_or(ManifoldError::InvalidCallable("null function pointer"))
    }

    /// Returns the wrapped pointer.
    pub fn as_fn_ptr(&self) -> Args::FnPtr {
        self.function
    }
}

impl<Args: Signature<R>, R> Clone for FreeFunction<Args, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Args: Signature<R>, R> Copy for FreeFunction<Args, R> {}

impl<Args: Signature<R>, R> fmt::Debug for FreeFunction<Args, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FreeFunction")
            .field("signature", &std::any::type_name::<Args::FnPtr>())
            .finish()
    }
}

impl<Args, R> Invocable<Args, R> for FreeFunction<Args, R>
where
    Args: Signature<R>,
    R: 'static,
{
    fn invoke(&self, args: Args) -> Result<R, InvokeError> {
        Ok(Args::call_fn(self.function, args))
    }
}
