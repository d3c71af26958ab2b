//! # Invocation Capability (Invocable)
//!
//! The single capability every subscriber shares: "call me with these
//! arguments and give back a result". Registries store nothing but
//! type-erased [`Invocable`]s, so free functions, bound methods and closures
//! sit side by side in the same list.
//!
//! # Variants
//!
//! - [`FreeFunction`] - a plain function pointer
//! - [`BoundMethod`] - a method pointer plus a non-owning target reference
//! - [`Closure`] / [`TryClosure`] - any `Fn` value, stored by move
//!
//! Implementing [`Invocable`] by hand is the escape hatch for subscribers that
//! don't fit any of these.
//!
//! [`FreeFunction`]: crate::FreeFunction
//! [`BoundMethod`]: crate::BoundMethod
//! [`Closure`]: crate::Closure
//! [`TryClosure`]: crate::TryClosure

use crate::error::InvokeError;

/// A callable target with the signature `Args -> R`.
///
/// `Args` is always a tuple; see [`Signature`](crate::Signature).
///
/// The trait is object safe. Registries hold it as
/// `Arc<dyn Invocable<Args, R>>` through [`Handle`](crate::Handle).
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be invoked as `{Args} -> {R}`",
    label = "missing `Invocable<{Args}, {R}>` implementation",
    note = "Closures must be wrapped with `Closure::new`; function items with `FreeFunction::new`."
)]
pub trait Invocable<Args, R>: Send + Sync + 'static {
    /// Calls the target.
    fn invoke(&self, args: Args) -> Result<R, InvokeError>;

    /// Whether this subscriber can never succeed again.
    ///
    /// Only targets with a non-owning reference ever expire.
    fn is_expired(&self) -> bool {
        false
    }
}

impl<Args, R> Invocable<Args, R> for Box<dyn Invocable<Args, R>>
where
    Args: 'static,
    R: 'static,
{
    fn invoke(&self, args: Args) -> Result<R, InvokeError> {
        (**self).invoke(args)
    }

    fn is_expired(&self) -> bool {
        (**self).is_expired()
    }
}
