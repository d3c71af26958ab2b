//! # Closure Subscribers
//!
//! [`Closure`] is the most general variant: any value implementing `Fn` with
//! a matching signature, including closures that capture state and adaptors
//! around functions or bound methods. [`TryClosure`] is the fallible form,
//! whose `Err` becomes [`InvokeError::Failed`].
//!
//! # Argument Types
//!
//! The signature is checked through `Invocable`, not through an `Fn` bound
//! on the constructor, so closure parameters need type annotations when
//! their bodies use them:
//!
//! ```rust,ignore
//! let square = Closure::new(|x: i32| x * x);
//! let parse = TryClosure::new(|s: String| s.parse::<u16>());
//! ```

use crate::{
    error::{BoxError, InvokeError},
    invocable::Invocable,
};
use std::fmt;

/// An arbitrary `Fn` value stored by move.
#[derive(Clone, Copy)]
pub struct Closure<F> {
    func: F,
}

impl<F> Closure<F> {
    /// Wraps a callable value.
    pub const fn new(func: F) -> Self {
        Self { func }
    }

    /// Unwraps the callable value.
    pub fn into_inner(self) -> F {
        self.func
    }
}

impl<F> fmt::Debug for Closure<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Closure")
            .field(&std::any::type_name::<F>())
            .finish()
    }
}

/// A fallible `Fn` value stored by move.
#[derive(Clone, Copy)]
pub struct TryClosure<F> {
    func: F,
}

impl<F> TryClosure<F> {
    /// Wraps a callable value returning `Result`.
    pub const fn new(func: F) -> Self {
        Self { func }
    }

    /// Unwraps the callable value.
    pub fn into_inner(self) -> F {
        self.func
    }
}

impl<F> fmt::Debug for TryClosure<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TryClosure")
            .field(&std::any::type_name::<F>())
            .finish()
    }
}

/// Macro to implement Invocable for Closure and TryClosure with N arguments.
macro_rules! impl_closure_invocable {
    ($($A:ident),*) => {
        impl<F, R, $($A,)*> Invocable<($($A,)*), R> for Closure<F>
        where
            F: Fn($($A),*) -> R + Send + Sync + 'static,
        {
            #[allow(non_snake_case)]
            fn invoke(&self, ($($A,)*): ($($A,)*)) -> Result<R, InvokeError> {
                Ok((self.func)($($A),*))
            }
        }

        impl<F, R, E, $($A,)*> Invocable<($($A,)*), R> for TryClosure<F>
        where
            F: Fn($($A),*) -> Result<R, E> + Send + Sync + 'static,
            E: Into<BoxError>,
        {
            #[allow(non_snake_case)]
            fn invoke(&self, ($($A,)*): ($($A,)*)) -> Result<R, InvokeError> {
                (self.func)($($A),*).map_err(|e| InvokeError::Failed(e.into()))
            }
        }
    };
}

impl_closure_invocable!();
impl_closure_invocable!(A1);
impl_closure_invocable!(A1, A2);
impl_closure_invocable!(A1, A2, A3);
impl_closure_invocable!(A1, A2, A3, A4);
impl_closure_invocable!(A1, A2, A3, A4, A5);
impl_closure_invocable!(A1, A2, A3, A4, A5, A6);
impl_closure_invocable!(A1, A2, A3, A4, A5, A6, A7);
impl_closure_invocable!(A1, A2, A3, A4, A5, A6, A7, A8);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    #[test]
    fn test_closure_captures_state() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let c = Closure::new(move || counter.fetch_add(1, Ordering::SeqCst) + 1);

        assert_eq!(Invocable::<(), usize>::invoke(&c, ()).unwrap(), 1);
        assert_eq!(Invocable::<(), usize>::invoke(&c, ()).unwrap(), 2);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_closure_multiple_arguments() {
        let c = Closure::new(|a: u8, b: u8, c: u8| u32::from(a) + u32::from(b) + u32::from(c));
        assert_eq!(c.invoke((1, 2, 3)).unwrap(), 6);
    }

    #[test]
    fn test_try_closure_maps_error() {
        let parse = TryClosure::new(|s: String| s.parse::<u16>());

        assert_eq!(parse.invoke(("80".to_string(),)).unwrap(), 80);
        let err = parse.invoke(("eighty".to_string(),)).unwrap_err();
        assert!(matches!(err, InvokeError::Failed(_)));
    }
}
