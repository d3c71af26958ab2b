//! # Call Signatures
//!
//! A signature is written as an argument tuple plus a return type: the
//! signature `fn(u32, &'static str) -> bool` is `Signature<bool>` for
//! `(u32, &'static str)`.
//!
//! [`Signature`] is implemented for tuples of up to eight elements. It names
//! the plain function pointer type and the method pointer type matching that
//! signature, so constructors such as [`FreeFunction::new`] accept a function
//! item directly and let it coerce:
//!
//! ```rust,ignore
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // `double` coerces to `fn(i32) -> i32`
//! let f = FreeFunction::<(i32,), i32>::new(double);
//! ```
//!
//! [`FreeFunction::new`]: crate::FreeFunction::new

/// Function-pointer plumbing for one argument tuple and return type.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a supported argument tuple",
    label = "arguments must be a tuple of at most 8 `'static` types",
    note = "A single argument is written `(T,)`; no arguments is `()`."
)]
pub trait Signature<R>: Sized + 'static {
    /// The plain function pointer type, e.g. `fn(A, B) -> R`.
    type FnPtr: Copy + Send + Sync + 'static;

    /// The method pointer type for a receiver `T`, e.g. `fn(&T, A, B) -> R`.
    type MethodPtr<T: 'static>: Copy + Send + Sync + 'static;

    /// Calls `f` with the destructured argument tuple.
    fn call_fn(f: Self::FnPtr, args: Self) -> R;

    /// Calls `method` on `target` with the destructured argument tuple.
    fn call_method<T: 'static>(method: Self::MethodPtr<T>, target: &T, args: Self) -> R;
}

/// Macro to implement Signature for tuples of arguments.
macro_rules! impl_signature {
    ($($A:ident),*) => {
        impl<R: 'static, $($A: 'static,)*> Signature<R> for ($($A,)*) {
            type FnPtr = fn($($A),*) -> R;
            type MethodPtr<T: 'static> = fn(&T, $($A),*) -> R;

            #[allow(non_snake_case)]
            fn call_fn(f: Self::FnPtr, ($($A,)*): Self) -> R {
                f($($A),*)
            }

            #[allow(non_snake_case)]
            fn call_method<T: 'static>(
                method: Self::MethodPtr<T>,
                target: &T,
                ($($A,)*): Self,
            ) -> R {
                method(target, $($A),*)
            }
        }
    };
}

impl_signature!();
impl_signature!(A1);
impl_signature!(A1, A2);
impl_signature!(A1, A2, A3);
impl_signature!(A1, A2, A3, A4);
impl_signature!(A1, A2, A3, A4, A5);
impl_signature!(A1, A2, A3, A4, A5, A6);
impl_signature!(A1, A2, A3, A4, A5, A6, A7);
impl_signature!(A1, A2, A3, A4, A5, A6, A7, A8);
