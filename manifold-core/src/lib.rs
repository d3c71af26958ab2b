//! # manifold-core
//!
//! Core traits for the Manifold multicast delegate library.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! code that only needs to produce subscribers, without depending on the
//! registries in `manifold-std`.
//!
//! # Two-Layer Architecture
//!
//! ## Layer 1: Capability ([`Invocable`])
//!
//! One object-safe method, `invoke(args) -> Result<R, InvokeError>`. Every
//! kind of subscriber satisfies it:
//!
//! - [`FreeFunction`] - plain function pointers
//! - [`BoundMethod`] - a method pointer on a non-owned receiver
//! - [`Closure`] / [`TryClosure`] - arbitrary `Fn` values
//!
//! ## Layer 2: Sharing ([`Handle`])
//!
//! A reference-counted, type-erased `Invocable`. Registries store handles and
//! remove them by identity.
//!
//! # Signatures
//!
//! A signature is an argument tuple plus a return type; [`Signature`] maps it
//! to the matching function and method pointer types.
//!
//! # Error Types
//!
//! - [`ManifoldError`] - Top-level error type
//! - [`InvokeError`] - Errors raised by one subscriber

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod closure;
mod error;
mod function;
mod handle;
mod invocable;
mod method;
mod signature;

// Re-exports
pub use closure::{Closure, TryClosure};
pub use error::{BoxError, InvokeError, ManifoldError};
pub use function::FreeFunction;
pub use handle::Handle;
pub use invocable::Invocable;
pub use method::BoundMethod;
pub use signature::Signature;
