//! # manifold - Multicast Delegates for Rust
//!
//! `manifold` is a multicast callback library. A [`Delegate`] holds an
//! ordered list of subscribers that share one signature; invoking it calls
//! every subscriber with the same arguments and collects their results.
//! [`Action`] is the form for subscribers that return nothing.
//!
//! Subscribers may be plain functions, methods bound to a receiver the
//! delegate does not own, or closures. Each registration is a [`Handle`];
//! keep it to remove the subscriber later.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use manifold::prelude::*;
//!
//! fn one() -> i32 { 1 }
//! fn two() -> i32 { 2 }
//!
//! let d = Delegate::<(), i32>::new();
//! let f1 = d.subscribe(FreeFunction::<(), i32>::new(one));
//! d.subscribe(FreeFunction::<(), i32>::new(two));
//! assert_eq!(d.invoke(())?, vec![1, 2]);
//!
//! d.remove(&f1);
//! assert_eq!(d.invoke(())?, vec![2]);
//! ```
//!
//! ## Threads
//!
//! Registries are `Send + Sync`. Every operation on one registry is
//! serialized by its internal mutex, including the whole of `invoke`. A
//! subscriber must not call back into the registry that is invoking it.
//!
//! ## Features
//!
//! - `tracing` (default): structured logs for registration changes, fan-out
//!   and subscriber failures, plus the [`Traced`](adapters::Traced) adapter spans.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use manifold_core::{
    // Error types
    BoxError,
    // Subscribers
    BoundMethod,
    Closure,
    FreeFunction,
    // Sharing
    Handle,
    // Capability
    Invocable,
    InvokeError,
    ManifoldError,
    Signature,
    TryClosure,
};

// Registries
pub use manifold_std::multicast::{Action, Delegate, DelegateBuilder, Multicast, SubscriberList};

/// Subscriber adapters.
pub mod adapters {
    pub use manifold_std::adapters::{Catch, InvocableExt, MapOutput, Traced};
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use manifold_std::testing::*;
}

/// Prelude module - common imports for Manifold.
///
/// # Usage
///
/// ```rust,ignore
/// use manifold::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Action,
        // Adapters
        adapters::InvocableExt,
        // Subscribers
        BoundMethod,
        Closure,
        // Registries
        Delegate,
        FreeFunction,
        Handle,
        // Core traits
        Invocable,
        // Errors
        InvokeError,
        ManifoldError,
        Multicast,
        TryClosure,
    };
}
