//! # manifold-std
//!
//! Multicast registries built on the Manifold core primitives.
//!
//! This crate provides:
//! - **Registries**: [`Delegate`](multicast::Delegate), [`Action`](multicast::Action)
//!   and the shared [`Multicast`](multicast::Multicast) operations
//! - **Construction**: [`DelegateBuilder`](multicast::DelegateBuilder)
//! - **Adapters**: [`InvocableExt`](adapters::InvocableExt) with Map, Catch and Traced
//! - **Testing**: recording and counting subscribers in [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

// Re-export core traits
pub use manifold_core;

// Modules
pub mod adapters;
pub mod multicast;
pub mod testing;
