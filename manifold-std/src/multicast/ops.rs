//! `+=` / `-=` operators for registries.
//!
//! - `registry += handle` adds a handle
//! - `registry += &other` composes `other` into `registry`
//! - `registry -= &handle` removes a handle
//! - `registry -= &other` decomposes `other` out of `registry`

use super::{Action, Delegate, Multicast};
use manifold_core::Handle;
use std::ops::{AddAssign, SubAssign};

/// Macro to implement the assignment operators for a registry type.
macro_rules! impl_assign_ops {
    ($ty:ident<Args $(, $R:ident)?> => $ret:ty) => {
        impl<Args: 'static $(, $R: 'static)?> AddAssign<Handle<Args, $ret>> for $ty<Args $(, $R)?> {
            fn add_assign(&mut self, handle: Handle<Args, $ret>) {
                self.add(handle);
            }
        }

        impl<'a, Args: 'static $(, $R: 'static)?> AddAssign<&'a Self> for $ty<Args $(, $R)?> {
            fn add_assign(&mut self, other: &'a Self) {
                self.compose(other);
            }
        }

        impl<'a, Args: 'static $(, $R: 'static)?> SubAssign<&'a Handle<Args, $ret>> for $ty<Args $(, $R)?> {
            fn sub_assign(&mut self, handle: &'a Handle<Args, $ret>) {
                self.remove(handle);
            }
        }

        impl<'a, Args: 'static $(, $R: 'static)?> SubAssign<&'a Self> for $ty<Args $(, $R)?> {
            fn sub_assign(&mut self, other: &'a Self) {
                self.decompose(other);
            }
        }
    };
}

impl_assign_ops!(Delegate<Args, R> => R);
impl_assign_ops!(Action<Args> => ());
