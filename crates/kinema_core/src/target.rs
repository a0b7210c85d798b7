//! Target write-back capability

use crate::value::AnimValue;

/// Implemented by anything that can receive an interpolated value on a
/// named property.
///
/// The animation manager resolves a target once at registration time and
/// imposes nothing else on the drawable: no type registry, no reflection.
/// Target lifetime is owned by the caller.
pub trait AnimTarget {
    fn set_property(&mut self, name: &str, value: &AnimValue);
}
