//! Value interpolation driven by an easing function

use crate::easing::Easing;
use kinema_core::AnimValue;

/// Linear blend between two scalars. Valid for any real span, including
/// negative-to-positive and large magnitudes.
#[inline]
pub fn lerp(from: f64, to: f64, progress: f64) -> f64 {
    from + (to - from) * progress
}

/// Interpolate `from` toward `to` at time-progress `t`.
///
/// Easing is applied to the time-progress first, then the value is
/// blended at the eased fraction, never the other way around. The eased
/// fraction may leave [0,1] for the overshooting families; colors clamp
/// per channel, numbers extrapolate.
///
/// Shapes are validated at construction; a mismatch here falls back to
/// cloning `from`.
pub fn interpolate(from: &AnimValue, to: &AnimValue, t: f32, easing: Easing) -> AnimValue {
    let eased = easing.apply(t);
    match (from, to) {
        (AnimValue::Number(a), AnimValue::Number(b)) => {
            AnimValue::Number(lerp(*a, *b, eased as f64))
        }
        (AnimValue::Color(a), AnimValue::Color(b)) => AnimValue::Color(a.lerp(*b, eased)),
        (AnimValue::Group(a), AnimValue::Group(b)) => {
            let mut out = a.clone();
            for (key, va) in a {
                if let Some(vb) = b.get(key) {
                    out.insert(key.clone(), lerp(*va, *vb, eased as f64));
                }
            }
            AnimValue::Group(out)
        }
        _ => from.clone(),
    }
}
