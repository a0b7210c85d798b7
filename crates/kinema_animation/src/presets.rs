//! Tween presets for common entry/exit patterns
//!
//! Conveniences built on the public builder; nothing here touches
//! private engine state.

use crate::animation::Animation;
use crate::builder::Tween;
use crate::easing::Easing;

/// Pre-built tweens for common patterns
pub struct TweenPreset;

impl TweenPreset {
    /// Fade opacity from 0 to 1
    pub fn fade_in(duration_ms: f32) -> Animation {
        Tween::new(0.0, 1.0)
            .duration(duration_ms)
            .easing(Easing::CubicOut)
            .build()
            .expect("matching number endpoints")
    }

    /// Fade opacity from 1 to 0
    pub fn fade_out(duration_ms: f32) -> Animation {
        Tween::new(1.0, 0.0)
            .duration(duration_ms)
            .easing(Easing::CubicIn)
            .build()
            .expect("matching number endpoints")
    }

    /// Slide a scalar property between two positions
    pub fn slide_to(from: f64, to: f64, duration_ms: f32) -> Animation {
        Tween::new(from, to)
            .duration(duration_ms)
            .easing(Easing::CubicInOut)
            .build()
            .expect("matching number endpoints")
    }

    /// Oscillate between two values forever (attention pulse)
    pub fn pulse(low: f64, high: f64, duration_ms: f32) -> Animation {
        Tween::new(low, high)
            .duration(duration_ms)
            .easing(Easing::SineInOut)
            .yoyo()
            .looped()
            .build()
            .expect("matching number endpoints")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinema_core::AnimValue;

    #[test]
    fn test_fade_in_runs_zero_to_one() {
        let mut anim = TweenPreset::fade_in(100.0);
        assert_eq!(anim.update(0.0).value, AnimValue::Number(0.0));
        let frame = anim.update(100.0);
        assert!(frame.complete);
        assert_eq!(frame.value, AnimValue::Number(1.0));
    }

    #[test]
    fn test_pulse_loops_forever() {
        let mut anim = TweenPreset::pulse(0.9, 1.1, 200.0);
        for _ in 0..20 {
            assert!(!anim.update(200.0).complete);
        }
    }
}
