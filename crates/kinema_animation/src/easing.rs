//! Easing functions for animations

use std::f32::consts::{PI, TAU};

const BACK_C1: f32 = 1.70158;
const BACK_C2: f32 = BACK_C1 * 1.525;
const BACK_C3: f32 = BACK_C1 + 1.0;
const ELASTIC_C4: f32 = TAU / 3.0;
const ELASTIC_C5: f32 = TAU / 4.5;

/// Easing function type
///
/// Every variant maps normalized time `t` in [0,1] to eased progress
/// with exact endpoints: `apply(0.0) == 0.0` and `apply(1.0) == 1.0`.
/// The back and elastic families intentionally leave [0,1] between the
/// endpoints.
///
/// Variants are unit values, so name lookup via [`Easing::from_name`]
/// is identity-stable: the returned easing compares equal to the one
/// used internally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    SineIn,
    SineOut,
    SineInOut,
    ExpoIn,
    ExpoOut,
    ExpoInOut,
    CircIn,
    CircOut,
    CircInOut,
    ElasticIn,
    ElasticOut,
    ElasticInOut,
    BackIn,
    BackOut,
    BackInOut,
    BounceIn,
    BounceOut,
    BounceInOut,
}

impl Easing {
    /// Every registered easing, in registry order.
    pub const ALL: [Easing; 25] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::SineIn,
        Easing::SineOut,
        Easing::SineInOut,
        Easing::ExpoIn,
        Easing::ExpoOut,
        Easing::ExpoInOut,
        Easing::CircIn,
        Easing::CircOut,
        Easing::CircInOut,
        Easing::ElasticIn,
        Easing::ElasticOut,
        Easing::ElasticInOut,
        Easing::BackIn,
        Easing::BackOut,
        Easing::BackInOut,
        Easing::BounceIn,
        Easing::BounceOut,
        Easing::BounceInOut,
    ];

    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(self, t: f32) -> f32 {
        // Endpoints are always exact, including for the overshooting
        // and oscillating families.
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicIn => t * t * t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::SineIn => 1.0 - (t * PI / 2.0).cos(),
            Easing::SineOut => (t * PI / 2.0).sin(),
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Easing::ExpoIn => 2.0f32.powf(10.0 * t - 10.0),
            Easing::ExpoOut => 1.0 - 2.0f32.powf(-10.0 * t),
            Easing::ExpoInOut => {
                if t < 0.5 {
                    2.0f32.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2.0f32.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
            Easing::CircIn => 1.0 - (1.0 - t * t).sqrt(),
            Easing::CircOut => (1.0 - (t - 1.0) * (t - 1.0)).sqrt(),
            Easing::CircInOut => {
                if t < 0.5 {
                    (1.0 - (1.0 - (2.0 * t).powi(2)).sqrt()) / 2.0
                } else {
                    ((1.0 - (-2.0 * t + 2.0).powi(2)).sqrt() + 1.0) / 2.0
                }
            }
            Easing::ElasticIn => {
                -(2.0f32.powf(10.0 * t - 10.0)) * ((t * 10.0 - 10.75) * ELASTIC_C4).sin()
            }
            Easing::ElasticOut => {
                2.0f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * ELASTIC_C4).sin() + 1.0
            }
            Easing::ElasticInOut => {
                if t < 0.5 {
                    -(2.0f32.powf(20.0 * t - 10.0) * ((20.0 * t - 11.125) * ELASTIC_C5).sin()) / 2.0
                } else {
                    2.0f32.powf(-20.0 * t + 10.0) * ((20.0 * t - 11.125) * ELASTIC_C5).sin() / 2.0
                        + 1.0
                }
            }
            Easing::BackIn => BACK_C3 * t * t * t - BACK_C1 * t * t,
            Easing::BackOut => {
                let u = t - 1.0;
                1.0 + BACK_C3 * u * u * u + BACK_C1 * u * u
            }
            Easing::BackInOut => {
                if t < 0.5 {
                    ((2.0 * t).powi(2) * ((BACK_C2 + 1.0) * 2.0 * t - BACK_C2)) / 2.0
                } else {
                    ((2.0 * t - 2.0).powi(2) * ((BACK_C2 + 1.0) * (t * 2.0 - 2.0) + BACK_C2) + 2.0)
                        / 2.0
                }
            }
            Easing::BounceIn => 1.0 - bounce_out(1.0 - t),
            Easing::BounceOut => bounce_out(t),
            Easing::BounceInOut => {
                if t < 0.5 {
                    (1.0 - bounce_out(1.0 - 2.0 * t)) / 2.0
                } else {
                    (1.0 + bounce_out(2.0 * t - 1.0)) / 2.0
                }
            }
        }
    }

    /// Resolve an easing by its registry name (kebab-case).
    ///
    /// Returns `None` for unknown names; the construction surface turns
    /// that into a configuration error.
    pub fn from_name(name: &str) -> Option<Easing> {
        let easing = match name {
            "linear" => Easing::Linear,
            "quad-in" => Easing::QuadIn,
            "quad-out" => Easing::QuadOut,
            "quad-in-out" => Easing::QuadInOut,
            "cubic-in" => Easing::CubicIn,
            "cubic-out" => Easing::CubicOut,
            "cubic-in-out" => Easing::CubicInOut,
            "sine-in" => Easing::SineIn,
            "sine-out" => Easing::SineOut,
            "sine-in-out" => Easing::SineInOut,
            "expo-in" => Easing::ExpoIn,
            "expo-out" => Easing::ExpoOut,
            "expo-in-out" => Easing::ExpoInOut,
            "circ-in" => Easing::CircIn,
            "circ-out" => Easing::CircOut,
            "circ-in-out" => Easing::CircInOut,
            "elastic-in" => Easing::ElasticIn,
            "elastic-out" => Easing::ElasticOut,
            "elastic-in-out" => Easing::ElasticInOut,
            "back-in" => Easing::BackIn,
            "back-out" => Easing::BackOut,
            "back-in-out" => Easing::BackInOut,
            "bounce-in" => Easing::BounceIn,
            "bounce-out" => Easing::BounceOut,
            "bounce-in-out" => Easing::BounceInOut,
            _ => return None,
        };
        Some(easing)
    }

    /// The registry name of this easing.
    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::QuadIn => "quad-in",
            Easing::QuadOut => "quad-out",
            Easing::QuadInOut => "quad-in-out",
            Easing::CubicIn => "cubic-in",
            Easing::CubicOut => "cubic-out",
            Easing::CubicInOut => "cubic-in-out",
            Easing::SineIn => "sine-in",
            Easing::SineOut => "sine-out",
            Easing::SineInOut => "sine-in-out",
            Easing::ExpoIn => "expo-in",
            Easing::ExpoOut => "expo-out",
            Easing::ExpoInOut => "expo-in-out",
            Easing::CircIn => "circ-in",
            Easing::CircOut => "circ-out",
            Easing::CircInOut => "circ-in-out",
            Easing::ElasticIn => "elastic-in",
            Easing::ElasticOut => "elastic-out",
            Easing::ElasticInOut => "elastic-in-out",
            Easing::BackIn => "back-in",
            Easing::BackOut => "back-out",
            Easing::BackInOut => "back-in-out",
            Easing::BounceIn => "bounce-in",
            Easing::BounceOut => "bounce-out",
            Easing::BounceInOut => "bounce-in-out",
        }
    }
}

/// Piecewise parabolic bounce, the basis for the bounce family.
fn bounce_out(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let u = t - 1.5 / D1;
        N1 * u * u + 0.75
    } else if t < 2.5 / D1 {
        let u = t - 2.25 / D1;
        N1 * u * u + 0.9375
    } else {
        let u = t - 2.625 / D1;
        N1 * u * u + 0.984375
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact_for_every_easing() {
        for easing in Easing::ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{} at 0", easing.name());
            assert_eq!(easing.apply(1.0), 1.0, "{} at 1", easing.name());
            // Out-of-range inputs clamp to the endpoints
            assert_eq!(easing.apply(-0.5), 0.0, "{} below 0", easing.name());
            assert_eq!(easing.apply(1.5), 1.0, "{} above 1", easing.name());
        }
    }

    #[test]
    fn test_name_lookup_is_identity_stable() {
        for easing in Easing::ALL {
            assert_eq!(Easing::from_name(easing.name()), Some(easing));
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        assert_eq!(Easing::from_name("ease-in-out"), None);
        assert_eq!(Easing::from_name(""), None);
        assert_eq!(Easing::from_name("QuadIn"), None);
    }

    #[test]
    fn test_linear_is_identity() {
        for t in [0.1, 0.25, 0.5, 0.75, 0.9] {
            assert_eq!(Easing::Linear.apply(t), t);
        }
    }

    #[test]
    fn test_in_out_is_symmetric_about_midpoint() {
        for easing in [
            Easing::QuadInOut,
            Easing::CubicInOut,
            Easing::SineInOut,
            Easing::CircInOut,
        ] {
            assert!(
                (easing.apply(0.5) - 0.5).abs() < 1e-6,
                "{} at 0.5",
                easing.name()
            );
            for t in [0.1, 0.2, 0.3, 0.4] {
                let a = easing.apply(t);
                let b = easing.apply(1.0 - t);
                assert!((a + b - 1.0).abs() < 1e-5, "{} at {}", easing.name(), t);
            }
        }
    }

    #[test]
    fn test_back_overshoots_between_endpoints() {
        // BackIn dips below zero early, BackOut rises above one late
        assert!(Easing::BackIn.apply(0.2) < 0.0);
        assert!(Easing::BackOut.apply(0.8) > 1.0);
    }

    #[test]
    fn test_elastic_oscillates_between_endpoints() {
        let values: Vec<f32> = (1..20).map(|i| Easing::ElasticOut.apply(i as f32 / 20.0)).collect();
        assert!(values.iter().any(|v| *v > 1.0));
    }

    #[test]
    fn test_bounce_stays_within_unit_range() {
        for i in 0..=100 {
            let v = Easing::BounceOut.apply(i as f32 / 100.0);
            assert!((-1e-6..=1.0 + 1e-6).contains(&v));
        }
    }

    #[test]
    fn test_quad_quarter_point() {
        assert!((Easing::QuadIn.apply(0.5) - 0.25).abs() < 1e-6);
        assert!((Easing::QuadOut.apply(0.5) - 0.75).abs() < 1e-6);
    }
}
