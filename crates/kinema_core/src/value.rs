//! Animatable value model

use crate::color::Color;
use rustc_hash::FxHashMap;

/// A value the engine can interpolate and write onto a target property.
#[derive(Clone, Debug, PartialEq)]
pub enum AnimValue {
    /// Plain scalar: positions, sizes, opacity, rotation, ...
    Number(f64),
    /// sRGB color, serialized as 6-digit hex at the target boundary.
    Color(Color),
    /// Named numeric sub-properties animated under one timeline.
    Group(FxHashMap<String, f64>),
}

impl AnimValue {
    /// Whether two values have the same shape and can be interpolated
    /// against each other. Checked once at construction time.
    pub fn same_shape(&self, other: &AnimValue) -> bool {
        matches!(
            (self, other),
            (AnimValue::Number(_), AnimValue::Number(_))
                | (AnimValue::Color(_), AnimValue::Color(_))
                | (AnimValue::Group(_), AnimValue::Group(_))
        )
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnimValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            AnimValue::Color(c) => Some(*c),
            _ => None,
        }
    }
}

impl From<f64> for AnimValue {
    fn from(v: f64) -> Self {
        AnimValue::Number(v)
    }
}

impl From<f32> for AnimValue {
    fn from(v: f32) -> Self {
        AnimValue::Number(v as f64)
    }
}

impl From<Color> for AnimValue {
    fn from(c: Color) -> Self {
        AnimValue::Color(c)
    }
}

impl From<FxHashMap<String, f64>> for AnimValue {
    fn from(group: FxHashMap<String, f64>) -> Self {
        AnimValue::Group(group)
    }
}
