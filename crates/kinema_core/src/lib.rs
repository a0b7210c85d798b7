//! Kinema Core
//!
//! Foundational primitives for the Kinema animation engine:
//!
//! - **Animatable Values**: numbers, colors, and named numeric groups
//! - **Color**: hex parsing/serialization with channel-wise blending
//! - **Target Write-Back**: the capability drawables implement to receive
//!   interpolated values
//!
//! # Example
//!
//! ```rust
//! use kinema_core::{AnimTarget, AnimValue, Color};
//!
//! struct Rect {
//!     x: f64,
//!     fill: Color,
//! }
//!
//! impl AnimTarget for Rect {
//!     fn set_property(&mut self, name: &str, value: &AnimValue) {
//!         match (name, value) {
//!             ("x", AnimValue::Number(v)) => self.x = *v,
//!             ("fill", AnimValue::Color(c)) => self.fill = *c,
//!             _ => {}
//!         }
//!     }
//! }
//! ```

pub mod color;
pub mod target;
pub mod value;

pub use color::{Color, ColorParseError};
pub use target::AnimTarget;
pub use value::AnimValue;
