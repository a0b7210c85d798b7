//! Kinema Animation Engine
//!
//! Time-driven property animation: easing functions, tween and keyframe
//! state machines, and a tick-driven manager that multiplexes many
//! independent animations over one host render clock.
//!
//! # Features
//!
//! - **Easing Library**: linear through bounce, exact at both endpoints
//! - **Tweens**: delay, looping, yoyo, pause/resume/seek/stop
//! - **Keyframes**: ordered multi-segment timelines with per-segment easing
//! - **Manager**: handle-based scheduling, batched redraw notification,
//!   process-wide accessor with an explicit reset lifecycle
//!
//! There is no background thread and no internal clock: the host render
//! loop drives everything by calling [`AnimationManager::tick`] with an
//! elapsed-time delta, which makes value sequences deterministic and
//! replayable.

pub mod animation;
pub mod builder;
pub mod easing;
pub mod error;
pub mod interpolate;
pub mod keyframe;
pub mod manager;
pub mod presets;

pub use animation::{Animate, Animation, AnimationState, Frame};
pub use builder::Tween;
pub use easing::Easing;
pub use error::AnimationError;
pub use interpolate::{interpolate, lerp};
pub use keyframe::{Keyframe, KeyframeAnimation};
pub use manager::{AnimationHandle, AnimationManager, SharedTarget};
pub use presets::TweenPreset;

pub use kinema_core::{AnimTarget, AnimValue, Color};
