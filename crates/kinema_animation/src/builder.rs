//! Fluent construction of tween animations

use crate::animation::{Animation, CompleteCallback, UpdateCallback};
use crate::easing::Easing;
use crate::error::AnimationError;
use kinema_core::{AnimValue, Color};

/// Builder for [`Animation`] with a fluent API.
///
/// # Example
///
/// ```
/// use kinema_animation::{Easing, Tween};
///
/// let anim = Tween::new(0.0, 240.0)
///     .duration(300.0)
///     .easing(Easing::CubicOut)
///     .delay(50.0)
///     .build()
///     .unwrap();
/// ```
pub struct Tween {
    from: AnimValue,
    to: AnimValue,
    duration_ms: f32,
    delay_ms: f32,
    easing: Easing,
    /// Set by [`Tween::easing_name`]; resolved (and validated) at build.
    easing_name: Option<String>,
    looped: bool,
    loop_count: u32,
    yoyo: bool,
    on_update: Option<UpdateCallback>,
    on_complete: Option<CompleteCallback>,
}

impl Tween {
    /// Start a tween between two endpoints. Defaults: duration 0,
    /// delay 0, linear easing, no loop, no yoyo.
    pub fn new(from: impl Into<AnimValue>, to: impl Into<AnimValue>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            duration_ms: 0.0,
            delay_ms: 0.0,
            easing: Easing::Linear,
            easing_name: None,
            looped: false,
            loop_count: 0,
            yoyo: false,
            on_update: None,
            on_complete: None,
        }
    }

    /// Start a color tween from two hex strings (`#rgb` or `#rrggbb`).
    pub fn color(from_hex: &str, to_hex: &str) -> Result<Self, AnimationError> {
        Ok(Self::new(
            Color::from_hex(from_hex)?,
            Color::from_hex(to_hex)?,
        ))
    }

    /// Set the duration in milliseconds. Negative values clamp to zero.
    pub fn duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Set the start delay in milliseconds. Negative values clamp to zero.
    pub fn delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self.easing_name = None;
        self
    }

    /// Set the easing by registry name. An unknown name surfaces as
    /// [`AnimationError::UnknownEasing`] from [`Tween::build`].
    pub fn easing_name(mut self, name: impl Into<String>) -> Self {
        self.easing_name = Some(name.into());
        self
    }

    /// Loop forever (until stopped or removed).
    pub fn looped(mut self) -> Self {
        self.looped = true;
        self
    }

    /// Loop a fixed number of iterations; 0 loops forever. One full
    /// yoyo out-and-back counts as a single iteration.
    pub fn loop_count(mut self, count: u32) -> Self {
        self.looped = true;
        self.loop_count = count;
        self
    }

    /// Reverse direction at the end of each cycle instead of resetting.
    pub fn yoyo(mut self) -> Self {
        self.yoyo = true;
        self
    }

    /// Invoked with the interpolated value on every running update.
    pub fn on_update(mut self, callback: impl FnMut(&AnimValue) + 'static) -> Self {
        self.on_update = Some(Box::new(callback));
        self
    }

    /// Invoked once on the transition into Completed.
    pub fn on_complete(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Validate the configuration and build the animation.
    pub fn build(self) -> Result<Animation, AnimationError> {
        let easing = match self.easing_name {
            Some(name) => {
                Easing::from_name(&name).ok_or(AnimationError::UnknownEasing(name))?
            }
            None => self.easing,
        };

        let mut animation = Animation::new(self.from, self.to, self.duration_ms)?;
        animation.set_delay(self.delay_ms);
        animation.set_easing(easing);
        animation.set_looped(self.looped);
        animation.set_loop_count(self.loop_count);
        animation.set_yoyo(self.yoyo);
        if let Some(callback) = self.on_update {
            animation.set_on_update(callback);
        }
        if let Some(callback) = self.on_complete {
            animation.set_on_complete(callback);
        }
        Ok(animation)
    }
}
