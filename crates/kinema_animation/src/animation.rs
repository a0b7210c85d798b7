//! Single-property tween state machine
//!
//! An [`Animation`] interpolates one value from `from` to `to` over a
//! duration, with an optional start delay, looping (finite or infinite),
//! and yoyo reversal. It never reads a clock: the host advances it by
//! calling [`Animation::update`] with an elapsed-time delta, directly or
//! through the manager.

use crate::easing::Easing;
use crate::error::AnimationError;
use crate::interpolate::interpolate;
use kinema_core::AnimValue;

/// Lifecycle of a single animation.
///
/// Idle is initial; Completed is terminal unless a loop wraps back to
/// Running.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationState {
    #[default]
    Idle,
    Running,
    Paused,
    Completed,
}

/// One advancement result returned by [`Animate::update`].
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Interpolated value for this frame.
    pub value: AnimValue,
    /// Normalized elapsed fraction of the current cycle in [0,1],
    /// before easing.
    pub progress: f32,
    /// True only on the frame that transitions into Completed.
    pub complete: bool,
}

/// Callback invoked with the interpolated value on every running update.
pub type UpdateCallback = Box<dyn FnMut(&AnimValue)>;
/// Callback invoked once on the transition into Completed.
pub type CompleteCallback = Box<dyn FnMut()>;

/// Common control surface the manager schedules against. Implemented by
/// both [`Animation`] and [`crate::KeyframeAnimation`].
pub trait Animate {
    /// Advance by `delta_ms` and report the resulting frame.
    fn update(&mut self, delta_ms: f32) -> Frame;
    /// Freeze elapsed time; further updates are no-ops until resume.
    fn pause(&mut self);
    /// Continue from the paused point.
    fn resume(&mut self);
    /// Reset elapsed time and loop accounting back to Idle.
    fn stop(&mut self);
    fn is_complete(&self) -> bool;
}

/// A single-property timeline.
pub struct Animation {
    from: AnimValue,
    to: AnimValue,
    duration_ms: f32,
    delay_ms: f32,
    easing: Easing,
    looped: bool,
    /// 0 means loop forever; N stops on the Nth boundary.
    loop_count: u32,
    yoyo: bool,
    on_update: Option<UpdateCallback>,
    on_complete: Option<CompleteCallback>,

    state: AnimationState,
    /// Time consumed inside the delay window (Idle only).
    delay_elapsed: f32,
    /// Time into the current cycle, or half-cycle under yoyo.
    elapsed: f32,
    loops_done: u32,
    /// Under yoyo, true while playing the to -> from half.
    reversed: bool,
}

impl Animation {
    /// Create an animation with default options: no delay, linear
    /// easing, no loop, no yoyo.
    ///
    /// `from` and `to` must share a shape (number vs color vs group);
    /// a mismatch is a configuration error. A negative duration is
    /// clamped to zero, and a zero-duration animation completes on its
    /// first update with value `to`.
    pub fn new(
        from: impl Into<AnimValue>,
        to: impl Into<AnimValue>,
        duration_ms: f32,
    ) -> Result<Self, AnimationError> {
        let from = from.into();
        let to = to.into();
        if !from.same_shape(&to) {
            return Err(AnimationError::ValueShapeMismatch);
        }
        Ok(Self {
            from,
            to,
            duration_ms: duration_ms.max(0.0),
            delay_ms: 0.0,
            easing: Easing::Linear,
            looped: false,
            loop_count: 0,
            yoyo: false,
            on_update: None,
            on_complete: None,
            state: AnimationState::Idle,
            delay_elapsed: 0.0,
            elapsed: 0.0,
            loops_done: 0,
            reversed: false,
        })
    }

    // =========================================================================
    // Mutating setters (for post-construction configuration)
    // =========================================================================

    /// Set the start delay. Negative values clamp to zero.
    pub fn set_delay(&mut self, delay_ms: f32) {
        self.delay_ms = delay_ms.max(0.0);
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Enable or disable looping. The loop count is only consulted
    /// while looping is enabled.
    pub fn set_looped(&mut self, looped: bool) {
        self.looped = looped;
    }

    /// Set the number of loop iterations; 0 loops forever. One full
    /// yoyo out-and-back counts as a single iteration.
    pub fn set_loop_count(&mut self, count: u32) {
        self.loop_count = count;
    }

    pub fn set_yoyo(&mut self, yoyo: bool) {
        self.yoyo = yoyo;
    }

    pub fn set_on_update(&mut self, callback: UpdateCallback) {
        self.on_update = Some(callback);
    }

    pub fn set_on_complete(&mut self, callback: CompleteCallback) {
        self.on_complete = Some(callback);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    pub fn delay_ms(&self) -> f32 {
        self.delay_ms
    }

    /// Normalized elapsed fraction of the current cycle, clamped to
    /// [0,1]. The eased value fed to interpolation may exceed this
    /// range; progress itself never does.
    pub fn progress(&self) -> f32 {
        match self.state {
            AnimationState::Idle => 0.0,
            AnimationState::Completed => 1.0,
            AnimationState::Running | AnimationState::Paused => {
                if self.duration_ms <= 0.0 {
                    0.0
                } else {
                    (self.elapsed / self.duration_ms).clamp(0.0, 1.0)
                }
            }
        }
    }

    /// The interpolated value at the current point of the timeline.
    pub fn value(&self) -> AnimValue {
        match self.state {
            AnimationState::Idle => self.from.clone(),
            AnimationState::Completed => self.final_value(),
            AnimationState::Running | AnimationState::Paused => {
                let t = if self.reversed {
                    1.0 - self.progress()
                } else {
                    self.progress()
                };
                interpolate(&self.from, &self.to, t, self.easing)
            }
        }
    }

    // =========================================================================
    // Controls
    // =========================================================================

    /// Advance the timeline. While total elapsed time is within the
    /// delay window the value stays at `from` and progress stays at 0;
    /// a single large delta may cross the delay and consume duration in
    /// the same call. Returns the resulting frame; `complete` is true
    /// only on the frame that transitions into Completed.
    pub fn update(&mut self, delta_ms: f32) -> Frame {
        let delta = delta_ms.max(0.0);
        match self.state {
            AnimationState::Paused | AnimationState::Completed => self.snapshot(false),
            AnimationState::Idle => {
                self.delay_elapsed += delta;
                if self.delay_elapsed < self.delay_ms {
                    return self.snapshot(false);
                }
                // Crossed the delay: the leftover spills into the first cycle.
                let leftover = self.delay_elapsed - self.delay_ms;
                self.state = AnimationState::Running;
                self.elapsed = 0.0;
                self.advance(leftover)
            }
            AnimationState::Running => self.advance(delta),
        }
    }

    /// Freeze elapsed time exactly. Only a Running animation pauses.
    pub fn pause(&mut self) {
        if self.state == AnimationState::Running {
            self.state = AnimationState::Paused;
        }
    }

    /// Continue from the paused point, not from zero.
    pub fn resume(&mut self) {
        if self.state == AnimationState::Paused {
            self.state = AnimationState::Running;
        }
    }

    /// Reset to Idle: elapsed time, delay, and loop counter all return
    /// to zero.
    pub fn stop(&mut self) {
        self.state = AnimationState::Idle;
        self.delay_elapsed = 0.0;
        self.elapsed = 0.0;
        self.loops_done = 0;
        self.reversed = false;
    }

    /// Jump to an elapsed time within the active span, clamped to
    /// [0, duration]. Starts the timeline if Idle (the delay is
    /// considered served) and is idempotent for a given position.
    pub fn seek(&mut self, ms: f32) {
        self.delay_elapsed = self.delay_ms;
        self.elapsed = ms.clamp(0.0, self.duration_ms);
        self.state = AnimationState::Running;
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Consume running time, wrapping across as many loop boundaries as
    /// the delta covers. Leftover time carries into the next iteration
    /// so fixed-delta hosts never drift.
    fn advance(&mut self, delta: f32) -> Frame {
        self.elapsed += delta;

        if self.duration_ms <= 0.0 {
            return self.finish();
        }

        let mut completed = false;
        while self.elapsed >= self.duration_ms {
            if self.yoyo && !self.reversed {
                // Turnaround: the next half runs to -> from. Not an
                // iteration boundary yet.
                self.reversed = true;
                self.elapsed -= self.duration_ms;
                continue;
            }
            self.loops_done += 1;
            let more_loops =
                self.looped && (self.loop_count == 0 || self.loops_done < self.loop_count);
            if more_loops {
                self.elapsed -= self.duration_ms;
                if self.yoyo {
                    self.reversed = false;
                }
            } else {
                completed = true;
                break;
            }
        }

        if completed {
            return self.finish();
        }

        let frame = self.snapshot(false);
        if let Some(callback) = self.on_update.as_mut() {
            callback(&frame.value);
        }
        frame
    }

    /// Transition into Completed. Fires `on_complete` exactly once per
    /// completion; repeated updates after this return non-complete
    /// frames at the final value.
    fn finish(&mut self) -> Frame {
        self.state = AnimationState::Completed;
        self.elapsed = self.duration_ms;
        let frame = Frame {
            value: self.final_value(),
            progress: 1.0,
            complete: true,
        };
        if let Some(callback) = self.on_update.as_mut() {
            callback(&frame.value);
        }
        if let Some(callback) = self.on_complete.as_mut() {
            callback();
        }
        frame
    }

    /// A yoyo timeline finishes at the end of its reverse half, back at
    /// `from`; everything else lands on `to`.
    fn final_value(&self) -> AnimValue {
        if self.yoyo && self.reversed {
            self.from.clone()
        } else {
            self.to.clone()
        }
    }

    fn snapshot(&self, complete: bool) -> Frame {
        Frame {
            value: self.value(),
            progress: self.progress(),
            complete,
        }
    }
}

impl Animate for Animation {
    fn update(&mut self, delta_ms: f32) -> Frame {
        Animation::update(self, delta_ms)
    }

    fn pause(&mut self) {
        Animation::pause(self);
    }

    fn resume(&mut self) {
        Animation::resume(self);
    }

    fn stop(&mut self) {
        Animation::stop(self);
    }

    fn is_complete(&self) -> bool {
        self.state == AnimationState::Completed
    }
}
