//! Keyframe animations
//!
//! An ordered sequence of (time, value) anchors interpolated segment by
//! segment. Each segment's easing comes from the keyframe it arrives at,
//! defaulting to linear; it is never inherited from a neighbor.

use crate::animation::{Animate, AnimationState, CompleteCallback, Frame, UpdateCallback};
use crate::easing::Easing;
use crate::error::AnimationError;
use crate::interpolate::interpolate;
use kinema_core::AnimValue;
use smallvec::SmallVec;

/// A (time, value) anchor point.
///
/// `easing` shapes the segment that arrives at this keyframe. The first
/// keyframe's easing is ignored since it only anchors the start.
#[derive(Clone, Debug)]
pub struct Keyframe {
    pub time_ms: f32,
    pub value: AnimValue,
    pub easing: Option<Easing>,
}

impl Keyframe {
    /// Anchor `value` at `time_ms`. Negative times clamp to zero.
    pub fn new(time_ms: f32, value: impl Into<AnimValue>) -> Self {
        Self {
            time_ms: time_ms.max(0.0),
            value: value.into(),
            easing: None,
        }
    }

    /// Set the easing for the segment arriving at this keyframe.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }
}

/// An ordered multi-segment timeline over the span
/// [0, last keyframe's time].
pub struct KeyframeAnimation {
    keyframes: SmallVec<[Keyframe; 8]>,
    duration_ms: f32,
    elapsed: f32,
    state: AnimationState,
    on_update: Option<UpdateCallback>,
    on_complete: Option<CompleteCallback>,
}

impl KeyframeAnimation {
    /// Build from at least two keyframes. Keyframes are sorted into
    /// ascending time order and must all share one value shape.
    pub fn new(keyframes: impl IntoIterator<Item = Keyframe>) -> Result<Self, AnimationError> {
        let mut keyframes: SmallVec<[Keyframe; 8]> = keyframes.into_iter().collect();
        if keyframes.len() < 2 {
            return Err(AnimationError::TooFewKeyframes);
        }
        if !keyframes
            .iter()
            .all(|kf| kf.value.same_shape(&keyframes[0].value))
        {
            return Err(AnimationError::ValueShapeMismatch);
        }
        keyframes.sort_by(|a, b| a.time_ms.total_cmp(&b.time_ms));

        let duration_ms = keyframes[keyframes.len() - 1].time_ms;
        Ok(Self {
            keyframes,
            duration_ms,
            elapsed: 0.0,
            state: AnimationState::Idle,
            on_update: None,
            on_complete: None,
        })
    }

    pub fn set_on_update(&mut self, callback: UpdateCallback) {
        self.on_update = Some(callback);
    }

    pub fn set_on_complete(&mut self, callback: CompleteCallback) {
        self.on_complete = Some(callback);
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Total span in milliseconds (the last keyframe's time).
    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Normalized elapsed fraction of the full span, clamped to [0,1].
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

    /// Interpolated value at the current elapsed time.
    pub fn value(&self) -> AnimValue {
        self.value_at(self.elapsed)
    }

    /// Advance the timeline by `delta_ms`.
    pub fn update(&mut self, delta_ms: f32) -> Frame {
        let delta = delta_ms.max(0.0);
        match self.state {
            AnimationState::Paused | AnimationState::Completed => return self.snapshot(false),
            AnimationState::Idle => self.state = AnimationState::Running,
            AnimationState::Running => {}
        }

        self.elapsed += delta;

        if self.elapsed >= self.duration_ms {
            self.elapsed = self.duration_ms;
            self.state = AnimationState::Completed;
            let frame = Frame {
                value: self.keyframes[self.keyframes.len() - 1].value.clone(),
                progress: 1.0,
                complete: true,
            };
            if let Some(callback) = self.on_update.as_mut() {
                callback(&frame.value);
            }
            if let Some(callback) = self.on_complete.as_mut() {
                callback();
            }
            return frame;
        }

        let frame = self.snapshot(false);
        if let Some(callback) = self.on_update.as_mut() {
            callback(&frame.value);
        }
        frame
    }

    /// Freeze elapsed time exactly.
    pub fn pause(&mut self) {
        if self.state == AnimationState::Running {
            self.state = AnimationState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == AnimationState::Paused {
            self.state = AnimationState::Running;
        }
    }

    pub fn stop(&mut self) {
        self.state = AnimationState::Idle;
        self.elapsed = 0.0;
    }

    /// Jump to an elapsed time, clamped to [0, duration]. Starts the
    /// timeline if Idle.
    pub fn seek(&mut self, ms: f32) {
        self.elapsed = ms.clamp(0.0, self.duration_ms);
        self.state = AnimationState::Running;
    }

    /// Locate the surrounding keyframe pair for `at_ms`, normalize
    /// local progress within the pair, and interpolate under the
    /// arriving keyframe's easing (linear when absent).
    fn value_at(&self, at_ms: f32) -> AnimValue {
        let first = &self.keyframes[0];
        let last = &self.keyframes[self.keyframes.len() - 1];

        if at_ms <= first.time_ms {
            return first.value.clone();
        }
        if at_ms >= last.time_ms {
            return last.value.clone();
        }

        for pair in self.keyframes.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if at_ms >= prev.time_ms && at_ms <= next.time_ms {
                let span = next.time_ms - prev.time_ms;
                if span <= f32::EPSILON {
                    return prev.value.clone();
                }
                let local = (at_ms - prev.time_ms) / span;
                let easing = next.easing.unwrap_or(Easing::Linear);
                return interpolate(&prev.value, &next.value, local, easing);
            }
        }
        last.value.clone()
    }

    fn snapshot(&self, complete: bool) -> Frame {
        Frame {
            value: self.value(),
            progress: self.progress(),
            complete,
        }
    }
}

impl Animate for KeyframeAnimation {
    fn update(&mut self, delta_ms: f32) -> Frame {
        KeyframeAnimation::update(self, delta_ms)
    }

    fn pause(&mut self) {
        KeyframeAnimation::pause(self);
    }

    fn resume(&mut self) {
        KeyframeAnimation::resume(self);
    }

    fn stop(&mut self) {
        KeyframeAnimation::stop(self);
    }

    fn is_complete(&self) -> bool {
        self.state == AnimationState::Completed
    }
}
