//! Animation manager
//!
//! Holds every active (animation, target, property) registration and
//! advances them in lockstep each time the host render loop calls
//! [`AnimationManager::tick`]. Results are written back onto targets,
//! completed entries are retired, and a single batched redraw
//! notification fires per tick when anything changed.
//!
//! The engine is single-threaded and cooperative, so the manager is a
//! cheap-to-clone `Rc<RefCell<..>>` wrapper: callbacks running mid-tick
//! may re-enter it to add or remove entries, and such changes take
//! effect without corrupting the current iteration (additions are not
//! advanced until the next tick).

use crate::animation::Animate;
use kinema_core::{AnimTarget, AnimValue};
use slotmap::{new_key_type, SlotMap};
use std::cell::RefCell;
use std::rc::Rc;

new_key_type! {
    /// Handle to a scheduled (animation, target, property) entry.
    /// Generational, so operations on removed handles are no-ops.
    pub struct AnimationHandle;
}

/// A drawable shared with the manager. Targets are supplied entirely by
/// the caller; the manager holds no opinion beyond reference identity.
pub type SharedTarget = Rc<RefCell<dyn AnimTarget>>;

type RefreshCallback = Box<dyn FnMut()>;

struct Entry {
    /// Taken out of the slot while the entry is being advanced so
    /// update callbacks may re-enter the manager.
    animation: Option<Box<dyn Animate>>,
    target: SharedTarget,
    property: String,
    last_value: Option<AnimValue>,
}

#[derive(Default)]
struct ManagerInner {
    entries: SlotMap<AnimationHandle, Entry>,
    refresh: Option<RefreshCallback>,
}

thread_local! {
    static GLOBAL: RefCell<Option<AnimationManager>> = const { RefCell::new(None) };
}

/// The animation scheduler.
///
/// Clones share the same underlying state. [`AnimationManager::global`]
/// returns the process-wide instance (created on first use);
/// [`AnimationManager::new`] builds an isolated one for injection, e.g.
/// in tests.
#[derive(Clone)]
pub struct AnimationManager {
    inner: Rc<RefCell<ManagerInner>>,
}

impl AnimationManager {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(ManagerInner::default())),
        }
    }

    /// The process-wide manager. The same instance is returned across
    /// calls until [`AnimationManager::reset_global`] installs a fresh
    /// one.
    pub fn global() -> Self {
        GLOBAL.with(|slot| {
            slot.borrow_mut()
                .get_or_insert_with(AnimationManager::new)
                .clone()
        })
    }

    /// Discard the global manager. All prior registrations are dropped
    /// silently, without invoking their callbacks; the next call to
    /// [`AnimationManager::global`] creates a fresh instance.
    pub fn reset_global() {
        GLOBAL.with(|slot| {
            *slot.borrow_mut() = None;
        });
        tracing::debug!("global animation manager reset");
    }

    /// Register an animation against a named property on a target.
    /// The animation starts advancing on the next tick.
    pub fn add(
        &self,
        animation: impl Animate + 'static,
        target: SharedTarget,
        property: impl Into<String>,
    ) -> AnimationHandle {
        let property = property.into();
        let handle = self.inner.borrow_mut().entries.insert(Entry {
            animation: Some(Box::new(animation)),
            target,
            property: property.clone(),
            last_value: None,
        });
        tracing::debug!(?handle, property = %property, "animation added");
        handle
    }

    /// Remove an entry. Unknown or already-removed handles are a no-op
    /// so cleanup is idempotent across call sites.
    pub fn remove(&self, handle: AnimationHandle) {
        if self.inner.borrow_mut().entries.remove(handle).is_some() {
            tracing::debug!(?handle, "animation removed");
        }
    }

    /// Pause every registered animation.
    pub fn pause_all(&self) {
        for entry in self.inner.borrow_mut().entries.values_mut() {
            if let Some(animation) = entry.animation.as_mut() {
                animation.pause();
            }
        }
    }

    /// Resume every paused animation.
    pub fn resume_all(&self) {
        for entry in self.inner.borrow_mut().entries.values_mut() {
            if let Some(animation) = entry.animation.as_mut() {
                animation.resume();
            }
        }
    }

    /// Drop every registration without invoking callbacks.
    pub fn clear(&self) {
        let mut inner = self.inner.borrow_mut();
        let count = inner.entries.len();
        inner.entries.clear();
        tracing::debug!(count, "animation manager cleared");
    }

    /// Number of currently registered entries.
    pub fn active_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn has_active(&self) -> bool {
        self.active_count() > 0
    }

    /// Install the single redraw callback. Replaces any previous one.
    /// It fires at most once per tick, when at least one entry's value
    /// changed.
    pub fn set_refresh_callback(&self, callback: impl FnMut() + 'static) {
        self.inner.borrow_mut().refresh = Some(Box::new(callback));
    }

    /// Advance every entry by `delta_ms` (negative deltas clamp to
    /// zero; zero is a legal, effectively-no-op call). Invoked once per
    /// frame by the host render loop.
    pub fn tick(&self, delta_ms: f32) {
        let delta = delta_ms.max(0.0);

        // Snapshot the live handles up front: entries added from inside
        // callbacks join the set but are not advanced until next tick.
        let handles: Vec<AnimationHandle> = self.inner.borrow().entries.keys().collect();
        tracing::trace!(delta, entries = handles.len(), "tick");

        let mut any_changed = false;
        for handle in handles {
            // Take the animation out of its slot so its callbacks may
            // re-enter the manager without tripping the borrow.
            let taken = self
                .inner
                .borrow_mut()
                .entries
                .get_mut(handle)
                .and_then(|entry| entry.animation.take());
            let Some(mut animation) = taken else {
                // Removed by an earlier callback this tick.
                continue;
            };

            let frame = animation.update(delta);

            let (target, property) = {
                let mut inner = self.inner.borrow_mut();
                let Some(entry) = inner.entries.get_mut(handle) else {
                    // The entry removed itself mid-update; skip the write.
                    continue;
                };
                if entry.last_value.as_ref() != Some(&frame.value) {
                    any_changed = true;
                }
                entry.last_value = Some(frame.value.clone());
                let target = Rc::clone(&entry.target);
                let property = entry.property.clone();
                if frame.complete {
                    inner.entries.remove(handle);
                    tracing::trace!(?handle, "animation completed");
                } else {
                    inner.entries[handle].animation = Some(animation);
                }
                (target, property)
            };

            target.borrow_mut().set_property(&property, &frame.value);
        }

        if any_changed {
            self.notify_refresh();
        }
    }

    /// Fire the redraw callback with the manager unborrowed, so the
    /// host may call back into it.
    fn notify_refresh(&self) {
        let taken = self.inner.borrow_mut().refresh.take();
        if let Some(mut callback) = taken {
            callback();
            let mut inner = self.inner.borrow_mut();
            // The callback may have installed a replacement.
            if inner.refresh.is_none() {
                inner.refresh = Some(callback);
            }
        }
    }
}

impl Default for AnimationManager {
    fn default() -> Self {
        Self::new()
    }
}
