use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::animation::{Direction, Ease, ElementState, Interpolator};
use crate::scene::ElementId;

use super::CompletionCallback;
use super::batch::SharedBatch;

/// Live descriptor of one element's transition.
pub(crate) struct Transition {
    pub(crate) start_time: Instant,
    pub(crate) duration: Duration,
    pub(crate) ease: Ease,
    pub(crate) direction: Direction,
    pub(crate) looped: bool,
    pub(crate) interpolator: Interpolator,
    pub(crate) callback: Option<CompletionCallback>,
    pub(crate) batch: SharedBatch,
}

/// Result of evaluating a transition at a frame timestamp.
#[derive(Debug)]
pub(crate) enum Step {
    /// Not started yet (still inside its delay).
    Pending,
    Active(ElementState),
    /// Reached its duration; the state is the last one to apply.
    Finished(ElementState),
}

impl Transition {
    pub(crate) fn step(&mut self, now: Instant) -> Step {
        let elapsed = match now.checked_duration_since(self.start_time) {
            Some(elapsed) if !elapsed.is_zero() => elapsed,
            _ => return Step::Pending,
        };

        let raw = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0) as f32
        };
        let state = self.interpolator.at(self.ease.apply(self.direction.apply(raw)));

        if elapsed < self.duration {
            return Step::Active(state);
        }

        if self.looped && !self.duration.is_zero() {
            // Keep the phase: skip whole cycles, carry the remainder into the next one.
            let cycles = (elapsed.as_nanos() / self.duration.as_nanos()).min(u32::MAX as u128);
            self.start_time += self.duration * cycles as u32;
            return Step::Active(state);
        }

        Step::Finished(state)
    }

    /// State at the end of the transition's direction.
    pub(crate) fn final_state(&self) -> ElementState {
        self.interpolator.at(self.ease.apply(self.direction.apply(1.0)))
    }
}

/// At most one live transition per element.
#[derive(Default)]
pub(crate) struct TransitionRegistry {
    entries: HashMap<ElementId, Transition>,
}

impl TransitionRegistry {
    pub(crate) fn insert(&mut self, id: ElementId, transition: Transition) {
        let previous = self.entries.insert(id, transition);
        debug_assert!(previous.is_none(), "{id} already had a live transition");
    }

    pub(crate) fn get_mut(&mut self, id: ElementId) -> Option<&mut Transition> {
        self.entries.get_mut(&id)
    }

    pub(crate) fn remove(&mut self, id: ElementId) -> Option<Transition> {
        self.entries.remove(&id)
    }

    pub(crate) fn contains(&self, id: ElementId) -> bool {
        self.entries.contains_key(&id)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// Drops every transition whose element fails `keep`; returns how many were dropped.
    pub(crate) fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(ElementId) -> bool,
    {
        let before = self.entries.len();
        self.entries.retain(|id, _| keep(*id));
        before - self.entries.len()
    }
}
