//! Reveal-on-scroll for `[data-reveal]` elements.
//!
//! Elements start hidden (`reveal` class) and are shown once, the first time
//! they intersect the viewport. Without intersection observation, or when the
//! visitor prefers reduced motion, everything is shown up front so content is
//! never stuck invisible.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Platform capabilities detected once at startup.
pub trait Capabilities {
    fn intersection_observer(&self) -> bool;
    fn prefers_reduced_motion(&self) -> bool;
}

/// A platform with intersection observation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Full {
    pub reduced_motion: bool,
}

impl Capabilities for Full {
    fn intersection_observer(&self) -> bool {
        true
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}

/// A platform without intersection observation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Degraded {
    pub reduced_motion: bool,
}

impl Capabilities for Degraded {
    fn intersection_observer(&self) -> bool {
        false
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}

/// How reveal elements are handled for this page load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealMode {
    /// Watch each element and reveal it on first intersection.
    Observe,
    /// Reveal everything now, no observation.
    Immediate,
}

impl RevealMode {
    #[must_use]
    pub fn select(caps: &dyn Capabilities) -> Self {
        if caps.prefers_reduced_motion() || !caps.intersection_observer() {
            Self::Immediate
        } else {
            Self::Observe
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Visible,
}

/// Per-element reveal bookkeeping.
#[derive(Clone, Debug)]
pub struct RevealController {
    states: Vec<RevealState>,
    watching: Vec<bool>,
}

impl RevealController {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { states: vec![RevealState::Hidden; count], watching: vec![false; count] }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Start the selected mode. `Immediate` reveals every element; `Observe`
    /// marks every element as watched.
    pub fn start(&mut self, mode: RevealMode) {
        match mode {
            RevealMode::Immediate => self.states.fill(RevealState::Visible),
            RevealMode::Observe => self.watching.fill(true),
        }
    }

    /// Handle an intersection entry for element `index`.
    ///
    /// Any intersecting entry reveals, whatever its ratio; the observer
    /// threshold only decides when entries are delivered. Returns `true` when
    /// the element became visible just now; the caller then stops observing it.
    pub fn on_intersection(&mut self, index: usize, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        let Some(watching) = self.watching.get_mut(index) else {
            return false;
        };
        if !*watching {
            return false;
        }
        *watching = false;
        self.states[index] = RevealState::Visible;
        true
    }

    #[must_use]
    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    #[must_use]
    pub fn is_watching(&self, index: usize) -> bool {
        self.watching.get(index).copied().unwrap_or(false)
    }
}
