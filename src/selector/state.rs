use std::collections::VecDeque;

use rand::Rng;

use crate::store::Store;

/// Maximum number of past selections kept in history.
pub const HISTORY_LIMIT: usize = 10;

/// An in-flight pick.
///
/// The active set and the avoid-repeat flag are captured when the pick starts,
/// so toggling the flag mid-spin only affects the next pick.
#[derive(Debug, Clone, PartialEq)]
struct Spin {
    active: Vec<Store>,
    avoid_repeat: bool,
    frames_shown: usize,
}

/// Session state for picking a random store.
///
/// A pick runs in three steps driven by the caller's timeline: `pick` starts
/// the spin, `show_frame` is called for every shuffle frame, and `settle`
/// draws the final result.
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    candidates: Vec<Store>,
    pool: Vec<Store>,
    history: VecDeque<Store>,
    avoid_repeat: bool,
    current_display: Option<Store>,
    result: Option<Store>,
    spin: Option<Spin>,
}

impl Selector {
    pub fn new(candidates: Vec<Store>, avoid_repeat: bool) -> Self {
        Self {
            pool: candidates.clone(),
            candidates,
            history: VecDeque::with_capacity(HISTORY_LIMIT),
            avoid_repeat,
            current_display: None,
            result: None,
            spin: None,
        }
    }

    /// Start a pick.
    ///
    /// Returns `true` when a spin was started and the caller must run the
    /// frame timeline. Returns `false` while another spin is in flight (state
    /// untouched) or when there is nothing to pick from.
    pub fn pick(&mut self) -> bool {
        if self.is_animating() {
            return false;
        }

        if self.pool.is_empty() {
            self.pool = self.candidates.clone();
        }

        let active = if self.avoid_repeat {
            self.pool.clone()
        } else {
            self.candidates.clone()
        };

        if active.is_empty() {
            self.result = None;
            return false;
        }

        self.spin = Some(Spin {
            active,
            avoid_repeat: self.avoid_repeat,
            frames_shown: 0,
        });
        true
    }

    /// Show one shuffle frame: a uniformly random store from the active set.
    ///
    /// Purely cosmetic. Returns `None` if no spin is in flight.
    pub fn show_frame<R: Rng>(&mut self, rng: &mut R) -> Option<&Store> {
        let spin = self.spin.as_mut()?;
        let idx = rng.random_range(0..spin.active.len());
        spin.frames_shown += 1;
        self.current_display = Some(spin.active[idx].clone());
        self.current_display.as_ref()
    }

    /// Finish the spin: draw the result, record it and update the pool.
    ///
    /// Returns the chosen store, or `None` if no spin was in flight.
    pub fn settle<R: Rng>(&mut self, rng: &mut R) -> Option<Store> {
        let Spin {
            mut active,
            avoid_repeat,
            ..
        } = self.spin.take()?;

        let idx = rng.random_range(0..active.len());
        let chosen = active[idx].clone();

        self.result = Some(chosen.clone());
        self.current_display = None;

        self.history.push_front(chosen.clone());
        self.history.truncate(HISTORY_LIMIT);

        if avoid_repeat {
            // By position: with duplicate entries only the drawn one goes
            active.remove(idx);
            self.pool = active;
        }

        Some(chosen)
    }

    /// Clear the result and refill the pool. Ignored while a spin is in flight.
    ///
    /// Returns `true` if the reset happened.
    pub fn reset(&mut self) -> bool {
        if self.is_animating() {
            return false;
        }
        self.result = None;
        self.current_display = None;
        self.pool = self.candidates.clone();
        true
    }

    /// Change the avoid-repeat flag. The pool is left alone.
    pub fn set_avoid_repeat(&mut self, enabled: bool) {
        self.avoid_repeat = enabled;
    }

    pub fn avoid_repeat(&self) -> bool {
        self.avoid_repeat
    }

    pub fn is_animating(&self) -> bool {
        self.spin.is_some()
    }

    /// Number of shuffle frames shown so far in the current spin
    pub fn frames_shown(&self) -> usize {
        self.spin.as_ref().map(|s| s.frames_shown).unwrap_or(0)
    }

    pub fn candidates(&self) -> &[Store] {
        &self.candidates
    }

    pub fn pool(&self) -> &[Store] {
        &self.pool
    }

    /// Past selections, most recent first
    pub fn history(&self) -> impl ExactSizeIterator<Item = &Store> {
        self.history.iter()
    }

    pub fn result(&self) -> Option<&Store> {
        self.result.as_ref()
    }

    pub fn current_display(&self) -> Option<&Store> {
        self.current_display.as_ref()
    }

    /// What the result card should show: the shuffle frame while spinning,
    /// otherwise the settled result.
    pub fn displayed(&self) -> Option<&Store> {
        self.current_display.as_ref().or(self.result.as_ref())
    }
}
