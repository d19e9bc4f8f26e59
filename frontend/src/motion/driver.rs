use super::transition::Transition;
use super::variant::VisualState;

#[derive(Clone, Debug, PartialEq)]
pub struct Tracker {
    from: VisualState,
    to: VisualState,
    transition: Transition,
    started_at: f64,
    generation: u64,
}

impl Tracker {
    pub fn new(initial: VisualState, target: VisualState, transition: Transition, now: f64) -> Self {
        Tracker {
            from: initial,
            to: target,
            transition,
            started_at: now,
            generation: 0,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn elapsed(&self, now: f64) -> f64 {
        (now - self.started_at).max(0.0)
    }

    pub fn sample(&self, now: f64) -> VisualState {
        if self.from == self.to {
            return self.to;
        }
        let progress = self.transition.progress(self.elapsed(now));
        VisualState::mix(&self.from, &self.to, progress)
    }

    pub fn is_settled(&self, now: f64) -> bool {
        self.from == self.to || self.transition.is_complete(self.elapsed(now))
    }

    /// Sends the element towards a new target, starting from wherever it is
    /// at `now`. Returns false when the target is unchanged.
    pub fn retarget(&mut self, target: VisualState, transition: Transition, now: f64) -> bool {
        if target == self.to {
            return false;
        }
        self.from = self.sample(now);
        self.to = target;
        self.transition = transition;
        self.started_at = now;
        self.generation = self.generation.wrapping_add(1);
        true
    }
}
