use super::easing::Easing;
use super::spring::Spring;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Curve {
    Spring(Spring),
    Tween { duration: f64, ease: Easing },
}

/// How a value travels to its target: the curve plus a start delay in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub curve: Curve,
    pub delay: f64,
}

impl Default for Transition {
    fn default() -> Self {
        Transition::tween(0.3, Easing::EaseOut)
    }
}

impl Transition {
    pub const fn spring(stiffness: f64, damping: f64) -> Self {
        Transition {
            curve: Curve::Spring(Spring::new(stiffness, damping)),
            delay: 0.0,
        }
    }

    pub const fn tween(duration: f64, ease: Easing) -> Self {
        Transition {
            curve: Curve::Tween { duration, ease },
            delay: 0.0,
        }
    }

    pub const fn with_delay(self, delay: f64) -> Self {
        Transition {
            curve: self.curve,
            delay,
        }
    }

    fn active_duration(&self) -> f64 {
        match self.curve {
            Curve::Spring(spring) => spring.settle_time(),
            Curve::Tween { duration, .. } => duration.max(0.0),
        }
    }

    pub fn total_duration(&self) -> f64 {
        self.delay.max(0.0) + self.active_duration()
    }

    pub fn is_complete(&self, elapsed: f64) -> bool {
        elapsed >= self.total_duration()
    }

    /// Progress towards the target after `elapsed` seconds. Zero during the
    /// delay, exactly one once complete; springs may exceed one in between.
    pub fn progress(&self, elapsed: f64) -> f64 {
        if self.is_complete(elapsed) {
            return 1.0;
        }
        let t = elapsed - self.delay.max(0.0);
        if t <= 0.0 {
            return 0.0;
        }
        match self.curve {
            Curve::Spring(spring) => spring.position(t),
            Curve::Tween { duration, ease } => ease.apply(t / duration),
        }
    }
}
