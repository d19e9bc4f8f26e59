/// Damped harmonic oscillator driving a value from 0 to 1, starting at rest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

/// Distance from the target (as a fraction of the travel) treated as settled.
const REST_DELTA: f64 = 1e-3;
/// Springs that never come to rest are cut off here.
const MAX_SETTLE_SECS: f64 = 30.0;

impl Default for Spring {
    fn default() -> Self {
        Spring::new(100.0, 10.0)
    }
}

impl Spring {
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Spring {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    fn angular_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Normalised position at `t` seconds. Underdamped springs overshoot 1.
    pub fn position(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let w0 = self.angular_frequency();
        let zeta = self.damping_ratio();

        if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * w0 * t).exp();
            1.0 - envelope * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
        } else if zeta == 1.0 {
            1.0 - (-w0 * t).exp() * (1.0 + w0 * t)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            1.0 - (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        }
    }

    pub fn settle_time(&self) -> f64 {
        let w0 = self.angular_frequency();
        let zeta = self.damping_ratio();
        if !w0.is_finite() || w0 <= 0.0 || zeta <= 0.0 {
            return MAX_SETTLE_SECS;
        }

        if zeta < 1.0 {
            // Bound the oscillation by its decaying envelope.
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let amplitude = (1.0 + (zeta * w0 / wd).powi(2)).sqrt();
            let t = (amplitude / REST_DELTA).ln() / (zeta * w0);
            return t.clamp(0.0, MAX_SETTLE_SECS);
        }

        // Critically and over-damped springs approach monotonically.
        let (mut lo, mut hi) = (0.0, MAX_SETTLE_SECS);
        if 1.0 - self.position(hi) > REST_DELTA {
            return MAX_SETTLE_SECS;
        }
        for _ in 0..48 {
            let mid = (lo + hi) / 2.0;
            if 1.0 - self.position(mid) > REST_DELTA {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        hi
    }
}
