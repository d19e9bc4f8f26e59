use super::easing::Easing;
use super::interpolate::lerp;

/// A keyframe track repeated forever. Values are spaced evenly across
/// `duration` seconds and `ease` is applied to each segment separately.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframes<const N: usize> {
    pub values: [f64; N],
    pub duration: f64,
    pub ease: Easing,
}

impl<const N: usize> Keyframes<N> {
    pub const fn new(values: [f64; N], duration: f64, ease: Easing) -> Self {
        Keyframes {
            values,
            duration,
            ease,
        }
    }

    pub fn phase(&self, elapsed: f64) -> f64 {
        if self.duration <= 0.0 || !elapsed.is_finite() {
            return 0.0;
        }
        elapsed.rem_euclid(self.duration) / self.duration
    }

    pub fn sample(&self, elapsed: f64) -> f64 {
        if N < 2 {
            return self.values.first().copied().unwrap_or_default();
        }
        let segments = (N - 1) as f64;
        let last_segment = N.saturating_sub(2);
        let position = self.phase(elapsed) * segments;
        let index = (position.floor() as usize).min(last_segment);
        let local = self.ease.apply(position - index as f64);
        lerp(self.values[index], self.values[index + 1], local)
    }
}
