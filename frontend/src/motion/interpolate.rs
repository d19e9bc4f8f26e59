pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Clamped piecewise-linear mapping from an input range onto output values.
///
/// `input` must be ascending. Inputs outside the range pin to the first or
/// last output, so a mapping fed with scroll progress never extrapolates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interpolation<const N: usize> {
    input: [f64; N],
    output: [f64; N],
}

impl<const N: usize> Interpolation<N> {
    pub const fn new(input: [f64; N], output: [f64; N]) -> Self {
        Interpolation { input, output }
    }

    pub fn at(&self, value: f64) -> f64 {
        if N <= 1 || value.is_nan() || value <= self.input[0] {
            return self.output.first().copied().unwrap_or_default();
        }
        let last = N - 1;
        if value >= self.input[last] {
            return self.output[last];
        }

        for i in 0..last {
            let (lo, hi) = (self.input[i], self.input[i + 1]);
            if value <= hi {
                let span = hi - lo;
                let t = if span > 0.0 { (value - lo) / span } else { 1.0 };
                return lerp(self.output[i], self.output[i + 1], t);
            }
        }
        self.output[last]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_every_control_point_exactly() {
        let curve = Interpolation::new([0.0, 0.6, 1.0], [0.18, 0.08, 0.0]);
        assert_eq!(curve.at(0.0), 0.18);
        assert_eq!(curve.at(0.6), 0.08);
        assert_eq!(curve.at(1.0), 0.0);
    }

    #[test]
    fn interpolates_inside_segments() {
        let curve = Interpolation::new([0.0, 0.5, 1.0], [0.1, 0.05, 0.0]);
        assert!((curve.at(0.25) - 0.075).abs() < 1e-12);
        assert!((curve.at(0.75) - 0.025).abs() < 1e-12);
    }

    #[test]
    fn clamps_outside_the_input_range() {
        let curve = Interpolation::new([0.0, 1.0], [0.0, 50.0]);
        assert_eq!(curve.at(-3.0), 0.0);
        assert_eq!(curve.at(7.0), 50.0);
        assert_eq!(curve.at(f64::NAN), 0.0);
    }

    #[test]
    fn lerp_endpoints_are_exact() {
        assert_eq!(lerp(0.9, 1.0, 0.0), 0.9);
        assert_eq!(lerp(0.9, 1.0, 1.0), 1.0);
        assert_eq!(lerp(-20.0, 0.0, 1.0), 0.0);
    }
}
