#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
        }
    }
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let s = solve_for_x(x1, x2, t);
    sample_curve(y1, y2, s)
}

// Bernstein form collapsed to a*s^3 + b*s^2 + c*s with p0 = 0 and p3 = 1.
fn coefficients(p1: f64, p2: f64) -> (f64, f64, f64) {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (a, b, c)
}

fn sample_curve(p1: f64, p2: f64, s: f64) -> f64 {
    let (a, b, c) = coefficients(p1, p2);
    ((a * s + b) * s + c) * s
}

fn sample_slope(p1: f64, p2: f64, s: f64) -> f64 {
    let (a, b, c) = coefficients(p1, p2);
    (3.0 * a * s + 2.0 * b) * s + c
}

fn solve_for_x(x1: f64, x2: f64, x: f64) -> f64 {
    const EPSILON: f64 = 1e-7;

    let mut s = x;
    for _ in 0..8 {
        let err = sample_curve(x1, x2, s) - x;
        if err.abs() < EPSILON {
            return s;
        }
        let slope = sample_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }

    // Newton stalled on a flat section; bisect instead.
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    s = x;
    for _ in 0..32 {
        let value = sample_curve(x1, x2, s);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    s
}
