use super::interpolate::lerp;

/// Animatable style of one element. `x`/`y` are pixels, `letter_spacing` is
/// em and only emitted when set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub letter_spacing: Option<f64>,
}

impl Default for VisualState {
    fn default() -> Self {
        VisualState::REST
    }
}

impl VisualState {
    pub const REST: VisualState = VisualState {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        letter_spacing: None,
    };

    pub const HIDDEN: VisualState = VisualState {
        opacity: 0.0,
        ..VisualState::REST
    };

    pub const fn with_opacity(self, opacity: f64) -> Self {
        VisualState { opacity, ..self }
    }

    pub const fn with_x(self, x: f64) -> Self {
        VisualState { x, ..self }
    }

    pub const fn with_y(self, y: f64) -> Self {
        VisualState { y, ..self }
    }

    pub const fn with_scale(self, scale: f64) -> Self {
        VisualState { scale, ..self }
    }

    pub const fn with_letter_spacing(self, em: f64) -> Self {
        VisualState {
            letter_spacing: Some(em),
            ..self
        }
    }

    /// Blend between two states. `t` may leave [0, 1] for springs; opacity
    /// is clamped when rendered, not here.
    pub fn mix(from: &VisualState, to: &VisualState, t: f64) -> VisualState {
        let letter_spacing = match (from.letter_spacing, to.letter_spacing) {
            (Some(a), Some(b)) => Some(lerp(a, b, t)),
            (_, target) => target,
        };
        VisualState {
            opacity: lerp(from.opacity, to.opacity, t),
            x: lerp(from.x, to.x, t),
            y: lerp(from.y, to.y, t),
            scale: lerp(from.scale, to.scale, t),
            letter_spacing,
        }
    }

    pub fn to_style(&self) -> String {
        let mut style = format!(
            "opacity: {:.4}; transform: translate3d({:.3}px, {:.3}px, 0) scale({:.4});",
            self.opacity.clamp(0.0, 1.0),
            self.x,
            self.y,
            self.scale.max(0.0),
        );
        if let Some(em) = self.letter_spacing {
            style.push_str(&format!(" letter-spacing: {:.4}em;", em));
        }
        style
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Variants {
    pub hidden: VisualState,
    pub visible: VisualState,
}

impl Variants {
    pub const fn new(hidden: VisualState, visible: VisualState) -> Self {
        Variants { hidden, visible }
    }

    pub const fn fade() -> Self {
        Variants::new(VisualState::HIDDEN, VisualState::REST)
    }
}
