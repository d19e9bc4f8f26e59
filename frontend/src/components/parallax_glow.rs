use stylist::css;
use yew::prelude::*;

use crate::hooks::use_scroll_progress::{use_scroll_progress, ScrollTarget};
use crate::motion::interpolate::Interpolation;
use crate::style;

pub const OFFSET: Interpolation<2> = Interpolation::new([0.0, 1.0], [0.0, 50.0]);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GlowCurve {
    /// 0.1 → 0.05 → 0 at 0, 0.5, 1.
    #[default]
    Soft,
    /// 0.18 → 0.08 → 0 at 0, 0.6, 1.
    Bright,
}

impl GlowCurve {
    pub const fn opacity(self) -> Interpolation<3> {
        match self {
            GlowCurve::Soft => Interpolation::new([0.0, 0.5, 1.0], [0.1, 0.05, 0.0]),
            GlowCurve::Bright => Interpolation::new([0.0, 0.6, 1.0], [0.18, 0.08, 0.0]),
        }
    }

    pub fn frame(self, progress: f64) -> GlowFrame {
        GlowFrame {
            offset_percent: OFFSET.at(progress),
            opacity: self.opacity().at(progress),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowFrame {
    pub offset_percent: f64,
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GlowShape {
    pub placement: AttrValue,
    pub size_rem: f64,
    pub color: AttrValue,
    pub blur_px: f64,
}

impl GlowShape {
    pub fn corner() -> Self {
        GlowShape {
            placement: "bottom: 0; right: 0;".into(),
            size_rem: 24.0,
            color: "hsl(var(--primary))".into(),
            blur_px: 64.0,
        }
    }

    fn style(&self, frame: GlowFrame) -> String {
        format!(
            "{placement} width: {size}rem; height: {size}rem; background: radial-gradient(circle, {color} 0%, transparent 70%); filter: blur({blur}px); opacity: {opacity:.4}; transform: translate3d(0, {offset:.3}%, 0);",
            placement = self.placement,
            size = self.size_rem,
            color = self.color,
            blur = self.blur_px,
            opacity = frame.opacity,
            offset = frame.offset_percent,
        )
    }
}

fn default_shapes() -> Vec<GlowShape> {
    vec![GlowShape::corner()]
}

#[derive(Properties, PartialEq)]
pub struct ParallaxGlowProps {
    #[prop_or_default]
    pub curve: GlowCurve,
    #[prop_or_else(default_shapes)]
    pub shapes: Vec<GlowShape>,
    #[prop_or_default]
    pub class: AttrValue,
}

#[function_component(ParallaxGlow)]
pub fn parallax_glow(props: &ParallaxGlowProps) -> Html {
    // Progress follows the first shape's own layout box.
    let primary = use_node_ref();
    let progress = use_scroll_progress(ScrollTarget::Element(primary.clone()));
    let frame = props.curve.frame(progress);

    let region_class = css!(r#"
        position: absolute;
        inset: 0;
        overflow: hidden;
        pointer-events: none;
    "#);
    let shape_class = css!(r#"
        position: absolute;
        border-radius: 9999px;
        will-change: transform, opacity;
    "#);

    html! {
        <div class={style::extend(region_class, &props.class)} aria-hidden="true">
            { for props.shapes.iter().enumerate().map(|(index, shape)| {
                let node = if index == 0 { primary.clone() } else { NodeRef::default() };
                html! {
                    <div ref={node} class={shape_class.clone()} style={shape.style(frame)} data-glow={index.to_string()} />
                }
            }) }
        </div>
    }
}
