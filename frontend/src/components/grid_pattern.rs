use stylist::css;
use yew::prelude::*;

use crate::config;
use crate::hooks::use_loop::use_loop_time;
use crate::hooks::use_motion::use_motion;
use crate::motion::easing::Easing;
use crate::motion::keyframes::Keyframes;
use crate::motion::transition::Transition;
use crate::motion::variant::Variants;
use crate::style;

pub const FADE_IN: Transition = Transition::tween(1.0, Easing::EaseOut).with_delay(0.2);
pub const PULSE: Keyframes<3> = Keyframes::new([0.3, 0.5, 0.3], 4.0, Easing::EaseInOut);

#[derive(Properties, PartialEq, Default)]
pub struct GridPatternProps {
    #[prop_or_default]
    pub class: AttrValue,
}

#[function_component(GridPattern)]
pub fn grid_pattern(props: &GridPatternProps) -> Html {
    let fade = use_motion(Variants::fade().hidden, Variants::fade().visible, FADE_IN);
    let elapsed = use_loop_time("grid pulse", config::PULSE_TICK_MS);

    let layer = css!(r#"
        position: absolute;
        inset: 0;
        pointer-events: none;
    "#);

    html! {
        <div
            class={style::extend(layer.clone(), &props.class)}
            style={format!("opacity: {:.4};", fade.opacity.clamp(0.0, 1.0))}
            aria-hidden="true"
        >
            <div class={classes!(layer, "grid-pattern")} style={format!("opacity: {:.4};", PULSE.sample(elapsed))} />
        </div>
    }
}
