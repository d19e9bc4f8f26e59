use log::info;
use yew::prelude::*;

pub mod config;
pub mod style;

pub mod motion {
    pub mod driver;
    pub mod easing;
    pub mod interpolate;
    pub mod keyframes;
    pub mod orchestrate;
    pub mod scroll;
    pub mod spring;
    pub mod transition;
    pub mod variant;
}

pub mod hooks {
    pub mod clock;
    pub mod frame_loop;
    pub mod use_gesture;
    pub mod use_loop;
    pub mod use_motion;
    pub mod use_scroll_progress;
    pub mod use_viewport_width;
    pub mod window_listener;
}

pub mod components {
    pub mod animated_badge;
    pub mod badge;
    pub mod grid_pattern;
    pub mod parallax_glow;
}

pub mod pages {
    pub mod index;
}

use pages::index::Index;
use style::GlobalStyles;

#[function_component]
pub fn App() -> Html {
    let revision = use_state(config::current_revision);

    {
        let revision = *revision;
        use_effect_with_deps(
            move |_| {
                info!("Rendering {:?} landing page", revision);
                || ()
            },
            (),
        );
    }

    html! {
        <>
            <GlobalStyles />
            <Index revision={*revision} />
        </>
    }
}
