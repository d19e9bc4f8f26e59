use web_sys::window;
use yew::prelude::*;

use crate::hooks::window_listener::WindowListener;

fn inner_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

#[hook]
pub fn use_viewport_width() -> f64 {
    let width = use_state_eq(inner_width);

    {
        let width = width.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::attach("viewport width", &["resize"], move || {
                    width.set(inner_width());
                });
                move || drop(listener)
            },
            (),
        );
    }

    *width
}
