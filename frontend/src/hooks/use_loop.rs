use yew::prelude::*;

use super::clock;
use super::frame_loop::FrameLoop;
use super::use_motion::Frame;

#[hook]
pub fn use_loop_time(label: &'static str, period_ms: u32) -> f64 {
    let started = *use_state(clock::now);
    let frame = use_reducer(Frame::default);

    {
        let dispatcher = frame.dispatcher();
        use_effect_with_deps(
            move |_| {
                let ticker = FrameLoop::start(label, period_ms, move || dispatcher.dispatch(()));
                move || drop(ticker)
            },
            (),
        );
    }

    (clock::now() - started).max(0.0)
}
