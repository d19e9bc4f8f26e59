use std::rc::Rc;

use yew::prelude::*;

use super::clock;
use super::frame_loop::FrameLoop;
use crate::config;
use crate::motion::driver::Tracker;
use crate::motion::transition::Transition;
use crate::motion::variant::VisualState;

#[derive(Default, PartialEq)]
pub(crate) struct Frame(u64);

impl Reducible for Frame {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(Frame(self.0.wrapping_add(1)))
    }
}

/// Animates towards `target`, starting from `initial` on mount.
///
/// Changing `target` on a later render retargets from the current value using
/// that render's `transition`. Frames are only scheduled while the value is
/// moving; the loop is dropped once it settles or the component unmounts.
#[hook]
pub fn use_motion(initial: VisualState, target: VisualState, transition: Transition) -> VisualState {
    let tracker = use_mut_ref(|| Tracker::new(initial, target, transition, clock::now()));
    let frame = use_reducer(Frame::default);

    let now = clock::now();
    let (state, settled, generation) = {
        let mut tracker = tracker.borrow_mut();
        tracker.retarget(target, transition, now);
        (tracker.sample(now), tracker.is_settled(now), tracker.generation())
    };

    {
        let dispatcher = frame.dispatcher();
        use_effect_with_deps(
            move |&(_, settled)| {
                let ticker = (!settled).then(|| {
                    FrameLoop::start("motion", config::FRAME_INTERVAL_MS, move || dispatcher.dispatch(()))
                });
                move || drop(ticker)
            },
            (generation, settled),
        );
    }

    state
}
