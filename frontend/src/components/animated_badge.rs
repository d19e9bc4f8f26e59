use yew::prelude::*;

use super::badge::{pill, BadgeProps};
use crate::hooks::use_gesture::{use_gesture, Gesture};
use crate::hooks::use_motion::use_motion;
use crate::motion::easing::Easing;
use crate::motion::transition::Transition;
use crate::motion::variant::{Variants, VisualState};
use crate::style;

pub const ENTRANCE: Variants = Variants::new(
    VisualState::HIDDEN.with_y(-20.0).with_scale(0.9),
    VisualState::REST,
);

pub const SPRING: Transition = Transition::spring(260.0, 20.0);
pub const HOVER: Transition = Transition::tween(0.2, Easing::EaseOut);

pub const HOVER_SCALE: f64 = 1.05;
pub const PRESS_SCALE: f64 = 0.95;

/// Target and transition for the current pointer state. Hover uses a short
/// tween; entrance, press and release use the spring.
pub fn gesture_target(gesture: Gesture) -> (VisualState, Transition) {
    match gesture {
        Gesture::Idle => (ENTRANCE.visible, SPRING),
        Gesture::Hovered => (ENTRANCE.visible.with_scale(HOVER_SCALE), HOVER),
        Gesture::Pressed => (ENTRANCE.visible.with_scale(PRESS_SCALE), SPRING),
    }
}

#[function_component(AnimatedBadge)]
pub fn animated_badge(props: &BadgeProps) -> Html {
    let (gesture, handlers) = use_gesture();
    let (target, transition) = gesture_target(gesture);
    let state = use_motion(ENTRANCE.hidden, target, transition);

    html! {
        <div
            class={style::extend(pill(), &props.class)}
            style={state.to_style()}
            onpointerenter={handlers.onpointerenter}
            onpointerleave={handlers.onpointerleave}
            onpointerdown={handlers.onpointerdown}
            onpointerup={handlers.onpointerup}
            onpointercancel={handlers.onpointercancel}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::driver::Tracker;

    fn settle(tracker: &Tracker, from: f64, transition: Transition) -> VisualState {
        tracker.sample(from + transition.total_duration() + 1e-6)
    }

    #[test]
    fn entrance_runs_from_hidden_to_rest() {
        assert_eq!(ENTRANCE.hidden.opacity, 0.0);
        assert_eq!(ENTRANCE.hidden.y, -20.0);
        assert_eq!(ENTRANCE.hidden.scale, 0.9);

        let tracker = Tracker::new(ENTRANCE.hidden, ENTRANCE.visible, SPRING, 0.0);
        assert_eq!(settle(&tracker, 0.0, SPRING), VisualState::REST);
    }

    #[test]
    fn hover_and_press_settle_then_revert() {
        let mut tracker = Tracker::new(VisualState::REST, VisualState::REST, SPRING, 0.0);

        let (target, transition) = gesture_target(Gesture::Hovered);
        tracker.retarget(target, transition, 1.0);
        assert_eq!(transition, HOVER);
        assert_eq!(settle(&tracker, 1.0, transition).scale, HOVER_SCALE);

        let (target, transition) = gesture_target(Gesture::Pressed);
        tracker.retarget(target, transition, 2.0);
        assert_eq!(settle(&tracker, 2.0, transition).scale, PRESS_SCALE);

        let (target, transition) = gesture_target(Gesture::Idle);
        tracker.retarget(target, transition, 4.0);
        assert_eq!(settle(&tracker, 4.0, transition).scale, 1.0);
    }
}
