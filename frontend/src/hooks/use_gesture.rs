use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gesture {
    #[default]
    Idle,
    Hovered,
    Pressed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerInput {
    Enter,
    Leave,
    Down,
    Up,
}

impl Gesture {
    pub fn next(self, input: PointerInput) -> Gesture {
        match (self, input) {
            (_, PointerInput::Leave) => Gesture::Idle,
            (_, PointerInput::Down) => Gesture::Pressed,
            (Gesture::Pressed, PointerInput::Up) => Gesture::Hovered,
            (Gesture::Idle, PointerInput::Enter) => Gesture::Hovered,
            (state, _) => state,
        }
    }

    pub fn is_active(self) -> bool {
        self != Gesture::Idle
    }
}

/// Pointer handlers to spread onto the tracked element. Pointer events fire
/// for mouse, pen and touch alike, so a finger shows the press while it is down.
#[derive(Clone, PartialEq)]
pub struct GestureHandlers {
    pub onpointerenter: Callback<PointerEvent>,
    pub onpointerleave: Callback<PointerEvent>,
    pub onpointerdown: Callback<PointerEvent>,
    pub onpointerup: Callback<PointerEvent>,
    pub onpointercancel: Callback<PointerEvent>,
}

#[hook]
pub fn use_gesture() -> (Gesture, GestureHandlers) {
    let gesture = use_state_eq(Gesture::default);

    let on = |input: PointerInput| {
        let gesture = gesture.clone();
        Callback::from(move |_: PointerEvent| gesture.set(gesture.next(input)))
    };

    let handlers = GestureHandlers {
        onpointerenter: on(PointerInput::Enter),
        onpointerleave: on(PointerInput::Leave),
        onpointerdown: on(PointerInput::Down),
        onpointerup: on(PointerInput::Up),
        onpointercancel: on(PointerInput::Leave),
    };

    (*gesture, handlers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_then_press_then_release() {
        let state = Gesture::Idle
            .next(PointerInput::Enter)
            .next(PointerInput::Down);
        assert_eq!(state, Gesture::Pressed);
        assert_eq!(state.next(PointerInput::Up), Gesture::Hovered);
    }

    #[test]
    fn leaving_always_resets() {
        for state in [Gesture::Idle, Gesture::Hovered, Gesture::Pressed] {
            assert_eq!(state.next(PointerInput::Leave), Gesture::Idle);
        }
    }

    #[test]
    fn enter_does_not_cancel_a_press() {
        assert_eq!(Gesture::Pressed.next(PointerInput::Enter), Gesture::Pressed);
        assert_eq!(Gesture::Idle.next(PointerInput::Up), Gesture::Idle);
    }
}
