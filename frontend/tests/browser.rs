//! Browser rendering tests. Run with `wasm-pack test --headless --firefox frontend`.
#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use assignment_landing::components::animated_badge::AnimatedBadge;
use assignment_landing::components::grid_pattern::GridPattern;
use assignment_landing::components::parallax_glow::{GlowCurve, GlowShape, ParallaxGlow, ParallaxGlowProps};
use assignment_landing::config::{self, Revision};
use assignment_landing::hooks::frame_loop::FrameLoop;
use assignment_landing::hooks::window_listener::WindowListener;
use assignment_landing::pages::index::{Index, IndexProps, COMPANY_NAME};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{window, Element, Event, HtmlElement, PointerEvent, PointerEventInit};
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_point() -> Element {
    let document = window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn dispatch_scroll() {
    let event = Event::new("scroll").unwrap();
    window().unwrap().dispatch_event(&event).unwrap();
}

fn document_top(element: &Element) -> f64 {
    let mut top = 0.0;
    let mut current = element.clone().dyn_into::<HtmlElement>().ok();
    while let Some(node) = current {
        top += f64::from(node.offset_top());
        current = node.offset_parent().and_then(|parent| parent.dyn_into::<HtmlElement>().ok());
    }
    top
}

fn opacity_of(element: &Element) -> f64 {
    let style = element.get_attribute("style").unwrap_or_default();
    style
        .split(';')
        .find_map(|rule| rule.trim().strip_prefix("opacity:"))
        .and_then(|value| value.trim().parse().ok())
        .expect("element has an inline opacity")
}

#[function_component]
fn BadgeHarness() -> Html {
    html! {
        <AnimatedBadge class="harness-badge \"broken">{ "Assignment" }</AnimatedBadge>
    }
}

#[wasm_bindgen_test]
async fn animated_badge_renders_children_and_keeps_valid_extension() {
    let root = mount_point();
    let handle = yew::Renderer::<BadgeHarness>::with_root(root.clone()).render();
    TimeoutFuture::new(50).await;

    let badge = root
        .query_selector(".harness-badge")
        .unwrap()
        .expect("badge rendered with its extension class");
    assert_eq!(badge.text_content().as_deref(), Some("Assignment"));
    assert!(!badge.class_name().contains("broken"));
    assert!(badge.class_name().contains("badge-glow"));

    // Entrance spring settles well within a second.
    TimeoutFuture::new(1_200).await;
    assert_eq!(opacity_of(&badge), 1.0);

    handle.destroy();
}

#[wasm_bindgen_test]
async fn grid_pulse_stays_within_bounds() {
    let root = mount_point();
    let handle = yew::Renderer::<GridPattern>::with_root(root.clone()).render();

    for _ in 0..5 {
        TimeoutFuture::new(120).await;
        let inner = root
            .first_element_child()
            .and_then(|outer| outer.first_element_child())
            .expect("pulse layer rendered");
        let value = opacity_of(&inner);
        assert!((0.3..=0.5).contains(&value), "pulse opacity {value}");
    }

    handle.destroy();
}

#[wasm_bindgen_test]
async fn motion_page_staggers_three_children_and_gates_the_orb() {
    let root = mount_point();
    let handle = yew::Renderer::<Index>::with_root_and_props(
        root.clone(),
        IndexProps {
            revision: Revision::Motion,
        },
    )
    .render();
    TimeoutFuture::new(50).await;

    for index in 0..3 {
        let selector = format!("[data-entrance=\"{index}\"]");
        assert!(root.query_selector(&selector).unwrap().is_some(), "{selector}");
    }
    let text = root.text_content().unwrap_or_default();
    assert!(text.contains("UI DEVELOPER"));
    assert!(text.contains(COMPANY_NAME));

    let width = window().unwrap().inner_width().unwrap().as_f64().unwrap();
    let orb = root.query_selector("[data-decor=\"orb\"]").unwrap();
    assert_eq!(orb.is_some(), config::shows_orb(width));

    handle.destroy();
}

#[wasm_bindgen_test]
async fn classic_page_has_no_orb() {
    let root = mount_point();
    let handle = yew::Renderer::<Index>::with_root_and_props(
        root.clone(),
        IndexProps {
            revision: Revision::Classic,
        },
    )
    .render();
    TimeoutFuture::new(50).await;

    assert!(root.query_selector("[data-decor=\"orb\"]").unwrap().is_none());
    assert!(root.query_selector(".enter-top").unwrap().is_some());
    assert!(root.text_content().unwrap_or_default().contains("Assignment"));

    handle.destroy();
}

#[wasm_bindgen_test]
async fn animated_badge_scales_down_while_the_pointer_is_down() {
    let root = mount_point();
    let handle = yew::Renderer::<BadgeHarness>::with_root(root.clone()).render();
    TimeoutFuture::new(1_200).await;

    let badge = root.query_selector(".harness-badge").unwrap().unwrap();
    let mut init = PointerEventInit::new();
    init.bubbles(true);
    init.pointer_type("touch");
    let down = PointerEvent::new_with_event_init_dict("pointerdown", &init).unwrap();
    badge.dispatch_event(&down).unwrap();

    TimeoutFuture::new(1_200).await;
    let style = badge.get_attribute("style").unwrap_or_default();
    assert!(style.contains("scale(0.9500)"), "{style}");

    handle.destroy();
}

#[wasm_bindgen_test]
async fn glow_progress_is_measured_on_the_corner_shape() {
    let root = mount_point();
    root.set_attribute("style", "position: relative; height: 3000px;").unwrap();
    let document = window().unwrap().document().unwrap();
    let spacer = document.create_element("div").unwrap();
    spacer.set_attribute("style", "height: 3000px;").unwrap();
    document.body().unwrap().append_child(&spacer).unwrap();

    let handle = yew::Renderer::<ParallaxGlow>::with_root_and_props(
        root.clone(),
        ParallaxGlowProps {
            curve: GlowCurve::Bright,
            shapes: vec![GlowShape::corner()],
            class: AttrValue::default(),
        },
    )
    .render();
    TimeoutFuture::new(50).await;

    let shape = root.query_selector("[data-glow=\"0\"]").unwrap().unwrap();
    let top = document_top(&shape);
    let height = f64::from(shape.clone().dyn_into::<HtmlElement>().unwrap().offset_height());

    // Halfway through the shape: progress 0.5. Over the whole 3000px region it would be ~0.94.
    window().unwrap().scroll_to_with_x_and_y(0.0, top + height / 2.0);
    dispatch_scroll();
    TimeoutFuture::new(50).await;

    let expected = GlowCurve::Bright.frame(0.5).opacity;
    let opacity = opacity_of(&shape);
    assert!((opacity - expected).abs() < 0.01, "opacity {opacity}, expected {expected}");

    handle.destroy();
    window().unwrap().scroll_to_with_x_and_y(0.0, 0.0);
    root.remove();
    spacer.remove();
}

#[wasm_bindgen_test]
async fn frame_loop_stops_ticking_once_dropped() {
    let ticks = Rc::new(Cell::new(0_u32));
    let frame_loop = {
        let ticks = ticks.clone();
        FrameLoop::start("test", 10, move || ticks.set(ticks.get() + 1))
    };

    TimeoutFuture::new(100).await;
    assert!(ticks.get() > 0);

    drop(frame_loop);
    let stopped_at = ticks.get();
    TimeoutFuture::new(100).await;
    assert_eq!(ticks.get(), stopped_at);
}

#[wasm_bindgen_test]
async fn window_listener_is_detached_once_dropped() {
    let calls = Rc::new(Cell::new(0_u32));
    let listener = {
        let calls = calls.clone();
        WindowListener::attach("test", &["scroll"], move || calls.set(calls.get() + 1)).unwrap()
    };

    dispatch_scroll();
    assert_eq!(calls.get(), 1);

    drop(listener);
    dispatch_scroll();
    TimeoutFuture::new(50).await;
    assert_eq!(calls.get(), 1);
}
