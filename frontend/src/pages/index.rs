use stylist::css;
use yew::prelude::*;

use crate::components::animated_badge::AnimatedBadge;
use crate::components::badge::Badge;
use crate::components::grid_pattern::GridPattern;
use crate::components::parallax_glow::{GlowCurve, GlowShape, ParallaxGlow};
use crate::config::{self, Revision};
use crate::hooks::use_gesture::use_gesture;
use crate::hooks::use_motion::use_motion;
use crate::hooks::use_scroll_progress::{use_scroll_progress, ScrollTarget};
use crate::hooks::use_viewport_width::use_viewport_width;
use crate::motion::easing::Easing;
use crate::motion::interpolate::Interpolation;
use crate::motion::orchestrate::Orchestration;
use crate::motion::transition::Transition;
use crate::motion::variant::{Variants, VisualState};
use crate::style;

pub const BADGE_TEXT: &str = "Assignment";
pub const HEADING_LINES: [&str; 2] = ["UI DEVELOPER", "ASSIGNMENT"];
pub const COMPANY_LABEL: &str = "Company";
pub const COMPANY_NAME: &str = "Juspay Technologies Private Limited";

/// Page scroll progress to background drift, in percent.
pub const BACKGROUND_OFFSET: Interpolation<2> = Interpolation::new([0.0, 1.0], [0.0, 20.0]);

pub const CONTAINER: Variants = Variants::fade();
pub const CONTAINER_TRANSITION: Transition = Transition::tween(0.3, Easing::EaseOut);
pub const ENTRANCE: Orchestration = Orchestration::new(0.1, 0.15);
pub const ITEM: Variants = Variants::new(
    VisualState::HIDDEN.with_y(30.0).with_scale(0.95),
    VisualState::REST,
);
pub const ITEM_SPRING: Transition = Transition::spring(100.0, 15.0);

pub const LINE_NUDGE_PX: f64 = 5.0;
pub const LINE_SPRING: Transition = Transition::spring(300.0, 10.0);

pub const COMPANY_TRACKING_EM: f64 = 0.025;
pub const COMPANY_TRACKING_HOVER_EM: f64 = 0.2;
pub const COMPANY_HOVER: Transition = Transition::tween(0.3, Easing::EaseOut);

pub const ORB: Variants = Variants::new(
    VisualState::HIDDEN.with_scale(0.5),
    VisualState::REST.with_opacity(0.6),
);
pub const ORB_TRANSITION: Transition = Transition::tween(1.0, Easing::EaseOut).with_delay(0.8);

pub const BOTTOM_FADE: Transition = Transition::tween(1.5, Easing::EaseOut).with_delay(0.5);

pub fn item_transition(index: usize) -> Transition {
    ITEM_SPRING.with_delay(ENTRANCE.child_delay(index))
}

pub fn line_target(hovered: bool) -> VisualState {
    VisualState::REST.with_x(if hovered { LINE_NUDGE_PX } else { 0.0 })
}

pub fn company_target(hovered: bool) -> VisualState {
    let tracking = if hovered {
        COMPANY_TRACKING_HOVER_EM
    } else {
        COMPANY_TRACKING_EM
    };
    VisualState::REST.with_letter_spacing(tracking)
}

fn glow_shapes() -> Vec<GlowShape> {
    vec![
        GlowShape::corner(),
        GlowShape {
            placement: "top: 15%; left: -6rem;".into(),
            size_rem: 28.0,
            color: "hsl(280 85% 62%)".into(),
            blur_px: 96.0,
        },
    ]
}

fn page_shell() -> Classes {
    classes!(
        css!(r#"
            position: relative;
            min-height: 100vh;
            overflow: hidden;
        "#),
        "gradient-bg"
    )
}

fn content_column() -> Classes {
    classes!(css!(r#"
        position: relative;
        z-index: 10;
        display: flex;
        flex-direction: column;
        align-items: flex-start;
        justify-content: center;
        min-height: 100vh;
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 2rem;
        box-sizing: border-box;
        @media (min-width: 768px) {
            padding: 0 4rem;
        }
        @media (min-width: 1024px) {
            padding: 0 6rem;
        }
    "#))
}

fn heading() -> Classes {
    classes!(css!(r#"
        margin: 0;
        font-size: clamp(3.75rem, 8vw, 6rem);
        font-weight: 700;
        line-height: 1.1;
        letter-spacing: -0.025em;
        color: hsl(var(--foreground));
    "#))
}

fn company_label() -> Classes {
    classes!(css!(r#"
        margin: 0 0 1rem 0;
        color: hsl(var(--muted-foreground));
        text-transform: uppercase;
        letter-spacing: 0.1em;
        font-size: 0.875rem;
        font-weight: 500;
    "#))
}

fn company_name() -> Classes {
    classes!(css!(r#"
        margin: 0;
        color: hsl(var(--foreground));
        font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
        font-size: 1.25rem;
        @media (min-width: 768px) {
            font-size: 1.5rem;
        }
    "#))
}

#[derive(Properties, PartialEq)]
pub struct IndexProps {
    #[prop_or_default]
    pub revision: Revision,
}

#[function_component(Index)]
pub fn index(props: &IndexProps) -> Html {
    match props.revision {
        Revision::Motion => html! { <MotionIndex /> },
        Revision::Classic => html! { <ClassicIndex /> },
    }
}

#[function_component(MotionIndex)]
fn motion_index() -> Html {
    let progress = use_scroll_progress(ScrollTarget::Page);
    let container = use_motion(CONTAINER.hidden, CONTAINER.visible, CONTAINER_TRANSITION);

    let overlay = css!(r#"
        position: absolute;
        inset: 0;
        pointer-events: none;
        background: linear-gradient(135deg, transparent 0%, transparent 50%, hsl(270 80% 30% / 0.12) 100%);
        will-change: transform;
    "#);

    html! {
        <div class={page_shell()}>
            <GridPattern />
            <div
                class={overlay}
                style={format!("transform: translate3d(0, {:.3}%, 0);", BACKGROUND_OFFSET.at(progress))}
            />
            <ParallaxGlow curve={GlowCurve::Bright} shapes={glow_shapes()} />

            <div class={content_column()} style={format!("opacity: {:.4};", container.opacity.clamp(0.0, 1.0))}>
                <EntranceItem index={0}>
                    <AnimatedBadge class="entrance-badge">{ BADGE_TEXT }</AnimatedBadge>
                </EntranceItem>
                <EntranceItem index={1}>
                    <h1 class={heading()} style="margin: 3rem 0 4rem 0;">
                        <HoverLine>{ HEADING_LINES[0] }</HoverLine>
                        <br />
                        <HoverLine>{ HEADING_LINES[1] }</HoverLine>
                    </h1>
                </EntranceItem>
                <EntranceItem index={2}>
                    <div>
                        <p class={company_label()}>{ COMPANY_LABEL }</p>
                        <CompanyName />
                    </div>
                </EntranceItem>
            </div>

            <DecorativeOrb />
            <BottomFade />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct EntranceItemProps {
    index: usize,
    #[prop_or_default]
    children: Children,
}

#[function_component(EntranceItem)]
fn entrance_item(props: &EntranceItemProps) -> Html {
    let state = use_motion(ITEM.hidden, ITEM.visible, item_transition(props.index));

    html! {
        <div style={state.to_style()} data-entrance={props.index.to_string()}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HoverLineProps {
    #[prop_or_default]
    children: Children,
}

/// A heading line that leans right while hovered.
#[function_component(HoverLine)]
fn hover_line(props: &HoverLineProps) -> Html {
    let (gesture, handlers) = use_gesture();
    let state = use_motion(VisualState::REST, line_target(gesture.is_active()), LINE_SPRING);

    html! {
        <span
            style={format!("display: inline-block; {}", state.to_style())}
            onpointerenter={handlers.onpointerenter}
            onpointerleave={handlers.onpointerleave}
        >
            { for props.children.iter() }
        </span>
    }
}

#[function_component(CompanyName)]
fn company_name_line() -> Html {
    let (gesture, handlers) = use_gesture();
    let state = use_motion(company_target(false), company_target(gesture.is_active()), COMPANY_HOVER);

    html! {
        <p
            class={company_name()}
            style={state.to_style()}
            onpointerenter={handlers.onpointerenter}
            onpointerleave={handlers.onpointerleave}
        >
            { COMPANY_NAME }
        </p>
    }
}

/// Only mounts the orb on wide viewports.
#[function_component(DecorativeOrb)]
fn decorative_orb() -> Html {
    let width = use_viewport_width();
    if config::shows_orb(width) {
        html! { <Orb /> }
    } else {
        html! {}
    }
}

#[function_component(Orb)]
fn orb() -> Html {
    let state = use_motion(ORB.hidden, ORB.visible, ORB_TRANSITION);

    let class = css!(r#"
        position: absolute;
        top: 25%;
        right: 8%;
        width: 18rem;
        height: 18rem;
        border-radius: 9999px;
        pointer-events: none;
        background: radial-gradient(circle at 30% 30%, hsl(var(--primary) / 0.45), hsl(280 85% 40% / 0.1) 60%, transparent 75%);
        filter: blur(40px);
    "#);

    html! {
        <div class={class} style={state.to_style()} data-decor="orb" aria-hidden="true" />
    }
}

#[function_component(BottomFade)]
fn bottom_fade() -> Html {
    let fade = Variants::fade();
    let state = use_motion(fade.hidden, fade.visible, BOTTOM_FADE);

    let class = css!(r#"
        position: absolute;
        left: 0;
        right: 0;
        bottom: 0;
        height: 12rem;
        pointer-events: none;
        background: linear-gradient(to top, hsl(var(--background)), transparent);
    "#);

    html! {
        <div class={class} style={format!("opacity: {:.4};", state.opacity.clamp(0.0, 1.0))} aria-hidden="true" />
    }
}

#[function_component(ClassicIndex)]
fn classic_index() -> Html {
    let overlay = css!(r#"
        position: absolute;
        inset: 0;
        pointer-events: none;
        background: linear-gradient(to bottom right, transparent, transparent, hsl(270 80% 30% / 0.1));
    "#);
    let accent = css!(r#"
        position: absolute;
        right: 0;
        bottom: 0;
        width: 24rem;
        height: 24rem;
        border-radius: 9999px;
        pointer-events: none;
        background: hsl(var(--primary) / 0.05);
        filter: blur(64px);
    "#);

    html! {
        <div class={classes!(page_shell(), "grid-pattern")}>
            <div class={overlay} />
            <div class={content_column()}>
                <div style="margin-bottom: 3rem;">
                    <Badge class="enter-top">{ BADGE_TEXT }</Badge>
                </div>
                <h1 class={style::extend(heading(), "enter-bottom enter-delay-150")} style="margin-bottom: 4rem;">
                    { HEADING_LINES[0] }
                    <br />
                    { HEADING_LINES[1] }
                </h1>
                <div class="enter-bottom enter-delay-300">
                    <p class={company_label()}>{ COMPANY_LABEL }</p>
                    <p class={company_name()} style="letter-spacing: 0.025em;">{ COMPANY_NAME }</p>
                </div>
            </div>
            <div class={accent} aria-hidden="true" />
        </div>
    }
}
