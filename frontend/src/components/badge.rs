use stylist::css;
use yew::prelude::*;

use crate::style;

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: AttrValue,
}

pub(crate) fn pill() -> Classes {
    classes!(
        css!(r#"
            display: inline-block;
            padding: 0.75rem 1.5rem;
            border-radius: 0.75rem;
            background: hsl(var(--primary));
            color: hsl(var(--primary-foreground));
            font-size: 0.875rem;
            font-weight: 500;
            letter-spacing: 0.025em;
            text-transform: uppercase;
            cursor: default;
            user-select: none;
        "#),
        "badge-glow"
    )
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    let hover = css!(r#"
        transition: transform 150ms cubic-bezier(0.4, 0, 0.2, 1);
        &:hover {
            transform: scale(1.05);
        }
    "#);
    let class = style::extend(classes!(pill(), hover), &props.class);

    html! {
        <div class={class}>
            { for props.children.iter() }
        </div>
    }
}
