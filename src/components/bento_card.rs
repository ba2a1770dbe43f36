use serde::Deserialize;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::visibility::{use_in_view, InViewOptions};

/// Text colour family of a card. The corner arrow follows it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    #[default]
    Light,
    Dark,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Tone::Light => "tone-light",
            Tone::Dark => "tone-dark",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArrowPosition {
    #[default]
    TopRight,
    BottomRight,
}

impl ArrowPosition {
    fn class(self) -> &'static str {
        match self {
            ArrowPosition::TopRight => "arrow-top-right",
            ArrowPosition::BottomRight => "arrow-bottom-right",
        }
    }
}

const CARD_VIEW: InViewOptions = InViewOptions {
    threshold: 0.1,
    once: false,
};

#[derive(Properties, PartialEq)]
pub struct BentoCardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
    /// Entrance delay in seconds.
    #[prop_or(0.0)]
    pub delay: f64,
    /// Entrance duration in seconds.
    #[prop_or(1.5)]
    pub duration: f64,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub onmouseenter: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub onmouseleave: Option<Callback<MouseEvent>>,
    #[prop_or(true)]
    pub hover_effect: bool,
    /// Lift on hover, in pixels (negative is up).
    #[prop_or(-8.0)]
    pub hover_lift: f64,
    #[prop_or(AttrValue::Static("#18181b"))]
    pub background: AttrValue,
    #[prop_or(AttrValue::Static("rgba(255, 255, 255, 0.1)"))]
    pub border: AttrValue,
    #[prop_or_default]
    pub tone: Tone,
    #[prop_or_default]
    pub arrow_position: ArrowPosition,
}

pub fn shows_arrow(clickable: bool, hover_effect: bool) -> bool {
    clickable && hover_effect
}

pub fn card_style(background: &str, border: &str, delay: f64, duration: f64, hover_lift: f64) -> String {
    format!(
        "background: {}; border-color: {}; transition-delay: {}s; transition-duration: {}s; --hover-lift: {}px;",
        background, border, delay, duration, hover_lift
    )
}

#[function_component(BentoCard)]
pub fn bento_card(props: &BentoCardProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), CARD_VIEW);

    let clickable = props.onclick.is_some();
    let arrow = shows_arrow(clickable, props.hover_effect);

    html! {
        <div
            ref={node}
            class={classes!(
                "bento-card",
                props.tone.class(),
                in_view.then_some("in-view"),
                props.hover_effect.then_some("hoverable"),
                (props.hover_effect && clickable).then_some("clickable"),
                props.class.clone()
            )}
            style={card_style(&props.background, &props.border, props.delay, props.duration, props.hover_lift)}
            onclick={props.onclick.clone()}
            onmouseenter={props.onmouseenter.clone()}
            onmouseleave={props.onmouseleave.clone()}
        >
            <style>
                {r#"
                    .bento-card {
                        position: relative;
                        overflow: hidden;
                        display: flex;
                        flex-direction: column;
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        border: 1px solid;
                        box-shadow: 0 30px 60px -10px rgba(0,0,0,0.3);
                        opacity: 0;
                        transform: translateY(50px);
                        transition-property: opacity, transform, box-shadow;
                        transition-timing-function: cubic-bezier(0.22, 1, 0.36, 1);
                    }
                    .bento-card.in-view {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .bento-card.hoverable.in-view:hover {
                        transform: translateY(var(--hover-lift));
                        transition-delay: 0s;
                        transition-duration: 0.3s;
                        box-shadow: 0 45px 80px -10px rgba(0,0,0,0.35);
                    }
                    .bento-card.clickable { cursor: pointer; }
                    .bento-card.tone-light { color: #fff; }
                    .bento-card.tone-dark { color: #18181b; }
                    .bento-card.tone-light::before {
                        content: '';
                        position: absolute;
                        left: 0;
                        right: 0;
                        top: 0;
                        height: 1px;
                        background: linear-gradient(to right, transparent, rgba(255,255,255,0.2), transparent);
                    }
                    .bento-card-body {
                        position: relative;
                        z-index: 1;
                        display: flex;
                        flex-direction: column;
                        width: 100%;
                        height: 100%;
                    }
                    .bento-arrow {
                        position: absolute;
                        z-index: 2;
                        opacity: 0.8;
                        transition: opacity 0.3s, transform 0.3s;
                    }
                    .bento-arrow.arrow-top-right { top: 1rem; right: 1rem; }
                    .bento-arrow.arrow-bottom-right { bottom: 1rem; right: 1rem; }
                    @media (min-width: 768px) {
                        .bento-arrow { opacity: 0; transform: translateY(0.5rem); }
                        .bento-card:hover .bento-arrow { opacity: 1; transform: translateY(0); }
                    }
                "#}
            </style>
            <div class="bento-card-body">
                { for props.children.iter() }
            </div>
            if arrow {
                <span class={classes!("bento-arrow", props.arrow_position.class())}>{"↗"}</span>
            }
        </div>
    }
}
