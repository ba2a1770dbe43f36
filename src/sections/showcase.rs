use std::rc::Rc;

use yew::prelude::*;

use crate::components::bento_card::{ArrowPosition, BentoCard};
use crate::components::hover_video::HoverVideo;
use crate::config;
use crate::content::{ModalContent, ShowcaseCard, ShowcaseSection};

/// Cards enter one after another.
pub fn card_delay(index: usize) -> f64 {
    0.1 * index as f64
}

/// A clip fills the top of the card, so the arrow moves down.
pub fn arrow_position(card: &ShowcaseCard) -> ArrowPosition {
    if card.video.is_some() {
        ArrowPosition::BottomRight
    } else {
        ArrowPosition::TopRight
    }
}

#[derive(Properties, PartialEq)]
struct ShowcaseTileProps {
    card: ShowcaseCard,
    index: usize,
    on_open: Callback<Rc<ModalContent>>,
}

#[function_component(ShowcaseTile)]
fn showcase_tile(props: &ShowcaseTileProps) -> Html {
    let hovered = use_state(|| false);
    let card = &props.card;

    let onclick = {
        let modal = card.modal.clone();
        props.on_open.reform(move |_: MouseEvent| modal.clone())
    };
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <BentoCard
            class="showcase-card"
            background={card.background.clone()}
            tone={card.tone}
            delay={card_delay(props.index)}
            arrow_position={arrow_position(card)}
            {onclick}
            {onmouseenter}
            {onmouseleave}
        >
            if let Some(video) = &card.video {
                <HoverVideo src={config::asset_url(video)} hovered={*hovered} />
            }
            <h3>{&card.title}</h3>
            <p>{&card.subtitle}</p>
        </BentoCard>
    }
}

#[derive(Properties, PartialEq)]
pub struct ShowcaseProps {
    pub section: Rc<ShowcaseSection>,
    pub on_open: Callback<Rc<ModalContent>>,
}

#[function_component(Showcase)]
pub fn showcase(props: &ShowcaseProps) -> Html {
    let section = &props.section;

    html! {
        <section id={section.id.clone()} class="showcase">
            <style>
                {r#"
                    .showcase { max-width: 80rem; margin: 0 auto; padding: 3rem; background: #fff; color: #18181b; }
                    .showcase-header { border-bottom: 1px solid #f4f4f5; padding-bottom: 2rem; margin-bottom: 3rem; }
                    .showcase-eyebrow {
                        display: block;
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.2em;
                        color: #a1a1aa;
                        margin-bottom: 0.5rem;
                    }
                    .showcase-heading { font-size: 3.75rem; font-weight: 700; text-transform: uppercase; color: #3b2a4a; margin: 0; }
                    .showcase-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); gap: 1rem; }
                    .showcase-card { aspect-ratio: 1; justify-content: flex-end; }
                    .showcase-card h3 { font-size: 1.875rem; font-weight: 900; text-transform: uppercase; margin: 0; }
                    .showcase-card p { font-size: 0.75rem; font-weight: 700; letter-spacing: 0.15em; opacity: 0.7; margin: 0.5rem 0 0; }
                    @media (max-width: 768px) {
                        .showcase { padding: 2rem 1rem; }
                        .showcase-heading { font-size: 2.5rem; }
                    }
                "#}
            </style>
            <div class="showcase-header">
                <span class="showcase-eyebrow">{&section.eyebrow}</span>
                <h2 class="showcase-heading">{&section.heading}</h2>
            </div>
            <div class="showcase-grid">
                { for section.cards.iter().enumerate().map(|(i, card)| html! {
                    <ShowcaseTile key={card.title.clone()} card={card.clone()} index={i} on_open={props.on_open.clone()} />
                }) }
            </div>
        </section>
    }
}
