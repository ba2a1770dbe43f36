pub mod beats;
pub mod media;
pub mod run;
pub mod sentences;
pub mod sequencer;
pub mod timers;

use log::{debug, info, warn};
use web_sys::{Element, HtmlVideoElement};
use yew::prelude::*;

use crate::components::visibility::ViewportObserver;
use crate::config;
use media::VideoHandle;
use run::{Generation, HeroSnapshot, TimerTag};
use sentences::{Emphasis, SENTENCES};
use sequencer::{HeroSequencer, MediaEvent};
use timers::GlooScheduler;

pub enum HeroMsg {
    Visibility(bool),
    Timer(TimerTag),
    Media(Generation, MediaEvent),
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    /// Receives every change of the downstream content gate.
    #[prop_or_default]
    pub on_gate_change: Callback<bool>,
}

pub struct Hero {
    section: NodeRef,
    video: NodeRef,
    sequencer: HeroSequencer<GlooScheduler, VideoHandle>,
    observer: Option<ViewportObserver>,
    gate_open: bool,
}

impl Hero {
    fn publish_gate(&mut self, ctx: &Context<Self>) {
        let unlocked = self.sequencer.snapshot().downstream_unlocked;
        if unlocked != self.gate_open {
            self.gate_open = unlocked;
            ctx.props().on_gate_change.emit(unlocked);
        }
    }

    fn media_callback(
        ctx: &Context<Self>,
        generation: Option<Generation>,
        event_of: fn(&Event) -> MediaEvent,
    ) -> Callback<Event> {
        ctx.link()
            .batch_callback(move |e: Event| generation.map(|origin| HeroMsg::Media(origin, event_of(&e))))
    }

    fn view_sentence(snapshot: &HeroSnapshot, generation: Option<Generation>) -> Html {
        let Some(sentence) = snapshot.active_sentence.and_then(|index| SENTENCES.get(index)) else {
            return html! {};
        };
        // Keyed per run and sentence so a replay restarts the word animation.
        let key = format!(
            "{}-{}",
            generation.map_or(0, Generation::get),
            snapshot.active_sentence.unwrap_or_default()
        );

        html! {
            <p key={key} class={classes!("hero-sentence", sentence.align.class())} aria-label={sentence.text()}>
                { for sentence.words.iter().enumerate().map(|(i, word)| html! {
                    <span
                        class={classes!("hero-word", (word.emphasis == Emphasis::Highlighted).then_some("highlight"))}
                        style={format!("animation-delay: {}ms;", i * 180)}
                    >
                        {word.text}{" "}
                    </span>
                }) }
            </p>
        }
    }
}

impl Component for Hero {
    type Message = HeroMsg;
    type Properties = HeroProps;

    fn create(ctx: &Context<Self>) -> Self {
        let video = NodeRef::default();
        let scheduler = GlooScheduler::new(ctx.link().callback(HeroMsg::Timer));
        let sequencer = HeroSequencer::new(scheduler, VideoHandle::new(video.clone()), config::hero_timeline());
        info!(
            "hero timeline loaded, content unlocks at most {} ms after the hero shows",
            sequencer.timeline().worst_case_unlock_ms()
        );

        Self {
            section: NodeRef::default(),
            video,
            sequencer,
            observer: None,
            gate_open: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let changed = match msg {
            HeroMsg::Visibility(visible) => {
                self.sequencer.on_visibility_change(visible);
                debug!("hero visibility {} leaves it {:?}", visible, self.sequencer.phase());
                // Media callbacks are stamped with the generation at render time.
                true
            }
            HeroMsg::Timer(tag) => self.sequencer.on_timer(tag),
            HeroMsg::Media(origin, event) => self.sequencer.on_media_event(origin, event),
        };
        self.publish_gate(ctx);
        changed
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let Some(section) = self.section.cast::<Element>() else {
            return;
        };
        let on_change = ctx.link().callback(HeroMsg::Visibility);
        match ViewportObserver::observe(&section, config::HERO_VISIBILITY_THRESHOLD, on_change) {
            Ok(observer) => self.observer = Some(observer),
            Err(err) => {
                // Without an observer the hero is treated as always on screen.
                warn!("hero visibility observer unavailable: {:?}", err);
                ctx.link().send_message(HeroMsg::Visibility(true));
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        info!("hero unmounted");
        self.observer = None;
        self.sequencer.on_visibility_change(false);
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let snapshot = self.sequencer.snapshot();
        let generation = self.sequencer.generation();

        let onplaying = Self::media_callback(ctx, generation, |_| MediaEvent::Started);
        let ontimeupdate = Self::media_callback(ctx, generation, |e| {
            let video: HtmlVideoElement = e.target_unchecked_into();
            MediaEvent::TimeUpdate(video.current_time())
        });
        let onended = Self::media_callback(ctx, generation, |_| MediaEvent::Ended);

        html! {
            <section ref={self.section.clone()} class="hero">
                <style>
                    {r#"
                        .hero {
                            position: relative;
                            width: 100%;
                            padding: 6rem 1rem 2rem;
                            background: #fff;
                            box-sizing: border-box;
                        }
                        .hero-frame {
                            position: relative;
                            aspect-ratio: 2.4 / 1;
                            border-radius: 0.75rem;
                            overflow: hidden;
                            background: #000;
                        }
                        .hero-video {
                            position: absolute;
                            inset: 0;
                            width: 100%;
                            height: 100%;
                            object-fit: cover;
                            opacity: 0.6;
                            transform: scale(1.05);
                        }
                        .hero-overlay {
                            position: absolute;
                            inset: 0;
                            display: flex;
                            flex-direction: column;
                            justify-content: center;
                            padding: 0 8%;
                            background: linear-gradient(to top, rgba(0,0,0,0.8), transparent 60%);
                        }
                        .hero-sentence {
                            color: #fff;
                            font-size: clamp(1.5rem, 4vw, 3.5rem);
                            font-weight: 700;
                            text-transform: uppercase;
                        }
                        .hero-sentence.align-left { text-align: left; }
                        .hero-sentence.align-center { text-align: center; }
                        .hero-sentence.align-right { text-align: right; }
                        .hero-word {
                            opacity: 0;
                            animation: heroWordIn 0.8s cubic-bezier(0.16, 1, 0.3, 1) forwards;
                        }
                        .hero-word.highlight { color: #9bd36b; }
                        .hero-logo {
                            position: absolute;
                            left: 50%;
                            top: 50%;
                            transform: translate(-50%, -40%) scale(0.8);
                            opacity: 0;
                            color: #fff;
                            font-size: clamp(2rem, 6vw, 5rem);
                            letter-spacing: 0.1em;
                            transition: opacity 1s ease, transform 1s cubic-bezier(0.16, 1, 0.3, 1);
                        }
                        .hero-logo.visible {
                            opacity: 1;
                            transform: translate(-50%, -50%) scale(1);
                        }
                        @keyframes heroWordIn {
                            from { opacity: 0; transform: translateY(0.5em); }
                            to { opacity: 1; transform: translateY(0); }
                        }
                    "#}
                </style>
                <div class="hero-frame">
                    <video
                        ref={self.video.clone()}
                        class="hero-video"
                        src={config::asset_url(config::HERO_VIDEO)}
                        poster={config::asset_url(config::HERO_POSTER)}
                        muted=true
                        playsinline=true
                        preload="auto"
                        {onplaying}
                        {ontimeupdate}
                        {onended}
                    />
                    <div class="hero-overlay">
                        { Self::view_sentence(&snapshot, generation) }
                    </div>
                    <div class={classes!("hero-logo", snapshot.logo_visible.then_some("visible"))}>
                        {"MICRON HOUSE"}
                    </div>
                </div>
            </section>
        }
    }
}
