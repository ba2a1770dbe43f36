use yew::prelude::*;

use crate::components::bento_card::BentoCard;
use crate::components::gate::use_gated_entrance;
use crate::components::visibility::{use_in_view, InViewOptions};
use crate::hero::sentences::{Align, Emphasis, Sentence, SENTENCES};

const INTRO_VIEW: InViewOptions = InViewOptions {
    threshold: 0.2,
    once: true,
};

const PARADIGM_LINES: [&[&str]; 2] = [&["THE", "PARADIGM"], &["SHIFTS."]];

const ADDRESS_LINES: [&str; 3] = ["Micron House", "1020 East Warm Springs Ave", "Boise, Idaho 83712"];

const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d2889.234!2d-116.1898!3d43.6088!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x54aef8d1b0b3b8e7%3A0x0!2s1020%20E%20Warm%20Springs%20Ave%2C%20Boise%2C%20ID%2083712!5e0!3m2!1sen!2sus!4v1706000000000";

/// Reveal pacing, in seconds from the moment the entrance starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntroTiming {
    pub green_card: f64,
    pub text_after_card: f64,
    pub word_step: f64,
    pub sentence_gap: f64,
    pub paradigm_pause: f64,
    pub paradigm_step: f64,
    pub address_after_paradigm: f64,
    pub map_after_address: f64,
}

impl Default for IntroTiming {
    fn default() -> Self {
        Self {
            green_card: 1.1,
            text_after_card: 0.5,
            word_step: 0.3,
            sentence_gap: 0.6,
            paradigm_pause: 0.5,
            paradigm_step: 0.2,
            address_after_paradigm: 1.5,
            map_after_address: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct IntroSchedule {
    pub green_card: f64,
    pub text_start: f64,
    /// Absolute delay of every word, per sentence.
    pub words: Vec<Vec<f64>>,
    pub paradigm_start: f64,
    pub paradigm_words: Vec<f64>,
    pub address: f64,
    pub map: f64,
}

pub fn reveal_schedule(timing: &IntroTiming, sentences: &[Sentence], paradigm_words: usize) -> IntroSchedule {
    let text_start = timing.green_card + timing.text_after_card;

    let mut cursor = 0.0;
    let words = sentences
        .iter()
        .map(|sentence| {
            let delays = sentence
                .words
                .iter()
                .map(|_| {
                    let delay = text_start + cursor;
                    cursor += timing.word_step;
                    delay
                })
                .collect();
            cursor += timing.sentence_gap;
            delays
        })
        .collect();

    let paradigm_start = text_start + cursor + timing.paradigm_pause;
    let paradigm_words = (0..paradigm_words)
        .map(|i| paradigm_start + i as f64 * timing.paradigm_step)
        .collect();
    let address = paradigm_start + timing.address_after_paradigm;

    IntroSchedule {
        green_card: timing.green_card,
        text_start,
        words,
        paradigm_start,
        paradigm_words,
        address,
        map: address + timing.map_after_address,
    }
}

fn delay_style(seconds: f64) -> String {
    format!("transition-delay: {:.2}s;", seconds)
}

fn view_sentence(sentence: &Sentence, delays: &[f64]) -> Html {
    let align = match sentence.align {
        Align::Left => "intro-line left",
        Align::Center => "intro-line center",
        Align::Right => "intro-line right",
    };
    html! {
        <div class={align}>
            { for sentence.words.iter().zip(delays).map(|(word, delay)| html! {
                <span
                    class={classes!(
                        "intro-word",
                        "reveal",
                        (word.emphasis == Emphasis::Highlighted).then_some("highlighted")
                    )}
                    style={delay_style(*delay)}
                >
                    {word.text}
                </span>
            }) }
        </div>
    }
}

#[function_component(SectionIntro)]
pub fn section_intro() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), INTRO_VIEW);
    let started = use_gated_entrance(in_view);

    let paradigm_count: usize = PARADIGM_LINES.iter().map(|line| line.len()).sum();
    let schedule = use_memo(
        move |count| reveal_schedule(&IntroTiming::default(), &SENTENCES, *count),
        paradigm_count,
    );

    let paradigm_lines = PARADIGM_LINES.iter().scan(0, |offset, line| {
        let first = *offset;
        *offset += line.len();
        Some((first, *line))
    });

    html! {
        <section ref={node} class={classes!("section-intro", started.then_some("started"))}>
            <style>
                {r#"
                    .section-intro {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 3rem 3rem;
                        background: #fafafa;
                        color: #18181b;
                    }
                    .section-intro .reveal {
                        opacity: 0;
                        transform: translateX(10px);
                        transition-property: opacity, transform;
                        transition-duration: 0.8s;
                        transition-timing-function: ease-out;
                    }
                    .section-intro.started .reveal { opacity: 1; transform: none; }
                    .intro-card { min-height: 340px; justify-content: center; }
                    .intro-lines { display: flex; flex-direction: column; gap: 1rem; padding: 1.5rem 2rem; }
                    .intro-line { display: flex; flex-wrap: wrap; gap: 0.75rem; }
                    .intro-line.center { justify-content: center; }
                    .intro-line.right { justify-content: flex-end; }
                    .intro-word {
                        display: inline-block;
                        font-size: 3.75rem;
                        font-style: italic;
                        font-weight: 300;
                        color: rgba(255,255,255,0.7);
                    }
                    .intro-word.highlighted { font-weight: 900; color: #fff; }
                    .intro-bottom { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; margin-top: 1rem; }
                    .paradigm {
                        font-size: 4.5rem;
                        font-weight: 900;
                        text-transform: uppercase;
                        line-height: 0.9;
                        margin-bottom: 2rem;
                    }
                    .paradigm-line { display: flex; gap: 1.5rem; }
                    .paradigm .reveal { transform: translateY(15px); transition-duration: 1.2s; }
                    .intro-address { border-left: 4px solid #6a9a3f; padding-left: 1.5rem; text-transform: uppercase; letter-spacing: 0.15em; }
                    .intro-address h3 { color: #6a9a3f; font-size: 1.25rem; margin: 0 0 0.25rem; }
                    .intro-address p { margin: 0; font-weight: 700; }
                    .intro-address p.muted { color: #a1a1aa; font-weight: 400; }
                    .intro-map { min-height: 300px; }
                    .intro-map .reveal { transform: translateY(20px); transition-duration: 1s; }
                    .intro-map iframe { width: 100%; height: 300px; border: 0; filter: grayscale(100%); }
                    @media (max-width: 1024px) {
                        .section-intro { padding: 0 1rem 1.5rem; }
                        .intro-word { font-size: 1.5rem; }
                        .paradigm { font-size: 2.25rem; }
                        .intro-bottom { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="reveal" style={delay_style(schedule.green_card)}>
                <BentoCard class="intro-card" background="#6a9a3f" border="rgba(255,255,255,0.2)">
                    <div class="intro-lines">
                        { for SENTENCES.iter().zip(&schedule.words).map(|(sentence, delays)| view_sentence(sentence, delays)) }
                    </div>
                </BentoCard>
            </div>
            <div class="intro-bottom">
                <div>
                    <h2 class="paradigm">
                        { for paradigm_lines.map(|(first, line)| html! {
                            <div class="paradigm-line">
                                { for line.iter().enumerate().map(|(i, word)| {
                                    let delay = schedule
                                        .paradigm_words
                                        .get(first + i)
                                        .copied()
                                        .unwrap_or(schedule.paradigm_start);
                                    html! { <span class="reveal" style={delay_style(delay)}>{*word}</span> }
                                }) }
                            </div>
                        }) }
                    </h2>
                    <div class="intro-address reveal" style={delay_style(schedule.address)}>
                        <h3>{ADDRESS_LINES[0]}</h3>
                        <p>{ADDRESS_LINES[1]}</p>
                        <p class="muted">{ADDRESS_LINES[2]}</p>
                    </div>
                </div>
                <div class="intro-map">
                    <div class="reveal" style={delay_style(schedule.map)}>
                        <BentoCard background="#ffffff" border="#e4e4e7">
                            <iframe src={MAP_EMBED_URL} loading="lazy" title="Map" />
                        </BentoCard>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn schedule() -> IntroSchedule {
        reveal_schedule(&IntroTiming::default(), &SENTENCES, 3)
    }

    #[test]
    fn text_follows_the_green_card() {
        let schedule = schedule();
        assert_relative_eq!(schedule.green_card, 1.1);
        assert_relative_eq!(schedule.text_start, 1.6);
        assert_relative_eq!(schedule.words[0][0], 1.6);
        assert_relative_eq!(schedule.words[0][4], 2.8, epsilon = 1e-9);
    }

    #[test]
    fn sentences_are_separated_by_the_gap() {
        let schedule = schedule();
        // last word of the first sentence at 2.8, then one step and the gap
        assert_relative_eq!(schedule.words[1][0], 3.7, epsilon = 1e-9);
        assert_relative_eq!(schedule.words[2][0], 5.8, epsilon = 1e-9);
    }

    #[test]
    fn paradigm_address_and_map_come_last() {
        let schedule = schedule();
        assert_relative_eq!(schedule.paradigm_start, 8.4, epsilon = 1e-9);
        assert_eq!(schedule.paradigm_words.len(), 3);
        assert_relative_eq!(schedule.paradigm_words[2], 8.8, epsilon = 1e-9);
        assert_relative_eq!(schedule.address, 9.9, epsilon = 1e-9);
        assert_relative_eq!(schedule.map, 10.9, epsilon = 1e-9);
    }

    #[test]
    fn delays_are_rendered_with_two_decimals() {
        assert_eq!(delay_style(1.9000000000000001), "transition-delay: 1.90s;");
    }
}
