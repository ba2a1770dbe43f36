use log::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlVideoElement};
use yew::prelude::*;

use crate::components::visibility::{use_in_view, InViewOptions};
use crate::hero::media::{settle_play, start_playback};

const CLIP_VIEW: InViewOptions = InViewOptions {
    threshold: 0.6,
    once: false,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipCommand {
    Play,
    Pause,
    /// Pause and seek back to the first frame.
    Rewind,
}

/// Pointer devices follow the hover; touch screens follow the viewport.
pub fn clip_command(touch: bool, hovered: bool, in_view: bool) -> ClipCommand {
    match (touch, hovered, in_view) {
        (true, _, true) => ClipCommand::Play,
        (true, _, false) => ClipCommand::Pause,
        (false, true, _) => ClipCommand::Play,
        (false, false, _) => ClipCommand::Rewind,
    }
}

fn is_touch_screen() -> bool {
    window()
        .and_then(|window| window.match_media("(hover: none)").ok().flatten())
        .map_or(false, |query| query.matches())
}

fn apply(video: HtmlVideoElement, command: ClipCommand) {
    match command {
        ClipCommand::Play => {
            video.set_muted(true);
            spawn_local(async move {
                settle_play(start_playback(&video), "card clip playback rejected").await;
            });
        }
        ClipCommand::Pause => {
            let _ = video.pause();
        }
        ClipCommand::Rewind => {
            let _ = video.pause();
            video.set_current_time(0.0);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HoverVideoProps {
    pub src: AttrValue,
    /// Whether the pointer is over the enclosing card.
    pub hovered: bool,
}

#[function_component(HoverVideo)]
pub fn hover_video(props: &HoverVideoProps) -> Html {
    let frame = use_node_ref();
    let video = use_node_ref();
    let in_view = use_in_view(frame.clone(), CLIP_VIEW);
    let touch = use_memo(|_| is_touch_screen(), ());

    {
        let video = video.clone();
        use_effect_with_deps(
            move |(touch, hovered, in_view)| {
                let command = clip_command(*touch, *hovered, *in_view);
                match video.cast::<HtmlVideoElement>() {
                    Some(element) => apply(element, command),
                    None => debug!("card clip is not mounted"),
                }
                || ()
            },
            (*touch, props.hovered, in_view),
        );
    }

    html! {
        <div ref={frame} class="hover-video">
            <style>
                {r#"
                    .hover-video {
                        position: relative;
                        width: 100%;
                        aspect-ratio: 16 / 10;
                        margin-bottom: 1.5rem;
                        border-radius: 0.75rem;
                        overflow: hidden;
                        background: #000;
                    }
                    .hover-video video { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; }
                "#}
            </style>
            <video ref={video} src={props.src.clone()} loop=true muted=true playsinline=true preload="metadata" />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_devices_play_on_hover_and_rewind_on_leave() {
        assert_eq!(clip_command(false, true, false), ClipCommand::Play);
        assert_eq!(clip_command(false, false, true), ClipCommand::Rewind);
    }

    #[test]
    fn touch_screens_follow_the_viewport() {
        assert_eq!(clip_command(true, false, true), ClipCommand::Play);
        assert_eq!(clip_command(true, true, false), ClipCommand::Pause);
    }
}
