use std::cell::Cell;
use std::fmt::Debug;
use std::future::Future;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{AddEventListenerOptions, HtmlVideoElement};
use yew::NodeRef;

use crate::hero::sequencer::MediaHandle;

/// The hero `<video>` element, driven only by the sequencer.
pub struct VideoHandle {
    video: NodeRef,
    wants_playback: Rc<Cell<bool>>,
    retry_pending: Rc<Cell<bool>>,
}

impl VideoHandle {
    pub fn new(video: NodeRef) -> Self {
        Self {
            video,
            wants_playback: Rc::new(Cell::new(false)),
            retry_pending: Rc::new(Cell::new(false)),
        }
    }

    fn element(&self) -> Option<HtmlVideoElement> {
        let element = self.video.cast::<HtmlVideoElement>();
        if element.is_none() {
            debug!("hero video is not mounted");
        }
        element
    }
}

impl MediaHandle for VideoHandle {
    fn seek_to(&mut self, seconds: f64) {
        if let Some(video) = self.element() {
            video.set_current_time(seconds);
        }
    }

    fn play(&mut self) {
        self.wants_playback.set(true);
        if let Some(video) = self.element() {
            // A `muted` attribute set after creation does not mute; autoplay needs the property.
            video.set_muted(true);
            request_play(video, self.wants_playback.clone(), self.retry_pending.clone());
        }
    }

    fn pause(&mut self) {
        self.wants_playback.set(false);
        if let Some(video) = self.element() {
            if let Err(err) = video.pause() {
                warn!("failed to pause hero video: {:?}", err);
            }
        }
    }

    fn set_playback_rate(&mut self, rate: f64) {
        if let Some(video) = self.element() {
            video.set_playback_rate(rate);
        }
    }
}

fn request_play(video: HtmlVideoElement, wants_playback: Rc<Cell<bool>>, retry_pending: Rc<Cell<bool>>) {
    spawn_local(async move {
        // Usually the autoplay policy.
        if !settle_play(start_playback(&video), "hero playback rejected").await {
            retry_on_first_gesture(video, wants_playback, retry_pending);
        }
    });
}

/// `play()` as a future. A synchronous failure resolves as a rejection.
pub(crate) fn start_playback(video: &HtmlVideoElement) -> impl Future<Output = Result<JsValue, JsValue>> {
    let promise = video.play();
    async move { JsFuture::from(promise?).await }
}

/// Awaits a playback request, logging a rejection. Returns whether playback started.
pub(crate) async fn settle_play<T, E: Debug>(pending: impl Future<Output = Result<T, E>>, context: &str) -> bool {
    match pending.await {
        Ok(_) => true,
        Err(err) => {
            warn!("{}: {:?}", context, err);
            false
        }
    }
}

/// One more `play()` on the first pointer press anywhere on the page.
fn retry_on_first_gesture(video: HtmlVideoElement, wants_playback: Rc<Cell<bool>>, retry_pending: Rc<Cell<bool>>) {
    if retry_pending.replace(true) {
        return;
    }
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        retry_pending.set(false);
        return;
    };

    let pending = retry_pending.clone();
    let retry = Closure::once_into_js(move || {
        pending.set(false);
        if !wants_playback.get() {
            debug!("hero hidden before the gesture, skipping playback retry");
            return;
        }
        debug!("retrying hero playback after user gesture");
        spawn_local(async move {
            settle_play(start_playback(&video), "hero playback retry failed").await;
        });
    });

    let options = AddEventListenerOptions::new();
    options.set_once(true);
    if let Err(err) = document.add_event_listener_with_callback_and_add_event_listener_options(
        "pointerdown",
        retry.unchecked_ref(),
        &options,
    ) {
        warn!("could not listen for a playback gesture: {:?}", err);
        retry_pending.set(false);
    }
}
