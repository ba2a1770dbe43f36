use log::{debug, info, warn};

use crate::hero::beats::{BeatEffect, HeroTimeline};
use crate::hero::run::{Generation, HeroSnapshot, SequenceRun, TimerKind, TimerTag};
use crate::hero::sentences::SENTENCE_COUNT;

/// Commands the sequencer issues to the single hero video.
#[cfg_attr(test, mockall::automock)]
pub trait MediaHandle {
    fn seek_to(&mut self, seconds: f64);
    /// Fire and forget. Rejections are the handle's to absorb.
    fn play(&mut self);
    fn pause(&mut self);
    fn set_playback_rate(&mut self, rate: f64);
}

/// Deferred callbacks on the page's event loop. Dropping a handle should
/// cancel its timer, but nothing here depends on that succeeding.
pub trait Scheduler {
    type Handle;

    fn schedule(&mut self, delay_ms: u32, tag: TimerTag) -> Self::Handle;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MediaEvent {
    Started,
    TimeUpdate(f64),
    Ended,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// Visible, waiting for playback to confirm or the fallback to elapse.
    ArmedPending,
    Running,
}

/// Drives the hero timeline. Events go in through the `on_*` methods, each
/// returning whether the render snapshot changed; the snapshot comes out.
pub struct HeroSequencer<S: Scheduler, M: MediaHandle> {
    scheduler: S,
    media: M,
    timeline: HeroTimeline,
    visible: bool,
    last_generation: Option<Generation>,
    run: Option<SequenceRun<S::Handle>>,
}

impl<S: Scheduler, M: MediaHandle> HeroSequencer<S, M> {
    pub fn new(scheduler: S, media: M, timeline: HeroTimeline) -> Self {
        Self {
            scheduler,
            media,
            timeline,
            visible: false,
            last_generation: None,
            run: None,
        }
    }

    pub fn snapshot(&self) -> HeroSnapshot {
        self.run
            .as_ref()
            .map(|run| run.snapshot)
            .unwrap_or_default()
    }

    pub fn phase(&self) -> Phase {
        match &self.run {
            None => Phase::Idle,
            Some(run) if run.is_armed() => Phase::Running,
            Some(_) => Phase::ArmedPending,
        }
    }

    /// Generation of the live run, if the hero is visible.
    pub fn generation(&self) -> Option<Generation> {
        self.run.as_ref().map(SequenceRun::generation)
    }

    pub fn timeline(&self) -> &HeroTimeline {
        &self.timeline
    }

    pub fn on_visibility_change(&mut self, visible: bool) -> bool {
        if visible == self.visible {
            return false;
        }
        self.visible = visible;

        let before = self.snapshot();
        if visible {
            self.start();
        } else {
            self.stop();
        }
        self.snapshot() != before
    }

    pub fn on_playback_started(&mut self) -> bool {
        match &self.run {
            Some(run) if !run.is_armed() => {
                info!("hero playback confirmed for {}, arming beats", run.generation());
                self.arm();
            }
            Some(run) => debug!("playback event for {} after arming, ignored", run.generation()),
            None => debug!("playback event with the hero hidden, ignored"),
        }
        false
    }

    pub fn on_media_time_update(&mut self, current_secs: f64) -> bool {
        let threshold = self.timeline.unlock_at_media_secs;
        match self.run.as_mut() {
            Some(run) if current_secs >= threshold => {
                let changed = unlock(&mut run.snapshot);
                if changed {
                    info!(
                        "{} unlocked downstream content at {:.1}s of media",
                        run.generation(),
                        current_secs
                    );
                }
                changed
            }
            _ => false,
        }
    }

    /// The clip holds its last frame; nothing restarts or resets here.
    pub fn on_media_ended(&mut self) -> bool {
        debug!("hero media ended");
        false
    }

    /// Media events stamped with the generation whose subscription saw them.
    pub fn on_media_event(&mut self, origin: Generation, event: MediaEvent) -> bool {
        if self.generation() != Some(origin) {
            debug!("dropping {:?} from superseded {}", event, origin);
            return false;
        }
        match event {
            MediaEvent::Started => self.on_playback_started(),
            MediaEvent::TimeUpdate(secs) => self.on_media_time_update(secs),
            MediaEvent::Ended => self.on_media_ended(),
        }
    }

    pub fn on_timer(&mut self, tag: TimerTag) -> bool {
        let Some(run) = self.run.as_mut() else {
            debug!("{:?} fired with the hero hidden, ignored", tag);
            return false;
        };
        if !run.owns(&tag) {
            debug!("stale timer {:?} from {}, ignored", tag.kind, tag.generation);
            return false;
        }

        match tag.kind {
            TimerKind::Fallback => {
                if run.is_armed() {
                    return false;
                }
                warn!(
                    "playback never confirmed for {}, arming beats after {}ms fallback",
                    tag.generation, self.timeline.fallback_ms
                );
                self.arm();
                false
            }
            TimerKind::Beat(index) => match self.timeline.beats.get(index) {
                Some(beat) => apply(&mut run.snapshot, beat.effect),
                None => {
                    debug_assert!(false, "beat {index} is not in the armed table");
                    false
                }
            },
        }
    }

    fn start(&mut self) {
        let generation = self
            .last_generation
            .map_or(Generation::FIRST, Generation::next);
        self.last_generation = Some(generation);

        // Replacing the run drops the previous arena and every timer in it.
        let mut run = SequenceRun::new(generation);
        self.media.set_playback_rate(self.timeline.playback_rate);
        self.media.seek_to(0.0);
        self.media.play();

        let fallback = self.scheduler.schedule(
            self.timeline.fallback_ms,
            TimerTag {
                generation,
                kind: TimerKind::Fallback,
            },
        );
        run.timers.push(fallback);
        self.run = Some(run);
        info!("hero visible, started {}", generation);
    }

    fn stop(&mut self) {
        if let Some(run) = self.run.take() {
            info!(
                "hero hidden, retired {} with {} pending timers",
                run.generation(),
                run.pending_timers()
            );
        }
        self.media.pause();
        self.media.seek_to(0.0);
    }

    fn arm(&mut self) {
        let Some(run) = self.run.as_mut() else {
            return;
        };
        if run.armed {
            return;
        }
        run.armed = true;

        let generation = run.generation();
        for (index, beat) in self.timeline.beats.beats().iter().enumerate() {
            let handle = self.scheduler.schedule(
                beat.fire_at_ms,
                TimerTag {
                    generation,
                    kind: TimerKind::Beat(index),
                },
            );
            run.timers.push(handle);
        }
    }
}

fn apply(snapshot: &mut HeroSnapshot, effect: BeatEffect) -> bool {
    let before = *snapshot;
    match effect {
        BeatEffect::ShowSentence(index) => {
            debug_assert!(index < SENTENCE_COUNT, "sentence {index} out of range");
            snapshot.active_sentence = Some(index);
        }
        BeatEffect::HideSentence => snapshot.active_sentence = None,
        BeatEffect::RevealLogo => snapshot.logo_visible = true,
        BeatEffect::UnlockDownstreamContent => {
            if unlock(snapshot) {
                info!("downstream content unlocked by the timeline");
            }
        }
    }
    *snapshot != before
}

fn unlock(snapshot: &mut HeroSnapshot) -> bool {
    if snapshot.downstream_unlocked {
        return false;
    }
    snapshot.downstream_unlocked = true;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::Sequence;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct Pending {
        due: u64,
        seq: u64,
        tag: TimerTag,
        cancelled: Rc<Cell<bool>>,
    }

    struct ClockState {
        now: u64,
        next_seq: u64,
        honor_cancel: bool,
        pending: Vec<Pending>,
    }

    /// Simulated event loop. With `honor_cancel` off, dropped handles still
    /// fire, the way an already-queued browser callback would.
    #[derive(Clone)]
    struct ManualClock(Rc<RefCell<ClockState>>);

    struct ManualTimer(Rc<Cell<bool>>);

    impl Drop for ManualTimer {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    impl ManualClock {
        fn new(honor_cancel: bool) -> Self {
            Self(Rc::new(RefCell::new(ClockState {
                now: 0,
                next_seq: 0,
                honor_cancel,
                pending: Vec::new(),
            })))
        }

        fn now(&self) -> u64 {
            self.0.borrow().now
        }

        fn pop_due(&self, until: u64) -> Option<TimerTag> {
            let mut state = self.0.borrow_mut();
            if state.honor_cancel {
                state.pending.retain(|pending| !pending.cancelled.get());
            }
            let next = state
                .pending
                .iter()
                .enumerate()
                .filter(|(_, pending)| pending.due <= until)
                .min_by_key(|(_, pending)| (pending.due, pending.seq))
                .map(|(index, _)| index)?;
            let pending = state.pending.remove(next);
            state.now = pending.due;
            Some(pending.tag)
        }

        fn settle_at(&self, until: u64) {
            let mut state = self.0.borrow_mut();
            state.now = state.now.max(until);
        }

        fn live_timers(&self) -> usize {
            self.0
                .borrow()
                .pending
                .iter()
                .filter(|pending| !pending.cancelled.get())
                .count()
        }
    }

    impl Scheduler for ManualClock {
        type Handle = ManualTimer;

        fn schedule(&mut self, delay_ms: u32, tag: TimerTag) -> ManualTimer {
            let mut state = self.0.borrow_mut();
            let cancelled = Rc::new(Cell::new(false));
            let due = state.now + u64::from(delay_ms);
            let seq = state.next_seq;
            state.next_seq += 1;
            state.pending.push(Pending {
                due,
                seq,
                tag,
                cancelled: cancelled.clone(),
            });
            ManualTimer(cancelled)
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    enum MediaCall {
        Seek(f64),
        Play,
        Pause,
        Rate(f64),
    }

    struct RecordingMedia(Rc<RefCell<Vec<MediaCall>>>);

    impl MediaHandle for RecordingMedia {
        fn seek_to(&mut self, seconds: f64) {
            self.0.borrow_mut().push(MediaCall::Seek(seconds));
        }

        fn play(&mut self) {
            self.0.borrow_mut().push(MediaCall::Play);
        }

        fn pause(&mut self) {
            self.0.borrow_mut().push(MediaCall::Pause);
        }

        fn set_playback_rate(&mut self, rate: f64) {
            self.0.borrow_mut().push(MediaCall::Rate(rate));
        }
    }

    struct Harness {
        clock: ManualClock,
        media: Rc<RefCell<Vec<MediaCall>>>,
        sequencer: HeroSequencer<ManualClock, RecordingMedia>,
        trace: Vec<(u64, HeroSnapshot)>,
        stale_fires: usize,
    }

    impl Harness {
        fn new(honor_cancel: bool) -> Self {
            let clock = ManualClock::new(honor_cancel);
            let media = Rc::new(RefCell::new(Vec::new()));
            let sequencer = HeroSequencer::new(
                clock.clone(),
                RecordingMedia(media.clone()),
                HeroTimeline::default(),
            );
            Self {
                clock,
                media,
                sequencer,
                trace: Vec::new(),
                stale_fires: 0,
            }
        }

        fn advance_to(&mut self, until: u64) {
            while let Some(tag) = self.clock.pop_due(until) {
                if self.sequencer.generation() != Some(tag.generation) {
                    self.stale_fires += 1;
                }
                if self.sequencer.on_timer(tag) {
                    self.trace.push((self.clock.now(), self.sequencer.snapshot()));
                }
            }
            self.clock.settle_at(until);
        }

        fn set_visible(&mut self, visible: bool) -> bool {
            self.sequencer.on_visibility_change(visible)
        }

        fn media_calls(&self) -> Vec<MediaCall> {
            self.media.borrow().clone()
        }
    }

    fn snap(sentence: Option<usize>, logo: bool, unlocked: bool) -> HeroSnapshot {
        HeroSnapshot {
            active_sentence: sentence,
            logo_visible: logo,
            downstream_unlocked: unlocked,
        }
    }

    fn happy_trace(offset: u64) -> Vec<(u64, HeroSnapshot)> {
        vec![
            (offset + 1_500, snap(Some(0), false, false)),
            (offset + 7_500, snap(None, false, false)),
            (offset + 9_000, snap(Some(1), false, false)),
            (offset + 15_000, snap(None, false, false)),
            (offset + 16_500, snap(Some(2), false, false)),
            (offset + 22_500, snap(None, false, false)),
            (offset + 24_000, snap(None, true, false)),
            (offset + 27_000, snap(None, true, true)),
        ]
    }

    #[test]
    fn happy_path_emits_every_beat_in_order() {
        let mut h = Harness::new(true);
        assert_eq!(h.sequencer.phase(), Phase::Idle);

        assert!(!h.set_visible(true));
        assert_eq!(h.sequencer.phase(), Phase::ArmedPending);
        assert_eq!(
            h.media_calls(),
            vec![MediaCall::Rate(0.8), MediaCall::Seek(0.0), MediaCall::Play]
        );

        h.sequencer.on_playback_started();
        assert_eq!(h.sequencer.phase(), Phase::Running);

        h.advance_to(60_000);
        assert_eq!(h.trace, happy_trace(0));
        assert_eq!(h.sequencer.snapshot(), snap(None, true, true));
    }

    #[test]
    fn blocked_autoplay_runs_from_the_fallback() {
        let mut h = Harness::new(true);
        h.set_visible(true);

        h.advance_to(34_999);
        assert!(h.trace.is_empty());
        assert_eq!(h.sequencer.snapshot(), HeroSnapshot::default());
        assert_eq!(h.sequencer.phase(), Phase::ArmedPending);

        h.advance_to(35_000);
        assert_eq!(h.sequencer.phase(), Phase::Running);

        let deadline = u64::from(h.sequencer.timeline().worst_case_unlock_ms());
        h.advance_to(deadline);
        assert_eq!(h.trace, happy_trace(35_000));
        assert!(h.sequencer.snapshot().downstream_unlocked);
    }

    #[test]
    fn late_playback_start_does_not_rearm() {
        let mut h = Harness::new(true);
        h.set_visible(true);
        h.advance_to(35_000);
        let armed_timers = h.clock.live_timers();

        h.sequencer.on_playback_started();
        assert_eq!(h.clock.live_timers(), armed_timers);

        h.advance_to(120_000);
        assert_eq!(h.trace, happy_trace(35_000));
    }

    #[test]
    fn fallback_after_playback_start_is_a_no_op() {
        let mut h = Harness::new(true);
        h.set_visible(true);
        h.advance_to(2_000);
        h.sequencer.on_playback_started();

        h.advance_to(120_000);
        assert_eq!(h.trace, happy_trace(2_000));
    }

    #[test]
    fn threshold_unlock_then_timer_unlock_is_idempotent() {
        let mut h = Harness::new(true);
        h.set_visible(true);
        h.sequencer.on_playback_started();

        assert!(!h.sequencer.on_media_time_update(30.9));
        assert!(h.sequencer.on_media_time_update(31.0));
        assert!(!h.sequencer.on_media_time_update(32.0));

        h.advance_to(60_000);
        let unlock_flips = h
            .trace
            .windows(2)
            .filter(|pair| !pair[0].1.downstream_unlocked && pair[1].1.downstream_unlocked)
            .count();
        assert_eq!(unlock_flips, 0);
        assert!(h.trace.iter().all(|(_, snapshot)| snapshot.downstream_unlocked));
        // The unlock beat at 27s changed nothing, so it left no trace entry.
        assert_eq!(h.trace.last().map(|(at, _)| *at), Some(24_000));
    }

    #[test]
    fn timer_unlock_then_threshold_unlock_is_idempotent() {
        let mut h = Harness::new(true);
        h.set_visible(true);
        h.sequencer.on_playback_started();
        h.advance_to(27_000);
        assert!(h.sequencer.snapshot().downstream_unlocked);

        let before = h.sequencer.snapshot();
        assert!(!h.sequencer.on_media_time_update(31.5));
        assert_eq!(h.sequencer.snapshot(), before);
    }

    #[test]
    fn threshold_is_ignored_while_hidden() {
        let mut h = Harness::new(true);
        assert!(!h.sequencer.on_media_time_update(40.0));
        assert_eq!(h.sequencer.snapshot(), HeroSnapshot::default());
    }

    #[test]
    fn superseded_generation_never_shows_through() {
        // Cancellation is ignored here, so only the generation check stands
        // between the first run's timers and the second run's state.
        let mut h = Harness::new(false);
        h.set_visible(true);
        h.sequencer.on_playback_started();
        h.advance_to(100);
        h.set_visible(false);
        h.set_visible(true);
        assert_eq!(h.sequencer.generation(), Some(Generation::FIRST.next()));
        h.sequencer.on_playback_started();

        h.advance_to(120_000);
        assert!(h.stale_fires > 0);
        assert_eq!(h.trace, happy_trace(100));
    }

    #[test]
    fn rapid_toggle_leaks_no_timers() {
        let mut h = Harness::new(true);
        h.set_visible(true);
        h.advance_to(100);
        h.set_visible(false);
        assert_eq!(h.clock.live_timers(), 0);

        h.set_visible(true);
        assert_eq!(h.clock.live_timers(), 1);
        h.sequencer.on_playback_started();
        let table_len = h.sequencer.timeline().beats.len();
        assert_eq!(h.clock.live_timers(), 1 + table_len);

        h.advance_to(200_000);
        assert_eq!(h.trace, happy_trace(100));
        assert_eq!(h.stale_fires, 0);
        assert_eq!(h.clock.live_timers(), 0);
    }

    #[test]
    fn hiding_resets_from_every_phase() {
        for stop_at in [None, Some(0), Some(2_000), Some(8_000), Some(30_000)] {
            let mut h = Harness::new(true);
            h.set_visible(true);
            if let Some(at) = stop_at {
                h.sequencer.on_playback_started();
                h.advance_to(at);
            }

            h.set_visible(false);
            assert_eq!(h.sequencer.snapshot(), HeroSnapshot::default());
            assert_eq!(h.sequencer.phase(), Phase::Idle);
            assert_eq!(h.sequencer.generation(), None);
            let calls = h.media_calls();
            assert_eq!(
                calls[calls.len() - 2..],
                [MediaCall::Pause, MediaCall::Seek(0.0)]
            );
        }
    }

    #[test]
    fn hiding_mid_sentence_reports_a_change() {
        let mut h = Harness::new(true);
        h.set_visible(true);
        h.sequencer.on_playback_started();
        h.advance_to(2_000);
        assert_eq!(h.sequencer.snapshot().active_sentence, Some(0));
        assert!(h.set_visible(false));
    }

    #[test]
    fn repeated_visibility_level_is_ignored() {
        let mut h = Harness::new(true);
        h.set_visible(true);
        let generation = h.sequencer.generation();
        assert!(!h.set_visible(true));
        assert_eq!(h.sequencer.generation(), generation);
        assert_eq!(h.media_calls().len(), 3);

        assert!(!h.set_visible(false));
        assert!(!h.set_visible(false));
        assert_eq!(h.media_calls().len(), 5);
    }

    #[test]
    fn media_events_from_a_stale_subscription_are_dropped() {
        let mut h = Harness::new(true);
        h.set_visible(true);
        let first = h.sequencer.generation().unwrap();
        h.set_visible(false);
        h.set_visible(true);
        let second = h.sequencer.generation().unwrap();
        assert!(second > first);

        h.sequencer.on_media_event(first, MediaEvent::Started);
        assert!(!h.sequencer.on_media_event(first, MediaEvent::TimeUpdate(40.0)));
        assert_eq!(h.sequencer.phase(), Phase::ArmedPending);

        h.sequencer.on_media_event(second, MediaEvent::Started);
        assert_eq!(h.sequencer.phase(), Phase::Running);
    }

    #[test]
    fn media_end_holds_state() {
        let mut h = Harness::new(true);
        h.set_visible(true);
        h.sequencer.on_playback_started();
        h.advance_to(10_000);
        let before = h.sequencer.snapshot();

        assert!(!h.sequencer.on_media_ended());
        assert_eq!(h.sequencer.snapshot(), before);
        assert_eq!(h.sequencer.phase(), Phase::Running);
    }

    #[test]
    fn media_commands_follow_visibility_edges() {
        let mut media = MockMediaHandle::new();
        let mut seq = Sequence::new();
        media
            .expect_set_playback_rate()
            .withf(|rate| (*rate - 0.8).abs() < f64::EPSILON)
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        media
            .expect_seek_to()
            .withf(|secs| *secs == 0.0)
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        media
            .expect_play()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        media
            .expect_pause()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        media
            .expect_seek_to()
            .withf(|secs| *secs == 0.0)
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let mut sequencer =
            HeroSequencer::new(ManualClock::new(true), media, HeroTimeline::default());
        sequencer.on_visibility_change(true);
        sequencer.on_playback_started();
        sequencer.on_visibility_change(false);
    }
}
