use gloo_timers::callback::Timeout;
use yew::Callback;

use crate::hero::run::TimerTag;
use crate::hero::sequencer::Scheduler;

/// Schedules beats as browser timeouts that post their tag back into the
/// hero component. Dropping the returned `Timeout` clears it.
pub struct GlooScheduler {
    on_fire: Callback<TimerTag>,
}

impl GlooScheduler {
    pub fn new(on_fire: Callback<TimerTag>) -> Self {
        Self { on_fire }
    }
}

impl Scheduler for GlooScheduler {
    type Handle = Timeout;

    fn schedule(&mut self, delay_ms: u32, tag: TimerTag) -> Timeout {
        let on_fire = self.on_fire.clone();
        Timeout::new(delay_ms, move || on_fire.emit(tag))
    }
}
