use std::fmt;

/// Identifies one playthrough. Strictly increasing across restarts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub const FIRST: Generation = Generation(1);

    pub fn next(self) -> Generation {
        Generation(self.0 + 1)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gen#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    /// Arms the beat table when playback never reports that it started.
    Fallback,
    /// Index into the armed beat table.
    Beat(usize),
}

/// Carried by every timer callback so a late callback can be matched
/// against the live run before it touches anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerTag {
    pub generation: Generation,
    pub kind: TimerKind,
}

/// Owns the timer handles of a single generation. Handles cancel on drop,
/// so dropping the arena retires the whole generation at once.
pub struct TimerArena<H> {
    generation: Generation,
    handles: Vec<H>,
}

impl<H> TimerArena<H> {
    pub fn new(generation: Generation) -> Self {
        Self {
            generation,
            handles: Vec::new(),
        }
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn push(&mut self, handle: H) {
        self.handles.push(handle);
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }
}

/// Render-facing state of the hero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeroSnapshot {
    pub active_sentence: Option<usize>,
    pub logo_visible: bool,
    pub downstream_unlocked: bool,
}

/// The one live playthrough. Exists only while the hero is visible.
pub struct SequenceRun<H> {
    pub(crate) snapshot: HeroSnapshot,
    pub(crate) armed: bool,
    pub(crate) timers: TimerArena<H>,
}

impl<H> SequenceRun<H> {
    pub fn new(generation: Generation) -> Self {
        Self {
            snapshot: HeroSnapshot::default(),
            armed: false,
            timers: TimerArena::new(generation),
        }
    }

    pub fn generation(&self) -> Generation {
        self.timers.generation()
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn owns(&self, tag: &TimerTag) -> bool {
        tag.generation == self.generation()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct DropCounter(Rc<Cell<u32>>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn dropping_a_run_drops_every_timer() {
        let dropped = Rc::new(Cell::new(0));
        let mut run = SequenceRun::new(Generation::FIRST);
        for _ in 0..4 {
            run.timers.push(DropCounter(dropped.clone()));
        }
        assert_eq!(run.pending_timers(), 4);
        drop(run);
        assert_eq!(dropped.get(), 4);
    }

    #[test]
    fn run_only_owns_its_own_generation() {
        let run: SequenceRun<()> = SequenceRun::new(Generation::FIRST.next());
        let stale = TimerTag {
            generation: Generation::FIRST,
            kind: TimerKind::Beat(0),
        };
        let live = TimerTag {
            generation: Generation::FIRST.next(),
            kind: TimerKind::Fallback,
        };
        assert!(!run.owns(&stale));
        assert!(run.owns(&live));
        assert_eq!(run.generation().to_string(), "gen#2");
    }
}
