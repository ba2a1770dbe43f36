use yew::prelude::*;

/// Whether the hero has released the sections below it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContentGate {
    pub unlocked: bool,
}

/// Outside a provider the gate reads as locked.
#[hook]
pub fn use_content_gate() -> ContentGate {
    use_context::<ContentGate>().unwrap_or_default()
}

pub fn entrance_started(latched: bool, unlocked: bool, in_view: bool) -> bool {
    latched || (unlocked && in_view)
}

/// Latches once the gate is open while the section is in view. A section
/// that has played its entrance keeps it, even if the hero later relocks.
#[hook]
pub fn use_gated_entrance(in_view: bool) -> bool {
    let gate = use_content_gate();
    let started = use_state(|| false);

    {
        let started = started.clone();
        use_effect_with_deps(
            move |(unlocked, in_view)| {
                if entrance_started(*started, *unlocked, *in_view) && !*started {
                    started.set(true);
                }
                || ()
            },
            (gate.unlocked, in_view),
        );
    }

    *started
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entrance_needs_gate_and_view_until_latched() {
        assert!(!entrance_started(false, false, true));
        assert!(!entrance_started(false, true, false));
        assert!(entrance_started(false, true, true));
        assert!(entrance_started(true, false, false));
    }

    #[test]
    fn default_gate_is_locked() {
        assert!(!ContentGate::default().unlocked);
    }
}
