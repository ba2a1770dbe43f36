use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

// Browsers report ratios like 0.0999 for a 0.1 threshold crossing.
const RATIO_EPSILON: f64 = 1e-3;

/// Turns level readings into transitions. Starts out "not visible".
#[derive(Debug, Default)]
pub struct EdgeTrigger {
    level: bool,
}

impl EdgeTrigger {
    pub fn update(&mut self, level: bool) -> Option<bool> {
        if level == self.level {
            return None;
        }
        self.level = level;
        Some(level)
    }
}

pub fn meets_threshold(intersecting: bool, ratio: f64, threshold: f64) -> bool {
    intersecting && ratio + RATIO_EPSILON >= threshold
}

/// An `IntersectionObserver` on one element that reports visibility edges.
/// Disconnects when dropped.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _on_entries: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    pub fn observe(target: &Element, threshold: f64, on_change: Callback<bool>) -> Result<Self, JsValue> {
        let mut trigger = EdgeTrigger::default();
        let on_entries = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let level = meets_threshold(entry.is_intersecting(), entry.intersection_ratio(), threshold);
                if let Some(edge) = trigger.update(level) {
                    on_change.emit(edge);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &options)?;
        observer.observe(target);

        Ok(Self {
            observer,
            _on_entries: on_entries,
        })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InViewOptions {
    pub threshold: f64,
    /// Latch at the first `true`.
    pub once: bool,
}

#[hook]
pub fn use_in_view(node: NodeRef, options: InViewOptions) -> bool {
    let in_view = use_state(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |(node, options)| {
                let InViewOptions { threshold, once } = *options;
                let on_change = Callback::from(move |visible: bool| {
                    if visible || !once {
                        in_view.set(visible);
                    }
                });
                let observer = node.cast::<Element>().and_then(|element| {
                    ViewportObserver::observe(&element, threshold, on_change)
                        .map_err(|err| warn!("failed to observe element visibility: {:?}", err))
                        .ok()
                });
                move || drop(observer)
            },
            (node, options),
        );
    }

    *in_view
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_only_transitions() {
        let mut trigger = EdgeTrigger::default();
        assert_eq!(trigger.update(false), None);
        assert_eq!(trigger.update(true), Some(true));
        assert_eq!(trigger.update(true), None);
        assert_eq!(trigger.update(false), Some(false));
        assert_eq!(trigger.update(false), None);
        assert_eq!(trigger.update(true), Some(true));
    }

    #[test]
    fn threshold_tolerates_rounding() {
        assert!(meets_threshold(true, 0.0999, 0.1));
        assert!(meets_threshold(true, 0.5, 0.1));
        assert!(!meets_threshold(true, 0.05, 0.1));
        assert!(!meets_threshold(false, 1.0, 0.1));
    }
}
