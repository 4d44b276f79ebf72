use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config;
use crate::error::{LandingError, LandingResult};

/// Runs a callback at most once.
pub struct Once<F: FnOnce()> {
    callback: Option<F>,
}

impl<F: FnOnce()> Once<F> {
    pub fn new(callback: F) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    /// Returns whether this call ran the callback.
    pub fn call(&mut self) -> bool {
        match self.callback.take() {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }
}

/// Whether any entry of one observer callback reports an intersection.
fn any_visible(mut intersecting: impl Iterator<Item = bool>) -> bool {
    intersecting.any(|visible| visible)
}

/// Host capability: tell me once when this element first becomes visible.
pub trait ViewportObserver {
    type Subscription;

    fn observe_once(
        &self,
        target: &Element,
        on_visible: Box<dyn FnOnce()>,
    ) -> LandingResult<Self::Subscription>;
}

/// [`ViewportObserver`] backed by the browser's `IntersectionObserver`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionWatcher {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for IntersectionWatcher {
    fn default() -> Self {
        Self {
            threshold: config::REVEAL_THRESHOLD,
            root_margin: config::REVEAL_ROOT_MARGIN,
        }
    }
}

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Live observation; disconnects when dropped.
pub struct Subscription {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl ViewportObserver for IntersectionWatcher {
    type Subscription = Subscription;

    fn observe_once(
        &self,
        target: &Element,
        on_visible: Box<dyn FnOnce()>,
    ) -> LandingResult<Subscription> {
        let mut once = Once::new(on_visible);
        let callback: EntriesCallback = Closure::wrap(Box::new(
            move |entries: Array, observer: IntersectionObserver| {
                let visible = any_visible(entries.iter().map(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map(|entry| entry.is_intersecting())
                        .unwrap_or(false)
                }));
                if visible {
                    observer.disconnect();
                    once.call();
                }
            },
        )
            as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(self.threshold));
        options.set_root_margin(self.root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|err| LandingError::observer(LandingError::from(err).to_string()))?;
        observer.observe(target);

        Ok(Subscription {
            observer,
            _callback: callback,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn fires_only_the_first_time() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let mut once = Once::new(move || counter.set(counter.get() + 1));

        assert_eq!(hits.get(), 0);
        assert!(once.call());
        assert!(!once.call());
        assert!(!once.call());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn only_intersecting_entries_count() {
        assert!(!any_visible(std::iter::empty()));
        assert!(!any_visible([false, false].into_iter()));
        assert!(any_visible([false, true, false].into_iter()));
        assert!(any_visible([true].into_iter()));
    }

    #[test]
    fn default_watcher_uses_configured_margins() {
        let watcher = IntersectionWatcher::default();
        assert_eq!(watcher.threshold, config::REVEAL_THRESHOLD);
        assert_eq!(watcher.root_margin, "0px 0px -50px 0px");
    }
}
