//! Visibility watch over one or more elements, backed by `IntersectionObserver`.
//!
//! The handler runs once per intersection entry with the observer that fired
//! it, so one-shot behaviors can unwatch their element from inside the
//! callback. Dropping the `Watch` disconnects the observer.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::DomError;

/// Trigger settings. The root is always the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchOptions {
    /// Visible fraction that counts as a crossing.
    pub threshold: f64,
    /// CSS margin applied to the viewport, e.g. `"200px"` or `"-90px"`.
    pub root_margin: Option<String>,
}

pub struct Watch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Watch {
    /// Create an observer that calls `handler(target, is_intersecting, observer)`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Js`] when the options are rejected (e.g. a bad margin).
    pub fn new<F>(options: &WatchOptions, mut handler: F) -> Result<Self, DomError>
    where
        F: FnMut(&Element, bool, &IntersectionObserver) -> Result<(), DomError> + 'static,
    {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if let Err(err) = handler(&entry.target(), entry.is_intersecting(), &observer) {
                        log::warn!("watch handler failed [{}]: {err}", err.code());
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        if let Some(margin) = &options.root_margin {
            init.set_root_margin(margin);
        }
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(Self { observer, _callback: callback })
    }

    /// Start watching `element`.
    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }

    /// Stop watching every element.
    pub fn stop(&self) {
        self.observer.disconnect();
    }
}

impl Drop for Watch {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for Watch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Watch").finish_non_exhaustive()
    }
}
