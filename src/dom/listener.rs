//! RAII event listener.
//!
//! The closure lives as long as the `Listener`; dropping it removes the
//! listener from its target. Handler errors are logged and the event is
//! dropped.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

use crate::error::DomError;

pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Attach `handler` to `target` for events of type `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Js`] if the browser refuses the registration.
    pub fn new<F>(target: &EventTarget, kind: &'static str, mut handler: F) -> Result<Self, DomError>
    where
        F: FnMut(Event) -> Result<(), DomError> + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Err(err) = handler(event) {
                log::warn!("{kind} handler failed [{}]: {err}", err.code());
            }
        });
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), kind, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove {} listener: {err:?}", self.kind);
        }
    }
}

impl std::fmt::Debug for Listener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener").field("kind", &self.kind).finish_non_exhaustive()
    }
}
