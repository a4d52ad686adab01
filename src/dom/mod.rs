//! Browser side of the behaviors.
//!
//! SYSTEM CONTEXT
//! ==============
//! Behavior cores emit [`Action`]s; this module owns everything that talks to
//! `web_sys`: the element registry, RAII handles for event listeners and
//! visibility watches, and [`apply`], which projects an action onto the page.

pub mod listener;
pub mod registry;
pub mod watch;

pub use listener::Listener;
pub use registry::{Registry, roles};
pub use watch::{Watch, WatchOptions};

use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, EventTarget, HtmlElement, HtmlImageElement, IntersectionObserver, KeyboardEvent, ScrollBehavior,
    ScrollIntoViewOptions,
};

use crate::action::{Action, Target};
use crate::error::DomError;
use crate::input::Key;

/// Apply one action to the page.
///
/// `observer` is the watch that produced the action, when there is one; it
/// is required for [`Action::Unwatch`]. Actions aimed at an [`Target::Anchor`]
/// that does not exist are skipped silently.
///
/// # Errors
///
/// Returns [`DomError`] when a registry role is missing, the element has the
/// wrong interface, or the browser rejects the mutation.
pub fn apply(registry: &Registry, observer: Option<&IntersectionObserver>, action: &Action) -> Result<(), DomError> {
    let Some(element) = registry.element(action.target())? else {
        log::debug!("skipping {action:?}: target not on page");
        return Ok(());
    };
    match action {
        Action::AddClass(_, class) => element.class_list().add_1(class)?,
        Action::RemoveClass(_, class) => element.class_list().remove_1(class)?,
        Action::SetStyle { target, property, value } => {
            as_html(&element, target)?.style().set_property(property, value)?;
        }
        Action::ScrollIntoView(_) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        Action::SetSrc { src, .. } => match element.dyn_ref::<HtmlImageElement>() {
            Some(img) => img.set_src(src),
            None => return Err(DomError::WrongType(roles::LAZY_IMAGE)),
        },
        Action::Unwatch(_) => match observer {
            Some(observer) => observer.unobserve(&element),
            None => log::warn!("unwatch without an observer: {action:?}"),
        },
    }
    Ok(())
}

/// Apply a batch of actions in order, stopping at the first failure.
///
/// # Errors
///
/// See [`apply`].
pub fn apply_all(registry: &Registry, observer: Option<&IntersectionObserver>, actions: &[Action]) -> Result<(), DomError> {
    for action in actions {
        apply(registry, observer, action)?;
    }
    Ok(())
}

/// The element an event was dispatched to, if it is an element.
#[must_use]
pub fn event_element(target: Option<EventTarget>) -> Option<Element> {
    target?.dyn_ref::<Element>().cloned()
}

/// The key of a `keydown` event; `None` for any other event.
#[must_use]
pub fn key_of(event: &Event) -> Option<Key> {
    event.dyn_ref::<KeyboardEvent>().map(|e| Key::from_browser(&e.key()))
}

/// Position of `element` within `list`, by identity.
#[must_use]
pub fn index_of(list: &[Element], element: &Element) -> Option<usize> {
    list.iter().position(|candidate| candidate == element)
}

fn as_html<'a>(element: &'a Element, target: &Target) -> Result<&'a HtmlElement, DomError> {
    element.dyn_ref::<HtmlElement>().ok_or(DomError::WrongType(registry::role(target)))
}
