//! Smooth scrolling for the "learn more" button and in-page navigation links.

use std::rc::Rc;

use crate::action::{Action, Target};
use crate::consts::{ATTR_HREF, CLASS_NAV_LINK};
use crate::dom::{self, roles, Listener, Registry};
use crate::error::DomError;
use crate::page::Page;

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Scroll request for the button that jumps to the first content section.
#[must_use]
pub fn scroll_to_first_section() -> Action {
    Action::ScrollIntoView(Target::FirstSection)
}

/// The element id named by an in-page `href` such as `#section--2`.
///
/// Returns `None` for anything that is not a non-empty fragment.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll request for a navigation link click.
///
/// `exists` reports whether an element with the given id is on the page;
/// links to missing anchors produce no request.
pub fn nav_request(href: &str, exists: impl Fn(&str) -> bool) -> Option<Action> {
    let id = fragment_id(href)?;
    if exists(id) {
        Some(Action::ScrollIntoView(Target::Anchor(id.to_owned())))
    } else {
        None
    }
}

/// Wire the scroll button and the delegated navigation listener.
pub(crate) fn bind(registry: &Rc<Registry>, page: &mut Page) -> Result<(), DomError> {
    let button = Registry::require(&registry.scroll_to, roles::SCROLL_BUTTON)?;
    let reg = Rc::clone(registry);
    page.listen(Listener::new(button, "click", move |_| {
        dom::apply(&reg, None, &scroll_to_first_section())
    })?);

    let links = Registry::require(&registry.nav_links_container, roles::NAV_LINKS)?;
    let reg = Rc::clone(registry);
    page.listen(Listener::new(links, "click", move |event| {
        let Some(link) = dom::event_element(event.target()) else {
            return Ok(());
        };
        if !link.class_list().contains(CLASS_NAV_LINK) {
            return Ok(());
        }
        event.prevent_default();
        let href = link.get_attribute(ATTR_HREF).unwrap_or_default();
        match nav_request(&href, |id| reg.anchor_exists(id)) {
            Some(action) => dom::apply(&reg, None, &action),
            None => {
                log::debug!("scroll: no anchor for {href:?}");
                Ok(())
            }
        }
    })?);

    Ok(())
}
