//! Sticky navigation: the nav bar is stuck while the page header is out of view.

use std::cell::RefCell;
use std::rc::Rc;

use crate::action::{Action, Target};
use crate::consts::CLASS_STICKY;
use crate::dom::{self, roles, Registry, Watch, WatchOptions};
use crate::error::DomError;
use crate::page::Page;

#[cfg(test)]
#[path = "sticky_test.rs"]
mod sticky_test;

#[derive(Debug, Default)]
pub struct StickyNav {
    stuck: bool,
}

impl StickyNav {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_stuck(&self) -> bool {
        self.stuck
    }

    /// Track the header's visibility. Emits only when the stuck state flips.
    pub fn on_header_visibility(&mut self, intersecting: bool) -> Vec<Action> {
        let stuck = !intersecting;
        if stuck == self.stuck {
            return Vec::new();
        }
        self.stuck = stuck;
        if stuck {
            vec![Action::AddClass(Target::Nav, CLASS_STICKY)]
        } else {
            vec![Action::RemoveClass(Target::Nav, CLASS_STICKY)]
        }
    }
}

/// Watch settings for the header, shrinking the viewport by the nav height so
/// the bar sticks exactly when the header slides under it.
#[must_use]
pub fn header_watch(nav_height: f64) -> WatchOptions {
    WatchOptions { threshold: 0.0, root_margin: Some(format!("-{}px", nav_height.max(0.0))) }
}

/// Measure the nav bar and watch the header.
pub(crate) fn bind(registry: &Rc<Registry>, page: &mut Page) -> Result<(), DomError> {
    let nav = Registry::require(&registry.nav, roles::NAV)?;
    let header = Registry::require(&registry.header, roles::HEADER)?;
    let options = header_watch(nav.get_bounding_client_rect().height());

    let sticky = Rc::new(RefCell::new(StickyNav::new()));
    let reg = Rc::clone(registry);
    let watch = Watch::new(&options, move |_, intersecting, _| {
        let actions = sticky.borrow_mut().on_header_visibility(intersecting);
        if !actions.is_empty() {
            log::debug!("sticky: stuck={}", !intersecting);
        }
        dom::apply_all(&reg, None, &actions)
    })?;
    watch.observe(header);
    page.keep(watch);

    Ok(())
}
