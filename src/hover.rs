//! Navigation hover highlight: fade the other links and the logo.

use std::rc::Rc;

use crate::action::{Action, Target};
use crate::config::Config;
use crate::consts::CLASS_NAV_LINK;
use crate::dom::{self, roles, Listener, Registry};
use crate::error::DomError;
use crate::input::HoverPhase;
use crate::page::Page;

#[cfg(test)]
#[path = "hover_test.rs"]
mod hover_test;

const FULL_OPACITY: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverHighlight {
    link_count: usize,
    dim_opacity: f64,
}

impl HoverHighlight {
    #[must_use]
    pub fn new(link_count: usize, dim_opacity: f64) -> Self {
        Self { link_count, dim_opacity }
    }

    /// Opacity for the siblings of a link in the given phase.
    #[must_use]
    pub fn opacity(&self, phase: HoverPhase) -> f64 {
        match phase {
            HoverPhase::Enter => self.dim_opacity,
            HoverPhase::Leave => FULL_OPACITY,
        }
    }

    /// Style every link except `link`, plus the logo. `link` must be one of
    /// the nav links; anything else (the bar itself) yields no actions.
    pub fn on_hover(&self, link: usize, phase: HoverPhase) -> Vec<Action> {
        if link >= self.link_count {
            return Vec::new();
        }
        let value = self.opacity(phase).to_string();
        (0..self.link_count)
            .filter(|&i| i != link)
            .map(Target::NavLink)
            .chain(std::iter::once(Target::Logo))
            .map(|target| Action::SetStyle { target, property: "opacity", value: value.clone() })
            .collect()
    }
}

/// Wire delegated `mouseover`/`mouseout` listeners on the nav bar.
pub(crate) fn bind(registry: &Rc<Registry>, config: &Config, page: &mut Page) -> Result<(), DomError> {
    let nav = Registry::require(&registry.nav, roles::NAV)?;
    let highlight = HoverHighlight::new(registry.nav_links.len(), config.hover_opacity);

    for (kind, phase) in [("mouseover", HoverPhase::Enter), ("mouseout", HoverPhase::Leave)] {
        let reg = Rc::clone(registry);
        page.listen(Listener::new(nav, kind, move |event| {
            let Some(origin) = dom::event_element(event.target()) else {
                return Ok(());
            };
            if !origin.class_list().contains(CLASS_NAV_LINK) {
                return Ok(());
            }
            let Some(link) = dom::index_of(&reg.nav_links, &origin) else {
                return Ok(());
            };
            dom::apply_all(&reg, None, &highlight.on_hover(link, phase))
        })?);
    }

    Ok(())
}
