//! Section reveal: each section fades in the first time it scrolls into view.

use std::cell::RefCell;
use std::rc::Rc;

use crate::action::{Action, Target};
use crate::config::Config;
use crate::consts::CLASS_SECTION_HIDDEN;
use crate::dom::{self, Registry, Watch, WatchOptions};
use crate::error::DomError;
use crate::page::Page;

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    Hidden,
    Revealed,
}

#[derive(Debug, Clone)]
pub struct SectionReveal {
    sections: Vec<Reveal>,
}

impl SectionReveal {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { sections: vec![Reveal::Hidden; count] }
    }

    #[must_use]
    pub fn state(&self, section: usize) -> Option<Reveal> {
        self.sections.get(section).copied()
    }

    /// Hide every section that has not been revealed yet. Applied once the
    /// watch is observing, so a section is never hidden without a watch.
    #[must_use]
    pub fn init(&self) -> Vec<Action> {
        self.sections
            .iter()
            .enumerate()
            .filter(|(_, state)| **state == Reveal::Hidden)
            .map(|(i, _)| Action::AddClass(Target::Section(i), CLASS_SECTION_HIDDEN))
            .collect()
    }

    /// First intersecting event reveals the section and ends its watch.
    /// Everything after that is ignored.
    pub fn on_visibility(&mut self, section: usize, intersecting: bool) -> Vec<Action> {
        if !intersecting {
            return Vec::new();
        }
        let Some(state) = self.sections.get_mut(section) else {
            return Vec::new();
        };
        if *state == Reveal::Revealed {
            return Vec::new();
        }
        *state = Reveal::Revealed;
        vec![
            Action::RemoveClass(Target::Section(section), CLASS_SECTION_HIDDEN),
            Action::Unwatch(Target::Section(section)),
        ]
    }
}

/// Watch each section until it is revealed, then hide the unrevealed ones.
pub(crate) fn bind(registry: &Rc<Registry>, config: &Config, page: &mut Page) -> Result<(), DomError> {
    let reveal = Rc::new(RefCell::new(SectionReveal::new(registry.sections.len())));
    let state = Rc::clone(&reveal);
    let reg = Rc::clone(registry);
    let options = WatchOptions { threshold: config.reveal_threshold, root_margin: None };
    let watch = Watch::new(&options, move |target, intersecting, observer| {
        let Some(section) = dom::index_of(&reg.sections, target) else {
            return Ok(());
        };
        let actions = reveal.borrow_mut().on_visibility(section, intersecting);
        if !actions.is_empty() {
            log::debug!("reveal: section {section}");
        }
        dom::apply_all(&reg, Some(observer), &actions)
    })?;
    for section in &registry.sections {
        watch.observe(section);
    }
    page.keep(watch);

    let hide = state.borrow().init();
    dom::apply_all(registry, None, &hide)
}
