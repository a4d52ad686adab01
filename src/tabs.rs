//! Tabbed panel: exactly one tab and its matching content panel are active.
//!
//! Tabs carry their key in `data-tab`; panels carry it as the suffix of an
//! `operations__content--<key>` class. Pairing is by key, not position.

use std::cell::RefCell;
use std::rc::Rc;

use crate::action::{Action, Target};
use crate::consts::{ATTR_DATA_TAB, CLASS_CONTENT_ACTIVE, CLASS_CONTENT_KEY_PREFIX, CLASS_TAB_ACTIVE, SEL_TAB};
use crate::dom::{self, roles, Listener, Registry};
use crate::error::DomError;
use crate::page::Page;

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

#[derive(Debug, Clone, Default)]
pub struct TabSet {
    tab_keys: Vec<String>,
    content_keys: Vec<Option<String>>,
    active: Option<usize>,
}

impl TabSet {
    /// Build from the tab keys, each panel's key (if it has one), and the tab
    /// that is active in the initial markup.
    #[must_use]
    pub fn new(tab_keys: Vec<String>, content_keys: Vec<Option<String>>, active: Option<usize>) -> Self {
        let active = active.filter(|&i| i < tab_keys.len());
        Self { tab_keys, content_keys, active }
    }

    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Index of the panel paired with tab `tab`.
    #[must_use]
    pub fn content_for(&self, tab: usize) -> Option<usize> {
        let key = self.tab_keys.get(tab)?;
        self.content_keys.iter().position(|k| k.as_deref() == Some(key.as_str()))
    }

    /// Make tab `tab` the only active tab. Out-of-range indices are ignored.
    pub fn activate(&mut self, tab: usize) -> Vec<Action> {
        if tab >= self.tab_keys.len() {
            return Vec::new();
        }
        self.active = Some(tab);

        let mut actions: Vec<Action> = (0..self.tab_keys.len())
            .map(|i| Action::RemoveClass(Target::Tab(i), CLASS_TAB_ACTIVE))
            .chain((0..self.content_keys.len()).map(|i| Action::RemoveClass(Target::TabContent(i), CLASS_CONTENT_ACTIVE)))
            .collect();
        actions.push(Action::AddClass(Target::Tab(tab), CLASS_TAB_ACTIVE));
        match self.content_for(tab) {
            Some(content) => actions.push(Action::AddClass(Target::TabContent(content), CLASS_CONTENT_ACTIVE)),
            None => log::warn!("tab {:?} has no content panel", self.tab_keys[tab]),
        }
        actions
    }
}

/// The key encoded in a panel's class list, e.g. `"2"` for
/// `operations__content operations__content--2`.
#[must_use]
pub fn content_key(class_name: &str) -> Option<String> {
    class_name
        .split_whitespace()
        .filter_map(|class| class.strip_prefix(CLASS_CONTENT_KEY_PREFIX))
        .find(|key| !key.is_empty() && *key != "active")
        .map(str::to_owned)
}

/// Wire the delegated click listener on the tab container.
pub(crate) fn bind(registry: &Rc<Registry>, page: &mut Page) -> Result<(), DomError> {
    let container = Registry::require(&registry.tab_container, roles::TAB_CONTAINER)?;

    let tab_keys = registry
        .tabs
        .iter()
        .map(|tab| tab.get_attribute(ATTR_DATA_TAB).unwrap_or_default())
        .collect();
    let content_keys = registry.tab_contents.iter().map(|c| content_key(&c.class_name())).collect();
    let initial = registry.tabs.iter().position(|tab| tab.class_list().contains(CLASS_TAB_ACTIVE));
    let tabs = Rc::new(RefCell::new(TabSet::new(tab_keys, content_keys, initial)));

    let reg = Rc::clone(registry);
    page.listen(Listener::new(container, "click", move |event| {
        let Some(origin) = dom::event_element(event.target()) else {
            return Ok(());
        };
        let Some(clicked) = origin.closest(SEL_TAB)? else {
            return Ok(());
        };
        let Some(index) = dom::index_of(&reg.tabs, &clicked) else {
            return Ok(());
        };
        log::debug!("tabs: activate {index}");
        dom::apply_all(&reg, None, &tabs.borrow_mut().activate(index))
    })?);

    Ok(())
}
