//! Modal dialog: open/close the dialog box and its backdrop together.

use std::cell::RefCell;
use std::rc::Rc;

use crate::action::{Action, Target};
use crate::consts::CLASS_HIDDEN;
use crate::dom::{self, roles, Listener, Registry};
use crate::error::DomError;
use crate::input::Key;
use crate::page::Page;

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Default)]
pub struct Modal {
    state: ModalState,
}

impl Modal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> ModalState {
        self.state
    }

    /// Show the dialog and the overlay.
    pub fn open(&mut self) -> Vec<Action> {
        self.state = ModalState::Open;
        vec![
            Action::RemoveClass(Target::Modal, CLASS_HIDDEN),
            Action::RemoveClass(Target::Overlay, CLASS_HIDDEN),
        ]
    }

    /// Hide the dialog and the overlay. Closing a closed modal re-applies the
    /// hidden markers and leaves the state as it was.
    pub fn close(&mut self) -> Vec<Action> {
        self.state = ModalState::Closed;
        vec![
            Action::AddClass(Target::Modal, CLASS_HIDDEN),
            Action::AddClass(Target::Overlay, CLASS_HIDDEN),
        ]
    }

    /// Escape closes an open dialog; every other key is ignored.
    pub fn on_key(&mut self, key: &Key) -> Vec<Action> {
        if *key == Key::Escape && self.state == ModalState::Open {
            self.close()
        } else {
            Vec::new()
        }
    }
}

/// Wire the show buttons, close button, overlay, and Escape key.
pub(crate) fn bind(registry: &Rc<Registry>, page: &mut Page) -> Result<(), DomError> {
    let modal = Rc::new(RefCell::new(Modal::new()));

    for button in &registry.open_modal {
        let (registry, modal) = (Rc::clone(registry), Rc::clone(&modal));
        page.listen(Listener::new(button, "click", move |event| {
            event.prevent_default();
            log::debug!("modal: open");
            dom::apply_all(&registry, None, &modal.borrow_mut().open())
        })?);
    }

    for (slot, role) in [(&registry.close_modal, roles::CLOSE_MODAL), (&registry.overlay, roles::OVERLAY)] {
        let target = Registry::require(slot, role)?;
        let (registry, modal) = (Rc::clone(registry), Rc::clone(&modal));
        page.listen(Listener::new(target, "click", move |_| {
            log::debug!("modal: close");
            dom::apply_all(&registry, None, &modal.borrow_mut().close())
        })?);
    }

    let (registry, modal) = (Rc::clone(registry), Rc::clone(&modal));
    let document = registry.document().clone();
    page.listen(Listener::new(&document, "keydown", move |event| {
        let Some(key) = dom::key_of(&event) else {
            return Ok(());
        };
        dom::apply_all(&registry, None, &modal.borrow_mut().on_key(&key))
    })?);

    Ok(())
}
