//! Read-only lookup of page elements by role.
//!
//! Resolved once at mount. Absence is not checked here: single-element roles
//! are `Option`s and a binding fails with [`DomError::Missing`] the first
//! time it needs one that the markup does not provide.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::action::Target;
use crate::consts::*;
use crate::error::DomError;

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

/// Role names used in [`DomError::Missing`] and [`DomError::WrongType`].
pub mod roles {
    pub const MODAL: &str = "modal";
    pub const OVERLAY: &str = "overlay";
    pub const CLOSE_MODAL: &str = "close modal button";
    pub const NAV: &str = "nav";
    pub const NAV_LINKS: &str = "nav links";
    pub const NAV_LINK: &str = "nav link";
    pub const LOGO: &str = "nav logo";
    pub const SCROLL_BUTTON: &str = "scroll button";
    pub const FIRST_SECTION: &str = "first section";
    pub const ANCHOR: &str = "anchor";
    pub const HEADER: &str = "header";
    pub const SECTION: &str = "section";
    pub const LAZY_IMAGE: &str = "lazy image";
    pub const TAB_CONTAINER: &str = "tab container";
    pub const TAB: &str = "tab";
    pub const TAB_CONTENT: &str = "tab content";
    pub const SLIDE: &str = "slide";
    pub const SLIDER_LEFT: &str = "slider left button";
    pub const SLIDER_RIGHT: &str = "slider right button";
    pub const DOTS: &str = "slider dots";
}

#[derive(Debug)]
pub struct Registry {
    document: Document,
    pub modal: Option<Element>,
    pub overlay: Option<Element>,
    pub close_modal: Option<Element>,
    pub open_modal: Vec<Element>,
    pub nav: Option<Element>,
    pub nav_links_container: Option<Element>,
    pub nav_links: Vec<Element>,
    pub logo: Option<Element>,
    pub scroll_to: Option<Element>,
    pub first_section: Option<Element>,
    pub header: Option<Element>,
    pub sections: Vec<Element>,
    pub images: Vec<Element>,
    pub tab_container: Option<Element>,
    pub tabs: Vec<Element>,
    pub tab_contents: Vec<Element>,
    pub slides: Vec<Element>,
    pub slider_left: Option<Element>,
    pub slider_right: Option<Element>,
    pub dots: Option<Element>,
}

impl Registry {
    /// Query every role from `document`.
    ///
    /// # Errors
    ///
    /// Only fails if the browser rejects a selector.
    pub fn resolve(document: &Document) -> Result<Self, DomError> {
        Ok(Self {
            document: document.clone(),
            modal: one(document, SEL_MODAL)?,
            overlay: one(document, SEL_OVERLAY)?,
            close_modal: one(document, SEL_CLOSE_MODAL)?,
            open_modal: all(document, SEL_OPEN_MODAL)?,
            nav: one(document, SEL_NAV)?,
            nav_links_container: one(document, SEL_NAV_LINKS)?,
            nav_links: all(document, SEL_NAV_LINK)?,
            logo: one(document, SEL_NAV_LOGO)?,
            scroll_to: one(document, SEL_SCROLL_TO)?,
            first_section: one(document, SEL_FIRST_SECTION)?,
            header: one(document, SEL_HEADER)?,
            sections: all(document, SEL_SECTION)?,
            images: all(document, SEL_LAZY_IMG)?,
            tab_container: one(document, SEL_TAB_CONTAINER)?,
            tabs: all(document, SEL_TAB)?,
            tab_contents: all(document, SEL_TAB_CONTENT)?,
            slides: all(document, SEL_SLIDE)?,
            slider_left: one(document, SEL_SLIDER_LEFT)?,
            slider_right: one(document, SEL_SLIDER_RIGHT)?,
            dots: one(document, SEL_DOTS)?,
        })
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Unwrap a single-element role or report it missing.
    ///
    /// # Errors
    ///
    /// [`DomError::Missing`] when the slot is empty.
    pub fn require<'a>(slot: &'a Option<Element>, role: &'static str) -> Result<&'a Element, DomError> {
        slot.as_ref().ok_or(DomError::Missing(role))
    }

    /// Whether an element with this id is currently on the page.
    #[must_use]
    pub fn anchor_exists(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    /// Resolve an action target.
    ///
    /// Anchors are looked up live and yield `Ok(None)` when absent; every
    /// other role is a precondition and yields [`DomError::Missing`].
    ///
    /// # Errors
    ///
    /// [`DomError::Missing`] for an absent role or out-of-range index.
    pub fn element(&self, target: &Target) -> Result<Option<Element>, DomError> {
        let role = role(target);
        let found = match target {
            Target::Anchor(id) => return Ok(self.document.get_element_by_id(id)),
            Target::Modal => self.modal.clone(),
            Target::Overlay => self.overlay.clone(),
            Target::Nav => self.nav.clone(),
            Target::Logo => self.logo.clone(),
            Target::FirstSection => self.first_section.clone(),
            Target::NavLink(i) => self.nav_links.get(*i).cloned(),
            Target::Tab(i) => self.tabs.get(*i).cloned(),
            Target::TabContent(i) => self.tab_contents.get(*i).cloned(),
            Target::Section(i) => self.sections.get(*i).cloned(),
            Target::Image(i) => self.images.get(*i).cloned(),
            Target::Slide(i) => self.slides.get(*i).cloned(),
            Target::Dot(i) => {
                let container = Self::require(&self.dots, role)?;
                container.query_selector(&format!(".{CLASS_DOT}[{ATTR_DATA_SLIDE}=\"{i}\"]"))?
            }
        };
        found.map(Some).ok_or(DomError::Missing(role))
    }
}

/// Human-readable role name for a target, used in errors.
#[must_use]
pub fn role(target: &Target) -> &'static str {
    match target {
        Target::Modal => roles::MODAL,
        Target::Overlay => roles::OVERLAY,
        Target::Nav => roles::NAV,
        Target::NavLink(_) => roles::NAV_LINK,
        Target::Logo => roles::LOGO,
        Target::Tab(_) => roles::TAB,
        Target::TabContent(_) => roles::TAB_CONTENT,
        Target::FirstSection => roles::FIRST_SECTION,
        Target::Anchor(_) => roles::ANCHOR,
        Target::Section(_) => roles::SECTION,
        Target::Image(_) => roles::LAZY_IMAGE,
        Target::Slide(_) => roles::SLIDE,
        Target::Dot(_) => roles::DOTS,
    }
}

fn one(document: &Document, selector: &str) -> Result<Option<Element>, DomError> {
    Ok(document.query_selector(selector)?)
}

fn all(document: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    let list = document.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(element) = list.item(i).and_then(|node| node.dyn_ref::<Element>().cloned()) {
            out.push(element);
        }
    }
    Ok(out)
}
