//! Image carousel with wraparound navigation and position dots.
//!
//! DESIGN
//! ======
//! Slides sit side by side; slide `i` is offset by `100% * (i - current)` so
//! the current one is centered and CSS transitions animate the move. Dots
//! are regenerated at every mount, one per slide, carrying their index in
//! `data-slide`.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element};

use crate::action::{Action, Target};
use crate::consts::{ATTR_DATA_SLIDE, CLASS_DOT, CLASS_DOT_ACTIVE};
use crate::dom::{self, roles, Listener, Registry};
use crate::error::DomError;
use crate::input::Key;
use crate::page::Page;

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

type Step = fn(&mut Carousel) -> Vec<Action>;

/// Carousel position. With `count == 0` every operation is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    count: usize,
}

impl Carousel {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { current: 0, count }
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Horizontal offset of slide `slide`, in percent of the slide width,
    /// when `active` is centered.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn offset_percent(slide: usize, active: usize) -> i64 {
        100 * (slide as i64 - active as i64)
    }

    /// Center slide 0 and mark its dot.
    pub fn init(&mut self) -> Vec<Action> {
        self.go_to(0)
    }

    /// Position every slide around `slide` and move the active dot there.
    /// Indices past the last slide are ignored.
    pub fn go_to(&mut self, slide: usize) -> Vec<Action> {
        if slide >= self.count {
            return Vec::new();
        }
        self.current = slide;

        let mut actions: Vec<Action> = (0..self.count)
            .map(|i| Action::SetStyle {
                target: Target::Slide(i),
                property: "transform",
                value: format!("translateX({}%)", Self::offset_percent(i, slide)),
            })
            .collect();
        actions.extend((0..self.count).map(|i| Action::RemoveClass(Target::Dot(i), CLASS_DOT_ACTIVE)));
        actions.push(Action::AddClass(Target::Dot(slide), CLASS_DOT_ACTIVE));
        actions
    }

    pub fn next(&mut self) -> Vec<Action> {
        if self.count == 0 {
            return Vec::new();
        }
        self.go_to((self.current + 1) % self.count)
    }

    pub fn prev(&mut self) -> Vec<Action> {
        if self.count == 0 {
            return Vec::new();
        }
        self.go_to((self.current + self.count - 1) % self.count)
    }

    /// Arrow keys navigate regardless of focus.
    pub fn on_key(&mut self, key: &Key) -> Vec<Action> {
        match key {
            Key::ArrowLeft => self.prev(),
            Key::ArrowRight => self.next(),
            _ => Vec::new(),
        }
    }
}

/// Parse a dot's `data-slide` value.
#[must_use]
pub fn dot_index(raw: &str) -> Option<usize> {
    match raw.trim().parse::<usize>() {
        Ok(index) => Some(index),
        Err(err) => {
            log::debug!("carousel: ignoring data-slide {raw:?}: {err}");
            None
        }
    }
}

/// Container the position dots are generated into.
pub trait DotHost {
    /// Remove every child.
    fn clear(&self) -> Result<(), DomError>;
    /// Append one dot for slide `index`.
    fn append_dot(&self, index: usize) -> Result<(), DomError>;
}

/// Replace the host's children with exactly `count` dots, so mounting twice
/// never duplicates them.
pub fn rebuild_dots(host: &impl DotHost, count: usize) -> Result<(), DomError> {
    host.clear()?;
    for index in 0..count {
        host.append_dot(index)?;
    }
    Ok(())
}

struct DotContainer<'a> {
    document: &'a Document,
    container: &'a Element,
}

impl DotHost for DotContainer<'_> {
    fn clear(&self) -> Result<(), DomError> {
        self.container.set_inner_html("");
        Ok(())
    }

    fn append_dot(&self, index: usize) -> Result<(), DomError> {
        let dot = self.document.create_element("button")?;
        dot.set_class_name(CLASS_DOT);
        dot.set_attribute(ATTR_DATA_SLIDE, &index.to_string())?;
        self.container.append_child(&dot)?;
        Ok(())
    }
}

/// Generate the dots, center the first slide, and wire buttons, arrow keys,
/// and delegated dot clicks.
pub(crate) fn bind(registry: &Rc<Registry>, page: &mut Page) -> Result<(), DomError> {
    let dots = Registry::require(&registry.dots, roles::DOTS)?;
    let left = Registry::require(&registry.slider_left, roles::SLIDER_LEFT)?;
    let right = Registry::require(&registry.slider_right, roles::SLIDER_RIGHT)?;

    rebuild_dots(&DotContainer { document: registry.document(), container: dots }, registry.slides.len())?;

    let mut carousel = Carousel::new(registry.slides.len());
    dom::apply_all(registry, None, &carousel.init())?;
    let carousel = Rc::new(RefCell::new(carousel));

    let steps: [(&Element, Step); 2] = [(right, Carousel::next), (left, Carousel::prev)];
    for (button, step) in steps {
        let (reg, carousel) = (Rc::clone(registry), Rc::clone(&carousel));
        page.listen(Listener::new(button, "click", move |_| {
            let actions = step(&mut carousel.borrow_mut());
            dom::apply_all(&reg, None, &actions)
        })?);
    }

    let (reg, keys) = (Rc::clone(registry), Rc::clone(&carousel));
    page.listen(Listener::new(registry.document(), "keydown", move |event| {
        let Some(key) = dom::key_of(&event) else {
            return Ok(());
        };
        dom::apply_all(&reg, None, &keys.borrow_mut().on_key(&key))
    })?);

    let reg = Rc::clone(registry);
    page.listen(Listener::new(dots, "click", move |event| {
        let Some(origin) = dom::event_element(event.target()) else {
            return Ok(());
        };
        if !origin.class_list().contains(CLASS_DOT) {
            return Ok(());
        }
        let Some(slide) = origin.get_attribute(ATTR_DATA_SLIDE).as_deref().and_then(dot_index) else {
            return Ok(());
        };
        log::debug!("carousel: jump to {slide}");
        dom::apply_all(&reg, None, &carousel.borrow_mut().go_to(slide))
    })?);

    Ok(())
}
