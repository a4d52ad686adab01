//! Lazy image loading: swap in `data-src` shortly before an image is visible,
//! then drop the blur marker once the real image has loaded.
//!
//! The watch ends as soon as the swap is issued, not when the load finishes.
//! Scrolling away and back before the load completes is not observed.

use std::cell::RefCell;
use std::rc::Rc;

use crate::action::{Action, Target};
use crate::config::Config;
use crate::consts::{ATTR_DATA_SRC, CLASS_LAZY_IMG};
use crate::dom::{self, Listener, Registry, Watch, WatchOptions};
use crate::error::DomError;
use crate::page::Page;

#[cfg(test)]
#[path = "lazy_test.rs"]
mod lazy_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageState {
    /// Showing the low-resolution placeholder.
    Placeholder,
    /// Real source assigned, waiting for the `load` event.
    Loading,
    Loaded,
}

#[derive(Debug, Clone)]
pub struct LazyImages {
    sources: Vec<String>,
    states: Vec<ImageState>,
}

impl LazyImages {
    /// One entry per image, holding its real source.
    #[must_use]
    pub fn new(sources: Vec<String>) -> Self {
        let states = vec![ImageState::Placeholder; sources.len()];
        Self { sources, states }
    }

    #[must_use]
    pub fn state(&self, image: usize) -> Option<ImageState> {
        self.states.get(image).copied()
    }

    /// Swap the source the first time the image nears the viewport.
    pub fn on_visibility(&mut self, image: usize, intersecting: bool) -> Vec<Action> {
        if !intersecting {
            return Vec::new();
        }
        let (Some(state), Some(src)) = (self.states.get_mut(image), self.sources.get(image)) else {
            return Vec::new();
        };
        if *state != ImageState::Placeholder {
            return Vec::new();
        }
        *state = ImageState::Loading;
        vec![
            Action::SetSrc { target: Target::Image(image), src: src.clone() },
            Action::Unwatch(Target::Image(image)),
        ]
    }

    /// A `load` event clears the blur only for an image whose real source was
    /// assigned; the placeholder's own load is ignored.
    pub fn on_load(&mut self, image: usize) -> Vec<Action> {
        let Some(state) = self.states.get_mut(image) else {
            return Vec::new();
        };
        if *state != ImageState::Loading {
            return Vec::new();
        }
        *state = ImageState::Loaded;
        vec![Action::RemoveClass(Target::Image(image), CLASS_LAZY_IMG)]
    }
}

/// Watch every `img[data-src]` and listen for each one's `load`.
pub(crate) fn bind(registry: &Rc<Registry>, config: &Config, page: &mut Page) -> Result<(), DomError> {
    let sources = registry
        .images
        .iter()
        .map(|img| img.get_attribute(ATTR_DATA_SRC).unwrap_or_default())
        .collect();
    let images = Rc::new(RefCell::new(LazyImages::new(sources)));

    for (index, img) in registry.images.iter().enumerate() {
        let (reg, images) = (Rc::clone(registry), Rc::clone(&images));
        page.listen(Listener::new(img, "load", move |_| {
            let actions = images.borrow_mut().on_load(index);
            if !actions.is_empty() {
                log::debug!("lazy: image {index} loaded");
            }
            dom::apply_all(&reg, None, &actions)
        })?);
    }

    let reg = Rc::clone(registry);
    let options = WatchOptions { threshold: 0.0, root_margin: Some(config.lazy_root_margin()) };
    let watch = Watch::new(&options, move |target, intersecting, observer| {
        let Some(image) = dom::index_of(&reg.images, target) else {
            return Ok(());
        };
        dom::apply_all(&reg, Some(observer), &images.borrow_mut().on_visibility(image, intersecting))
    })?;
    for img in &registry.images {
        watch.observe(img);
    }
    page.keep(watch);

    Ok(())
}
