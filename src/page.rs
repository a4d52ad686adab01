//! Mounted page: owns every listener and watch the behaviors registered.
//!
//! Behaviors bind independently. A behavior whose elements are missing is
//! logged and skipped; the handles of every other behavior stay attached.

use std::rc::Rc;

use web_sys::Document;

use crate::config::Config;
use crate::dom::{Listener, Registry, Watch};
use crate::error::DomError;
use crate::{carousel, hover, lazy, modal, reveal, scroll, sticky, tabs};

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// One independently bound behavior, in mount order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    Modal,
    SmoothScroll,
    Tabs,
    Hover,
    StickyNav,
    SectionReveal,
    LazyImages,
    Carousel,
}

impl Behavior {
    pub const MOUNT_ORDER: [Self; 8] = [
        Self::Modal,
        Self::SmoothScroll,
        Self::Tabs,
        Self::Hover,
        Self::StickyNav,
        Self::SectionReveal,
        Self::LazyImages,
        Self::Carousel,
    ];
}

/// Outcome of binding one behavior.
#[derive(Debug)]
pub enum Outcome {
    Bound,
    Failed(DomError),
}

/// Per-behavior outcomes of a mount, in mount order.
#[derive(Debug, Default)]
pub struct MountReport {
    outcomes: Vec<(Behavior, Outcome)>,
}

impl MountReport {
    #[must_use]
    pub fn outcomes(&self) -> &[(Behavior, Outcome)] {
        &self.outcomes
    }

    #[must_use]
    pub fn bound(&self) -> Vec<Behavior> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| matches!(outcome, Outcome::Bound))
            .map(|(behavior, _)| *behavior)
            .collect()
    }

    #[must_use]
    pub fn failed(&self) -> Vec<Behavior> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| matches!(outcome, Outcome::Failed(_)))
            .map(|(behavior, _)| *behavior)
            .collect()
    }
}

/// Run `bind` for every behavior in mount order. A failure is logged and
/// recorded; the remaining behaviors still run.
#[must_use]
pub fn run_plan<F>(mut bind: F) -> MountReport
where
    F: FnMut(Behavior) -> Result<(), DomError>,
{
    let mut report = MountReport::default();
    for behavior in Behavior::MOUNT_ORDER {
        let outcome = match bind(behavior) {
            Ok(()) => Outcome::Bound,
            Err(err) => {
                log::warn!("{behavior:?} not bound [{}]: {err}", err.code());
                Outcome::Failed(err)
            }
        };
        report.outcomes.push((behavior, outcome));
    }
    report
}

/// All behaviors bound to one document. Dropping it detaches them.
#[derive(Debug, Default)]
pub struct Page {
    listeners: Vec<Listener>,
    watches: Vec<Watch>,
    report: MountReport,
}

impl Page {
    /// Resolve the registry and bind every behavior, in order.
    ///
    /// # Errors
    ///
    /// Only fails when the registry cannot be resolved. Behaviors with
    /// missing elements are reported in [`Page::report`] instead.
    pub fn mount(document: &Document, config: &Config) -> Result<Self, DomError> {
        let registry = Rc::new(Registry::resolve(document)?);
        let mut page = Self::default();

        let report = run_plan(|behavior| match behavior {
            Behavior::Modal => modal::bind(&registry, &mut page),
            Behavior::SmoothScroll => scroll::bind(&registry, &mut page),
            Behavior::Tabs => tabs::bind(&registry, &mut page),
            Behavior::Hover => hover::bind(&registry, config, &mut page),
            Behavior::StickyNav => sticky::bind(&registry, &mut page),
            Behavior::SectionReveal => reveal::bind(&registry, config, &mut page),
            Behavior::LazyImages => lazy::bind(&registry, config, &mut page),
            Behavior::Carousel => carousel::bind(&registry, &mut page),
        });

        log::info!(
            "page mounted: {} of {} behaviors, {} listeners, {} watches, {} sections, {} lazy images, {} slides",
            report.bound().len(),
            Behavior::MOUNT_ORDER.len(),
            page.listeners.len(),
            page.watches.len(),
            registry.sections.len(),
            registry.images.len(),
            registry.slides.len(),
        );
        page.report = report;
        Ok(page)
    }

    #[must_use]
    pub fn report(&self) -> &MountReport {
        &self.report
    }

    pub(crate) fn listen(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    pub(crate) fn keep(&mut self, watch: Watch) {
        self.watches.push(watch);
    }
}
