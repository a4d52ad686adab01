//! Visual mutations produced by the behavior state machines.
//!
//! Every core returns `Action`s instead of touching the DOM. The browser
//! layer resolves each [`Target`] through the registry and applies the
//! mutation, so the cores stay testable without a browser.

#[cfg(test)]
#[path = "action_test.rs"]
mod action_test;

/// A page element addressed by role, plus an index for multi-element roles.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    Modal,
    Overlay,
    Nav,
    NavLink(usize),
    Logo,
    Tab(usize),
    TabContent(usize),
    /// The section the "learn more" button scrolls to.
    FirstSection,
    /// Any element looked up by id at the time the action is applied.
    Anchor(String),
    Section(usize),
    Image(usize),
    Slide(usize),
    Dot(usize),
}

/// A single visual mutation for the host to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddClass(Target, &'static str),
    RemoveClass(Target, &'static str),
    SetStyle { target: Target, property: &'static str, value: String },
    ScrollIntoView(Target),
    SetSrc { target: Target, src: String },
    /// Stop the visibility watch on the target. Emitted once per one-shot watch.
    Unwatch(Target),
}

impl Action {
    /// The element this action mutates.
    #[must_use]
    pub fn target(&self) -> &Target {
        match self {
            Self::AddClass(target, _)
            | Self::RemoveClass(target, _)
            | Self::ScrollIntoView(target)
            | Self::Unwatch(target)
            | Self::SetStyle { target, .. }
            | Self::SetSrc { target, .. } => target,
        }
    }
}
