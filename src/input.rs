//! Input model: the keys and pointer phases the behaviors react to.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// A keyboard key, reduced to the ones any behavior handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    /// Any other key, holding the name reported by the browser.
    Other(String),
}

impl Key {
    /// Map a `KeyboardEvent.key` value to a `Key`.
    #[must_use]
    pub fn from_browser(name: &str) -> Self {
        match name {
            "Escape" => Self::Escape,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            other => Self::Other(other.to_owned()),
        }
    }
}

/// Pointer crossing a navigation link boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverPhase {
    /// `mouseover` on a link.
    Enter,
    /// `mouseout` from a link.
    Leave,
}
