//! Selector hooks, marker classes, and observer defaults shared across behaviors.

// ── Selectors ───────────────────────────────────────────────────

pub const SEL_MODAL: &str = ".modal";
pub const SEL_OVERLAY: &str = ".overlay";
pub const SEL_CLOSE_MODAL: &str = ".btn--close-modal";
pub const SEL_OPEN_MODAL: &str = ".btn--show-modal";
pub const SEL_NAV: &str = ".nav";
pub const SEL_NAV_LINKS: &str = ".nav__links";
pub const SEL_NAV_LINK: &str = ".nav .nav__link";
pub const SEL_NAV_LOGO: &str = ".nav img";
pub const SEL_SCROLL_TO: &str = ".btn--scroll-to";
pub const SEL_FIRST_SECTION: &str = "#section--1";
pub const SEL_HEADER: &str = ".header";
pub const SEL_SECTION: &str = ".section";
pub const SEL_LAZY_IMG: &str = "img[data-src]";
pub const SEL_TAB_CONTAINER: &str = ".operations__tab-container";
pub const SEL_TAB: &str = ".operations__tab";
pub const SEL_TAB_CONTENT: &str = ".operations__content";
pub const SEL_SLIDE: &str = ".slide";
pub const SEL_SLIDER_LEFT: &str = ".slider__btn--left";
pub const SEL_SLIDER_RIGHT: &str = ".slider__btn--right";
pub const SEL_DOTS: &str = ".dots";

/// Element id of the optional `<script type="application/json">` config block.
pub const CONFIG_ELEMENT_ID: &str = "page-config";

// ── Marker classes ──────────────────────────────────────────────

pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_NAV_LINK: &str = "nav__link";
pub const CLASS_STICKY: &str = "sticky";
pub const CLASS_TAB_ACTIVE: &str = "operations__tab--active";
pub const CLASS_CONTENT_ACTIVE: &str = "operations__content--active";
/// Prefix of the per-panel key class, e.g. `operations__content--2`.
pub const CLASS_CONTENT_KEY_PREFIX: &str = "operations__content--";
pub const CLASS_SECTION_HIDDEN: &str = "section--hidden";
pub const CLASS_LAZY_IMG: &str = "lazy-img";
pub const CLASS_DOT: &str = "dots__dot";
pub const CLASS_DOT_ACTIVE: &str = "dots__dot--active";

// ── Attributes ──────────────────────────────────────────────────

pub const ATTR_HREF: &str = "href";
pub const ATTR_DATA_SRC: &str = "data-src";
pub const ATTR_DATA_TAB: &str = "data-tab";
pub const ATTR_DATA_SLIDE: &str = "data-slide";

// ── Defaults ────────────────────────────────────────────────────

/// Opacity applied to sibling nav links and the logo while a link is hovered.
pub const DEFAULT_HOVER_OPACITY: f64 = 0.5;

/// Fraction of a section that must be visible before it is revealed.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.15;

/// Distance in CSS pixels ahead of the viewport at which lazy images load.
pub const DEFAULT_LAZY_MARGIN_PX: f64 = 200.0;

pub const DEFAULT_LOG_LEVEL: &str = "info";
