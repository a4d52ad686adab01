use std::cell::RefCell;

use super::*;

// =============================================================
// Helpers
// =============================================================

fn transforms(actions: &[Action]) -> Vec<(usize, String)> {
    actions
        .iter()
        .filter_map(|a| match a {
            Action::SetStyle { target: Target::Slide(i), property: "transform", value } => Some((*i, value.clone())),
            _ => None,
        })
        .collect()
}

fn active_dots(actions: &[Action]) -> Vec<usize> {
    actions
        .iter()
        .filter_map(|a| match a {
            Action::AddClass(Target::Dot(i), CLASS_DOT_ACTIVE) => Some(*i),
            _ => None,
        })
        .collect()
}

/// Small deterministic LCG so the sequence tests need no extra crates.
fn steps(seed: u64, len: usize) -> Vec<bool> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            state >> 63 == 1
        })
        .collect()
}

// =============================================================
// Positioning
// =============================================================

#[test]
fn init_centers_first_slide() {
    let mut carousel = Carousel::new(3);
    let actions = carousel.init();
    assert_eq!(carousel.current(), 0);
    assert_eq!(
        transforms(&actions),
        vec![
            (0, "translateX(0%)".into()),
            (1, "translateX(100%)".into()),
            (2, "translateX(200%)".into()),
        ]
    );
    assert_eq!(active_dots(&actions), vec![0]);
}

#[test]
fn go_to_offsets_every_slide_relative_to_target() {
    let count = 5;
    for k in 0..count {
        let mut carousel = Carousel::new(count);
        let actions = carousel.go_to(k);
        let got = transforms(&actions);
        assert_eq!(got.len(), count);
        for (i, value) in got {
            assert_eq!(value, format!("translateX({}%)", Carousel::offset_percent(i, k)));
        }
    }
}

#[test]
fn offset_formula() {
    assert_eq!(Carousel::offset_percent(0, 2), -200);
    assert_eq!(Carousel::offset_percent(2, 2), 0);
    assert_eq!(Carousel::offset_percent(3, 1), 200);
}

#[test]
fn go_to_marks_exactly_one_dot() {
    let mut carousel = Carousel::new(4);
    let actions = carousel.go_to(2);
    assert_eq!(active_dots(&actions), vec![2]);
    let cleared = actions
        .iter()
        .filter(|a| matches!(a, Action::RemoveClass(Target::Dot(_), CLASS_DOT_ACTIVE)))
        .count();
    assert_eq!(cleared, 4);
    // Clearing comes before marking so the end state has one active dot.
    assert_eq!(actions.last(), Some(&Action::AddClass(Target::Dot(2), CLASS_DOT_ACTIVE)));
}

#[test]
fn go_to_out_of_range_is_ignored() {
    let mut carousel = Carousel::new(3);
    carousel.go_to(1);
    assert!(carousel.go_to(3).is_empty());
    assert_eq!(carousel.current(), 1);
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn next_wraps_to_first() {
    let mut carousel = Carousel::new(3);
    carousel.go_to(2);
    carousel.next();
    assert_eq!(carousel.current(), 0);
}

#[test]
fn prev_wraps_to_last() {
    let mut carousel = Carousel::new(3);
    carousel.prev();
    assert_eq!(carousel.current(), 2);
}

#[test]
fn single_slide_stays_put() {
    let mut carousel = Carousel::new(1);
    carousel.next();
    assert_eq!(carousel.current(), 0);
    carousel.prev();
    assert_eq!(carousel.current(), 0);
}

#[test]
fn empty_carousel_is_inert() {
    let mut carousel = Carousel::new(0);
    assert!(carousel.init().is_empty());
    assert!(carousel.next().is_empty());
    assert!(carousel.prev().is_empty());
    assert!(carousel.on_key(&Key::ArrowRight).is_empty());
    assert_eq!(carousel.current(), 0);
}

#[test]
fn index_stays_in_bounds_for_any_sequence() {
    for count in 1..=6 {
        for seed in 0..20 {
            let mut carousel = Carousel::new(count);
            for forward in steps(seed, 50) {
                if forward {
                    carousel.next();
                } else {
                    carousel.prev();
                }
                assert!(carousel.current() < count);
            }
        }
    }
}

#[test]
fn next_then_prev_returns_to_start() {
    for count in 1..=5 {
        for start in 0..count {
            let mut carousel = Carousel::new(count);
            carousel.go_to(start);
            carousel.next();
            carousel.prev();
            assert_eq!(carousel.current(), start);
            carousel.prev();
            carousel.next();
            assert_eq!(carousel.current(), start);
        }
    }
}

#[test]
fn arrow_keys_navigate() {
    let mut carousel = Carousel::new(3);
    carousel.on_key(&Key::ArrowRight);
    assert_eq!(carousel.current(), 1);
    carousel.on_key(&Key::ArrowLeft);
    carousel.on_key(&Key::ArrowLeft);
    assert_eq!(carousel.current(), 2);
}

#[test]
fn other_keys_ignored() {
    let mut carousel = Carousel::new(3);
    assert!(carousel.on_key(&Key::Escape).is_empty());
    assert!(carousel.on_key(&Key::Other("ArrowUp".into())).is_empty());
    assert_eq!(carousel.current(), 0);
}

// =============================================================
// Dots
// =============================================================

#[test]
fn dot_index_parses_data_slide() {
    assert_eq!(dot_index("0"), Some(0));
    assert_eq!(dot_index(" 3 "), Some(3));
}

#[test]
fn dot_index_rejects_garbage() {
    assert_eq!(dot_index(""), None);
    assert_eq!(dot_index("-1"), None);
    assert_eq!(dot_index("two"), None);
}

/// Dot container that records its children as slide indices.
#[derive(Default)]
struct FakeDots {
    children: RefCell<Vec<usize>>,
}

impl DotHost for FakeDots {
    fn clear(&self) -> Result<(), DomError> {
        self.children.borrow_mut().clear();
        Ok(())
    }

    fn append_dot(&self, index: usize) -> Result<(), DomError> {
        self.children.borrow_mut().push(index);
        Ok(())
    }
}

#[test]
fn rebuild_dots_makes_one_dot_per_slide() {
    let host = FakeDots::default();
    rebuild_dots(&host, 3).unwrap();
    assert_eq!(*host.children.borrow(), vec![0, 1, 2]);
}

#[test]
fn remount_leaves_exactly_count_dots() {
    let host = FakeDots::default();
    rebuild_dots(&host, 4).unwrap();
    rebuild_dots(&host, 4).unwrap();
    assert_eq!(*host.children.borrow(), vec![0, 1, 2, 3]);
}

#[test]
fn rebuild_dots_drops_stale_markup() {
    let host = FakeDots::default();
    host.children.borrow_mut().extend([7, 8]);
    rebuild_dots(&host, 0).unwrap();
    assert!(host.children.borrow().is_empty());
}
