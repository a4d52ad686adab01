use std::collections::HashSet;

use super::*;

fn page_ids() -> HashSet<&'static str> {
    ["section--1", "section--2", "section--3"].into_iter().collect()
}

#[test]
fn button_scrolls_to_first_section() {
    assert_eq!(scroll_to_first_section(), Action::ScrollIntoView(Target::FirstSection));
}

#[test]
fn fragment_id_strips_hash() {
    assert_eq!(fragment_id("#section--1"), Some("section--1"));
}

#[test]
fn fragment_id_rejects_bare_hash_and_urls() {
    assert_eq!(fragment_id("#"), None);
    assert_eq!(fragment_id(""), None);
    assert_eq!(fragment_id("https://example.com/#x"), None);
    assert_eq!(fragment_id("section--1"), None);
}

#[test]
fn nav_link_to_existing_section_requests_scroll() {
    let ids = page_ids();
    let action = nav_request("#section--1", |id| ids.contains(id));
    assert_eq!(action, Some(Action::ScrollIntoView(Target::Anchor("section--1".into()))));
}

#[test]
fn nav_link_to_missing_anchor_is_noop() {
    let ids = page_ids();
    assert_eq!(nav_request("#missing", |id| ids.contains(id)), None);
}

#[test]
fn lookup_not_consulted_for_non_fragment() {
    let action = nav_request("/about", |_| panic!("lookup should not run"));
    assert_eq!(action, None);
}
