use super::*;

fn one_image() -> LazyImages {
    LazyImages::new(vec!["real.jpg".into()])
}

#[test]
fn starts_as_placeholder() {
    assert_eq!(one_image().state(0), Some(ImageState::Placeholder));
}

#[test]
fn approaching_viewport_swaps_source_and_unwatches() {
    let mut images = one_image();
    let actions = images.on_visibility(0, true);
    assert_eq!(
        actions,
        vec![
            Action::SetSrc { target: Target::Image(0), src: "real.jpg".into() },
            Action::Unwatch(Target::Image(0)),
        ]
    );
    assert_eq!(images.state(0), Some(ImageState::Loading));
}

#[test]
fn blur_stays_until_load_completes() {
    let mut images = one_image();
    let swap = images.on_visibility(0, true);
    assert!(!swap.iter().any(|a| matches!(a, Action::RemoveClass(_, CLASS_LAZY_IMG))));

    let loaded = images.on_load(0);
    assert_eq!(loaded, vec![Action::RemoveClass(Target::Image(0), CLASS_LAZY_IMG)]);
    assert_eq!(images.state(0), Some(ImageState::Loaded));
}

#[test]
fn placeholder_load_does_not_clear_blur() {
    let mut images = one_image();
    assert!(images.on_load(0).is_empty());
    assert_eq!(images.state(0), Some(ImageState::Placeholder));
}

#[test]
fn non_intersecting_event_keeps_placeholder() {
    let mut images = one_image();
    assert!(images.on_visibility(0, false).is_empty());
    assert_eq!(images.state(0), Some(ImageState::Placeholder));
}

#[test]
fn swap_happens_once() {
    let mut images = one_image();
    images.on_visibility(0, true);
    assert!(images.on_visibility(0, true).is_empty());
    images.on_load(0);
    assert!(images.on_visibility(0, true).is_empty());
    assert!(images.on_load(0).is_empty());
}

#[test]
fn images_are_independent() {
    let mut images = LazyImages::new(vec!["a.jpg".into(), "b.jpg".into()]);
    images.on_visibility(1, true);
    assert_eq!(images.state(0), Some(ImageState::Placeholder));
    assert_eq!(images.state(1), Some(ImageState::Loading));
}

#[test]
fn unknown_image_is_ignored() {
    let mut images = one_image();
    assert!(images.on_visibility(3, true).is_empty());
    assert!(images.on_load(3).is_empty());
}
