use super::*;

#[test]
fn init_hides_every_section() {
    let reveal = SectionReveal::new(3);
    assert_eq!(
        reveal.init(),
        vec![
            Action::AddClass(Target::Section(0), CLASS_SECTION_HIDDEN),
            Action::AddClass(Target::Section(1), CLASS_SECTION_HIDDEN),
            Action::AddClass(Target::Section(2), CLASS_SECTION_HIDDEN),
        ]
    );
    assert_eq!(reveal.state(1), Some(Reveal::Hidden));
}

#[test]
fn first_intersection_reveals_and_unwatches() {
    let mut reveal = SectionReveal::new(2);
    let actions = reveal.on_visibility(1, true);
    assert_eq!(
        actions,
        vec![
            Action::RemoveClass(Target::Section(1), CLASS_SECTION_HIDDEN),
            Action::Unwatch(Target::Section(1)),
        ]
    );
    assert_eq!(reveal.state(1), Some(Reveal::Revealed));
    assert_eq!(reveal.state(0), Some(Reveal::Hidden));
}

#[test]
fn non_intersecting_event_does_nothing() {
    let mut reveal = SectionReveal::new(1);
    assert!(reveal.on_visibility(0, false).is_empty());
    assert_eq!(reveal.state(0), Some(Reveal::Hidden));
}

#[test]
fn reveal_happens_at_most_once() {
    let mut reveal = SectionReveal::new(1);
    let mut transitions = 0;
    for intersecting in [true, false, true, true, false, true] {
        if !reveal.on_visibility(0, intersecting).is_empty() {
            transitions += 1;
        }
    }
    assert_eq!(transitions, 1);
    assert_eq!(reveal.state(0), Some(Reveal::Revealed));
}

#[test]
fn unknown_section_is_ignored() {
    let mut reveal = SectionReveal::new(1);
    assert!(reveal.on_visibility(5, true).is_empty());
    assert_eq!(reveal.state(5), None);
}

#[test]
fn no_sections_no_actions() {
    assert!(SectionReveal::new(0).init().is_empty());
}

#[test]
fn init_skips_sections_already_revealed() {
    let mut reveal = SectionReveal::new(3);
    reveal.on_visibility(1, true);
    assert_eq!(
        reveal.init(),
        vec![
            Action::AddClass(Target::Section(0), CLASS_SECTION_HIDDEN),
            Action::AddClass(Target::Section(2), CLASS_SECTION_HIDDEN),
        ]
    );
}
