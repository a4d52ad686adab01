use super::*;

#[test]
fn target_of_class_actions() {
    let add = Action::AddClass(Target::Modal, "hidden");
    let remove = Action::RemoveClass(Target::Dot(3), "dots__dot--active");
    assert_eq!(add.target(), &Target::Modal);
    assert_eq!(remove.target(), &Target::Dot(3));
}

#[test]
fn target_of_struct_actions() {
    let style = Action::SetStyle { target: Target::Slide(1), property: "transform", value: "translateX(0%)".into() };
    let src = Action::SetSrc { target: Target::Image(0), src: "real.jpg".into() };
    assert_eq!(style.target(), &Target::Slide(1));
    assert_eq!(src.target(), &Target::Image(0));
}

#[test]
fn anchor_targets_compare_by_id() {
    assert_eq!(Target::Anchor("section--1".into()), Target::Anchor("section--1".into()));
    assert_ne!(Target::Anchor("section--1".into()), Target::Anchor("section--2".into()));
}
