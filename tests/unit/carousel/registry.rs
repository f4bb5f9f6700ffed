use super::*;
use crate::carousel::slide::ContentHandle;

fn slide(id: u64, item: &'static str) -> Slide<&'static str> {
    Slide::new(SlideId(id), ContentHandle(id * 10), item)
}

#[test]
fn push_then_lookup() {
    let mut reg = SlideRegistry::new();
    reg.push(slide(1, "a")).unwrap();
    reg.push(slide(2, "b")).unwrap();

    assert_eq!(reg.len(), 2);
    assert!(!reg.is_empty());
    assert_eq!(reg.get(1).unwrap().id(), SlideId(2));
    assert_eq!(reg.by_id(SlideId(1)).unwrap().content(), ContentHandle(10));
    assert_eq!(reg.index_of(SlideId(2)), Some(1));
    assert_eq!(reg.index_of_item(&"a"), Some(0));
    assert_eq!(reg.index_of(SlideId(9)), None);
}

#[test]
fn insert_shifts_later_slides() {
    let mut reg = SlideRegistry::new();
    reg.push(slide(1, "a")).unwrap();
    reg.push(slide(3, "c")).unwrap();
    reg.insert(1, slide(2, "b")).unwrap();

    let order: Vec<_> = reg.iter().map(Slide::id).collect();
    assert_eq!(order, vec![SlideId(1), SlideId(2), SlideId(3)]);
}

#[test]
fn duplicate_identity_is_rejected() {
    let mut reg = SlideRegistry::new();
    reg.push(slide(1, "a")).unwrap();
    let err = reg.push(slide(1, "again")).unwrap_err();
    assert!(matches!(err, GlissadeError::DuplicateSlide(SlideId(1))));
    assert_eq!(reg.len(), 1);
}

#[test]
fn insert_past_the_end_is_rejected() {
    let mut reg = SlideRegistry::new();
    reg.push(slide(1, "a")).unwrap();
    let err = reg.insert(5, slide(2, "b")).unwrap_err();
    assert!(matches!(err, GlissadeError::IndexOutOfRange { index: 5, len: 1 }));
}

#[test]
fn remove_returns_the_slide_and_preserves_order() {
    let mut reg = SlideRegistry::new();
    reg.push(slide(1, "a")).unwrap();
    reg.push(slide(2, "b")).unwrap();
    reg.push(slide(3, "c")).unwrap();

    let removed = reg.remove(SlideId(2)).unwrap();
    assert_eq!(*removed.context(), "b");
    assert!(reg.remove(SlideId(2)).is_none());

    let order: Vec<_> = reg.iter().map(Slide::id).collect();
    assert_eq!(order, vec![SlideId(1), SlideId(3)]);
}

#[test]
fn clear_returns_everything_in_display_order() {
    let mut reg = SlideRegistry::new();
    reg.push(slide(1, "a")).unwrap();
    reg.push(slide(2, "b")).unwrap();

    let drained = reg.clear();
    assert_eq!(drained.len(), 2);
    assert_eq!(drained[0].id(), SlideId(1));
    assert!(reg.is_empty());
}

#[test]
fn visual_mut_misses_unknown_ids() {
    let mut reg: SlideRegistry<&str> = SlideRegistry::new();
    assert!(reg.visual_mut(SlideId(1)).is_none());
    reg.push(slide(1, "a")).unwrap();
    reg.visual_mut(SlideId(1)).unwrap().opacity = 0.0;
    assert_eq!(reg.get(0).unwrap().visual().opacity, 0.0);
}
