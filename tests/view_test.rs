//! Integration tests for layout inflation and endless scrolling

use catalogtui::view::{
    inflate, inflate_from, inflate_with, set_on_endless_listener, InflateError, LayoutId,
    LayoutInflater, LinearLayoutManager, ListView, ScrollState, Size, ViewKind,
};
use std::cell::Cell;
use std::rc::Rc;

const LAYOUTS: &str = r#"
screen:
  type: row
  id: root
  children:
    - type: slot
      id: list
      size: 70%
card:
  type: panel
  title: Card
  children:
    - type: text
      text: hello
sized:
  type: text
  size: 4
"#;

fn inflater() -> LayoutInflater {
    LayoutInflater::from_yaml(LAYOUTS).unwrap()
}

fn list_with_viewport(rows: usize, item_count: usize) -> ListView {
    let mut layout_manager = LinearLayoutManager::new();
    layout_manager.set_viewport_rows(rows);
    let mut list = ListView::new().with_layout_manager(layout_manager);
    list.set_item_count(item_count);
    list
}

fn counting_listener(list: &mut ListView, threshold: usize) -> Rc<Cell<usize>> {
    let fired = Rc::new(Cell::new(0));
    let counter = fired.clone();
    set_on_endless_listener(list, threshold, move || counter.set(counter.get() + 1));
    fired
}

#[test]
fn test_inflate_from_builds_fresh_tree() {
    let inflater = inflater();
    let mut first = inflate_from(&inflater, LayoutId::new("card")).unwrap();
    first.title = Some("Changed".to_string());

    let second = inflate_from(&inflater, LayoutId::new("card")).unwrap();
    assert_eq!(second.kind, ViewKind::Panel);
    assert_eq!(second.title.as_deref(), Some("Card"));
    assert_eq!(second.children[0].text.as_deref(), Some("hello"));
}

#[test]
fn test_inflate_with_parent_sizes_but_does_not_attach() {
    let inflater = inflater();
    let parent = inflate_from(&inflater, LayoutId::new("screen")).unwrap();

    let card = inflate(&inflater, &parent, LayoutId::new("card")).unwrap();
    assert_eq!(card.size, Some(Size::Fill(1)));
    assert_eq!(parent.children.len(), 1);

    let sized = inflate(&inflater, &parent, LayoutId::new("sized")).unwrap();
    assert_eq!(sized.size, Some(Size::Length(4)), "Explicit sizes are kept");
}

#[test]
fn test_inflate_with_attach_appends_one_child() {
    let inflater = inflater();
    let mut parent = inflate_from(&inflater, LayoutId::new("screen")).unwrap();

    let returned =
        inflate_with(&inflater, LayoutId::new("card"), Some(&mut parent), true).unwrap();
    assert!(returned.is_none());
    assert_eq!(parent.children.len(), 2);
    assert_eq!(parent.children[1].kind, ViewKind::Panel);
}

#[test]
fn test_inflate_with_without_parent_ignores_attach() {
    let inflater = inflater();
    let view = inflate_with(&inflater, LayoutId::new("card"), None, true).unwrap();
    assert_eq!(view.map(|v| v.kind), Some(ViewKind::Panel));
}

#[test]
fn test_unknown_layout_fails() {
    let err = inflate_from(&inflater(), LayoutId::new("nope")).unwrap_err();
    assert!(matches!(err, InflateError::UnknownLayout(ref name) if name == "nope"));
}

#[test]
fn test_malformed_layout_fails_to_parse() {
    let result = LayoutInflater::from_yaml("broken:\n  type: spiral\n");
    assert!(matches!(result, Err(InflateError::Parse(_))));
}

#[test]
fn test_endless_fires_within_threshold() {
    // 20 items, 5 rows on screen: the last visible row is 4 until we scroll.
    let mut list = list_with_viewport(5, 20);
    let fired = counting_listener(&mut list, 3);

    list.scroll_by(1);
    assert_eq!(fired.get(), 0, "Far from the end nothing should fire");

    list.scroll_to_edge(true);
    assert_eq!(fired.get(), 2, "Settling and Idle should each fire");
}

#[test]
fn test_endless_boundary_is_inclusive() {
    let mut list = list_with_viewport(5, 20);
    let fired = counting_listener(&mut list, 3);

    // Last visible 16 < 17: no fire.
    list.select(Some(16));
    list.dispatch_scroll_state_changed(ScrollState::Idle);
    assert_eq!(fired.get(), 0);

    // Last visible 17 >= 17: fires.
    list.select(Some(17));
    list.dispatch_scroll_state_changed(ScrollState::Idle);
    assert_eq!(fired.get(), 1);
}

#[test]
fn test_endless_is_not_deduplicated() {
    let mut list = list_with_viewport(5, 10);
    let fired = counting_listener(&mut list, 2);

    list.select(Some(9));
    list.dispatch_scroll_state_changed(ScrollState::Dragging);
    list.dispatch_scroll_state_changed(ScrollState::Idle);
    list.dispatch_scroll_state_changed(ScrollState::Idle);
    assert_eq!(fired.get(), 3);
}

#[test]
fn test_endless_requires_layout_manager() {
    let mut list = ListView::new();
    list.set_item_count(3);
    let fired = counting_listener(&mut list, 10);

    list.scroll_by(1);
    list.dispatch_scroll_state_changed(ScrollState::Idle);
    assert_eq!(fired.get(), 0);
}

#[test]
fn test_endless_fires_on_empty_list() {
    // No visible row counts as -1, which is >= 0 - threshold.
    let mut list = list_with_viewport(5, 0);
    let fired = counting_listener(&mut list, 1);

    list.dispatch_scroll_state_changed(ScrollState::Idle);
    assert_eq!(fired.get(), 1);
}

#[test]
fn test_endless_with_zero_threshold_never_fires_on_items() {
    let mut list = list_with_viewport(3, 6);
    let fired = counting_listener(&mut list, 0);

    list.scroll_to_edge(true);
    assert_eq!(fired.get(), 0, "Last visible 5 is never >= 6");
}

#[test]
fn test_endless_fires_with_threshold_larger_than_any_list() {
    let mut list = list_with_viewport(5, 3);
    let fired = counting_listener(&mut list, usize::MAX);

    list.dispatch_scroll_state_changed(ScrollState::Idle);
    assert_eq!(fired.get(), 1, "A threshold beyond the list size always fires");
}

#[test]
fn test_scroll_by_extreme_deltas_clamps_to_edges() {
    let mut list = list_with_viewport(5, 3);
    list.select(Some(1));

    list.scroll_by(isize::MAX);
    assert_eq!(list.selected(), Some(2));

    list.scroll_by(isize::MIN);
    assert_eq!(list.selected(), Some(0));
}
