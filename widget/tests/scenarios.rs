//! End-to-end scenarios for the todo widget
//!
//! These drive the widget through its public API, the same way the terminal
//! session and embedding applications do.

#![allow(clippy::unwrap_used)] // Tests can unwrap

use composable_todo_testing::helpers::init_test_tracing;
use composable_todo_testing::{test_clock, SequentialIdGenerator};
use std::sync::Arc;
use todo_widget::input::parse_line;
use todo_widget::{Filter, Flow, TodoEnvironment, TodoWidget, WidgetConfig};

fn widget() -> TodoWidget {
    init_test_tracing();
    let env = TodoEnvironment::new(Arc::new(test_clock()), Arc::new(SequentialIdGenerator::new()));
    TodoWidget::with_environment(env, WidgetConfig::default())
}

fn texts(widget: &TodoWidget) -> Vec<String> {
    widget.view().items.iter().map(|item| item.text.clone()).collect()
}

#[test]
fn buy_milk_lifecycle() {
    let mut widget = widget();

    widget.add_item("Buy milk").unwrap();
    let view = widget.view();
    assert_eq!(view.counts.total, 1);
    assert_eq!(view.counts.active, 1);
    let id = view.items[0].id;

    widget.toggle_item(id).unwrap();
    let view = widget.view();
    assert_eq!(view.counts.active, 0);
    assert_eq!(view.counts.completed, 1);

    widget.set_filter(Filter::Active).unwrap();
    let view = widget.view();
    assert!(view.items.is_empty());
    assert_eq!(view.empty_message, Some("No active todos!"));

    widget.delete_item(id).unwrap();
    assert_eq!(widget.view().counts.total, 0);
}

#[test]
fn most_recent_first() {
    let mut widget = widget();
    widget.add_item("A").unwrap();
    widget.add_item("B").unwrap();

    assert_eq!(texts(&widget), vec!["B", "A"]);
}

#[test]
fn blank_adds_are_ignored() {
    let mut widget = widget();
    widget.add_item("").unwrap();
    widget.add_item("   ").unwrap();

    assert_eq!(widget.view().counts.total, 0);
    assert_eq!(widget.view().empty_message, Some("No todos yet. Add one above!"));
}

#[test]
fn new_item_leads_active_view() {
    let mut widget = widget();
    widget.add_item("Old").unwrap();
    widget.set_filter(Filter::Active).unwrap();
    widget.add_item("New").unwrap();

    assert_eq!(texts(&widget), vec!["New", "Old"]);
}

#[test]
fn double_delete_counts_once() {
    let mut widget = widget();
    widget.add_item("A").unwrap();
    widget.add_item("B").unwrap();
    let id = widget.view().items[1].id;

    widget.delete_item(id).unwrap();
    assert_eq!(widget.view().counts.total, 1);
    widget.delete_item(id).unwrap();
    assert_eq!(widget.view().counts.total, 1);
    assert_eq!(texts(&widget), vec!["B"]);
}

#[test]
fn stale_toggle_after_delete_is_ignored() {
    let mut widget = widget();
    widget.add_item("A").unwrap();
    let id = widget.view().items[0].id;
    widget.delete_item(id).unwrap();

    let before = widget.state(Clone::clone);
    widget.toggle_item(id).unwrap();
    let after = widget.state(Clone::clone);

    assert_eq!(after, before);
    assert!(!after.items_changed_since(&before));
}

#[test]
fn footer_tracks_remaining_items() {
    let mut widget = widget();
    assert_eq!(widget.view().footer, None);

    widget.add_item("A").unwrap();
    widget.add_item("B").unwrap();
    assert_eq!(widget.view().footer.as_deref(), Some("2 items left"));

    let ids: Vec<_> = widget.view().items.iter().map(|item| item.id).collect();
    widget.toggle_item(ids[0]).unwrap();
    assert_eq!(widget.view().footer.as_deref(), Some("1 item left"));

    widget.toggle_item(ids[1]).unwrap();
    assert_eq!(widget.view().footer.as_deref(), Some("All done! 🎉"));
}

#[test]
fn typed_session() {
    let mut widget = widget();
    let lines = [
        "Buy milk",
        "   ",
        "Walk dog",
        "/toggle 2",
        "/filter completed",
    ];

    for line in lines {
        let command = parse_line(line).unwrap();
        assert_eq!(widget.execute(command).unwrap(), Flow::Continue);
    }

    assert_eq!(texts(&widget), vec!["Buy milk"]);

    let screen = widget.render();
    assert!(screen.contains(" All   Active  [Completed]\n"));
    assert!(screen.contains("  1. [x] Buy milk ✓\n"));
    assert!(screen.contains("Total: 2  Active: 1  Done: 1\n"));
    assert!(screen.ends_with("1 item left\n"));
}

#[test]
fn slash_text_can_be_added_with_escape() {
    let mut widget = widget();
    let command = parse_line("//usr cleanup").unwrap();
    widget.execute(command).unwrap();

    assert_eq!(texts(&widget), vec!["/usr cleanup"]);
}

#[test]
fn typed_line_draws_one_frame() {
    let mut widget = widget();
    let frames = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let sink = std::rc::Rc::clone(&frames);
    widget.subscribe(move |state| sink.borrow_mut().push(state.draft.clone()));

    widget.execute(parse_line("Buy milk").unwrap()).unwrap();

    assert_eq!(*frames.borrow(), vec![String::new()]);
    assert_eq!(texts(&widget), vec!["Buy milk"]);
}
