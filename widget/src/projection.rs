//! View projection for the todo widget.
//!
//! Everything the widget shows is derived here from [`TodoState`] and
//! recomputed on every change. Nothing in the view is stored.

use crate::types::{Filter, TodoItem, TodoState};
use composable_todo_core::projection::Projection;
use serde::Serialize;

/// Footer shown once every item is completed
pub const ALL_DONE_MESSAGE: &str = "All done! 🎉";

/// Item counters shown above the list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TodoCounts {
    /// Every item, regardless of filter
    pub total: usize,
    /// Items not yet completed
    pub active: usize,
    /// Completed items
    pub completed: usize,
}

impl TodoCounts {
    /// Count the items of a list in one pass
    #[must_use]
    pub fn of(items: &[TodoItem]) -> Self {
        let completed = items.iter().filter(|item| item.completed).count();
        Self {
            total: items.len(),
            active: items.len() - completed,
            completed,
        }
    }
}

/// Everything needed to render the widget
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TodoView<'a> {
    /// Selected filter
    pub filter: Filter,
    /// Current draft text
    pub draft: &'a str,
    /// Whether the add control is enabled
    pub can_submit: bool,
    /// Items passing the filter, most recent first
    pub items: Vec<&'a TodoItem>,
    /// Counters over the unfiltered list
    pub counts: TodoCounts,
    /// Shown instead of the list when nothing passes the filter
    pub empty_message: Option<&'static str>,
    /// Status line, present once the list has any item
    pub footer: Option<String>,
}

/// Projection from [`TodoState`] to [`TodoView`]
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoViewProjection;

impl Projection<TodoState> for TodoViewProjection {
    type View<'a> = TodoView<'a>;

    fn name(&self) -> &'static str {
        "todo_view"
    }

    fn project<'a>(&self, state: &'a TodoState) -> TodoView<'a> {
        let items = filtered_items(&state.items, state.filter);
        let counts = TodoCounts::of(&state.items);

        TodoView {
            filter: state.filter,
            draft: &state.draft,
            can_submit: !state.draft.trim().is_empty(),
            empty_message: items.is_empty().then(|| empty_message(state.filter)),
            footer: footer(counts),
            items,
            counts,
        }
    }
}

/// Items passing `filter`, in list order
#[must_use]
pub fn filtered_items(items: &[TodoItem], filter: Filter) -> Vec<&TodoItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

/// Message shown when nothing passes `filter`
#[must_use]
pub const fn empty_message(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "No todos yet. Add one above!",
        Filter::Active => "No active todos!",
        Filter::Completed => "No completed todos!",
    }
}

/// Status line: remaining items with pluralization, or the all-done message
///
/// `None` while the list is empty.
#[must_use]
pub fn footer(counts: TodoCounts) -> Option<String> {
    match counts {
        TodoCounts { total: 0, .. } => None,
        TodoCounts { active: 1, .. } => Some("1 item left".to_string()),
        TodoCounts { active: 0, .. } => Some(ALL_DONE_MESSAGE.to_string()),
        TodoCounts { active, .. } => Some(format!("{active} items left")),
    }
}
