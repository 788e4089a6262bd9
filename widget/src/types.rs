//! Domain types for the todo widget.
//!
//! A todo list is an ordered, most-recent-first list of items plus the
//! uncommitted draft text and the selected filter. The item list is an
//! immutable shared slice: every effective change swaps in a new slice, so
//! views can detect change by pointer identity.

use chrono::{DateTime, Utc};
use composable_todo_core::Uuid;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Unique identifier for a todo item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Creates a `TodoId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
///
/// Records are never edited in place. Toggling produces a new record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier, never reused
    pub id: TodoId,
    /// Trimmed, non-empty text
    pub text: String,
    /// Whether the todo is completed
    pub completed: bool,
    /// When the todo was created
    pub created_at: DateTime<Utc>,
}

impl TodoItem {
    /// Creates a new, not yet completed todo item
    #[must_use]
    pub const fn new(id: TodoId, text: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at,
        }
    }

    /// Copy of this item with the completion flag flipped
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// Which subset of the list is displayed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Every item
    #[default]
    All,
    /// Items not yet completed
    Active,
    /// Completed items
    Completed,
}

impl Filter {
    /// Every filter, in display order
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Completed];

    /// Whether an item belongs to this subset
    #[must_use]
    pub const fn matches(self, item: &TodoItem) -> bool {
        match self {
            Self::All => true,
            Self::Active => !item.completed,
            Self::Completed => item.completed,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Capitalized name for filter buttons
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no filter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter '{0}' (expected all, active or completed)")]
pub struct ParseFilterError(pub String);

impl FromStr for Filter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|filter| filter.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseFilterError(wanted.to_string()))
    }
}

/// State of the todo widget
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// All items, most recent first
    pub items: Arc<[TodoItem]>,
    /// Uncommitted input text, kept verbatim
    pub draft: String,
    /// Selected filter
    pub filter: Filter,
}

impl TodoState {
    /// Creates a new empty todo state
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Arc::from(Vec::new()),
            draft: String::new(),
            filter: Filter::All,
        }
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of todos not yet completed
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|t| !t.completed).count()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|t| t.completed).count()
    }

    /// Returns a todo by ID
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|t| t.id == id)
    }

    /// Checks if a todo exists
    #[must_use]
    pub fn exists(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Whether the item list was replaced since `earlier` was captured
    ///
    /// No-op commands keep the same list, so this is a cheap pointer check.
    #[must_use]
    pub fn items_changed_since(&self, earlier: &Self) -> bool {
        !Arc::ptr_eq(&self.items, &earlier.items)
    }
}

impl Default for TodoState {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything a user can do to the widget
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    /// Replace the draft text (input field change)
    SetDraft {
        /// New draft, kept verbatim
        text: String,
    },

    /// Commit the draft (Enter key or add button)
    ///
    /// Dispatches [`TodoAction::AddItem`] when the draft is not blank.
    SubmitDraft,

    /// Type text into the input field and press Enter, as one step
    ///
    /// Equivalent to [`TodoAction::SetDraft`] followed by
    /// [`TodoAction::SubmitDraft`], within a single store send.
    EnterText {
        /// Text as typed, kept verbatim in the draft
        text: String,
    },

    /// Add an item from raw text
    AddItem {
        /// Text as typed; surrounding whitespace is trimmed
        text: String,
    },

    /// Flip the completion flag of an item
    ToggleItem {
        /// Item to toggle
        id: TodoId,
    },

    /// Remove an item permanently
    DeleteItem {
        /// Item to delete
        id: TodoId,
    },

    /// Select which items are displayed
    SetFilter {
        /// New filter
        filter: Filter,
    },
}
