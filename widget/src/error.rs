//! Error types for the todo widget.

use crate::input::InputError;
use composable_todo_runtime::StoreError;
use thiserror::Error;

/// Errors surfaced by [`TodoWidget`](crate::TodoWidget)
///
/// Invalid domain operations (blank text, unknown ids) are not errors; they
/// are silent no-ops in the reducer.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// The input line could not be turned into an action
    #[error(transparent)]
    Input(#[from] InputError),

    /// The store runtime failed
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The view could not be serialized
    #[error("failed to serialize view: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for widget operations.
pub type Result<T> = std::result::Result<T, WidgetError>;
