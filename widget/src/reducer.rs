//! Reducer logic for the todo widget.
//!
//! Invalid commands are silent no-ops: blank text is never added, and
//! toggling or deleting an id that is gone (for example after a delete)
//! leaves the state untouched. No-ops do not replace the item list.

use crate::types::{TodoAction, TodoId, TodoItem, TodoState};
use composable_todo_core::{
    effect::Effect,
    environment::{Clock, IdGenerator, SystemClock, UuidGenerator},
    reducer::Reducer,
    smallvec, SmallVec,
};
use std::sync::Arc;

/// How many times a colliding id is redrawn before an add is dropped
const MAX_ID_ATTEMPTS: usize = 8;

/// Environment dependencies for the todo reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Clock for creation timestamps
    pub clock: Arc<dyn Clock>,
    /// Source of item ids
    pub ids: Arc<dyn IdGenerator>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { clock, ids }
    }

    /// System time and random v4 UUIDs
    #[must_use]
    pub fn production() -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(UuidGenerator))
    }
}

impl std::fmt::Debug for TodoEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoEnvironment").finish_non_exhaustive()
    }
}

/// Reducer for the todo widget
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn add_item(state: &mut TodoState, raw: &str, env: &TodoEnvironment) {
        let text = raw.trim();
        if text.is_empty() {
            tracing::trace!("Ignoring add with blank text");
            return;
        }

        let Some(id) = Self::fresh_id(state, env) else {
            tracing::warn!(
                attempts = MAX_ID_ATTEMPTS,
                "Id generator kept returning ids already in use, dropping add"
            );
            return;
        };

        let item = TodoItem::new(id, text.to_string(), env.clock.now());
        state.items = std::iter::once(item)
            .chain(state.items.iter().cloned())
            .collect();
        state.draft.clear();

        tracing::debug!(%id, total = state.items.len(), "Added item");
    }

    fn toggle_item(state: &mut TodoState, id: TodoId) {
        if !state.exists(id) {
            tracing::debug!(%id, "Ignoring toggle for unknown item");
            return;
        }

        state.items = state
            .items
            .iter()
            .map(|item| if item.id == id { item.toggled() } else { item.clone() })
            .collect();

        tracing::debug!(%id, "Toggled item");
    }

    fn delete_item(state: &mut TodoState, id: TodoId) {
        if !state.exists(id) {
            tracing::debug!(%id, "Ignoring delete for unknown item");
            return;
        }

        state.items = state
            .items
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();

        tracing::debug!(%id, total = state.items.len(), "Deleted item");
    }

    fn submit(state: &TodoState) -> SmallVec<[Effect<TodoAction>; 4]> {
        if state.draft.trim().is_empty() {
            return SmallVec::new();
        }
        smallvec![Effect::dispatch(TodoAction::AddItem {
            text: state.draft.clone(),
        })]
    }

    fn fresh_id(state: &TodoState, env: &TodoEnvironment) -> Option<TodoId> {
        (0..MAX_ID_ATTEMPTS)
            .map(|_| TodoId::from_uuid(env.ids.next_id()))
            .find(|id| !state.exists(*id))
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodoAction::SetDraft { text } => {
                state.draft = text;
                SmallVec::new()
            },

            TodoAction::SubmitDraft => Self::submit(state),

            TodoAction::EnterText { text } => {
                state.draft = text;
                Self::submit(state)
            },

            TodoAction::AddItem { text } => {
                Self::add_item(state, &text, env);
                SmallVec::new()
            },

            TodoAction::ToggleItem { id } => {
                Self::toggle_item(state, id);
                SmallVec::new()
            },

            TodoAction::DeleteItem { id } => {
                Self::delete_item(state, id);
                SmallVec::new()
            },

            TodoAction::SetFilter { filter } => {
                state.filter = filter;
                SmallVec::new()
            },
        }
    }
}
