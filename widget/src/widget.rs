//! The todo widget: a store, its view, and the command surface.

use crate::config::WidgetConfig;
use crate::error::{Result, WidgetError};
use crate::input::{Command, InputError, HELP};
use crate::projection::{TodoView, TodoViewProjection};
use crate::reducer::{TodoEnvironment, TodoReducer};
use crate::render;
use crate::types::{Filter, TodoAction, TodoId, TodoState};
use composable_todo_runtime::{SendOutcome, Store, StoreError, SubscriptionId};

/// Store type backing a [`TodoWidget`]
pub type TodoStore = Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>;

/// What the caller should do after [`TodoWidget::execute`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// State may have changed; subscribers have been notified
    Continue,
    /// Show this text to the user
    Print(String),
    /// End the session
    Quit,
}

/// One todo list widget instance
///
/// Owns the single store for the widget. All reads go through the view
/// projection, recomputed on each call.
pub struct TodoWidget {
    store: TodoStore,
    config: WidgetConfig,
}

impl TodoWidget {
    /// Create a widget using system time and random ids
    #[must_use]
    pub fn new(config: WidgetConfig) -> Self {
        Self::with_environment(TodoEnvironment::production(), config)
    }

    /// Create a widget with injected dependencies
    #[must_use]
    pub fn with_environment(environment: TodoEnvironment, config: WidgetConfig) -> Self {
        let store = Store::with_config(
            TodoState::new(),
            TodoReducer::new(),
            environment,
            config.store.clone(),
        );
        Self { store, config }
    }

    /// Send any action through the store
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store runtime fails.
    pub fn send(&mut self, action: TodoAction) -> std::result::Result<SendOutcome, StoreError> {
        self.store.send(action)
    }

    /// Add an item; blank text is ignored
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store runtime fails.
    pub fn add_item(&mut self, text: impl Into<String>) -> std::result::Result<(), StoreError> {
        self.send(TodoAction::AddItem { text: text.into() }).map(drop)
    }

    /// Flip an item's completion flag; unknown ids are ignored
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store runtime fails.
    pub fn toggle_item(&mut self, id: TodoId) -> std::result::Result<(), StoreError> {
        self.send(TodoAction::ToggleItem { id }).map(drop)
    }

    /// Remove an item; unknown ids are ignored
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store runtime fails.
    pub fn delete_item(&mut self, id: TodoId) -> std::result::Result<(), StoreError> {
        self.send(TodoAction::DeleteItem { id }).map(drop)
    }

    /// Select the displayed subset
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store runtime fails.
    pub fn set_filter(&mut self, filter: Filter) -> std::result::Result<(), StoreError> {
        self.send(TodoAction::SetFilter { filter }).map(drop)
    }

    /// Replace the draft text
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store runtime fails.
    pub fn set_draft(&mut self, text: impl Into<String>) -> std::result::Result<(), StoreError> {
        self.send(TodoAction::SetDraft { text: text.into() }).map(drop)
    }

    /// Commit the draft, if it is not blank
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store runtime fails.
    pub fn submit_draft(&mut self) -> std::result::Result<(), StoreError> {
        self.send(TodoAction::SubmitDraft).map(drop)
    }

    /// Type text and press Enter in one step; blank text stays in the draft
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store runtime fails.
    pub fn enter_text(&mut self, text: impl Into<String>) -> std::result::Result<(), StoreError> {
        self.send(TodoAction::EnterText { text: text.into() }).map(drop)
    }

    /// Current view
    #[must_use]
    pub fn view(&self) -> TodoView<'_> {
        self.store.project(&TodoViewProjection)
    }

    /// Current view as text
    #[must_use]
    pub fn render(&self) -> String {
        render::render(&self.view(), &self.config)
    }

    /// Read the raw state
    pub fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&TodoState) -> T,
    {
        self.store.state(f)
    }

    /// Be told about every state change
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&TodoState) + 'static,
    {
        self.store.subscribe(listener)
    }

    /// Stop being told about state changes
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// The widget configuration
    #[must_use]
    pub const fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Run one parsed input command
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Input`] when a position is past the end of the
    /// displayed list, and propagates store and serialization failures.
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        tracing::debug!(?command, "Executing command");

        match command {
            Command::Enter(text) => self.enter_text(text)?,
            Command::Draft(text) => self.set_draft(text)?,
            Command::Submit => self.submit_draft()?,
            Command::Toggle(position) => {
                let id = self.id_at(position)?;
                self.toggle_item(id)?;
            },
            Command::Delete(position) => {
                let id = self.id_at(position)?;
                self.delete_item(id)?;
            },
            Command::Filter(filter) => self.set_filter(filter)?,
            Command::Dump => {
                let json = serde_json::to_string_pretty(&self.view())?;
                return Ok(Flow::Print(json));
            },
            Command::Help => return Ok(Flow::Print(HELP.to_string())),
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Id of the item at a 1-based position in the displayed list
    fn id_at(&self, position: usize) -> Result<TodoId> {
        self.view()
            .items
            .get(position.wrapping_sub(1))
            .map(|item| item.id)
            .ok_or(WidgetError::Input(InputError::NoSuchItem(position)))
    }
}

impl std::fmt::Debug for TodoWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoWidget")
            .field("store", &self.store)
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Tests can unwrap
mod tests {
    use super::*;
    use composable_todo_testing::{test_clock, SequentialIdGenerator};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;

    fn widget() -> TodoWidget {
        let ids = Arc::new(SequentialIdGenerator::new());
        let env = TodoEnvironment::new(Arc::new(test_clock()), ids);
        TodoWidget::with_environment(env, WidgetConfig::default())
    }

    fn texts(widget: &TodoWidget) -> Vec<String> {
        widget.view().items.iter().map(|item| item.text.clone()).collect()
    }

    #[test]
    fn enter_adds_and_clears_draft() {
        let mut widget = widget();
        let flow = widget.execute(Command::Enter("  Buy milk ".to_string())).unwrap();

        assert_eq!(flow, Flow::Continue);
        assert_eq!(texts(&widget), vec!["Buy milk"]);
        assert_eq!(widget.view().draft, "");
    }

    #[test]
    fn blank_enter_keeps_draft() {
        let mut widget = widget();
        widget.execute(Command::Enter("   ".to_string())).unwrap();

        assert_eq!(widget.view().counts.total, 0);
        assert_eq!(widget.view().draft, "   ");
        assert!(!widget.view().can_submit);
    }

    #[test]
    fn draft_then_submit() {
        let mut widget = widget();
        widget.execute(Command::Draft("Later".to_string())).unwrap();
        assert!(widget.view().can_submit);
        assert_eq!(widget.view().counts.total, 0);

        widget.execute(Command::Submit).unwrap();
        assert_eq!(texts(&widget), vec!["Later"]);
    }

    #[test]
    fn positions_follow_the_displayed_list() {
        let mut widget = widget();
        for text in ["A", "B", "C"] {
            widget.add_item(text).unwrap();
        }
        // Displayed: C, B, A
        widget.execute(Command::Toggle(2)).unwrap();
        widget.execute(Command::Filter(Filter::Active)).unwrap();
        // Displayed: C, A
        widget.execute(Command::Delete(2)).unwrap();

        assert_eq!(texts(&widget), vec!["C"]);
        widget.set_filter(Filter::All).unwrap();
        assert_eq!(texts(&widget), vec!["C", "B"]);
    }

    #[test]
    fn out_of_range_position_is_an_input_error() {
        let mut widget = widget();
        widget.add_item("Only").unwrap();

        let err = widget.execute(Command::Toggle(2)).unwrap_err();
        assert!(matches!(err, WidgetError::Input(InputError::NoSuchItem(2))));
        assert_eq!(widget.state(|s| s.completed_count()), 0);
    }

    #[test]
    fn dump_prints_view_json() {
        let mut widget = widget();
        widget.add_item("Buy milk").unwrap();

        let Flow::Print(json) = widget.execute(Command::Dump).unwrap() else {
            unreachable!("dump always prints");
        };
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["filter"], "all");
        assert_eq!(value["counts"]["total"], 1);
        assert_eq!(value["items"][0]["text"], "Buy milk");
        assert_eq!(value["footer"], "1 item left");
    }

    #[test]
    fn help_and_quit() {
        let mut widget = widget();
        assert_eq!(widget.execute(Command::Help).unwrap(), Flow::Print(HELP.to_string()));
        assert_eq!(widget.execute(Command::Quit).unwrap(), Flow::Quit);
    }

    #[test]
    fn subscribers_see_one_frame_per_line() {
        let mut widget = widget();
        let frames = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&frames);
        widget.subscribe(move |state| {
            sink.borrow_mut().push((state.count(), state.draft.clone()));
        });

        widget.execute(Command::Enter("A".to_string())).unwrap();
        widget.execute(Command::Enter("B".to_string())).unwrap();
        widget.execute(Command::Enter("  ".to_string())).unwrap();

        assert_eq!(
            *frames.borrow(),
            vec![(1, String::new()), (2, String::new()), (2, "  ".to_string())]
        );
    }

    #[test]
    fn draft_and_add_commands_notify_separately() {
        let mut widget = widget();
        let totals = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&totals);
        widget.subscribe(move |state| sink.borrow_mut().push(state.count()));

        widget.execute(Command::Draft("A".to_string())).unwrap();
        widget.execute(Command::Submit).unwrap();

        assert_eq!(*totals.borrow(), vec![0, 1]);
    }
}
