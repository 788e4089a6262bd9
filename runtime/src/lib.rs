//! # Composable Todo Runtime
//!
//! Runtime implementation for the Composable Todo architecture.
//!
//! This crate provides the Store runtime that coordinates reducer execution
//! and effect handling for single-threaded, event-driven widgets.
//!
//! ## Core Components
//!
//! - **Store**: The runtime that owns state and executes effects
//! - **Feedback Loop**: Drains `Effect::Dispatch` actions back into the reducer
//! - **Subscribers**: Render callbacks notified once per `send`
//!
//! ## Example
//!
//! ```ignore
//! use composable_todo_runtime::Store;
//!
//! let mut store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething)?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//! ```

use composable_todo_core::{effect::Effect, projection::Projection, reducer::Reducer};
use std::collections::VecDeque;

pub use error::StoreError;
pub use store::Store;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    ///
    /// Domain-level no-ops (unknown ids, blank input) are never errors; they are
    /// handled inside reducers. Only runtime misbehavior surfaces here.
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// Effects kept dispatching follow-up actions past the configured limit
        ///
        /// Actions processed before the limit was hit remain applied.
        #[error("Feedback loop exceeded {limit} dispatched actions ({processed} processed)")]
        FeedbackLimitExceeded {
            /// Configured maximum number of feedback actions per `send`
            limit: usize,
            /// Actions processed before the store gave up
            processed: usize,
        },
    }
}

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use composable_todo_runtime::StoreConfig;
///
/// let config = StoreConfig::default().with_max_feedback_actions(8);
/// assert_eq!(config.max_feedback_actions, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum number of actions effects may dispatch during a single `send`
    pub max_feedback_actions: usize,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(max_feedback_actions: usize) -> Self {
        Self {
            max_feedback_actions,
        }
    }

    /// Set the feedback action limit
    #[must_use]
    pub const fn with_max_feedback_actions(mut self, limit: usize) -> Self {
        self.max_feedback_actions = limit;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_feedback_actions: 64,
        }
    }
}

/// Handle returned by [`Store::subscribe`], used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Summary of a completed [`Store::send`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendOutcome {
    /// Actions run through the reducer (the sent action plus any feedback)
    pub processed: usize,
    /// Store revision after processing
    pub revision: u64,
}

type Listener<S> = Box<dyn FnMut(&S)>;

/// Store module - the runtime coordinator
pub mod store {
    use super::{
        Effect, Listener, Projection, Reducer, SendOutcome, StoreConfig, StoreError,
        SubscriptionId, VecDeque,
    };

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (owned; the widget is single-threaded)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (with feedback loop)
    /// 5. Subscribers (re-render after every `send`)
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: S,
        reducer: R,
        environment: E,
        config: StoreConfig,
        revision: u64,
        next_subscription: u64,
        subscribers: Vec<(SubscriptionId, Listener<S>)>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        A: std::fmt::Debug,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new store with a custom configuration
        #[must_use]
        pub const fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            Self {
                state: initial_state,
                reducer,
                environment,
                config,
                revision: 0,
                next_subscription: 0,
                subscribers: Vec::new(),
            }
        }

        /// Send an action through the reducer
        ///
        /// Runs the reducer, then drains every action dispatched by the
        /// returned effects (breadth-first, in order) before returning.
        /// Subscribers are notified once, after the queue is empty, so no
        /// render ever observes a half-applied command.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::FeedbackLimitExceeded`] if effects dispatch more
        /// than [`StoreConfig::max_feedback_actions`] follow-up actions. Actions
        /// processed up to that point stay applied and subscribers are still
        /// notified.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub fn send(&mut self, action: A) -> Result<SendOutcome, StoreError> {
            let limit = self.config.max_feedback_actions;
            let mut queue = VecDeque::from([action]);
            let mut processed = 0;
            let mut dispatched = 0;
            let mut result = Ok(());

            while let Some(action) = queue.pop_front() {
                tracing::debug!(?action, revision = self.revision, "Processing action");
                metrics::counter!("store.actions.total").increment(1);

                let start = std::time::Instant::now();
                let effects = self.reducer.reduce(&mut self.state, action, &self.environment);
                metrics::histogram!("store.reducer.duration_seconds")
                    .record(start.elapsed().as_secs_f64());

                processed += 1;
                self.revision += 1;

                tracing::trace!("Reducer completed, returned {} effects", effects.len());

                for follow_up in effects.into_iter().flat_map(Effect::into_actions) {
                    if dispatched == limit {
                        tracing::warn!(
                            limit,
                            processed,
                            "Feedback limit exceeded, dropping queued actions"
                        );
                        metrics::counter!("store.feedback.limit_exceeded").increment(1);
                        result = Err(StoreError::FeedbackLimitExceeded { limit, processed });
                        queue.clear();
                        break;
                    }
                    tracing::trace!(action = ?follow_up, "Effect dispatched follow-up action");
                    dispatched += 1;
                    queue.push_back(follow_up);
                }

                if result.is_err() {
                    break;
                }
            }

            self.notify();
            tracing::debug!(processed, revision = self.revision, "Action processing completed");

            result.map(|()| SendOutcome {
                processed,
                revision: self.revision,
            })
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let count = store.state(|s| s.items.len());
        /// ```
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            f(&self.state)
        }

        /// Derive a view of the current state
        pub fn project<'s, P>(&'s self, projection: &P) -> P::View<'s>
        where
            P: Projection<S>,
        {
            tracing::trace!(projection = projection.name(), "Projecting state");
            projection.project(&self.state)
        }

        /// Register a listener called with the new state after every `send`
        pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
        where
            F: FnMut(&S) + 'static,
        {
            let id = SubscriptionId(self.next_subscription);
            self.next_subscription += 1;
            self.subscribers.push((id, Box::new(listener)));
            id
        }

        /// Remove a listener
        ///
        /// Returns `false` if the subscription was already removed.
        pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
            let before = self.subscribers.len();
            self.subscribers.retain(|(existing, _)| *existing != id);
            self.subscribers.len() != before
        }

        /// Number of actions processed since the store was created
        #[must_use]
        pub const fn revision(&self) -> u64 {
            self.revision
        }

        /// The store configuration
        #[must_use]
        pub const fn config(&self) -> &StoreConfig {
            &self.config
        }

        /// The injected environment
        #[must_use]
        pub const fn environment(&self) -> &E {
            &self.environment
        }

        /// Consume the store, returning its final state
        #[must_use]
        pub fn into_state(self) -> S {
            self.state
        }

        fn notify(&mut self) {
            tracing::trace!(subscribers = self.subscribers.len(), "Notifying subscribers");
            for (_, listener) in &mut self.subscribers {
                listener(&self.state);
            }
        }
    }

    impl<S, A, E, R> std::fmt::Debug for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        S: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Store")
                .field("state", &self.state)
                .field("revision", &self.revision)
                .field("config", &self.config)
                .field("subscribers", &self.subscribers.len())
                .finish_non_exhaustive()
        }
    }
}
