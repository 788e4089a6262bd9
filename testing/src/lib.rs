//! # Composable Todo Testing
//!
//! Testing utilities and helpers for the Composable Todo architecture.
//!
//! This crate provides:
//! - Deterministic implementations of Environment traits
//! - The `ReducerTest` Given-When-Then harness
//! - Property-based testing strategies
//! - Assertion helpers for reducers
//!
//! ## Example
//!
//! ```ignore
//! use composable_todo_testing::{test_clock, SequentialIdGenerator};
//! use composable_todo_runtime::Store;
//!
//! #[test]
//! fn add_then_toggle() {
//!     let ids = Arc::new(SequentialIdGenerator::new());
//!     let env = TodoEnvironment::new(Arc::new(test_clock()), ids);
//!     let mut store = Store::new(TodoState::new(), TodoReducer::new(), env);
//!
//!     store.send(TodoAction::AddItem { text: "Buy milk".into() })?;
//!     assert_eq!(store.state(|s| s.items.len()), 1);
//! }
//! ```

use chrono::{DateTime, Utc};
use composable_todo_core::environment::{Clock, IdGenerator};
use composable_todo_core::Uuid;


/// Deterministic implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, IdGenerator, Utc, Uuid};
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use composable_todo_testing::mocks::FixedClock;
    /// use composable_todo_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }

    /// Predictable ids: `00000000-0000-0000-0000-000000000001`, `...002`, ...
    #[derive(Debug)]
    pub struct SequentialIdGenerator {
        next: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Start at id 1
        #[must_use]
        pub const fn new() -> Self {
            Self::starting_at(1)
        }

        /// Start at an arbitrary id
        #[must_use]
        pub const fn starting_at(first: u64) -> Self {
            Self {
                next: AtomicU64::new(first),
            }
        }
    }

    impl Default for SequentialIdGenerator {
        fn default() -> Self {
            Self::new()
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> Uuid {
            Uuid::from_u128(u128::from(self.next.fetch_add(1, Ordering::Relaxed)))
        }
    }

    /// Broken generator that always returns the same id
    ///
    /// Used to exercise collision handling.
    #[derive(Debug, Clone, Copy)]
    pub struct ConstantIdGenerator(pub Uuid);

    impl IdGenerator for ConstantIdGenerator {
        fn next_id(&self) -> Uuid {
            self.0
        }
    }
}

/// Test helpers and utilities
pub mod helpers {
    /// Install a test-friendly tracing subscriber (idempotent)
    ///
    /// Output is captured by the test harness and shown only for failing tests.
    pub fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "debug".into()),
            )
            .with_test_writer()
            .try_init();
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use proptest::prelude::*;

    /// Input that is empty or whitespace only
    pub fn blank_text() -> impl Strategy<Value = String> {
        "[ \t\n]{0,6}"
    }

    /// Input with at least one visible character, possibly padded with whitespace
    pub fn todo_text() -> impl Strategy<Value = String> {
        ("[ \t]{0,3}", "[a-zA-Z0-9][a-zA-Z0-9 ,.!?-]{0,24}", "[ \t]{0,3}")
            .prop_map(|(lead, body, trail)| format!("{lead}{body}{trail}"))
    }

    /// Any input a user could type, blank or not
    pub fn raw_text() -> impl Strategy<Value = String> {
        prop_oneof![1 => blank_text(), 4 => todo_text()]
    }
}

// Re-export commonly used items
pub use mocks::{test_clock, ConstantIdGenerator, FixedClock, SequentialIdGenerator};
pub use reducer_test::{assertions, ReducerTest};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fixed_clock() {
        let clock = test_clock();
        let time1 = clock.now();
        let time2 = clock.now();
        assert_eq!(time1, time2);
    }

    #[test]
    fn sequential_ids_count_up() {
        let ids = SequentialIdGenerator::new();
        assert_eq!(ids.next_id(), Uuid::from_u128(1));
        assert_eq!(ids.next_id(), Uuid::from_u128(2));

        let ids = SequentialIdGenerator::starting_at(40);
        assert_eq!(ids.next_id(), Uuid::from_u128(40));
    }

    #[test]
    fn constant_ids_repeat() {
        let ids = ConstantIdGenerator(Uuid::from_u128(7));
        assert_eq!(ids.next_id(), ids.next_id());
    }

    proptest! {
        #[test]
        fn blank_text_trims_to_empty(text in properties::blank_text()) {
            prop_assert!(text.trim().is_empty());
        }

        #[test]
        fn todo_text_survives_trim(text in properties::todo_text()) {
            prop_assert!(!text.trim().is_empty());
        }
    }
}
