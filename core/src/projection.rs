//! Projection system for deriving read models from state.
//!
//! # Overview
//!
//! Projections are the **query side** of the architecture. Reducers own the
//! write side (actions → state), projections own the read side
//! (state → view). A projection is stateless: it is recomputed from scratch
//! every time the state changes, so it can never drift from the state it
//! was derived from.
//!
//! ```text
//! Write Side:                  Read Side:
//! ┌─────────────────┐         ┌─────────────────┐
//! │  Reducer        │         │  Projection     │
//! │                 │  state  │                 │
//! │  action → state │ ──────▶ │  state → view   │ ──▶ render
//! └─────────────────┘         └─────────────────┘
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use composable_todo_core::projection::Projection;
//!
//! struct OpenCount;
//!
//! impl Projection<TodoState> for OpenCount {
//!     type View<'a> = usize;
//!
//!     fn name(&self) -> &'static str {
//!         "open_count"
//!     }
//!
//!     fn project<'a>(&self, state: &'a TodoState) -> usize {
//!         state.items.iter().filter(|item| !item.completed).count()
//!     }
//! }
//! ```

/// A projection derives a read model from state.
///
/// The view may borrow from the state it was projected from, which keeps
/// projections allocation-light for large lists.
pub trait Projection<S> {
    /// The read model produced by this projection.
    type View<'a>
    where
        S: 'a;

    /// Get the projection name (used for logging and identification).
    fn name(&self) -> &'static str;

    /// Derive the view from the current state.
    ///
    /// Must be pure: the same state always yields an equal view.
    fn project<'a>(&self, state: &'a S) -> Self::View<'a>;
}

/// Any plain function from state to an owned value is a projection.
#[derive(Debug, Clone, Copy)]
pub struct FnProjection<F> {
    name: &'static str,
    f: F,
}

impl<F> FnProjection<F> {
    /// Wrap a function as a named projection.
    #[must_use]
    pub const fn new(name: &'static str, f: F) -> Self {
        Self { name, f }
    }
}

impl<S, T, F> Projection<S> for FnProjection<F>
where
    F: Fn(&S) -> T,
{
    type View<'a>
        = T
    where
        S: 'a;

    fn name(&self) -> &'static str {
        self.name
    }

    fn project<'a>(&self, state: &'a S) -> T {
        (self.f)(state)
    }
}
