//! In-memory todo list widget built on the Composable Todo architecture.
//!
//! The widget keeps a most-recent-first list of todo items, the draft text
//! of its input field and a status filter. Users add, toggle and delete
//! items and pick a filter; everything shown is projected from state after
//! every change.
//!
//! - [`types`]: items, filter, state and actions
//! - [`reducer`]: the state transitions
//! - [`projection`]: filtered list, counters, empty message and footer
//! - [`render`]: plain-text layout of a view
//! - [`input`]: line commands for the terminal session
//! - [`TodoWidget`]: store plus view, the embedding API
//!
//! # Quick Start
//!
//! ```no_run
//! use todo_widget::{Filter, TodoWidget, WidgetConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut widget = TodoWidget::new(WidgetConfig::default());
//!
//! widget.add_item("Buy milk")?;
//! let id = widget.view().items[0].id;
//! widget.toggle_item(id)?;
//! widget.set_filter(Filter::Completed)?;
//!
//! println!("{}", widget.render());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod projection;
pub mod reducer;
pub mod render;
pub mod types;
pub mod widget;

// Re-export commonly used types
pub use config::WidgetConfig;
pub use error::WidgetError;
pub use projection::{TodoCounts, TodoView, TodoViewProjection};
pub use reducer::{TodoEnvironment, TodoReducer};
pub use types::{Filter, TodoAction, TodoId, TodoItem, TodoState};
pub use widget::{Flow, TodoStore, TodoWidget};
