//! Plain-text rendering of a [`TodoView`].
//!
//! Layout, top to bottom: heading, input row, counters, filter bar, list
//! (or empty message), footer. Items are numbered from 1 in display order;
//! those numbers are what `/toggle N` and `/delete N` refer to.

use crate::config::WidgetConfig;
use crate::projection::TodoView;
use crate::types::Filter;
use std::fmt::{self, Write};

/// Write the view as text.
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn write_view<W: Write>(
    out: &mut W,
    view: &TodoView<'_>,
    config: &WidgetConfig,
) -> fmt::Result {
    writeln!(out, "{}", config.title)?;
    if !config.subtitle.is_empty() {
        writeln!(out, "{}", config.subtitle)?;
    }
    writeln!(out)?;

    if view.draft.is_empty() {
        write!(out, "> ({})", config.placeholder)?;
    } else {
        write!(out, "> {}", view.draft)?;
    }
    writeln!(out, "  {}", if view.can_submit { "[+]" } else { "[ ]" })?;
    writeln!(out)?;

    writeln!(
        out,
        "Total: {}  Active: {}  Done: {}",
        view.counts.total, view.counts.active, view.counts.completed
    )?;

    let bar: Vec<String> = Filter::ALL
        .into_iter()
        .map(|filter| {
            if filter == view.filter {
                format!("[{}]", filter.label())
            } else {
                format!(" {} ", filter.label())
            }
        })
        .collect();
    writeln!(out, "{}", bar.join(" "))?;
    writeln!(out)?;

    match view.empty_message {
        Some(message) => writeln!(out, "  {message}")?,
        None => {
            for (position, item) in view.items.iter().enumerate() {
                let mark = if item.completed { "x" } else { " " };
                write!(out, "{:>3}. [{mark}] {}", position + 1, item.text)?;
                if item.completed {
                    write!(out, " ✓")?;
                }
                writeln!(out)?;
            }
        },
    }

    if let Some(footer) = &view.footer {
        writeln!(out)?;
        writeln!(out, "{footer}")?;
    }

    Ok(())
}

/// Render the view into a new string.
#[must_use]
pub fn render(view: &TodoView<'_>, config: &WidgetConfig) -> String {
    Screen { view, config }.to_string()
}

/// A view paired with its configuration, printable with `{}`
#[derive(Debug, Clone, Copy)]
pub struct Screen<'a> {
    /// View to draw
    pub view: &'a TodoView<'a>,
    /// Heading and placeholder text
    pub config: &'a WidgetConfig,
}

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_view(f, self.view, self.config)
    }
}
