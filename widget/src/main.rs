//! Terminal session for the todo widget.
//!
//! Reads one line at a time from stdin and re-renders the widget on stdout
//! after every change. Logs go to stderr; set `RUST_LOG` to adjust them.
//!
//! ```bash
//! RUST_LOG=todo_widget=debug cargo run --bin todo-widget
//! ```

use composable_todo_core::projection::Projection;
use std::io::{self, BufRead, Write};
use todo_widget::input::{self, HELP};
use todo_widget::render::Screen;
use todo_widget::{Flow, TodoViewProjection, TodoWidget, WidgetConfig, WidgetError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_widget=info,composable_todo_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = WidgetConfig::default();
    let mut widget = TodoWidget::new(config.clone());

    // Re-render on every state change
    widget.subscribe(move |state| {
        let view = TodoViewProjection.project(state);
        println!("{}", Screen { view: &view, config: &config });
    });

    let mut stdout = io::stdout();
    writeln!(stdout, "{}", widget.render())?;
    writeln!(stdout, "{}\n", HELP.lines().next().unwrap_or_default())?;

    for line in io::stdin().lock().lines() {
        let line = line?;

        let flow = input::parse_line(&line)
            .map_err(WidgetError::from)
            .and_then(|command| widget.execute(command));

        match flow {
            Ok(Flow::Continue) => {},
            Ok(Flow::Print(text)) => writeln!(stdout, "{text}")?,
            Ok(Flow::Quit) => break,
            Err(WidgetError::Input(error)) => writeln!(stdout, "! {error}")?,
            Err(error) => {
                tracing::error!(%error, "Widget failed");
                return Err(error.into());
            },
        }
        stdout.flush()?;
    }

    tracing::info!("Session ended");
    Ok(())
}
