pub mod analyzer;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod controller;
pub mod dropdown;
pub mod error;
pub mod models;
pub mod result_panel;
pub mod rules;
pub mod selection;
pub mod state;
pub mod view;

use std::io;

use tracing_subscriber::EnvFilter;

use crate::catalog::Catalog;
use crate::cli::{Cli, OutputFormat};
use crate::controller::Controller;
use crate::error::WidgetError;
use crate::view::{JsonView, TerminalView, WidgetView};

pub fn run(cli: Cli) -> Result<(), WidgetError> {
    let fallback = if cli.verbose {
        config::verbose_log_filter()
    } else {
        config::default_log_filter()
    };
    // Logs go to stderr; stdout belongs to the widget.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(io::stderr)
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let stdin = io::stdin().lock();
    match cli.format {
        OutputFormat::Text => {
            let mut view = TerminalView::new(io::stdout());
            view.notice("Type `help` for commands.")?;
            session(view, stdin)
        }
        OutputFormat::Json => session(JsonView::new(io::stdout()), stdin),
    }
}

fn session<V: WidgetView>(view: V, input: impl io::BufRead) -> Result<(), WidgetError> {
    let mut controller = Controller::new(Catalog::default(), view)?;
    commands::run_session(&mut controller, input)?;
    tracing::info!(
        selected = controller.state().chosen.len(),
        "Session ended"
    );
    Ok(())
}
