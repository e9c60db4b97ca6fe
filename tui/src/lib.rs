//! Terminal UI for the folio single-page portfolio.
//!
//! The page is a vertical stack of section renderables inside an
//! alternate-screen viewport. A fixed navigation bar tracks the scroll
//! position (scroll-spy), navigation smooth-scrolls between sections, and
//! the contact section hosts a validated form whose outcome surfaces as a
//! transient toast. All state is ephemeral; nothing is persisted.

mod app;
mod app_event;
mod app_event_sender;
mod cli;
pub mod contact_form;
mod footer;
mod key_hint;
mod nav;
pub mod page;
pub mod scroll;
pub mod sections;
mod terminal;
mod theme;
pub mod toast;
pub mod view_model;

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use anyhow::Result;
use anyhow::anyhow;
use folio_content::Content;
use folio_content::SectionId;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::app::App;

pub use crate::cli::Cli;

pub fn run_main(cli: Cli) -> Result<()> {
    color_eyre::install().map_err(|err| anyhow!("failed to install error hooks: {err}"))?;
    let _log_guard = init_logging(cli.debug)?;

    let content = match &cli.content {
        Some(path) => folio_content::load_from_path(path)
            .with_context(|| format!("loading content from {}", path.display()))?,
        None => Content::built_in(),
    };

    let start_section = match cli.section.as_deref() {
        Some(anchor) => match SectionId::from_str(anchor) {
            Ok(id) => Some(id),
            Err(_) => {
                tracing::warn!("unknown --section anchor {anchor:?}; ignoring");
                None
            }
        },
        None => None,
    };

    terminal::install_panic_hook();
    let mut terminal = terminal::init()?;
    let size = terminal.size()?;
    let mut app = App::new(content, size.width, size.height);
    if let Some(section) = start_section {
        app.navigate_to(section);
    }
    let result = app.run(&mut terminal);
    terminal::restore()?;
    result
}

/// Route logs to a rolling file: the TUI owns stdout, so the terminal never
/// sees them. `RUST_LOG` overrides the default filter.
fn init_logging(debug: bool) -> Result<WorkerGuard> {
    let log_dir = std::env::var_os("FOLIO_LOG_DIR")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".folio/log")))
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;
    let appender = tracing_appender::rolling::daily(&log_dir, "folio-tui.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let default_filter = if debug {
        "folio_tui=debug,folio_content=debug"
    } else {
        "folio_tui=info,folio_content=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}
