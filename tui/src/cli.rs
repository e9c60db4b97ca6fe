use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "folio", version, about = "A single-page portfolio for the terminal")]
pub struct Cli {
    /// Load page content from a TOML file instead of the built-in portfolio.
    #[arg(long = "content", value_name = "FILE")]
    pub content: Option<PathBuf>,

    /// Jump to the named section on startup: home, about, skills, projects
    /// or contact. Unknown anchors are ignored.
    #[arg(long = "section", value_name = "ANCHOR")]
    pub section: Option<String>,

    /// Enable debug logging.
    #[arg(long = "debug", short = 'd', default_value_t = false)]
    pub debug: bool,
}
