use clap::Parser;
use folio_tui::Cli;
use folio_tui::run_main;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_main(cli)
}
