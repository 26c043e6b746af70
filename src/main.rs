//! revscope - terminal browser for git history
//!
//! Binary entry point for the TUI application.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;
use ratatui::DefaultTerminal;

use revscope::app::App;
use revscope::config::Config;
use revscope::git::GitExecutor;
use revscope::logger;

/// Browse the history of a git repository, one commit or one file at a time
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Any path inside the repository
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Number of commits listed in browsing mode
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Config file to use instead of the standard locations
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log file (default: <cache dir>/revscope/revscope.log)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Do not offer the uncommitted working copy as the newest entry
    #[arg(long)]
    no_working_copy: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(path) = logger::init(cli.log_file.clone()) {
        info!("revscope {} logging to {}", env!("CARGO_PKG_VERSION"), path.display());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    if let Some(limit) = cli.limit {
        config.history.commit_limit = limit;
    }
    if cli.no_working_copy {
        config.history.working_copy = false;
    }

    // Fail before taking over the terminal
    let git = GitExecutor::open(&cli.path)
        .wrap_err_with(|| format!("cannot open repository at {}", cli.path.display()))?;
    info!("Repository: {}", git.root().display());

    let terminal = ratatui::init();
    let _restore = scopeguard::guard((), |()| ratatui::restore());
    run(terminal, App::new(Arc::new(git), config))
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, mut app: App) -> color_eyre::Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }
    Ok(())
}

/// Handle crossterm events.
///
/// Polls with a 200ms timeout so finished background loads are applied
/// even while no key is pressed.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            _ => {}
        }
    }
    app.drain_results();
    Ok(())
}
