mod app;
mod cli;
mod confirm;
mod domain;
mod input;
mod logging;
mod persistence;
mod store;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::Parser;
use cli::{Cli, Commands};
use confirm::{AssumeYes, Confirm, PromptConfirm};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{ensure_data_dir, init_local_data_dir, log_dir, FileStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use store::Tracker;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Init) = cli.command {
        let current_dir = std::env::current_dir().context("Could not determine current directory")?;
        let data_dir = init_local_data_dir(&current_dir)?;
        println!("Initialized data directory: {}", data_dir.display());
        println!();
        println!("twofold will now keep its lists in this directory.");
        return Ok(());
    }

    let data_dir = ensure_data_dir(cli.data_dir.as_deref())?;
    let level = cli
        .log_level
        .as_deref()
        .unwrap_or(logging::default_log_level());
    logging::init_logging(level, &log_dir(&data_dir)).map_err(|err| anyhow::anyhow!(err))?;

    let gateway = FileStore::open(&data_dir)
        .with_context(|| format!("Failed to open data directory: {}", data_dir.display()))?;
    let mut tracker = Tracker::open(gateway).context("Failed to load tasks")?;

    match cli.command {
        Some(command) => {
            let yes = matches!(
                command,
                Commands::Delete { yes: true, .. } | Commands::Clear { yes: true }
            );
            let mut confirm: Box<dyn Confirm> = if yes {
                Box::new(AssumeYes)
            } else {
                Box::new(PromptConfirm::stdio())
            };
            let mut stdout = io::stdout().lock();
            cli::run_command(command, &mut tracker, confirm.as_mut(), &mut stdout)
        }
        None => run_tui(tracker),
    }
}

fn run_tui(tracker: Tracker<FileStore>) -> Result<()> {
    let mut app = AppState::new(tracker);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("event=tui_exit status=error reason=\"{}\"", err);
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState<FileStore>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                    return Ok(());
                }
            }
        }
    }
}
