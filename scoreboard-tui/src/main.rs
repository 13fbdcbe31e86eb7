mod app;
mod cli;
mod config;
mod logging;
mod runtime;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use config::ScoreboardConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use scoreboard::UtcOffset;
use std::io;

fn main() -> Result<()> {
    // Load environment variables from .env.scoreboard (RUST_LOG and friends)
    dotenvy::from_filename(".env.scoreboard").ok();

    // Must be read before the runtime spawns its worker threads
    let utc_offset = scoreboard::local_utc_offset();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Run) {
        Commands::ConfigPath => {
            let path = ScoreboardConfig::config_path()?;
            ScoreboardConfig::ensure_default_at(&path)?;
            println!("{}", path.display());
            Ok(())
        }
        Commands::Run => tokio::runtime::Runtime::new()
            .context("Failed to start async runtime")?
            .block_on(run(utc_offset)),
    }
}

async fn run(utc_offset: UtcOffset) -> Result<()> {
    let cfg = ScoreboardConfig::load()?;
    logging::init(&cfg.log_path()?).context("Failed to set up logging")?;
    tracing::info!(
        home = %cfg.home_team,
        away = %cfg.away_team,
        duration = %cfg.duration_minutes,
        "starting scoreboard"
    );

    let mut app = App::new(&cfg).with_utc_offset(utc_offset);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let res = runtime::run_app(&mut terminal, &mut app, cfg.alarm_beeps).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = ?err, "scoreboard exited with error");
        eprintln!("Error: {:?}", err);
    }

    let played = app.scoreboard.history().len();
    tracing::info!(matches = played, "scoreboard closed");
    println!("\n👋 Goodbye! {} match(es) recorded this session.", played);

    Ok(())
}
