use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use tracing_subscriber::EnvFilter;
use url::Url;

use sharetab::app::App;
use sharetab::client::ShareClient;
use sharetab::ui;

/// Terminal browser for a file share server's listing: sortable table,
/// per-row delete.
#[derive(Debug, Parser)]
#[command(name = "sharetab", version)]
struct Args {
    /// Base URL of the server, e.g. http://192.168.1.4:9000
    url: Url,
    /// Append tracing output to this file (stdout belongs to the TUI)
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Input poll interval in milliseconds
    #[arg(long, default_value_t = 50)]
    tick_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = File::options()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_ansi(false)
            .with_writer(Arc::new(file))
            .init();
    }

    let client = ShareClient::new(args.url);
    let rows = client
        .fetch_listing()
        .await
        .context("fetching initial listing")?;
    let mut app = App::new(client, rows);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, &mut app, Duration::from_millis(args.tick_ms)).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    tick: Duration,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Completions of in-flight deletes land between frames; there is
        // no ordering guarantee relative to further clicks.
        while let Some(msg) = app.try_recv_message() {
            app.handle_message(msg).await;
        }

        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key).await,
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
