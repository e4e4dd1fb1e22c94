// src/main.rs

use color_eyre::eyre::{Result, WrapErr};
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::io::stdout;
use std::panic::PanicHookInfo;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{error, info};

mod app;
mod config;
mod core;
mod logging;
mod ui;

use app::{App, AppState};
use config::Config;
use crate::core::analyzer::{AnalyzerClient, UploadError};
use crate::core::models::AnalysisResult;

type UploadOutcome = std::result::Result<AnalysisResult, UploadError>;
type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Send + Sync + 'static>;

#[tokio::main]
async fn main() -> Result<()> {
    install_hooks()?;
    let log_path = logging::initialize_logging().wrap_err("Could not set up logging")?;
    let config = Config::load()?;
    let client = AnalyzerClient::new(&config.base_url).wrap_err("Could not build the HTTP client")?;
    info!(base_url = %config.base_url, log = %log_path.display(), "Starting analyzer client.");

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let result = run(&mut terminal, config, client).await;

    restore_terminal()?;
    result
}

/// color-eyre's hooks, with the panic report printed on a restored terminal.
fn install_hooks() -> Result<()> {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install()?;
    let report = panic_hook.into_panic_hook();
    std::panic::set_hook(restore_on_panic(
        || {
            if let Err(e) = restore_terminal() {
                error!(error = %e, "Could not restore the terminal after a panic.");
            }
        },
        report,
    ));
    Ok(())
}

/// Runs `restore` first so `report` is not swallowed by raw mode or the alternate screen.
fn restore_on_panic(restore: impl Fn() + Send + Sync + 'static, report: PanicHook) -> PanicHook {
    Box::new(move |info: &PanicHookInfo<'_>| {
        restore();
        report(info);
    })
}

fn restore_terminal() -> std::io::Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

async fn run(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, config: Config, client: AnalyzerClient) -> Result<()> {
    let mut app = App::new(config.start_dir, client.upload_url().to_string());
    let (tx, mut rx) = mpsc::channel::<UploadOutcome>(1);

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            handle_events(&mut app, &client, &tx)?;
        }

        if let Ok(outcome) = rx.try_recv() {
            app.on_upload_settled(outcome);
        }

        app.on_tick(Instant::now());
    }

    info!("Quitting.");
    Ok(())
}

fn handle_events(app: &mut App, client: &AnalyzerClient, tx: &mpsc::Sender<UploadOutcome>) -> Result<()> {
    if let Event::Key(key) = event::read()? {
        if key.kind == KeyEventKind::Press {
            match app.state {
                AppState::Idle => handle_idle_input(app, key.code, client, tx),
                AppState::Picking => handle_picker_input(app, key.code),
            }
        }
    }
    Ok(())
}

/// Keys for the main screen.
fn handle_idle_input(app: &mut App, key_code: KeyCode, client: &AnalyzerClient, tx: &mpsc::Sender<UploadOutcome>) {
    match key_code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('o') | KeyCode::Char('O') => app.open_picker(),
        KeyCode::Char('x') | KeyCode::Char('X') => app.remove_selection(),
        KeyCode::Up => app.scroll_up(),
        KeyCode::Down => app.scroll_down(),
        KeyCode::Enter => {
            if let Some(file) = app.submit() {
                let client = client.clone();
                let tx = tx.clone();
                // Not cancelled on quit or reselect; a late outcome is still delivered.
                tokio::spawn(async move {
                    let outcome = client.upload(&file).await;
                    if tx.send(outcome).await.is_err() {
                        error!(file = %file.name, "Upload finished after the UI closed.");
                    }
                });
            }
        }
        _ => {}
    }
}

/// Keys while the file browser is open.
fn handle_picker_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Esc => app.picker_cancel(),
        KeyCode::Enter => app.picker_activate(),
        KeyCode::Backspace => {
            if let Some(picker) = app.picker.as_mut() {
                picker.go_up();
            }
        }
        KeyCode::Up => {
            if let Some(picker) = app.picker.as_mut() {
                picker.select_previous();
            }
        }
        KeyCode::Down => {
            if let Some(picker) = app.picker.as_mut() {
                picker.select_next();
            }
        }
        _ => {}
    }
}
