//! vanguard_tui - Terminal browser and stat calculator for Anime Vanguards units

mod app;
mod data;
mod ui;

use app::{App, Tab};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use data::HubData;
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const LOG_PATH_VAR: &str = "VANGUARD_LOG";
const DEFAULT_LOG_PATH: &str = "vanguard_tui.log";
const DEFAULT_FILTER: &str = "vanguard_tui=info,vanguard_core=info";

/// Log to a file; stdout belongs to the terminal UI
fn init_logging() {
    let path = std::env::var(LOG_PATH_VAR).unwrap_or_else(|_| DEFAULT_LOG_PATH.to_string());
    let Ok(file) = File::create(&path) else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

fn main() -> io::Result<()> {
    init_logging();

    let data = HubData::load();
    tracing::info!(
        units = data.catalog.len(),
        traits = data.traits.len(),
        "Starting vanguard_tui"
    );
    let mut app = App::new(data);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "Terminal loop failed");
    }
    result
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
            (KeyCode::Tab, _) => app.next_tab(),
            (KeyCode::BackTab, _) => app.prev_tab(),
            (KeyCode::Char('1'), _) => app.set_tab(0),
            (KeyCode::Char('2'), _) => app.set_tab(1),
            (KeyCode::Char('3'), _) => app.set_tab(2),
            (KeyCode::Char('4'), _) => app.set_tab(3),
            (KeyCode::Char('5'), _) => app.set_tab(4),
            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
            (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.on_left(),
            (KeyCode::Right, _) | (KeyCode::Char('l'), _) => app.on_right(),
            (KeyCode::Enter, _) => app.on_enter(),
            (KeyCode::Char('c'), _) => app.clear_trait(),
            (KeyCode::Char('r'), _) => app.reset_calculator(),
            (KeyCode::Char('?'), _) => app.current_tab = Tab::Help,
            _ => {}
        }
    }
    Ok(())
}
