use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use startpage::app::{
    handler::Services,
    r#loop::{run_loop, Exit},
    state::AppState,
};
use startpage::config::Config;
use startpage::domain::store::{KeyValueStore, MemoryStore};
use startpage::infrastructure::{
    file_store::{default_storage_path, FileStore},
    openweather::OpenWeatherClient,
    system_browser::SystemBrowser,
};
use startpage::telemetry;

/// Terminal start page: clock, weather, favorites and a search launcher.
#[derive(Debug, Parser)]
#[command(name = "startpage", version, about)]
struct Cli {
    /// Config file (default: ~/.config/startpage/config.toml)
    #[arg(long, env = "STARTPAGE_CONFIG")]
    config: Option<PathBuf>,

    /// Where to write logs (default: <tmp>/startpage.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Disable file logging
    #[arg(long, default_value_t = false)]
    no_logs: bool,
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

fn open_store() -> Arc<dyn KeyValueStore> {
    let Some(path) = default_storage_path() else {
        tracing::warn!("no home directory, settings will not be saved");
        return Arc::new(MemoryStore::new());
    };
    match FileStore::open(&path) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "storage unreadable, using memory");
            Arc::new(MemoryStore::new())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_panic_hook();

    if !cli.no_logs {
        let log_path = cli.log_file.clone().unwrap_or_else(telemetry::default_log_path);
        telemetry::init_tracing(&log_path)?;
    }

    // Configuration and services are set up BEFORE the terminal so a bad
    // config file is reported on a normal screen.
    let config = Config::load(cli.config.as_deref())?;
    let store = open_store();
    let services = Services {
        store: store.clone(),
        weather: Arc::new(OpenWeatherClient::new(config.weather.clone())?),
        browser: Arc::new(SystemBrowser),
    };
    let app_state = AppState::new(&config, store.as_ref());
    tracing::info!(city = %app_state.weather.city, "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, services).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Ok(Exit::Navigated(url)) => println!("Opened {url}"),
        Ok(Exit::Quit) => {}
        Err(err) => {
            tracing::error!(error = %err, "session ended with an error");
            println!("{err:?}");
        }
    }

    Ok(())
}
