use crate::app::{
    action::Action,
    command::Command,
    handler::{handle_command, Services},
    input::map_event_to_action,
    reducer,
    state::AppState,
    ui,
};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);
const READER_POLL: Duration = Duration::from_millis(100);

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exit {
    Quit,
    /// The page navigated away to this URL.
    Navigated(String),
}

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    services: Services,
) -> Result<Exit> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || {
        // Stops once the loop drops the receiver.
        while !event_tx.is_closed() {
            match event::poll(READER_POLL).and_then(|ready| {
                if ready {
                    event::read().map(Some)
                } else {
                    Ok(None)
                }
            }) {
                Ok(Some(evt)) => {
                    if event_tx.blocking_send(Ok(evt)).is_err() {
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    let _ = event_tx.blocking_send(Err(e));
                    break;
                }
            }
        }
    });

    run_loop_with_events(terminal, app_state, services, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    services: Services,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<Exit> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    // Initial Load
    handle_command(
        Command::FetchWeather(app_state.weather.city.clone()),
        &services,
        action_tx.clone(),
    )?;

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            res = event_rx.recv() => match res {
                Some(Ok(event)) => map_event_to_action(event, &app_state, terminal.size()?),
                Some(Err(e)) => return Err(e.into()),
                // Nothing left to read from; the session cannot continue.
                None => return Ok(Exit::Quit),
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        let Some(action) = action else {
            continue;
        };
        if let Action::Quit = action {
            break;
        }

        let command = reducer::update(&mut app_state, action);

        if app_state.should_quit {
            break;
        }

        let Some(cmd) = command else {
            continue;
        };
        for step in cmd.into_steps() {
            match step {
                Command::Navigate(url) => {
                    if let Some(exit) = navigate(&mut app_state, &services, url) {
                        return Ok(exit);
                    }
                }
                other => handle_command(other, &services, action_tx.clone())?,
            }
        }
    }

    Ok(Exit::Quit)
}

/// Opens `url` and ends the session, or records the failure on the overlay.
fn navigate(app_state: &mut AppState<'_>, services: &Services, url: String) -> Option<Exit> {
    match services.browser.open(&url) {
        Ok(()) => {
            tracing::info!(%url, "navigating away");
            Some(Exit::Navigated(url))
        }
        Err(e) => {
            tracing::warn!(%url, error = %e, "navigation failed");
            // The loop is the only reader of its action channel.
            reducer::update(app_state, Action::NavigationFailed(url, format!("{e:#}")));
            None
        }
    }
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
