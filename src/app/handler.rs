use crate::app::{action::Action, command::Command};
use crate::domain::browser::Browser;
use crate::domain::models::Background;
use crate::domain::store::KeyValueStore;
use crate::domain::weather::WeatherProvider;

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Largest local file accepted as a background.
pub const MAX_BACKGROUND_BYTES: u64 = 5 * 1024 * 1024;

/// Everything the commands talk to outside the process.
#[derive(Clone)]
pub struct Services {
    pub store: Arc<dyn KeyValueStore>,
    pub weather: Arc<dyn WeatherProvider>,
    pub browser: Arc<dyn Browser>,
}

/// Runs one command. `Navigate` is handled by the loop, which owns the
/// session; here it behaves like `OpenUrl`.
pub fn handle_command(
    command: Command,
    services: &Services,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    match command {
        Command::Batch(commands) => {
            for step in commands {
                handle_command(step, services, tx.clone())?;
            }
        }
        Command::Persist { key, value } => {
            let result = match &value {
                Some(value) => services.store.set(key, value),
                None => services.store.remove(key),
            };
            if let Err(e) = result {
                tracing::warn!(key, error = %e, "failed to persist");
                let _ = tx.try_send(Action::ErrorOccurred(format!("Could not save {key}: {e}")));
            }
        }
        Command::FetchWeather(city) => {
            let provider = services.weather.clone();
            tokio::spawn(async move {
                let result = match provider.current(&city).await {
                    Ok(report) => {
                        tracing::info!(%city, temperature = report.temperature, "weather loaded");
                        Ok(report)
                    }
                    Err(e) => {
                        tracing::warn!(%city, error = %e, "weather fetch failed");
                        Err(e.to_string())
                    }
                };
                let _ = tx.send(Action::WeatherLoaded(city, result)).await;
            });
        }
        Command::LoadBackgroundFile(path) => {
            tokio::spawn(async move {
                let result = read_background(&path).await.map_err(|e| {
                    tracing::warn!(path = %path.display(), error = %e, "background load failed");
                    format!("Could not load {}: {e}", path.display())
                });
                let _ = tx.send(Action::BackgroundLoaded(result)).await;
            });
        }
        Command::FocusInputAfter(delay) => {
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let _ = tx.send(Action::FocusTerminalInput).await;
            });
        }
        Command::Navigate(url) | Command::OpenUrl(url) => {
            if let Err(e) = services.browser.open(&url) {
                tracing::warn!(%url, error = %e, "failed to open url");
                let _ = tx.try_send(Action::OperationCompleted(Err(format!(
                    "Could not open {url}: {e}"
                ))));
            }
        }
    }
    Ok(())
}

/// Reads `path` into the stored `data:` form.
async fn read_background(path: &Path) -> Result<String> {
    let meta = tokio::fs::metadata(path).await?;
    if meta.len() > MAX_BACKGROUND_BYTES {
        anyhow::bail!(
            "file is {} bytes, the limit is {MAX_BACKGROUND_BYTES}",
            meta.len()
        );
    }
    let bytes = tokio::fs::read(path).await?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    tracing::info!(path = %path.display(), %mime, bytes = bytes.len(), "background loaded");
    Ok(Background::from_bytes(mime.essence_str(), &bytes).to_stored())
}
