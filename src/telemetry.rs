//! File-backed tracing. The terminal belongs to the UI, so nothing is logged to it.

use anyhow::Result;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

#[must_use]
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("startpage.log")
}

pub fn init_tracing(path: &Path) -> Result<()> {
    if TRACING_INIT.get().is_some() {
        return Ok(());
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        let _ = TRACING_INIT.set(());
    }
    Ok(())
}
