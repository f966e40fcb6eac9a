use std::path::PathBuf;
use std::time::Duration;

/// Side effects requested by the reducer, executed by the event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Batch(Vec<Command>),
    /// Write (`Some`) or remove (`None`) a key in the persistent store.
    Persist {
        key: &'static str,
        value: Option<String>,
    },
    FetchWeather(String),
    LoadBackgroundFile(PathBuf),
    /// Emit `Action::FocusTerminalInput` once `Duration` has elapsed.
    FocusInputAfter(Duration),
    /// Leave the dashboard for `url`. Ends the session on success.
    Navigate(String),
    /// Open `url` alongside the dashboard.
    OpenUrl(String),
}

impl Command {
    #[must_use]
    pub fn persist(key: &'static str, value: impl Into<String>) -> Self {
        Self::Persist {
            key,
            value: Some(value.into()),
        }
    }

    #[must_use]
    pub fn forget(key: &'static str) -> Self {
        Self::Persist { key, value: None }
    }

    /// Flattens nested batches into execution order.
    #[must_use]
    pub fn into_steps(self) -> Vec<Command> {
        match self {
            Self::Batch(commands) => commands.into_iter().flat_map(Self::into_steps).collect(),
            other => vec![other],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_flattening() {
        let cmd = Command::Batch(vec![
            Command::forget("a"),
            Command::Batch(vec![Command::FetchWeather("Oslo".to_string())]),
            Command::persist("b", "1"),
        ]);
        assert_eq!(
            cmd.into_steps(),
            vec![
                Command::forget("a"),
                Command::FetchWeather("Oslo".to_string()),
                Command::persist("b", "1"),
            ]
        );
    }
}
