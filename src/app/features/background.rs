use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppMode, AppState, ErrorState, InputState},
};
use crate::domain::models::Background;
use crate::domain::store::BACKGROUND_KEY;
use std::path::PathBuf;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::ToggleBackgroundMenu => {
            if state.mode == AppMode::BackgroundMenu {
                close_menu(state);
            } else {
                state.mode = AppMode::BackgroundMenu;
                state.input = Some(InputState::with_text(""));
            }
            UpdateResult::Handled(None)
        }
        Action::ApplyBackground(raw) => {
            let source = raw.trim();
            if source.is_empty() {
                return UpdateResult::Handled(None);
            }
            if Background::is_remote_source(source) {
                return UpdateResult::Handled(apply(state, source.to_string()));
            }
            state.status_message = Some("Loading background...".to_string());
            UpdateResult::Handled(Some(Command::LoadBackgroundFile(expand_home(source))))
        }
        Action::BackgroundLoaded(result) => match result {
            Ok(stored) => UpdateResult::Handled(apply(state, stored.clone())),
            Err(err) => {
                state.status_message = None;
                state.last_error = Some(ErrorState::error(err.clone()));
                UpdateResult::Handled(None)
            }
        },
        Action::ResetBackground => {
            state.background = None;
            close_menu(state);
            UpdateResult::Handled(Some(Command::forget(BACKGROUND_KEY)))
        }
        _ => UpdateResult::NotHandled,
    }
}

fn apply(state: &mut AppState, stored: String) -> Option<Command> {
    state.background = Background::from_stored(&stored);
    state.status_message = Some("Background updated".to_string());
    close_menu(state);
    Some(Command::persist(BACKGROUND_KEY, stored))
}

fn close_menu(state: &mut AppState) {
    if state.mode == AppMode::BackgroundMenu {
        state.mode = AppMode::Normal;
        state.input = None;
    }
}

fn expand_home(source: &str) -> PathBuf {
    match (source.strip_prefix("~/"), home::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(source),
    }
}
