use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppMode, AppState, ErrorState},
};
use crate::domain::store::THEME_KEY;
use crate::theme::Theme;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::CancelMode => {
            state.mode = match state.mode {
                AppMode::FavoriteEditor | AppMode::ConfirmDelete => AppMode::Favorites,
                _ => AppMode::Normal,
            };
            if state.mode == AppMode::Normal {
                state.favorites.panel_open = false;
            }
            state.input = None;
            state.favorites.editor = None;
            state.favorites.pending_delete = None;
            state.last_error = None;
            UpdateResult::Handled(None)
        }
        Action::ToggleHelp => {
            state.mode = if state.mode == AppMode::Help {
                AppMode::Normal
            } else {
                AppMode::Help
            };
            UpdateResult::Handled(None)
        }
        Action::ToggleTheme => {
            state.theme_name = state.theme_name.toggled();
            state.theme = Theme::from_name(state.theme_name);
            UpdateResult::Handled(Some(Command::persist(
                THEME_KEY,
                state.theme_name.as_str(),
            )))
        }
        Action::TextAreaInput(key) => {
            if let Some(input) = &mut state.input {
                input.text_area.input(*key);
            } else if let Some(editor) = &mut state.favorites.editor {
                editor.focused_area_mut().input(*key);
            }
            UpdateResult::Handled(None)
        }
        Action::OperationCompleted(result) => {
            match result {
                Ok(msg) => state.status_message = Some(msg.clone()),
                Err(err) => state.last_error = Some(ErrorState::error(err.clone())),
            }
            UpdateResult::Handled(None)
        }
        Action::ErrorOccurred(err) => {
            state.last_error = Some(ErrorState::error(err.clone()));
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
