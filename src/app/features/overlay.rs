use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppState, AppTextArea, ErrorState, OverlayMode, INPUT_FOCUS_DELAY},
};
use crate::domain::router::{help_lines, route, Route};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::ToggleOverlay => {
            let mode = state.overlay.toggle();
            tracing::debug!(?mode, "overlay toggled");
            match mode {
                OverlayMode::Overlay => {
                    UpdateResult::Handled(Some(Command::FocusInputAfter(INPUT_FOCUS_DELAY)))
                }
                OverlayMode::Normal => UpdateResult::Handled(None),
            }
        }
        Action::FocusTerminalInput => {
            state.overlay.focus_input();
            UpdateResult::Handled(None)
        }
        Action::TerminalInput(key) => {
            if state.overlay.is_active() && state.overlay.is_input_focused() {
                state.terminal.input.input(*key);
            }
            UpdateResult::Handled(None)
        }
        Action::SubmitCommand(raw) => UpdateResult::Handled(submit(state, raw)),
        Action::ScrollOutputUp(n) => {
            state.terminal.output.scroll_up(usize::from(*n));
            UpdateResult::Handled(None)
        }
        Action::ScrollOutputDown(n) => {
            state.terminal.output.scroll_down(usize::from(*n));
            UpdateResult::Handled(None)
        }
        Action::NavigationFailed(url, reason) => {
            state
                .terminal
                .output
                .append(format!("! could not open {url}: {reason}"));
            state.last_error = Some(ErrorState::error(format!("Could not open {url}")));
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn submit(state: &mut AppState, raw: &str) -> Option<Command> {
    if !state.overlay.is_active() {
        return None;
    }
    let line = raw.trim();
    if line.is_empty() {
        return None;
    }

    state.terminal.output.append(format!("> {line}"));
    state.terminal.input = AppTextArea::default();

    match route(line) {
        Route::Help => {
            state.terminal.output.replace(help_lines());
            None
        }
        Route::Clear => {
            state.terminal.output.clear();
            None
        }
        Route::Navigate(url) => {
            tracing::info!(%line, %url, "routing to search");
            Some(Command::Navigate(url))
        }
    }
}
