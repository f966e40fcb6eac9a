use crate::app::{
    action::Action,
    state::{AppMode, AppState},
    ui,
};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect, Size};

const OUTPUT_PAGE: u16 = 10;

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        // The overlay shortcut wins over every input field.
        if app_state.keymap.is_overlay_toggle(key) {
            return Some(Action::ToggleOverlay);
        }
    }

    if let Event::Resize(w, h) = event {
        return Some(Action::Resize(w, h));
    }

    if app_state.overlay.is_active() {
        return map_overlay_event(event, app_state);
    }

    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
    match event {
        Event::Key(key) => map_key(key, app_state),
        Event::Mouse(mouse) => map_mouse(mouse, app_state, area),
        _ => None,
    }
}

fn map_overlay_event(event: Event, app_state: &AppState<'_>) -> Option<Action> {
    match event {
        Event::Key(key) => match key.code {
            KeyCode::Enter => Some(Action::SubmitCommand(app_state.terminal.input.text())),
            KeyCode::PageUp => Some(Action::ScrollOutputUp(OUTPUT_PAGE)),
            KeyCode::PageDown => Some(Action::ScrollOutputDown(OUTPUT_PAGE)),
            _ if app_state.overlay.is_input_focused() => Some(Action::TerminalInput(key)),
            _ => None,
        },
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::ScrollOutputUp(1)),
            MouseEventKind::ScrollDown => Some(Action::ScrollOutputDown(1)),
            _ => None,
        },
        _ => None,
    }
}

fn input_text(app_state: &AppState<'_>) -> String {
    app_state
        .input
        .as_ref()
        .map(|input| input.text_area.text())
        .unwrap_or_default()
}

fn map_key(key: KeyEvent, app_state: &AppState<'_>) -> Option<Action> {
    match app_state.mode {
        AppMode::WeatherSettings => match key.code {
            KeyCode::Esc => Some(Action::CancelMode),
            KeyCode::Enter => Some(Action::SaveWeatherCity(input_text(app_state))),
            _ => Some(Action::TextAreaInput(key)),
        },
        AppMode::BackgroundMenu => match key.code {
            KeyCode::Esc => Some(Action::CancelMode),
            KeyCode::Enter => Some(Action::ApplyBackground(input_text(app_state))),
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ResetBackground)
            }
            _ => Some(Action::TextAreaInput(key)),
        },
        AppMode::FavoriteEditor => match key.code {
            KeyCode::Esc => Some(Action::CancelMode),
            KeyCode::Enter => Some(Action::SaveFavorite),
            KeyCode::Tab => Some(Action::FavoriteEditorNextField),
            _ => Some(Action::TextAreaInput(key)),
        },
        AppMode::ConfirmDelete => match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(Action::ConfirmDeleteFavorite),
            KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Action::CancelMode),
            _ => None,
        },
        AppMode::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('q' | '?') => Some(Action::ToggleHelp),
            _ => None,
        },
        AppMode::Normal | AppMode::Favorites => app_state.keymap.get_action(key, app_state.mode),
    }
}

fn contains(area: Rect, mouse: &MouseEvent) -> bool {
    area.contains(Position::new(mouse.column, mouse.row))
}

fn map_mouse(mouse: MouseEvent, app_state: &AppState<'_>, area: Rect) -> Option<Action> {
    let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
        return match (app_state.mode, mouse.kind) {
            (AppMode::Favorites, MouseEventKind::ScrollDown) => Some(Action::SelectNextFavorite),
            (AppMode::Favorites, MouseEventKind::ScrollUp) => Some(Action::SelectPrevFavorite),
            _ => None,
        };
    };

    match app_state.mode {
        // Clicking anywhere outside the menu dismisses it.
        AppMode::BackgroundMenu => {
            if contains(ui::background_menu_rect(area), &mouse) {
                None
            } else {
                Some(Action::CancelMode)
            }
        }
        AppMode::Normal | AppMode::Favorites => {
            let layout = ui::get_layout(area, app_state);
            if contains(layout.toggle, &mouse) {
                return Some(Action::ToggleTheme);
            }
            let panel = layout.favorites?;
            if !contains(panel, &mouse) {
                return None;
            }
            // First row inside the border is entry 0.
            let row = mouse.row.checked_sub(panel.y + 1)? as usize;
            (row < app_state.favorites.items.len()).then_some(Action::SelectFavorite(row))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer;

    const SIZE: Size = Size {
        width: 100,
        height: 30,
    };

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_shortcut_toggles_from_any_mode() {
        let mut state = AppState::default();
        let alt_t = press(KeyCode::Char('t'), KeyModifiers::ALT);
        for mode in [AppMode::Normal, AppMode::WeatherSettings, AppMode::FavoriteEditor] {
            state.mode = mode;
            assert_eq!(
                map_event_to_action(alt_t.clone(), &state, SIZE),
                Some(Action::ToggleOverlay)
            );
        }
        reducer::update(&mut state, Action::ToggleOverlay);
        assert_eq!(
            map_event_to_action(alt_t, &state, SIZE),
            Some(Action::ToggleOverlay)
        );
    }

    #[test]
    fn test_enter_submits_only_in_overlay() {
        let mut state = AppState::default();
        let enter = press(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(map_event_to_action(enter.clone(), &state, SIZE), None);

        reducer::update(&mut state, Action::ToggleOverlay);
        // Enter submits even before the input has focus.
        assert_eq!(
            map_event_to_action(enter, &state, SIZE),
            Some(Action::SubmitCommand(String::new()))
        );
    }

    #[test]
    fn test_overlay_keys_wait_for_focus() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::ToggleOverlay);
        let q = press(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(map_event_to_action(q.clone(), &state, SIZE), None);

        reducer::update(&mut state, Action::FocusTerminalInput);
        assert!(matches!(
            map_event_to_action(q, &state, SIZE),
            Some(Action::TerminalInput(_))
        ));
    }

    #[test]
    fn test_release_events_are_ignored() {
        let state = AppState::default();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_event_to_action(Event::Key(key), &state, SIZE), None);
    }

    #[test]
    fn test_weather_settings_keys() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::ToggleWeatherSettings);
        assert_eq!(
            map_event_to_action(press(KeyCode::Enter, KeyModifiers::NONE), &state, SIZE),
            Some(Action::SaveWeatherCity("Paris".to_string()))
        );
        assert_eq!(
            map_event_to_action(press(KeyCode::Esc, KeyModifiers::NONE), &state, SIZE),
            Some(Action::CancelMode)
        );
    }

    #[test]
    fn test_click_outside_background_menu_closes_it() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::ToggleBackgroundMenu);
        let click = |column, row| {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            })
        };
        assert_eq!(
            map_event_to_action(click(0, 0), &state, SIZE),
            Some(Action::CancelMode)
        );
        let menu = ui::background_menu_rect(Rect::new(0, 0, SIZE.width, SIZE.height));
        assert_eq!(
            map_event_to_action(click(menu.x + 1, menu.y + 1), &state, SIZE),
            None
        );
    }

    #[test]
    fn test_confirm_delete_keys() {
        let mut state = AppState::default();
        state.mode = AppMode::ConfirmDelete;
        assert_eq!(
            map_event_to_action(press(KeyCode::Char('y'), KeyModifiers::NONE), &state, SIZE),
            Some(Action::ConfirmDeleteFavorite)
        );
        assert_eq!(
            map_event_to_action(press(KeyCode::Char('n'), KeyModifiers::NONE), &state, SIZE),
            Some(Action::CancelMode)
        );
    }
}
