use super::action::Action;
use super::state::AppMode;
use crate::config::KeyConfig;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug)]
pub struct KeyMap {
    pub overlay_toggle: char,
    pub global: HashMap<KeyEvent, Action>,
    pub favorites_mode: HashMap<KeyEvent, Action>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::from_config(&KeyConfig::default())
    }
}

impl KeyMap {
    #[must_use]
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut global = HashMap::new();
        let mut favorites_mode = HashMap::new();

        // --- Dashboard ---
        global.insert(key(KeyCode::Char('q')), Action::Quit);
        global.insert(key(KeyCode::Esc), Action::CancelMode);
        global.insert(key(KeyCode::Char('t')), Action::ToggleTheme);
        global.insert(key(KeyCode::Char('w')), Action::ToggleWeatherSettings);
        global.insert(key(KeyCode::Char('r')), Action::RefreshWeather);
        global.insert(key(KeyCode::Char('b')), Action::ToggleBackgroundMenu);
        global.insert(key(KeyCode::Char('f')), Action::ToggleFavorites);
        global.insert(key(KeyCode::Char('?')), Action::ToggleHelp);

        // --- Favorites Panel Overrides ---
        favorites_mode.insert(key(KeyCode::Char('j')), Action::SelectNextFavorite);
        favorites_mode.insert(key(KeyCode::Down), Action::SelectNextFavorite);
        favorites_mode.insert(key(KeyCode::Char('k')), Action::SelectPrevFavorite);
        favorites_mode.insert(key(KeyCode::Up), Action::SelectPrevFavorite);
        favorites_mode.insert(key(KeyCode::Enter), Action::OpenSelectedFavorite);
        favorites_mode.insert(key(KeyCode::Char('a')), Action::AddFavoriteIntent);
        favorites_mode.insert(key(KeyCode::Char('e')), Action::EditSelectedFavoriteIntent);
        favorites_mode.insert(key(KeyCode::Char('d')), Action::DeleteSelectedFavoriteIntent);

        Self {
            overlay_toggle: config.overlay_toggle.to_ascii_lowercase(),
            global,
            favorites_mode,
        }
    }

    /// Alt + the configured letter, in either case.
    #[must_use]
    pub fn is_overlay_toggle(&self, event: &KeyEvent) -> bool {
        event.modifiers.contains(KeyModifiers::ALT)
            && matches!(event.code, KeyCode::Char(c) if c.to_ascii_lowercase() == self.overlay_toggle)
    }

    #[must_use]
    pub fn get_action(&self, event: KeyEvent, mode: AppMode) -> Option<Action> {
        if mode == AppMode::Favorites {
            if let Some(action) = self.favorites_mode.get(&event) {
                return Some(action.clone());
            }
        }
        self.global.get(&event).cloned()
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_toggle_ignores_case() {
        let keymap = KeyMap::default();
        assert!(keymap.is_overlay_toggle(&KeyEvent::new(KeyCode::Char('t'), KeyModifiers::ALT)));
        assert!(keymap.is_overlay_toggle(&KeyEvent::new(
            KeyCode::Char('T'),
            KeyModifiers::ALT | KeyModifiers::SHIFT
        )));
        assert!(!keymap.is_overlay_toggle(&KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE)));
        assert!(!keymap.is_overlay_toggle(&KeyEvent::new(KeyCode::Char('y'), KeyModifiers::ALT)));
    }

    #[test]
    fn test_letter_bindings() {
        let keymap = KeyMap::default();
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(keymap.get_action(q, AppMode::Normal), Some(Action::Quit));
        let b = KeyEvent::new(KeyCode::Char('b'), KeyModifiers::NONE);
        assert_eq!(
            keymap.get_action(b, AppMode::Normal),
            Some(Action::ToggleBackgroundMenu)
        );
        let ctrl_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert_eq!(keymap.get_action(ctrl_q, AppMode::Normal), None);
    }

    #[test]
    fn test_configured_letter() {
        let keymap = KeyMap::from_config(&KeyConfig { overlay_toggle: 'K' });
        assert!(keymap.is_overlay_toggle(&KeyEvent::new(KeyCode::Char('k'), KeyModifiers::ALT)));
    }

    #[test]
    fn test_favorites_mode_overrides() {
        let keymap = KeyMap::default();
        let j = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(keymap.get_action(j, AppMode::Normal), None);
        assert_eq!(
            keymap.get_action(j, AppMode::Favorites),
            Some(Action::SelectNextFavorite)
        );
        let t = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE);
        assert_eq!(
            keymap.get_action(t, AppMode::Favorites),
            Some(Action::ToggleTheme)
        );
    }
}
