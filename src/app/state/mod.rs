use super::keymap::KeyMap;
use crate::config::Config;
use crate::domain::models::{parse_favorites, Background, ThemeName};
use crate::domain::store::{
    KeyValueStore, BACKGROUND_KEY, FAVORITES_KEY, THEME_KEY, WEATHER_CITY_KEY,
};
use chrono::{DateTime, Local};
use std::sync::Arc;

pub mod error;
pub mod favorites;
pub mod input;
pub mod output_log;
pub mod overlay;
pub mod terminal;
pub mod weather;

// Re-exports
pub use error::{ErrorSeverity, ErrorState};
pub use favorites::{EditorField, FavoriteEditor, FavoritesState};
pub use input::{AppTextArea, InputState};
pub use output_log::OutputLog;
pub use overlay::{OverlayController, OverlayMode, Region, INPUT_FOCUS_DELAY};
pub use terminal::TerminalState;
pub use weather::{WeatherState, WeatherStatus};

/// Which dashboard panel owns the keyboard while the overlay is closed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AppMode {
    Normal,          // Dashboard, global keys
    Favorites,       // Navigating the favorites panel
    FavoriteEditor,  // Adding or editing a favorite
    ConfirmDelete,   // Yes/no before deleting a favorite
    WeatherSettings, // Editing the weather city
    BackgroundMenu,  // Entering a background URL or file path
    Help,            // Showing the key reference
}

#[derive(Debug, Clone)]
pub struct AppState<'a> {
    // --- Status ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub last_error: Option<ErrorState>,
    pub status_message: Option<String>,

    // --- Command Overlay ---
    pub overlay: OverlayController,
    pub terminal: TerminalState<'a>,

    // --- Widgets ---
    pub now: DateTime<Local>,
    pub weather: WeatherState,
    pub background: Option<Background>,
    pub favorites: FavoritesState<'a>,

    // --- Input Handling ---
    pub input: Option<InputState<'a>>,

    // --- Animation ---
    pub frame_count: u64,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub theme_name: ThemeName,
    pub theme: crate::theme::Theme,
}

impl AppState<'_> {
    /// Restores persisted widget state from `store`.
    #[must_use]
    pub fn new(config: &Config, store: &dyn KeyValueStore) -> Self {
        let theme_name = ThemeName::from_stored(store.get(THEME_KEY).as_deref());
        let city = store
            .get(WEATHER_CITY_KEY)
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| config.weather.default_city.clone());
        let favorites = store
            .get(FAVORITES_KEY)
            .map(|raw| parse_favorites(&raw))
            .unwrap_or_default();

        Self {
            keymap: Arc::new(KeyMap::from_config(&config.keys)),
            theme_name,
            theme: crate::theme::Theme::from_name(theme_name),
            weather: WeatherState::new(city),
            background: store
                .get(BACKGROUND_KEY)
                .and_then(|raw| Background::from_stored(&raw)),
            favorites: FavoritesState {
                items: favorites,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[must_use]
    pub fn is_visible(&self, region: Region) -> bool {
        self.overlay.is_visible(region)
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            last_error: None,
            status_message: None,
            overlay: OverlayController::new(),
            terminal: TerminalState::default(),
            now: Local::now(),
            weather: WeatherState::new(crate::config::WeatherConfig::default().default_city),
            background: None,
            favorites: FavoritesState::default(),
            input: None,
            frame_count: 0,
            keymap: Arc::new(KeyMap::default()),
            theme_name: ThemeName::default(),
            theme: crate::theme::Theme::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::store::MemoryStore;

    #[test]
    fn test_new_restores_persisted_widgets() {
        let store = MemoryStore::with_entries([
            (THEME_KEY, "light"),
            (WEATHER_CITY_KEY, "Lyon"),
            (BACKGROUND_KEY, "https://example.com/bg.jpg"),
            (
                FAVORITES_KEY,
                r##"[{"name":"Docs","url":"https://docs.rs","color":"#123456"}]"##,
            ),
        ]);
        let state = AppState::new(&Config::default(), &store);
        assert_eq!(state.theme_name, ThemeName::Light);
        assert_eq!(state.weather.city, "Lyon");
        assert_eq!(state.weather.status, WeatherStatus::Loading);
        assert_eq!(
            state.background,
            Some(Background::Url("https://example.com/bg.jpg".to_string()))
        );
        assert_eq!(state.favorites.items.len(), 1);
        assert_eq!(state.overlay.current_state(), OverlayMode::Normal);
    }

    #[test]
    fn test_new_with_empty_store_uses_defaults() {
        let store = MemoryStore::new();
        let state = AppState::new(&Config::default(), &store);
        assert_eq!(state.theme_name, ThemeName::Dark);
        assert_eq!(state.weather.city, "Paris");
        assert!(state.background.is_none());
        assert!(state.favorites.items.is_empty());
    }

    #[test]
    fn test_new_tolerates_corrupt_favorites() {
        let store = MemoryStore::with_entries([(FAVORITES_KEY, "[{oops")]);
        let state = AppState::new(&Config::default(), &store);
        assert!(state.favorites.items.is_empty());
    }
}
