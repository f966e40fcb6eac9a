use crate::app::command::Command;
use crate::domain::models::WeatherReport;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,
    CancelMode, // ESC key (close panel/modal, clear errors)

    // --- Command Overlay ---
    ToggleOverlay,                             // Global shortcut (Alt+T)
    FocusTerminalInput,                        // Delayed focus after opening
    TerminalInput(crossterm::event::KeyEvent), // Keystroke for the overlay input
    SubmitCommand(String),                     // Enter inside the overlay
    ScrollOutputUp(u16),
    ScrollOutputDown(u16),
    NavigationFailed(String, String), // (url, reason)

    // --- Theme / Help ---
    ToggleTheme,
    ToggleHelp,

    // --- Weather ---
    ToggleWeatherSettings,
    SaveWeatherCity(String),
    RefreshWeather,
    WeatherLoaded(String, Result<WeatherReport, String>), // (requested city, result)

    // --- Background ---
    ToggleBackgroundMenu,
    ApplyBackground(String),
    BackgroundLoaded(Result<String, String>), // stored form of the new background
    ResetBackground,

    // --- Favorites ---
    ToggleFavorites,
    SelectNextFavorite,
    SelectPrevFavorite,
    SelectFavorite(usize),
    OpenSelectedFavorite,
    AddFavoriteIntent,
    EditSelectedFavoriteIntent,
    FavoriteEditorNextField,
    SaveFavorite,
    DeleteSelectedFavoriteIntent,
    ConfirmDeleteFavorite,

    // --- Generic text input (weather city, background source, favorite editor) ---
    TextAreaInput(crossterm::event::KeyEvent),

    // --- Async Results ---
    OperationCompleted(Result<String, String>),
    ErrorOccurred(String),
}
