use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppMode, AppState, InputState, WeatherStatus},
};
use crate::domain::store::WEATHER_CITY_KEY;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::ToggleWeatherSettings => {
            if state.mode == AppMode::WeatherSettings {
                state.mode = AppMode::Normal;
                state.input = None;
            } else {
                state.mode = AppMode::WeatherSettings;
                state.input = Some(InputState::with_text(&state.weather.city));
            }
            UpdateResult::Handled(None)
        }
        Action::SaveWeatherCity(raw) => {
            let city = raw.trim();
            if city.is_empty() {
                return UpdateResult::Handled(None);
            }
            state.weather.city = city.to_string();
            state.weather.status = WeatherStatus::Loading;
            state.mode = AppMode::Normal;
            state.input = None;
            UpdateResult::Handled(Some(Command::Batch(vec![
                Command::persist(WEATHER_CITY_KEY, city),
                Command::FetchWeather(city.to_string()),
            ])))
        }
        Action::RefreshWeather => {
            state.weather.status = WeatherStatus::Loading;
            UpdateResult::Handled(Some(Command::FetchWeather(state.weather.city.clone())))
        }
        Action::WeatherLoaded(city, result) => {
            if *city != state.weather.city {
                tracing::debug!(%city, current = %state.weather.city, "dropping stale weather");
                return UpdateResult::Handled(None);
            }
            state.weather.status = match result {
                Ok(report) => WeatherStatus::Ready(report.clone()),
                Err(_) => WeatherStatus::NotFound,
            };
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
