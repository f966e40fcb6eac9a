use crate::app::state::{AppState, WeatherStatus};
use crate::domain::models::Background;
use crate::domain::weather::WEATHER_NOT_FOUND;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

pub const CLOCK_FORMAT: &str = "%H:%M:%S";
pub const DATE_FORMAT: &str = "%A, %B %-d, %Y";

const WEATHER_CARD_WIDTH: u16 = 34;

/// Clock, date and weather card centered over the optional backdrop.
pub struct Dashboard<'a> {
    pub app_state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let state = self.app_state;
        let theme = self.theme;

        if let Some(text) = state.background.as_ref().and_then(Background::backdrop_text) {
            Paragraph::new(text).style(theme.backdrop).render(area, buf);
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(1), // Clock
                Constraint::Length(1), // Date
                Constraint::Length(1),
                Constraint::Length(4), // Weather card
                Constraint::Min(0),
                Constraint::Length(1), // Background source
            ])
            .split(area);

        Paragraph::new(spaced(&state.now.format(CLOCK_FORMAT).to_string()))
            .alignment(Alignment::Center)
            .style(theme.clock)
            .render(rows[1], buf);

        Paragraph::new(state.now.format(DATE_FORMAT).to_string())
            .alignment(Alignment::Center)
            .style(theme.date)
            .render(rows[2], buf);

        let card_width = WEATHER_CARD_WIDTH.min(rows[4].width);
        let card = Rect {
            x: rows[4].x + (rows[4].width - card_width) / 2,
            width: card_width,
            ..rows[4]
        };
        WeatherCard { state, theme }.render(card, buf);

        if let Some(bg) = &state.background {
            Paragraph::new(format!("bg {} {}", glyphs::SEP, bg.label()))
                .alignment(Alignment::Right)
                .style(theme.dimmed)
                .render(rows[6], buf);
        }
    }
}

struct WeatherCard<'a> {
    state: &'a AppState<'a>,
    theme: &'a Theme,
}

impl Widget for WeatherCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let weather = &self.state.weather;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border);
        let inner = block.inner(area);
        block.render(area, buf);

        let (city_line, detail_line) = match &weather.status {
            WeatherStatus::Loading => (
                Line::from(Span::styled(weather.city.as_str(), theme.weather_city)),
                Line::from(Span::styled(glyphs::LOADING, theme.dimmed)),
            ),
            WeatherStatus::Ready(report) => (
                Line::from(vec![
                    Span::styled(format!("{} ", report.glyph()), theme.weather_temp),
                    Span::styled(report.city.as_str(), theme.weather_city),
                ]),
                Line::from(vec![
                    Span::styled(report.temperature_label(), theme.weather_temp),
                    Span::styled(format!("  {}", report.description), theme.date),
                ]),
            ),
            WeatherStatus::NotFound => (
                Line::from(Span::styled(WEATHER_NOT_FOUND, theme.weather_missing)),
                Line::from(""),
            ),
        };

        Paragraph::new(vec![city_line, detail_line])
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

/// `12:34:56` -> `1 2 : 3 4 : 5 6`
fn spaced(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for (i, c) in text.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}
