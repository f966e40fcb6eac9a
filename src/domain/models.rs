use base64::Engine as _;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FAVORITE_NAME: &str = "Unnamed";
pub const DEFAULT_FAVORITE_URL: &str = "#";
pub const DEFAULT_FAVORITE_COLOR: &str = "#4CAF50";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub name: String,
    pub url: String,
    pub color: String,
}

impl Favorite {
    /// Builds a favorite from raw editor fields, trimming them and filling
    /// blanks with defaults.
    #[must_use]
    pub fn from_fields(name: &str, url: &str, color: &str) -> Self {
        let or_default = |value: &str, default: &str| {
            let value = value.trim();
            if value.is_empty() {
                default.to_string()
            } else {
                value.to_string()
            }
        };
        Self {
            name: or_default(name, DEFAULT_FAVORITE_NAME),
            url: or_default(url, DEFAULT_FAVORITE_URL),
            color: or_default(color, DEFAULT_FAVORITE_COLOR),
        }
    }

    /// Parses `#rrggbb` (or `#rgb`). Anything else renders uncolored.
    #[must_use]
    pub fn dot_color(&self) -> Color {
        parse_hex_color(&self.color).unwrap_or(Color::Reset)
    }

    #[must_use]
    pub fn is_openable(&self) -> bool {
        self.url != DEFAULT_FAVORITE_URL && !self.url.is_empty()
    }
}

fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => {
            let expand = |i: usize| channel(&hex[i..=i]).map(|v| v * 17);
            Some(Color::Rgb(expand(0)?, expand(1)?, expand(2)?))
        }
        _ => None,
    }
}

#[must_use]
pub fn parse_favorites(raw: &str) -> Vec<Favorite> {
    match serde_json::from_str(raw) {
        Ok(favorites) => favorites,
        Err(e) => {
            tracing::warn!("discarding malformed favorites: {e}");
            Vec::new()
        }
    }
}

#[must_use]
pub fn serialize_favorites(favorites: &[Favorite]) -> String {
    serde_json::to_string(favorites).unwrap_or_else(|_| "[]".to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub city: String,
    pub temperature: f64,
    pub icon: String,
    pub description: String,
}

impl WeatherReport {
    #[must_use]
    pub fn temperature_label(&self) -> String {
        format!("{}°C", self.temperature.round() as i64)
    }

    /// Maps an OpenWeatherMap icon code (`01d`, `10n`, ...) to a glyph.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self.icon.get(..2) {
            Some("01") => "☀",
            Some("02") => "🌤",
            Some("03" | "04") => "☁",
            Some("09") => "🌧",
            Some("10") => "🌦",
            Some("11") => "⛈",
            Some("13") => "❄",
            Some("50") => "🌫",
            _ => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Background {
    Url(String),
    Inline { mime: String, payload: String },
}

impl Background {
    /// Reads a stored value: `data:<mime>;base64,<payload>` or a plain URL.
    #[must_use]
    pub fn from_stored(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        if let Some(rest) = value.strip_prefix("data:") {
            if let Some((mime, payload)) = rest.split_once(";base64,") {
                return Some(Self::Inline {
                    mime: mime.to_string(),
                    payload: payload.to_string(),
                });
            }
        }
        Some(Self::Url(value.to_string()))
    }

    #[must_use]
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        Self::Inline {
            mime: mime.to_string(),
            payload: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }

    #[must_use]
    pub fn to_stored(&self) -> String {
        match self {
            Self::Url(url) => url.clone(),
            Self::Inline { mime, payload } => format!("data:{mime};base64,{payload}"),
        }
    }

    /// Decoded text for `text/*` payloads, drawn behind the dashboard.
    #[must_use]
    pub fn backdrop_text(&self) -> Option<String> {
        match self {
            Self::Inline { mime, payload } if mime.starts_with("text/") => {
                let bytes = base64::engine::general_purpose::STANDARD
                    .decode(payload)
                    .ok()?;
                String::from_utf8(bytes).ok()
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Url(url) => url.clone(),
            Self::Inline { mime, payload } => {
                format!("inline {mime} ({} bytes)", payload.len() * 3 / 4)
            }
        }
    }

    #[must_use]
    pub fn is_remote_source(value: &str) -> bool {
        let value = value.trim();
        value.starts_with("http://") || value.starts_with("https://") || value.starts_with("data:")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

impl ThemeName {
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Self::Dark => "🌤",
            Self::Light => "☀",
        }
    }
}
