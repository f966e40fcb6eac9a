use crate::domain::models::ThemeName;
use ratatui::style::{Modifier, Style};

pub mod catppuccin;
pub mod glyphs;
pub mod palette;

pub use palette::{blend_color, dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub base: Style,
    pub border: Style,
    pub border_focus: Style,

    pub clock: Style,
    pub date: Style,
    pub backdrop: Style,

    pub weather_city: Style,
    pub weather_temp: Style,
    pub weather_missing: Style,

    pub terminal: Style,
    pub terminal_prompt: Style,
    pub terminal_echo: Style,
    pub terminal_line: Style,
    pub terminal_error: Style,

    pub status_ready: Style,
    pub status_info: Style,
    pub status_error: Style,

    pub header_logo: Style,
    pub header_active: Style,
    pub header_item: Style,
    pub toggle: Style,

    pub footer_key: Style,
    pub footer_val: Style,
    pub footer: Style,

    pub list_selected: Style,
    pub list_item: Style,
    pub dimmed: Style,
}

impl Theme {
    #[must_use]
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::from_palette(&catppuccin::CATPPUCCIN_MOCHA),
            ThemeName::Light => Self::from_palette(&catppuccin::CATPPUCCIN_LATTE),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            base: Style::default().bg(p.base).fg(p.text),
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),

            clock: Style::default().fg(p.text).add_modifier(Modifier::BOLD),
            date: Style::default().fg(p.subtext0),
            backdrop: Style::default().fg(blend_color(p.overlay0, p.base, 0.6)),

            weather_city: Style::default().fg(p.sky).add_modifier(Modifier::BOLD),
            weather_temp: Style::default().fg(p.peach).add_modifier(Modifier::BOLD),
            weather_missing: Style::default().fg(p.red).add_modifier(Modifier::ITALIC),

            terminal: Style::default().bg(p.crust).fg(p.green),
            terminal_prompt: Style::default().fg(p.mauve).add_modifier(Modifier::BOLD),
            terminal_echo: Style::default().fg(p.subtext1),
            terminal_line: Style::default().fg(p.green),
            terminal_error: Style::default().fg(p.red),

            status_ready: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_info: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(p.red)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            header_logo: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_active: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_item: Style::default().bg(p.surface0).fg(p.text),
            toggle: Style::default().bg(p.surface1).fg(p.yellow),

            footer_key: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            footer_val: Style::default().bg(p.mantle).fg(p.text),
            footer: Style::default().bg(p.crust).fg(p.subtext0),

            list_selected: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(p.text),
            dimmed: Style::default()
                .fg(dim_color(p.overlay1, 0.9))
                .add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_name(ThemeName::default())
    }
}
