use crate::domain::models::ThemeName;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let logo_bg = self.theme.header_logo.bg.unwrap_or(Color::Reset);
        let base_bg = self.theme.footer.bg.unwrap_or(Color::Reset);

        let spans = vec![
            Span::styled(format!(" {} STARTPAGE ", glyphs::LOGO), self.theme.header_logo),
            Span::styled(glyphs::SEP_RIGHT, Style::default().fg(logo_bg).bg(base_bg)),
        ];

        Paragraph::new(Line::from(spans))
            .style(self.theme.footer)
            .render(area, buf);
    }
}

/// Top-right glyph that flips the color scheme when clicked.
pub struct ThemeToggle<'a> {
    pub name: ThemeName,
    pub theme: &'a Theme,
}

impl Widget for ThemeToggle<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.name.toggle_glyph())
            .alignment(Alignment::Center)
            .style(self.theme.toggle)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_glyph_follows_theme() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 5, 1);
        let mut buf = Buffer::empty(area);
        ThemeToggle {
            name: ThemeName::Light,
            theme: &theme,
        }
        .render(area, &mut buf);
        let row: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(row.contains('☀'));
    }
}
