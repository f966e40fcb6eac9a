use crate::domain::router::SEARCH_ENGINES;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Dashboard",
        &[
            ("t", "Toggle dark / light theme"),
            ("w", "Change weather city"),
            ("r", "Refresh weather"),
            ("b", "Set or reset background"),
            ("f", "Open favorites"),
        ],
    ),
    (
        "Favorites",
        &[
            ("j / ↓", "Select next"),
            ("k / ↑", "Select previous"),
            ("Enter", "Open in browser"),
            ("a / e / d", "Add / Edit / Delete"),
        ],
    ),
    (
        "General",
        &[
            ("?", "Show this help"),
            ("Esc", "Close panel / Clear errors"),
            ("q", "Quit"),
        ],
    ),
];

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
    pub overlay_toggle: char,
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let help_area = centered_rect(70, 80, area);
        if help_area.width == 0 || help_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, help_area, area);
        Clear.render(help_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" HELP - KEYBINDINGS ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let key_style = self.theme.footer_key;
        let desc_style = self.theme.list_item;
        let category_style = self.theme.header_item;

        let heading = |name: &str| {
            Row::new(vec![
                Cell::from(Span::styled(name.to_string(), category_style)),
                Cell::from(""),
            ])
        };
        let entry = |key: String, desc: String| {
            Row::new(vec![
                Cell::from(Span::styled(format!(" {key}"), key_style)),
                Cell::from(Span::styled(desc, desc_style)),
            ])
        };

        let mut rows = vec![
            heading("Terminal"),
            entry(
                format!("Alt+{}", self.overlay_toggle.to_ascii_uppercase()),
                "Open / close the command terminal".to_string(),
            ),
        ];
        for engine in &SEARCH_ENGINES {
            rows.push(entry(
                format!("{} [text]", engine.token),
                engine.label.to_string(),
            ));
        }

        for (name, keys) in SECTIONS {
            rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
            rows.push(heading(name));
            for (key, desc) in *keys {
                rows.push(entry((*key).to_string(), (*desc).to_string()));
            }
        }

        Table::new(rows, [Constraint::Percentage(30), Constraint::Percentage(70)])
            .block(block)
            .render(help_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_commands_and_keys() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 100, 50);
        let mut buf = Buffer::empty(area);
        HelpModal {
            theme: &theme,
            overlay_toggle: 't',
        }
        .render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Alt+T"));
        assert!(text.contains("/yt"));
        assert!(text.contains("Wikipedia"));
        assert!(text.contains("Toggle dark / light theme"));
    }
}
