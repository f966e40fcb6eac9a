use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::helpers::{centered_rect_fixed_height, draw_drop_shadow};

pub struct ConfirmModal<'a> {
    pub theme: &'a Theme,
    pub message: &'a str,
}

impl Widget for ConfirmModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect_fixed_height(40, 5, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" CONFIRM ", self.theme.status_error),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(self.theme.border_focus);

        Paragraph::new(vec![
            Line::from(Span::styled(self.message, self.theme.list_item)),
            Line::from(""),
            Line::from(vec![
                Span::styled(" y ", self.theme.footer_key),
                Span::styled(" delete ", self.theme.footer_val),
                Span::raw("  "),
                Span::styled(" n ", self.theme.footer_key),
                Span::styled(" keep ", self.theme.footer_val),
            ]),
        ])
        .alignment(Alignment::Center)
        .block(block)
        .render(modal_area, buf);
    }
}
