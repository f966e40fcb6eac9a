use crate::app::state::AppTextArea;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use super::helpers::draw_drop_shadow;

/// Single-line prompt with a key hint on the last inner row.
pub struct TextInputModal<'a> {
    pub theme: &'a Theme,
    pub title: &'a str,
    pub text_area: &'a AppTextArea<'a>,
    pub hint: &'a str,
    /// Where the modal sits inside the rendered area.
    pub area: Rect,
}

impl Widget for TextInputModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = self.area.intersection(area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(self.title, self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let inner_area = block.inner(modal_area);
        block.render(modal_area, buf);
        if inner_area.width == 0 || inner_area.height == 0 {
            return;
        }

        let input_row = Rect {
            height: 1,
            ..inner_area
        };
        Widget::render(self.text_area, input_row, buf);

        if inner_area.height > 1 {
            let hint = Line::from(Span::styled(self.hint, self.theme.dimmed));
            buf.set_line(
                inner_area.x,
                inner_area.bottom() - 1,
                &hint,
                inner_area.width,
            );
        }
    }
}
