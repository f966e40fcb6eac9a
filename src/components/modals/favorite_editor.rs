use crate::app::state::{EditorField, FavoriteEditor};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use super::helpers::{centered_rect_fixed_height, draw_drop_shadow};

const LABEL_WIDTH: u16 = 8;

pub struct FavoriteEditorModal<'a> {
    pub editor: &'a FavoriteEditor<'a>,
    pub theme: &'a Theme,
}

impl Widget for FavoriteEditorModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect_fixed_height(60, 7, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let title = if self.editor.editing_index.is_some() {
            " EDIT FAVORITE "
        } else {
            " ADD FAVORITE "
        };
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(title, self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        let fields = [
            (EditorField::Name, &self.editor.name),
            (EditorField::Url, &self.editor.url),
            (EditorField::Color, &self.editor.color),
        ];
        for ((field, text_area), row) in fields.into_iter().zip(rows.iter()) {
            let focused = field == self.editor.focused;
            let label_style = if focused {
                self.theme.footer_key
            } else {
                self.theme.dimmed
            };
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(LABEL_WIDTH), Constraint::Min(0)])
                .split(*row);
            buf.set_line(
                cols[0].x,
                cols[0].y,
                &Line::from(Span::styled(format!("{:>6} ", field.label()), label_style)),
                cols[0].width,
            );
            if focused {
                Widget::render(text_area, cols[1], buf);
            } else {
                buf.set_string(cols[1].x, cols[1].y, text_area.text(), self.theme.list_item);
            }
        }

        // Preview of the dot color as typed.
        let preview = self.editor.to_favorite();
        buf.set_line(
            rows[3].x,
            rows[3].y,
            &Line::from(vec![
                Span::styled(format!("{:>6} ", "Dot"), self.theme.dimmed),
                Span::styled(
                    crate::theme::glyphs::DOT,
                    Style::default().fg(preview.dot_color()),
                ),
                Span::styled("   Tab next · Enter save", self.theme.dimmed),
            ]),
            rows[3].width,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Favorite;

    #[test]
    fn test_editing_title_and_fields() {
        let theme = Theme::default();
        let fav = Favorite::from_fields("Docs", "https://docs.rs", "#123456");
        let editor = FavoriteEditor::for_entry(0, &fav);
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        FavoriteEditorModal {
            editor: &editor,
            theme: &theme,
        }
        .render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("EDIT FAVORITE"));
        assert!(text.contains("https://docs.rs"));
        assert!(text.contains("#123456"));
    }
}
