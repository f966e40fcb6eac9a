use crate::app::state::FavoritesState;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Widget},
};

/// Side panel listing bookmarked sites. Row `i` inside the border is entry `i`.
pub struct FavoritesPanel<'a> {
    pub state: &'a FavoritesState<'a>,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl Widget for FavoritesPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" FAVORITES ", theme.header_item),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme.border_focus
            } else {
                theme.border
            });
        let inner = block.inner(area);
        block.render(area, buf);

        if self.state.items.is_empty() {
            Paragraph::new(vec![
                Line::from(Span::styled("No favorites yet.", theme.dimmed)),
                Line::from(Span::styled("Press a to add one.", theme.dimmed)),
            ])
            .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .state
            .items
            .iter()
            .enumerate()
            .map(|(i, fav)| {
                let selected = self.focused && i == self.state.selected;
                let (prefix, style) = if selected {
                    (glyphs::SELECTED, theme.list_selected)
                } else {
                    (" ", theme.list_item)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{prefix} "), style),
                    Span::styled(glyphs::DOT, Style::default().fg(fav.dot_color())),
                    Span::styled(format!(" {}", fav.name), style),
                ]))
            })
            .collect();

        List::new(items).render(inner, buf);
    }
}
