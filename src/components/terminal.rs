use crate::app::state::TerminalState;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

pub struct TerminalView<'a> {
    pub state: &'a TerminalState<'a>,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl TerminalView<'_> {
    fn line_style(&self, line: &str) -> Style {
        if line.starts_with("> ") {
            self.theme.terminal_echo
        } else if line.starts_with("! ") {
            self.theme.terminal_error
        } else {
            self.theme.terminal_line
        }
    }
}

impl Widget for TerminalView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let theme = self.theme;
        Clear.render(area, buf);

        let mut title = vec![
            Span::raw(" "),
            Span::styled(" TERMINAL ", theme.header_active),
            Span::raw(" "),
        ];
        if self.state.output.scroll_back() > 0 {
            title.push(Span::styled(
                format!(" +{} ", self.state.output.scroll_back()),
                theme.header_item,
            ));
        }

        let block = Block::default()
            .title(Line::from(title))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_focus)
            .style(theme.terminal);
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let lines: Vec<Line> = self
            .state
            .output
            .visible(rows[0].height as usize)
            .iter()
            .map(|line| Line::from(Span::styled(line.as_str(), self.line_style(line))))
            .collect();
        Paragraph::new(lines).render(rows[0], buf);

        let prompt = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(rows[1]);
        buf.set_string(
            prompt[0].x,
            prompt[0].y,
            glyphs::PROMPT,
            theme.terminal_prompt,
        );
        if self.focused {
            Widget::render(&self.state.input, prompt[1], buf);
        } else {
            buf.set_string(
                prompt[1].x,
                prompt[1].y,
                self.state.input.text(),
                theme.terminal_line,
            );
        }
    }
}
