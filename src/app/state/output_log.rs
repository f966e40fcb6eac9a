/// Append-only list of overlay output lines.
///
/// Rendering follows the newest line; `scroll_back` counts lines scrolled up
/// from the tail and resets on every append.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutputLog {
    lines: Vec<String>,
    scroll_back: usize,
}

impl OutputLog {
    pub fn append(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
        self.scroll_back = 0;
    }

    pub fn clear(&mut self) {
        self.lines = Vec::new();
        self.scroll_back = 0;
    }

    /// Replaces the whole log in one step.
    pub fn replace(&mut self, lines: Vec<String>) {
        self.lines = lines;
        self.scroll_back = 0;
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn scroll_up(&mut self, amount: usize) {
        let max = self.lines.len().saturating_sub(1);
        self.scroll_back = self.scroll_back.saturating_add(amount).min(max);
    }

    pub fn scroll_down(&mut self, amount: usize) {
        self.scroll_back = self.scroll_back.saturating_sub(amount);
    }

    #[must_use]
    pub fn scroll_back(&self) -> usize {
        self.scroll_back
    }

    /// Lines that fit in a view `height` rows tall.
    #[must_use]
    pub fn visible(&self, height: usize) -> &[String] {
        let end = self.lines.len().saturating_sub(self.scroll_back);
        let start = end.saturating_sub(height);
        &self.lines[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_follows_tail() {
        let mut log = OutputLog::default();
        for i in 0..10 {
            log.append(format!("line {i}"));
        }
        assert_eq!(log.visible(3), ["line 7", "line 8", "line 9"]);

        log.scroll_up(4);
        assert_eq!(log.visible(3), ["line 3", "line 4", "line 5"]);

        log.append("line 10");
        assert_eq!(log.scroll_back(), 0);
        assert_eq!(log.visible(2), ["line 9", "line 10"]);
    }

    #[test]
    fn test_scroll_is_bounded() {
        let mut log = OutputLog::default();
        log.append("a");
        log.append("b");
        log.scroll_up(50);
        assert_eq!(log.visible(5), ["a"]);
        log.scroll_down(50);
        assert_eq!(log.visible(5), ["a", "b"]);
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut log = OutputLog::default();
        log.append("x");
        log.scroll_up(1);
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.scroll_back(), 0);
        assert!(log.visible(10).is_empty());
    }
}
