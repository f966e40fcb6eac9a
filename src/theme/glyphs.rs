pub const LOGO: &str = "◆";
pub const PROMPT: &str = ">";
pub const DOT: &str = "●";
pub const SELECTED: &str = "▶";
pub const SEP: &str = "│";
pub const SEP_RIGHT: &str = "\u{e0b0}";
pub const LOADING: &str = "…";
