use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left untouched when a query is embedded in a URL component.
/// Everything else, including space, `&`, `?`, `/` and `#`, is `%XX`-escaped.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const QUERY_PLACEHOLDER: &str = "{query}";

pub const HELP_COMMAND: &str = "/help";
pub const CLEAR_COMMAND: &str = "/clear";
pub const DEFAULT_ENGINE: &str = "/g";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchEngine {
    pub token: &'static str,
    pub label: &'static str,
    pub template: &'static str,
}

impl SearchEngine {
    #[must_use]
    pub fn url_for(&self, query: &str) -> String {
        self.template
            .replace(QUERY_PLACEHOLDER, &encode_query(query))
    }
}

pub const SEARCH_ENGINES: [SearchEngine; 6] = [
    SearchEngine {
        token: "/g",
        label: "Google Search (default)",
        template: "https://www.google.com/search?q={query}",
    },
    SearchEngine {
        token: "/yt",
        label: "YouTube Search",
        template: "https://www.youtube.com/results?search_query={query}",
    },
    SearchEngine {
        token: "/img",
        label: "Google Images",
        template: "https://www.google.com/search?tbm=isch&q={query}",
    },
    SearchEngine {
        token: "/map",
        label: "Google Maps",
        template: "https://www.google.com/maps/search/{query}",
    },
    SearchEngine {
        token: "/wiki",
        label: "Wikipedia",
        template: "https://en.wikipedia.org/wiki/Special:Search?search={query}",
    },
    SearchEngine {
        token: "/ddg",
        label: "DuckDuckGo",
        template: "https://duckduckgo.com/?q={query}",
    },
];

#[must_use]
pub fn find_engine(token: &str) -> Option<&'static SearchEngine> {
    SEARCH_ENGINES.iter().find(|engine| engine.token == token)
}

fn default_engine() -> &'static SearchEngine {
    find_engine(DEFAULT_ENGINE).unwrap_or(&SEARCH_ENGINES[0])
}

#[must_use]
pub fn encode_query(query: &str) -> String {
    utf8_percent_encode(query, QUERY_COMPONENT).to_string()
}

/// A submitted line split into its leading word and the rest, whitespace
/// runs collapsed to single spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub command: &'a str,
    pub query: String,
}

#[must_use]
pub fn parse_line(line: &str) -> ParsedLine<'_> {
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or_default();
    let query = words.collect::<Vec<_>>().join(" ");
    ParsedLine { command, query }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Help,
    Clear,
    Navigate(String),
}

/// Resolves a trimmed, non-empty line to exactly one outcome.
///
/// A leading word is a command token only when it starts with `/`. Unknown
/// tokens fall back to the default engine. A token with no argument searches
/// for the whole line, token included.
#[must_use]
pub fn route(line: &str) -> Route {
    let parsed = parse_line(line);

    if !parsed.command.starts_with('/') {
        return Route::Navigate(default_engine().url_for(line));
    }

    match parsed.command {
        HELP_COMMAND => Route::Help,
        CLEAR_COMMAND => Route::Clear,
        token => {
            let engine = find_engine(token).unwrap_or_else(default_engine);
            let query = if parsed.query.is_empty() {
                line
            } else {
                parsed.query.as_str()
            };
            Route::Navigate(engine.url_for(query))
        }
    }
}

#[must_use]
pub fn help_lines() -> Vec<String> {
    let mut lines = Vec::with_capacity(SEARCH_ENGINES.len() + 2);
    lines.push("=== Available Commands ===".to_string());
    for engine in &SEARCH_ENGINES {
        let usage = format!("{} [text]", engine.token);
        lines.push(format!("{usage:<12} → {}", engine.label));
    }
    lines.push(format!(
        "--- {CLEAR_COMMAND} clears the screen, {HELP_COMMAND} shows this list ---"
    ));
    lines
}
