use super::types::{FooterGroup, FooterItem};
use crate::app::state::{AppMode, AppState};

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    if state.last_error.is_some() {
        return vec![FooterGroup {
            name: "ERROR",
            items: vec![FooterItem::new("Esc", "dismiss")],
        }];
    }

    let terminal_key = format!(
        "Alt+{}",
        state.keymap.overlay_toggle.to_ascii_uppercase()
    );

    match state.mode {
        AppMode::Normal => vec![
            FooterGroup {
                name: "GO",
                items: vec![
                    FooterItem::new(terminal_key, "terminal"),
                    FooterItem::new("f", "favs"),
                ],
            },
            FooterGroup {
                name: "PAGE",
                items: vec![
                    FooterItem::new("w", "city"),
                    FooterItem::new("r", "refresh"),
                    FooterItem::new("b", "bg").highlighted(state.background.is_some()),
                    FooterItem::new("t", "theme"),
                ],
            },
            FooterGroup {
                name: "APP",
                items: vec![FooterItem::new("?", "help"), FooterItem::new("q", "quit")],
            },
        ],
        AppMode::Favorites => vec![
            FooterGroup {
                name: "FAVS",
                items: vec![
                    FooterItem::new("j/k", "move"),
                    FooterItem::new("ENTER", "open"),
                    FooterItem::new("a", "add"),
                    FooterItem::new("e", "edit"),
                    FooterItem::new("d", "del"),
                ],
            },
            FooterGroup {
                name: "APP",
                items: vec![FooterItem::new("Esc", "close"), FooterItem::new("q", "quit")],
            },
        ],
        AppMode::FavoriteEditor => vec![FooterGroup {
            name: "EDIT",
            items: vec![
                FooterItem::new("Tab", "field"),
                FooterItem::new("ENTER", "save"),
                FooterItem::new("Esc", "cancel"),
            ],
        }],
        AppMode::ConfirmDelete => vec![FooterGroup {
            name: "CONFIRM",
            items: vec![FooterItem::new("y", "delete"), FooterItem::new("n", "keep")],
        }],
        AppMode::WeatherSettings => vec![FooterGroup {
            name: "INPUT",
            items: vec![
                FooterItem::new("ENTER", "save"),
                FooterItem::new("Esc", "cancel"),
            ],
        }],
        AppMode::BackgroundMenu => vec![FooterGroup {
            name: "INPUT",
            items: vec![
                FooterItem::new("ENTER", "apply"),
                FooterItem::new("C-r", "reset").highlighted(state.background.is_some()),
                FooterItem::new("Esc", "cancel"),
            ],
        }],
        AppMode::Help => vec![FooterGroup {
            name: "HELP",
            items: vec![FooterItem::new("Esc", "close")],
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::ErrorState;

    #[test]
    fn test_error_collapses_hints() {
        let mut state = AppState::default();
        state.last_error = Some(ErrorState::error("boom"));
        let groups = get_groups(&state);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "ERROR");
    }

    #[test]
    fn test_terminal_hint_uses_configured_key() {
        let state = AppState::default();
        let groups = get_groups(&state);
        assert_eq!(groups[0].items[0].key, "Alt+T");
    }
}
