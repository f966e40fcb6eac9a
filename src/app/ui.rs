use crate::app::state::{AppMode, AppState, Region};
use crate::components::dashboard::Dashboard;
use crate::components::favorites::FavoritesPanel;
use crate::components::footer::Footer;
use crate::components::header::{Header, ThemeToggle};
use crate::components::modals::{
    centered_rect_fixed_height, ConfirmModal, FavoriteEditorModal, HelpModal, TextInputModal,
};
use crate::components::terminal::TerminalView;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Block,
    Frame,
};

const TOGGLE_WIDTH: u16 = 5;
const FAVORITES_WIDTH: u16 = 34;

pub struct DashboardLayout {
    pub header: Rect,
    pub toggle: Rect,
    pub body: Rect,
    pub footer: Rect,
    pub favorites: Option<Rect>,
}

pub fn get_layout(area: Rect, app_state: &AppState) -> DashboardLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header + theme toggle
            Constraint::Min(0),    // Container
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(TOGGLE_WIDTH)])
        .split(main[0]);

    let (body, favorites) = if app_state.favorites.panel_open {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(FAVORITES_WIDTH)])
            .split(main[1]);
        (split[0], Some(split[1]))
    } else {
        (main[1], None)
    };

    DashboardLayout {
        header: top[0],
        toggle: top[1],
        body,
        footer: main[2],
        favorites,
    }
}

pub fn background_menu_rect(area: Rect) -> Rect {
    centered_rect_fixed_height(60, 6, area)
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }
    let app_state: &AppState = app_state;
    let theme = &app_state.theme;
    f.render_widget(Block::default().style(theme.base), area);

    if app_state.is_visible(Region::Terminal) {
        let view = TerminalView {
            state: &app_state.terminal,
            focused: app_state.overlay.is_input_focused(),
            theme,
        };
        f.render_widget(view, area);
    }

    let layout = get_layout(area, app_state);

    if app_state.is_visible(Region::Container) {
        f.render_widget(Header { theme }, layout.header);
        f.render_widget(
            Dashboard {
                app_state,
                theme,
            },
            layout.body,
        );
        if let Some(panel) = layout.favorites {
            f.render_widget(
                FavoritesPanel {
                    state: &app_state.favorites,
                    focused: app_state.mode == AppMode::Favorites,
                    theme,
                },
                panel,
            );
        }
    }

    if app_state.is_visible(Region::ThemeToggle) {
        f.render_widget(
            ThemeToggle {
                name: app_state.theme_name,
                theme,
            },
            layout.toggle,
        );
    }

    if app_state.is_visible(Region::Footer) {
        f.render_widget(Footer { app_state, theme }, layout.footer);
    }

    // Panels belong to the container and disappear with it.
    if !app_state.is_visible(Region::Container) {
        return;
    }

    match app_state.mode {
        AppMode::WeatherSettings => {
            if let Some(input) = &app_state.input {
                f.render_widget(
                    TextInputModal {
                        theme,
                        title: " WEATHER CITY ",
                        text_area: &input.text_area,
                        hint: "Enter save · Esc close",
                        area: centered_rect_fixed_height(50, 4, area),
                    },
                    area,
                );
            }
        }
        AppMode::BackgroundMenu => {
            if let Some(input) = &app_state.input {
                f.render_widget(
                    TextInputModal {
                        theme,
                        title: " BACKGROUND (URL OR FILE) ",
                        text_area: &input.text_area,
                        hint: "Enter apply · Ctrl+R reset · Esc close",
                        area: background_menu_rect(area),
                    },
                    area,
                );
            }
        }
        AppMode::FavoriteEditor => {
            if let Some(editor) = &app_state.favorites.editor {
                f.render_widget(FavoriteEditorModal { editor, theme }, area);
            }
        }
        AppMode::ConfirmDelete => {
            let name = app_state
                .favorites
                .pending_delete
                .and_then(|i| app_state.favorites.items.get(i))
                .map(|fav| fav.name.as_str())
                .unwrap_or_default();
            f.render_widget(
                ConfirmModal {
                    theme,
                    message: &format!("Delete \"{name}\"?"),
                },
                area,
            );
        }
        AppMode::Help => {
            f.render_widget(
                HelpModal {
                    theme,
                    overlay_toggle: app_state.keymap.overlay_toggle,
                },
                area,
            );
        }
        AppMode::Normal | AppMode::Favorites => {}
    }
}
