use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppMode, AppState, FavoriteEditor},
};
use crate::domain::models::serialize_favorites;
use crate::domain::store::FAVORITES_KEY;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    let favs = &mut state.favorites;
    match action {
        Action::ToggleFavorites => {
            favs.panel_open = !favs.panel_open;
            favs.clamp_selection();
            state.mode = if favs.panel_open {
                AppMode::Favorites
            } else {
                AppMode::Normal
            };
            UpdateResult::Handled(None)
        }
        Action::SelectNextFavorite => {
            if !favs.items.is_empty() {
                favs.selected = (favs.selected + 1) % favs.items.len();
            }
            UpdateResult::Handled(None)
        }
        Action::SelectPrevFavorite => {
            if !favs.items.is_empty() {
                if favs.selected == 0 {
                    favs.selected = favs.items.len() - 1;
                } else {
                    favs.selected -= 1;
                }
            }
            UpdateResult::Handled(None)
        }
        Action::SelectFavorite(idx) => {
            if *idx < favs.items.len() {
                favs.selected = *idx;
            }
            UpdateResult::Handled(None)
        }
        Action::OpenSelectedFavorite => {
            let Some(fav) = favs.selected_favorite() else {
                return UpdateResult::Handled(None);
            };
            if !fav.is_openable() {
                state.status_message = Some(format!("{} has no URL", fav.name));
                return UpdateResult::Handled(None);
            }
            let url = fav.url.clone();
            state.status_message = Some(format!("Opened {}", fav.name));
            UpdateResult::Handled(Some(Command::OpenUrl(url)))
        }
        Action::AddFavoriteIntent => {
            favs.editor = Some(FavoriteEditor::blank());
            state.mode = AppMode::FavoriteEditor;
            UpdateResult::Handled(None)
        }
        Action::EditSelectedFavoriteIntent => {
            if let Some(fav) = favs.selected_favorite().cloned() {
                favs.editor = Some(FavoriteEditor::for_entry(favs.selected, &fav));
                state.mode = AppMode::FavoriteEditor;
            }
            UpdateResult::Handled(None)
        }
        Action::FavoriteEditorNextField => {
            if let Some(editor) = &mut favs.editor {
                editor.focused = editor.focused.next();
            }
            UpdateResult::Handled(None)
        }
        Action::SaveFavorite => {
            let Some(editor) = favs.editor.take() else {
                return UpdateResult::Handled(None);
            };
            let favorite = editor.to_favorite();
            match editor.editing_index {
                Some(i) if i < favs.items.len() => {
                    favs.items[i] = favorite;
                    favs.selected = i;
                }
                _ => {
                    favs.items.push(favorite);
                    favs.selected = favs.items.len() - 1;
                }
            }
            state.mode = AppMode::Favorites;
            UpdateResult::Handled(Some(persist(&favs.items)))
        }
        Action::DeleteSelectedFavoriteIntent => {
            if favs.selected_favorite().is_some() {
                favs.pending_delete = Some(favs.selected);
                state.mode = AppMode::ConfirmDelete;
            }
            UpdateResult::Handled(None)
        }
        Action::ConfirmDeleteFavorite => {
            state.mode = AppMode::Favorites;
            let Some(idx) = favs.pending_delete.take() else {
                return UpdateResult::Handled(None);
            };
            if idx >= favs.items.len() {
                return UpdateResult::Handled(None);
            }
            favs.items.remove(idx);
            favs.clamp_selection();
            UpdateResult::Handled(Some(persist(&favs.items)))
        }
        _ => UpdateResult::NotHandled,
    }
}

fn persist(items: &[crate::domain::models::Favorite]) -> Command {
    Command::persist(FAVORITES_KEY, serialize_favorites(items))
}
