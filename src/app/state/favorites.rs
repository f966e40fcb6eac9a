use super::input::AppTextArea;
use crate::domain::models::{Favorite, DEFAULT_FAVORITE_COLOR};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum EditorField {
    #[default]
    Name,
    Url,
    Color,
}

impl EditorField {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Url,
            Self::Url => Self::Color,
            Self::Color => Self::Name,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Url => "URL",
            Self::Color => "Color",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteEditor<'a> {
    /// `Some(i)` while editing entry `i`, `None` when adding.
    pub editing_index: Option<usize>,
    pub name: AppTextArea<'a>,
    pub url: AppTextArea<'a>,
    pub color: AppTextArea<'a>,
    pub focused: EditorField,
}

impl<'a> FavoriteEditor<'a> {
    #[must_use]
    pub fn blank() -> Self {
        Self {
            editing_index: None,
            name: AppTextArea::default(),
            url: AppTextArea::default(),
            color: AppTextArea::with_text(DEFAULT_FAVORITE_COLOR),
            focused: EditorField::Name,
        }
    }

    #[must_use]
    pub fn for_entry(index: usize, favorite: &Favorite) -> Self {
        Self {
            editing_index: Some(index),
            name: AppTextArea::with_text(&favorite.name),
            url: AppTextArea::with_text(&favorite.url),
            color: AppTextArea::with_text(&favorite.color),
            focused: EditorField::Name,
        }
    }

    pub fn focused_area_mut(&mut self) -> &mut AppTextArea<'a> {
        match self.focused {
            EditorField::Name => &mut self.name,
            EditorField::Url => &mut self.url,
            EditorField::Color => &mut self.color,
        }
    }

    #[must_use]
    pub fn to_favorite(&self) -> Favorite {
        Favorite::from_fields(&self.name.text(), &self.url.text(), &self.color.text())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FavoritesState<'a> {
    pub items: Vec<Favorite>,
    pub selected: usize,
    pub panel_open: bool,
    pub editor: Option<FavoriteEditor<'a>>,
    pub pending_delete: Option<usize>,
}

impl FavoritesState<'_> {
    #[must_use]
    pub fn selected_favorite(&self) -> Option<&Favorite> {
        self.items.get(self.selected)
    }

    pub fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_field_cycle() {
        let mut field = EditorField::default();
        for _ in 0..3 {
            field = field.next();
        }
        assert_eq!(field, EditorField::Name);
    }

    #[test]
    fn test_editor_prefill() {
        let fav = Favorite::from_fields("Rust", "https://rust-lang.org", "#ff0000");
        let editor = FavoriteEditor::for_entry(2, &fav);
        assert_eq!(editor.editing_index, Some(2));
        assert_eq!(editor.to_favorite(), fav);

        let blank = FavoriteEditor::blank();
        assert_eq!(blank.to_favorite().color, DEFAULT_FAVORITE_COLOR);
    }
}
