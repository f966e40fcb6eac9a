mod confirm;
mod favorite_editor;
mod help;
mod helpers;
mod text_input;

pub use confirm::ConfirmModal;
pub use favorite_editor::FavoriteEditorModal;
pub use help::HelpModal;
pub use helpers::{centered_rect, centered_rect_fixed_height, draw_drop_shadow};
pub use text_input::TextInputModal;
