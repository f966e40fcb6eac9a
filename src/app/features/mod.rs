pub mod background;
pub mod favorites;
pub mod overlay;
pub mod ui;
pub mod weather;
