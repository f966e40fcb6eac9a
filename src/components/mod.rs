pub mod dashboard;
pub mod favorites;
pub mod footer;
pub mod header;
pub mod modals;
pub mod terminal;
