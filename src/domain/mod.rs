pub mod browser;
pub mod models;
pub mod router;
pub mod store;
pub mod weather;
