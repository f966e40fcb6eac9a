pub mod file_store;
pub mod openweather;
pub mod system_browser;
