pub mod file_system;
pub mod listing;
pub mod logging;
