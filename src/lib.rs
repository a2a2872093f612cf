pub mod config;
pub mod logging;
pub mod permission;
pub mod platform;
pub mod shell;
pub mod ui;
