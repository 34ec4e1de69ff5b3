pub mod app;
pub mod autocomplete;
pub mod command;
pub mod session;
pub mod ui;
