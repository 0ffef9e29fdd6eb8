//! Terminal front end: stdin lines in, rendered view model out.
mod app;
mod config;
mod logging;
mod ui;

pub use app::run_app;
