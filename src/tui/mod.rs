//! Terminal User Interface module
//!
//! Interactive front end for the three calculators using ratatui. A
//! navigation menu switches between a form per calculator; results are
//! drawn from the same surface regions the CLI renders into.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
