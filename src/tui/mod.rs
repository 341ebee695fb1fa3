//! Terminal User Interface module
//!
//! A ratatui front end over the same expense store the CLI uses. The store
//! pushes every change to [`surface::TuiSurface`]; the views draw from it.

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

// Layout and styling
pub mod layout;
pub mod theme;

pub mod keybindings;
pub mod surface;

pub use app::App;
pub use keybindings::KeyMap;
pub use surface::TuiSurface;
pub use terminal::run_tui;
