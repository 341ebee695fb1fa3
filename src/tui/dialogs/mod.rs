//! Modal dialogs

pub mod confirm;
pub mod expense;
pub mod help;
pub mod limit;
