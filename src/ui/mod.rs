//! Terminal output for the globedock CLI.

pub mod json;
pub mod output;
pub mod theme;

pub use output::UiContext;
