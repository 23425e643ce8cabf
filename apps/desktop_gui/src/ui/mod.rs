//! UI layer: app shell, theme, and the small widgets the reply form is built from.

pub mod app;
pub mod theme;
pub mod widgets;

pub use app::{EmailReplyApp, StartupConfig};
