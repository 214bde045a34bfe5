//! UI primitives for the Flashdeck CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (plain, pretty)
//! - **Theme**: Badge tokens and ANSI styles
//! - **Render**: Status lines and tables
//!
//! Plain mode prints exactly the session's messages so piped runs and logs
//! stay stable. Pretty mode decorates verdicts with badges and renders
//! tables.

mod context;
mod mode;
pub mod render;
pub mod theme;

pub use context::{UiContext, UiPreferences};
pub use theme::Badge;

pub use render::{hint, status, table, Column};
