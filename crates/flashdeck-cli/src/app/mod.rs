//! Application-level utilities for the Flashdeck CLI.
//!
//! This module provides:
//! - Path resolution for the config file and card files
//! - The `AppContext` bundling CLI arguments with configuration

mod context;
mod resolver;

pub use context::AppContext;
