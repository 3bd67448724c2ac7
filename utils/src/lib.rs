//! Shared utilities for the BrutaCritic trust engine.

pub mod logging;
pub mod time;

pub use logging::{init_logging, LogFormat};
pub use time::format_playtime;
