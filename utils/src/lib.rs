//! Shared utilities for the sweep service.

pub mod logging;

pub use logging::{init_logging, LogFormat};
