//! Structured view logging for TurboCommerce.
//!
//! This crate provides:
//! - `ViewLogger` - Structured logging with view context, emitted as `tracing` events
//! - `LogBuilder` - Fluent field attachment
//! - `init_tracing` - Process-wide `tracing-subscriber` setup

mod logging;
mod subscriber;

pub use logging::*;
pub use subscriber::*;

// Re-export shared types from turbo-core for convenience
pub use turbo_core::{LogFormat, LogLevel, ViewId, ViewPhase};
