//! Prelude module for common re-exports.
//!
//! ```rust
//! use trader_common::prelude::*;
//! ```

// ─── Errors ─────────────────────────────────────────────────────────
pub use crate::errors::{
    ErrorCollector, Failure, MultiError, Shape, append_error, collect_errors, exclude_error,
};

// ─── Configuration & Logging ────────────────────────────────────────
pub use crate::config::{CommonConfig, ConfigError, ConfigLoader, LogLevel};
pub use crate::logging::init_tracing;

// ─── Helpers ────────────────────────────────────────────────────────
pub use crate::counter::Counter;
pub use crate::http::{HttpError, send_http_request};
pub use crate::slices::batch;
