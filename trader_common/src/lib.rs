//! Trader Common Library
//!
//! Shared utilities for trader workspace crates: composable errors, HTTP
//! dispatch, input validation, and filesystem helpers.
//!
//! # Module Structure
//!
//! - [`errors`] - Error composition (`Failure`, `MultiError`, append/exclude, collector)
//! - [`config`] - Configuration loading traits and types
//! - [`logging`] - Tracing subscriber setup
//! - [`http`] - Outbound HTTP dispatch and shared client settings
//! - [`address`] - Crypto address format validation
//! - [`strings`], [`slices`] - String and slice helpers
//! - [`net`] - URL, host and port helpers
//! - [`fs`] - Filesystem helpers
//! - [`timerange`] - Start/end time validation
//! - [`random`] - Random string generation
//! - [`counter`] - Lock-free counter
//! - [`typeassert`] - Type assertion failures
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use trader_common::errors::{append_error, exclude_error, Failure};
//!
//! let timeout = Failure::msg("request timed out");
//! let rejected = Failure::msg("order rejected");
//! let err = append_error(Some(timeout.clone()), Some(rejected.clone()));
//!
//! let err = exclude_error(err, &timeout).unwrap();
//! assert!(err.is(&rejected));
//! assert!(!err.is(&timeout));
//! ```

pub mod address;
pub mod config;
pub mod consts;
pub mod counter;
pub mod errors;
pub mod fs;
pub mod http;
pub mod logging;
pub mod net;
pub mod prelude;
pub mod random;
pub mod slices;
pub mod strings;
pub mod timerange;
pub mod typeassert;
