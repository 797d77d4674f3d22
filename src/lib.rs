//! # numwindow
//!
//! HTTP service that fetches a batch of numbers for a category, merges the
//! unique values into a fixed-capacity sliding window and reports the
//! window's average.
//!
//! ## Data flow
//!
//! ```text
//! category ─► source::NumberSource ─► window::NumberWindow::merge ─► average
//!                                         (previous, current)
//! ```
//!
//! ## Module Organization
//!
//! - `source` - provider gateway (categories, payload decoders, HTTP client)
//! - `window` - bounded deduplicating FIFO and its merge transition
//! - `average` - fixed-precision mean
//! - `service` - per-request orchestration over the shared window
//! - `server` - hyper front end
//! - `config` - environment configuration
//! - `error` - error types

pub mod average;
pub mod config;
pub mod error;
pub mod server;
pub mod service;
pub mod source;
pub mod window;

// Re-export commonly used types
pub use config::ServiceConfig;
pub use error::{ConfigError, ServerError, SourceError};
pub use service::{AggregateReport, WindowService};
pub use source::{Category, FetchOutcome, NumberSource};
pub use window::{NumberWindow, WindowTransition};
