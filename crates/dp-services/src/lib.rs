//! # dp-services
//!
//! The guarded singleton services of the catalogue: an in-memory
//! level-filtered [`Logger`], a [`ConfigStore`] of string settings, and a
//! simulated [`DbConnection`].
//!
//! Each service is an ordinary struct whose mutable state sits behind its own
//! `Mutex`, so every operation is individually atomic with respect to
//! concurrent callers. Each also exposes a process-wide `instance()`
//! accessor backed by a `OnceLock`: construction happens exactly once, on
//! first access from any thread, and the same instance is returned ever
//! after. Constructors stay public so tests and embedders can own private
//! instances instead of touching the global one.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// String key/value configuration store.
pub mod config;

/// Simulated database connection with a tracked query history.
pub mod db;

/// In-memory, level-filtered log service.
pub mod logger;

pub use config::ConfigStore;
pub use db::DbConnection;
pub use logger::{LogLevel, LogRecord, Logger};
