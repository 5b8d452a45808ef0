//! Singleton pattern.
//!
//! The C++ catalogue implements singletons with a static `unique_ptr` guarded
//! by a static mutex, checked and filled inside `getInstance()`. The Rust
//! equivalent is `std::sync::OnceLock`: construction runs exactly once, on
//! first access from any thread, and happens-before every use by every
//! thread — the same guarantee the hand-rolled double-checked lock was after.
//!
//! Service types in this workspace keep their constructors public so callers
//! can own private instances (useful for tests and dependency injection) and
//! layer the process-wide instance on top:
//!
//! ```
//! use std::sync::OnceLock;
//!
//! pub struct Counter { value: std::sync::Mutex<u64> }
//!
//! impl Counter {
//!     pub fn new() -> Self {
//!         Counter { value: std::sync::Mutex::new(0) }
//!     }
//!
//!     /// Return a reference to the process-wide instance.
//!     pub fn instance() -> &'static Counter {
//!         static INSTANCE: OnceLock<Counter> = OnceLock::new();
//!         INSTANCE.get_or_init(Counter::new)
//!     }
//! }
//!
//! assert!(std::ptr::eq(Counter::instance(), Counter::instance()));
//! ```
