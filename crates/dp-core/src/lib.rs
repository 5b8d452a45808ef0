//! # dp-core
//!
//! Core building blocks shared across all other crates in the workspace —
//! the error hierarchy, the documented singleton idiom, and the polymorphic
//! [`Prototype`] clone contract.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` / `ensure_post!` macros.
pub mod errors;

/// Design patterns: singleton, prototype.
pub mod patterns;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use patterns::prototype::Prototype;
