//! # designpatterns
//!
//! A Rust translation of a C++ creational design-patterns catalogue.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `dp-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! designpatterns = "0.1"
//! ```
//!
//! ```rust
//! use designpatterns::prototype::{Document, Prototype, PrototypeRegistry};
//!
//! let registry = PrototypeRegistry::new();
//! registry.register("memo", Box::new(Document::word_template("Memo")));
//! let copy = registry.create_clone("memo").unwrap();
//! assert_eq!(copy.label(), "Memo");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, the error hierarchy, and the clone contract.
pub use dp_core as core;

/// Guarded singleton services: logger, config store, database connection.
pub use dp_services as services;

/// Cloneable templates and the prototype registry.
pub use dp_prototype as prototype;

/// Factory-method product families.
pub use dp_factory as factory;

/// Builder-pattern products.
pub use dp_builder as builder;
