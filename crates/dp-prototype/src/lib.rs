//! # dp-prototype
//!
//! Cloneable template objects — [`Document`], [`Character`], [`Shape`] — and
//! the [`PrototypeRegistry`] that stores them under string keys and hands out
//! independent clones on demand.
//!
//! Every template type is a plain `Clone` struct implementing the
//! [`Prototype`](dp_core::Prototype) contract: a clone carries the source's
//! field values at the moment of cloning and shares no mutable state with it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Game character templates with class-specific seed tables.
pub mod character;

/// Office document templates.
pub mod document;

/// The keyed store of template prototypes.
pub mod registry;

/// Geometric shape templates with validated geometry.
pub mod shape;

pub use character::{Character, CharacterClass, Stats};
pub use dp_core::Prototype;
pub use document::{Document, DocumentKind};
pub use registry::PrototypeRegistry;
pub use shape::{Circle, Color, Geometry, Position, Rectangle, Shape, Triangle};
