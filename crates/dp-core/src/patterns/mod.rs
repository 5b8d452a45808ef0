//! Patterns sub-module: singleton, prototype.

pub mod prototype;
pub mod singleton;
