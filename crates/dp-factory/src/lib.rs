//! # dp-factory
//!
//! Factory-method product families from the catalogue, reworked as closed
//! tagged-variant types. The per-product creator class hierarchies of the
//! C++ version collapse into enums plus constructors that parse string
//! discriminators, failing with `InvalidArgument` on anything unrecognised.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The animal product family.
pub mod animal;

/// The payment-processor product family.
pub mod payment;

pub use animal::{Animal, AnimalKind};
pub use payment::{payment_method, PaymentMethod};
