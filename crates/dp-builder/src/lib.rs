//! # dp-builder
//!
//! Builder-pattern products from the catalogue: computer configurations with
//! director presets, a SQL query builder, and an HTTP request builder.
//!
//! The C++ builders mutate an internal product through a reference and reset
//! themselves after `build()`; here builders consume `self` instead, which is
//! the shape Rust call chains want and makes the reset unnecessary.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Computer configurations and director presets.
pub mod computer;

/// HTTP request construction.
pub mod http;

/// SQL query construction.
pub mod sql;

pub use computer::{Computer, ComputerBuilder};
pub use http::{HttpRequest, HttpRequestBuilder};
pub use sql::{SortOrder, SqlQuery, SqlQueryBuilder};
