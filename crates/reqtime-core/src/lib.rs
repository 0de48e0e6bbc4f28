//! reqtime core: the measurement data model, line-protocol encoding, and the
//! error surface shared by the middleware and writer crates.
//!
//! This crate carries no transport or runtime dependencies so the point model
//! can be reused by any writer implementation.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as typed errors.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod line;
pub mod point;

pub use error::{BackendError, ReqtimeError, Result, TldError};
pub use point::{Point, PointBuilder, TagValue};
