//! reqtime middleware library entry.
//!
//! Request timing for axum: the timing middleware, its route-resolution
//! hooks, the point writer and its InfluxDB implementation, referer domain
//! lookup, and config loading. Consumed by the demo binary (`main.rs`) and
//! by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod clock;
pub mod config;
pub mod context;
pub mod middleware;
pub mod obs;
pub mod router;
pub mod tld;
pub mod writer;
