//! Top-level facade crate for reqtime.
//!
//! Re-exports the core model and the middleware library so users can depend on a single crate.

pub mod core {
    pub use reqtime_core::*;
}

pub mod middleware {
    pub use reqtime_middleware::*;
}
