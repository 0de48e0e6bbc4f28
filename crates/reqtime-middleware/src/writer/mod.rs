//! Point Writer: hands finished points to the metrics backend.
//!
//! Writers forward one batch per call and report backend failures to the
//! caller. Retrying and buffering are not their job.

pub mod influx;

use async_trait::async_trait;
use reqtime_core::{BackendError, Point};

pub use influx::InfluxWriter;

#[async_trait]
pub trait PointWriter: Send + Sync {
    async fn write(&self, points: &[Point]) -> Result<(), BackendError>;
}
