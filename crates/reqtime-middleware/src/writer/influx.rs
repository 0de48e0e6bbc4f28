//! InfluxDB 1.x HTTP writer (`POST /write`, line protocol body).

use std::time::Duration;

use async_trait::async_trait;
use reqtime_core::error::{ReqtimeError, Result};
use reqtime_core::{line, BackendError, Point};
use url::Url;

use crate::config::InfluxSection;
use crate::writer::PointWriter;

/// Longest backend error body kept in a `Rejected` error.
const MAX_ERROR_BODY: usize = 512;

#[derive(Debug, Clone)]
pub struct InfluxWriter {
    client: reqwest::Client,
    endpoint: Url,
    auth: Option<(String, String)>,
}

impl InfluxWriter {
    pub fn new(cfg: &InfluxSection) -> Result<Self> {
        let scheme = if cfg.ssl { "https" } else { "http" };
        let mut endpoint = Url::parse(&format!("{scheme}://{}:{}/write", cfg.host, cfg.port))
            .map_err(|e| ReqtimeError::BadRequest(format!("invalid influxdb endpoint: {e}")))?;
        endpoint
            .query_pairs_mut()
            .append_pair("db", &cfg.database)
            .append_pair("precision", "ms");

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(cfg.timeout_ms))
            .user_agent(concat!("reqtime/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ReqtimeError::Internal(format!("http client build failed: {e}")))?;

        let auth = if cfg.username.is_empty() {
            None
        } else {
            Some((cfg.username.clone(), cfg.password.clone()))
        };

        tracing::info!(endpoint = %endpoint, auth = auth.is_some(), "influxdb writer configured");

        Ok(Self { client, endpoint, auth })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn transport_error(e: reqwest::Error) -> BackendError {
    if e.is_builder() {
        BackendError::Protocol(e.to_string())
    } else {
        BackendError::Connect(e.to_string())
    }
}

#[async_trait]
impl PointWriter for InfluxWriter {
    async fn write(&self, points: &[Point]) -> std::result::Result<(), BackendError> {
        if points.is_empty() {
            return Ok(());
        }
        let body = line::encode_points(points)?;

        let mut req = self.client.post(self.endpoint.clone()).body(body);
        if let Some((user, pass)) = &self.auth {
            req = req.basic_auth(user, Some(pass));
        }

        let resp = req.send().await.map_err(transport_error)?;
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let mut body = resp.text().await.unwrap_or_default();
        if body.len() > MAX_ERROR_BODY {
            let mut cut = MAX_ERROR_BODY;
            while !body.is_char_boundary(cut) {
                cut -= 1;
            }
            body.truncate(cut);
        }
        Err(BackendError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
