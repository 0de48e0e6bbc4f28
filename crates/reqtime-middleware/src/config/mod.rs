//! Process config: located once at startup, parsed strictly, validated
//! before anything is built from it.

pub mod schema;

use std::fs;

use reqtime_core::error::{ReqtimeError, Result};

pub use schema::{InfluxSection, MetricsSection, ReqtimeConfig, ServerSection};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "REQTIME_CONFIG";
/// Used when neither an argument nor [`CONFIG_ENV`] names a file.
pub const DEFAULT_CONFIG_PATH: &str = "reqtime.yaml";

/// Pick the config path: explicit argument, then the env value, then
/// [`DEFAULT_CONFIG_PATH`]. Empty values count as unset.
pub fn resolve_path(arg: Option<String>, env: Option<String>) -> String {
    arg.filter(|s| !s.is_empty())
        .or_else(|| env.filter(|s| !s.is_empty()))
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_owned())
}

/// Read and validate `path`. Parse errors carry the path so a bad deploy is
/// traceable from the startup log line alone.
pub fn load_from_file(path: &str) -> Result<ReqtimeConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| ReqtimeError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s).map_err(|e| match e {
        ReqtimeError::BadRequest(msg) => ReqtimeError::BadRequest(format!("{path}: {msg}")),
        other => other,
    })
}

pub fn load_from_str(s: &str) -> Result<ReqtimeConfig> {
    let cfg: ReqtimeConfig = serde_yaml::from_str(s)
        .map_err(|e| ReqtimeError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;

    tracing::debug!(
        disabled = cfg.metrics.disabled,
        measurement = %cfg.metrics.measurement_name_for("request"),
        influx_host = %cfg.influxdb.host,
        influx_port = cfg.influxdb.port,
        "config loaded"
    );
    Ok(cfg)
}
