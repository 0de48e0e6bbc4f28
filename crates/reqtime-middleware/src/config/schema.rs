use reqtime_core::error::{ReqtimeError, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReqtimeConfig {
    pub version: u32,

    #[serde(default)]
    pub metrics: MetricsSection,

    #[serde(default)]
    pub influxdb: InfluxSection,

    #[serde(default)]
    pub server: ServerSection,
}

impl ReqtimeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ReqtimeError::UnsupportedVersion);
        }

        self.metrics.validate()?;
        // Backend settings only matter when something will be written.
        if !self.metrics.disabled {
            self.influxdb.validate()?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsSection {
    #[serde(default)]
    pub disabled: bool,

    #[serde(default)]
    pub host_tag: String,

    #[serde(default = "default_campaign_keyword")]
    pub campaign_keyword: String,

    #[serde(default)]
    pub measurement_prefix: String,

    /// Header consulted for the scheme when the request URI carries none,
    /// e.g. `x-forwarded-proto` behind a TLS-terminating proxy.
    #[serde(default)]
    pub secure_proxy_header: Option<String>,
}

impl Default for MetricsSection {
    fn default() -> Self {
        Self {
            disabled: false,
            host_tag: String::new(),
            campaign_keyword: default_campaign_keyword(),
            measurement_prefix: String::new(),
            secure_proxy_header: None,
        }
    }
}

impl MetricsSection {
    pub fn validate(&self) -> Result<()> {
        if self.disabled {
            return Ok(());
        }
        if self.host_tag.trim().is_empty() {
            return Err(ReqtimeError::BadRequest(
                "metrics.host_tag must not be empty".into(),
            ));
        }
        if self.campaign_keyword.is_empty() {
            return Err(ReqtimeError::BadRequest(
                "metrics.campaign_keyword must not be empty".into(),
            ));
        }
        if let Some(h) = &self.secure_proxy_header {
            if h.trim().is_empty() {
                return Err(ReqtimeError::BadRequest(
                    "metrics.secure_proxy_header must not be empty when set".into(),
                ));
            }
        }
        Ok(())
    }

    /// Namespaced measurement name: `{prefix}_{name}`, or `name` alone when no
    /// prefix is configured.
    pub fn measurement_name_for(&self, name: &str) -> String {
        if self.measurement_prefix.is_empty() {
            name.to_owned()
        } else {
            format!("{}_{}", self.measurement_prefix, name)
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InfluxSection {
    #[serde(default = "default_influx_host")]
    pub host: String,

    #[serde(default = "default_influx_port")]
    pub port: u16,

    #[serde(default)]
    pub database: String,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,

    #[serde(default)]
    pub ssl: bool,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for InfluxSection {
    fn default() -> Self {
        Self {
            host: default_influx_host(),
            port: default_influx_port(),
            database: String::new(),
            username: String::new(),
            password: String::new(),
            ssl: false,
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl InfluxSection {
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(ReqtimeError::BadRequest("influxdb.host must not be empty".into()));
        }
        if self.port == 0 {
            return Err(ReqtimeError::BadRequest("influxdb.port must not be 0".into()));
        }
        if self.database.trim().is_empty() {
            return Err(ReqtimeError::BadRequest(
                "influxdb.database must not be empty".into(),
            ));
        }
        if !(1..=60000).contains(&self.timeout_ms) {
            return Err(ReqtimeError::BadRequest(
                "influxdb.timeout_ms must be between 1 and 60000".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

fn default_campaign_keyword() -> String {
    "campaign".into()
}
fn default_influx_host() -> String {
    "localhost".into()
}
fn default_influx_port() -> u16 {
    8086
}
fn default_timeout_ms() -> u64 {
    1000
}
fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
