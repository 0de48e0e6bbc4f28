//! Registrable-domain lookup for referer URLs.

use reqtime_core::TldError;
use url::{Host, Url};

/// Yields the registrable domain (`google.co.uk`), not the bare public suffix
/// (`co.uk`) that Django's `django-influxdb-metrics` stored in `referer_tld`.
/// Dashboards grouping on the old suffix values need updating.
pub trait TldResolver: Send + Sync {
    /// Registrable domain (public-suffix aware) of `url`'s host,
    /// e.g. `https://www.google.co.uk/x` -> `google.co.uk`.
    fn registrable_domain(&self, url: &str) -> Result<String, TldError>;
}

/// Resolver backed by the compiled-in public suffix list (`psl`).
#[derive(Debug, Clone, Copy, Default)]
pub struct PublicSuffixResolver;

impl TldResolver for PublicSuffixResolver {
    fn registrable_domain(&self, url: &str) -> Result<String, TldError> {
        let parsed = Url::parse(url).map_err(|e| TldError::BadUrl(e.to_string()))?;

        let host = match parsed.host() {
            Some(Host::Domain(d)) => d.trim_end_matches('.'),
            Some(ip) => return Err(TldError::DomainNotFound(ip.to_string())),
            None => return Err(TldError::NoHost),
        };

        psl::domain_str(host)
            .map(str::to_owned)
            .ok_or_else(|| TldError::DomainNotFound(host.to_owned()))
    }
}
