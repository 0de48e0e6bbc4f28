//! Request timing middleware.
//!
//! Per request:
//! 1. read the clock and insert a [`TimingContext`] into the extensions
//! 2. delegate; route-resolution hooks record the view on the context
//! 3. if a view was recorded, build one `request` point and hand it to the
//!    [`PointWriter`]; backend errors are logged and dropped
//!
//! The response from the inner service is returned unchanged in every case.

pub mod resolve;
pub mod tags;

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::{from_fn_with_state, Next};
use axum::response::Response;
use axum::Router;
use reqtime_core::Point;
use thiserror::Error;

use crate::clock::{elapsed_ms, Clock, MonotonicClock};
use crate::config::MetricsSection;
use crate::context::{Identity, TimingContext, ViewIdentity};
use crate::tld::{PublicSuffixResolver, TldResolver};
use crate::writer::PointWriter;

pub use resolve::{resolve_routes, with_view};
pub use tags::RequestSnapshot;

/// Metrics collection is administratively disabled; leave the middleware out
/// of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("request timing middleware disabled by configuration")]
pub struct MiddlewareNotUsed;

pub struct RequestTimer {
    host_tag: String,
    campaign_keyword: String,
    secure_proxy_header: Option<String>,
    measurement: String,
    writer: Arc<dyn PointWriter>,
    resolver: Arc<dyn TldResolver>,
    clock: Arc<dyn Clock>,
}

impl RequestTimer {
    pub fn new(
        cfg: &MetricsSection,
        writer: Arc<dyn PointWriter>,
        resolver: Arc<dyn TldResolver>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, MiddlewareNotUsed> {
        if cfg.disabled {
            return Err(MiddlewareNotUsed);
        }
        Ok(Self {
            host_tag: cfg.host_tag.clone(),
            campaign_keyword: cfg.campaign_keyword.clone(),
            secure_proxy_header: cfg.secure_proxy_header.clone(),
            measurement: cfg.measurement_name_for("request"),
            writer,
            resolver,
            clock,
        })
    }

    /// Wrap every route (and the fallback) currently on `router`.
    pub fn wrap<S>(self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        router.layer(from_fn_with_state(Arc::new(self), time_request))
    }

    pub fn measurement(&self) -> &str {
        &self.measurement
    }

    /// Assemble the `request` point. Absent inputs become empty tags.
    pub fn request_point(
        &self,
        req: &RequestSnapshot,
        view: &ViewIdentity,
        identity: Identity,
        elapsed_ms: i64,
    ) -> Point {
        let referer_tld = if req.referer.is_empty() {
            String::new()
        } else {
            self.resolver
                .registrable_domain(&req.referer)
                .unwrap_or_default()
        };

        Point::builder(self.measurement.as_str())
            .tag("host", self.host_tag.as_str())
            .tag("is_ajax", req.is_ajax)
            .tag("is_authenticated", identity.is_authenticated)
            .tag("is_staff", identity.is_staff)
            .tag("is_superuser", identity.is_superuser)
            .tag("method", req.method.as_str())
            .tag("module", view.module.as_str())
            .tag("view", view.name.as_str())
            .tag("referer", req.referer.as_str())
            .tag("referer_tld", referer_tld)
            .tag("full_path", req.full_path())
            .tag("path", req.path.as_str())
            .tag("campaign", req.query_value(&self.campaign_keyword))
            .tag("scheme", req.scheme.as_str())
            .tag("content_type", req.content_type.as_str())
            .field("value", elapsed_ms)
            .build()
    }
}

/// Install request timing on `router` unless `cfg` disables it, using the
/// public-suffix resolver and the monotonic clock. Call after all routes are
/// added.
pub fn install<S>(
    router: Router<S>,
    cfg: &MetricsSection,
    writer: Arc<dyn PointWriter>,
) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    match RequestTimer::new(
        cfg,
        writer,
        Arc::new(PublicSuffixResolver),
        Arc::new(MonotonicClock::new()),
    ) {
        Ok(timer) => {
            tracing::info!(measurement = %timer.measurement(), "request timing installed");
            timer.wrap(router)
        }
        Err(MiddlewareNotUsed) => {
            tracing::info!("request timing disabled; middleware not installed");
            router
        }
    }
}

async fn time_request(
    State(timer): State<Arc<RequestTimer>>,
    mut request: Request,
    next: Next,
) -> Response {
    let ctx = TimingContext::start(timer.clock.now_ns());
    let snapshot = RequestSnapshot::capture(&request, timer.secure_proxy_header.as_deref());
    let entry_identity = request.extensions().get::<Identity>().copied();
    request.extensions_mut().insert(ctx.clone());

    let response = next.run(request).await;

    let Some(view) = ctx.view() else {
        return response;
    };
    let elapsed = elapsed_ms(ctx.start_ns(), timer.clock.now_ns());
    let identity = ctx.identity().or(entry_identity).unwrap_or_default();
    let point = timer.request_point(&snapshot, &view, identity, elapsed);

    if let Err(err) = timer.writer.write(std::slice::from_ref(&point)).await {
        tracing::error!(
            error = %err,
            method = %snapshot.method,
            full_path = %snapshot.full_path(),
            module = %view.module,
            view = %view.name,
            "failed to write request metric"
        );
    }

    response
}
