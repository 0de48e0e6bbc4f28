//! Demo router wiring for the `reqtime-demo` binary.

use std::sync::Arc;

use axum::{extract::Path, routing::get, Router};

use crate::config::MetricsSection;
use crate::context::ViewIdentity;
use crate::middleware::{install, resolve_routes, with_view};
use crate::writer::PointWriter;

async fn index() -> &'static str {
    "reqtime demo"
}

async fn item(Path(id): Path<u64>) -> String {
    format!("item {id}")
}

async fn healthz() -> &'static str {
    "ok"
}

pub fn build_router(metrics: &MetricsSection, writer: Arc<dyn PointWriter>) -> Router {
    let app = Router::new()
        .route("/", with_view(get(index), ViewIdentity::new(module_path!(), "index")))
        .route(
            "/items/:id",
            with_view(get(item), ViewIdentity::new(module_path!(), "item")),
        )
        .route("/healthz", get(healthz));

    // `/healthz` has no explicit identity; it is reported by route pattern.
    let app = resolve_routes(app, module_path!());
    install(app, metrics, writer)
}
