//! Route-resolution hooks.
//!
//! These run as route layers, so axum only invokes them once a request has
//! been matched to a route. Unmatched requests (fallbacks) never record a
//! view and therefore never produce a point.

use axum::extract::{MatchedPath, Request, State};
use axum::middleware::{from_fn_with_state, Next};
use axum::response::Response;
use axum::routing::MethodRouter;
use axum::Router;

use crate::context::{TimingContext, ViewIdentity};

/// Attach an explicit view identity to one method router.
///
/// ```ignore
/// .route("/items/:id", with_view(get(item), ViewIdentity::new(module_path!(), "item")))
/// ```
pub fn with_view<S>(route: MethodRouter<S>, view: ViewIdentity) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    route.route_layer(from_fn_with_state(view, record_view))
}

/// Record every matched route of `router`, using the route pattern as the
/// view name and `module` as the declaring module. Applies to routes added
/// before this call. Per-route [`with_view`] identities take precedence.
///
/// # Panics
///
/// Panics if `router` has no routes yet, as [`Router::route_layer`] does.
pub fn resolve_routes<S>(router: Router<S>, module: impl Into<String>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.route_layer(from_fn_with_state(module.into(), record_matched_path))
}

async fn record_view(State(view): State<ViewIdentity>, request: Request, next: Next) -> Response {
    if let Some(ctx) = request.extensions().get::<TimingContext>() {
        ctx.record_view(view);
    }
    next.run(request).await
}

async fn record_matched_path(
    State(module): State<String>,
    request: Request,
    next: Next,
) -> Response {
    let ext = request.extensions();
    if let (Some(ctx), Some(path)) = (ext.get::<TimingContext>(), ext.get::<MatchedPath>()) {
        ctx.record_view(ViewIdentity::new(module, path.as_str()));
    }
    next.run(request).await
}
