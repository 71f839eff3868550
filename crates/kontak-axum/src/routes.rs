//! Route definitions and router construction.
//!
//! # Path Parameter Syntax
//! Axum 0.8 uses brace syntax for path parameters: `{nama}`.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::handler::HandlerWithoutStateExt;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::bootstrap::AxumContext;
use crate::handlers;
use crate::method_override::{MethodOverride, with_method_override};
use crate::state::AppState;

/// Page and form routes, without state applied.
pub(crate) fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::pages::home))
        .route("/about", get(handlers::pages::about))
        .route(
            "/contact",
            get(handlers::contacts::list)
                .post(handlers::contacts::create)
                .put(handlers::contacts::update)
                .delete(handlers::contacts::remove),
        )
        // The static `add` segment takes priority over `{nama}`
        .route("/contact/add", get(handlers::contacts::add_form))
        .route("/contact/{nama}", get(handlers::contacts::detail))
        .route("/contact/edit/{nama}", get(handlers::contacts::edit_form))
}

/// Create the router with every route, request tracing and the fallback.
///
/// With `static_dir`, unmatched paths are looked up there first and only
/// then answered with the 404 page.
pub fn create_router(ctx: AxumContext, static_dir: Option<&Path>) -> Router {
    let state: AppState = Arc::new(ctx);

    let router = Router::new()
        .route("/health", get(handlers::pages::health_check))
        .merge(contact_routes().with_state(state));

    let router = match static_dir {
        Some(dir) => router.fallback_service(
            ServeDir::new(dir).not_found_service(handlers::pages::not_found.into_service()),
        ),
        None => router.fallback(handlers::pages::not_found),
    };

    router.layer(TraceLayer::new_for_http())
}

/// The complete application: the router behind the `_method` override.
pub fn create_app(ctx: AxumContext, static_dir: Option<&Path>) -> MethodOverride {
    with_method_override(create_router(ctx, static_dir))
}
