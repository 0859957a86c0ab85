use crate::interface_adapters::handlers::{healthz, method_not_allowed, not_found};
use axum::{Router, routing::get};

pub fn app() -> Router {
    // Every reply, including errors, goes through the JSON response sender.
    Router::new()
        .route("/healthz", get(healthz).fallback(method_not_allowed))
        .fallback(not_found)
}
