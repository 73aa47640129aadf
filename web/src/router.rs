use crate::{controller::health_check_controller, params, AppState};
use axum::{
    routing::{get, post},
    Router,
};

use crate::controller::arithmetic_controller;

use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI spec. To be a part
// of the rendered spec, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "Calculator API"
        ),
        paths(
            arithmetic_controller::add,
            arithmetic_controller::multiply,
            health_check_controller::health_check,
        ),
        components(
            schemas(
                params::arithmetic::MultiplyParams,
            )
        ),
        tags(
            (name = "calculator_api", description = "Stateless integer arithmetic API")
        )
    )]
struct ApiDoc;

pub fn define_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(arithmetic_routes(app_state))
        .merge(health_routes())
        .merge(RapiDoc::with_openapi("/api-docs/openapi2.json", ApiDoc::openapi()).path("/rapidoc"))
}

fn arithmetic_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/add", get(arithmetic_controller::add))
        .route("/multiply", post(arithmetic_controller::multiply))
        .with_state(app_state)
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_check_controller::health_check))
}
