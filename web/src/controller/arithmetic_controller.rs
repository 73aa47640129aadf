use crate::extractors::compare_api_version::CompareApiVersion;
use crate::params::arithmetic::{AddParams, MultiplyParams};
use crate::Error;
use axum::extract::Query;
use axum::response::IntoResponse;
use axum::Json;
use domain::arithmetic as ArithmeticApi;
use log::*;
use service::config::ApiVersion;

/// GET the sum of two integers
#[utoipa::path(
    get,
    path = "/add",
    params(
        ApiVersion,
        AddParams
    ),
    responses(
        (status = 200, description = "Successfully computed the sum", body = i64),
        (status = 400, description = "Bad Request"),
        (status = 422, description = "Unprocessable Entity"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn add(
    CompareApiVersion(_v): CompareApiVersion,
    Query(params): Query<AddParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET add: {params:?}");

    let sum = ArithmeticApi::add(params.number1, params.number2)?;

    Ok(Json(sum))
}

/// POST the product of two integers
#[utoipa::path(
    post,
    path = "/multiply",
    params(ApiVersion),
    request_body = MultiplyParams,
    responses(
        (status = 200, description = "Successfully computed the product", body = i64),
        (status = 400, description = "Bad Request"),
        (status = 422, description = "Unprocessable Entity"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn multiply(
    CompareApiVersion(_v): CompareApiVersion,
    Json(params): Json<MultiplyParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST multiply: {params:?}");

    let product = ArithmeticApi::multiply(params.number1, params.number2)?;

    Ok(Json(product))
}
