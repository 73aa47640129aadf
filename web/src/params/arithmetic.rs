use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Query string parameters for the add operation.
#[derive(Debug, Deserialize, IntoParams)]
pub(crate) struct AddParams {
    /// The first integer operand
    pub(crate) number1: i64,
    /// The second integer operand
    pub(crate) number2: i64,
}

/// JSON request body for the multiply operation.
#[derive(Debug, Deserialize, ToSchema)]
#[schema(example = json!({"number1": 4, "number2": 6}))]
pub(crate) struct MultiplyParams {
    /// The first integer operand
    pub(crate) number1: i64,
    /// The second integer operand
    pub(crate) number2: i64,
}
