use axum::{
    extract::{rejection::QueryRejection, Query},
    Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::error::AppError;
use crate::models::response_value::ResponseValue;

pub const GREETING: &str = "hello";

#[derive(Debug, Deserialize)]
pub struct Params {
    name: Option<String>,
    amount: Option<String>,
}

impl Params {
    /// Binds the raw query parameters, checking `name` before `amount`.
    pub fn bind(self) -> Result<ResponseValue, AppError> {
        let name = self.name.ok_or(AppError::MissingParameter("name"))?;
        let raw_amount = self.amount.ok_or(AppError::MissingParameter("amount"))?;
        let amount = raw_amount
            .trim()
            .parse::<i32>()
            .map_err(|_| AppError::InvalidParameter {
                name: "amount",
                value: raw_amount.clone(),
            })?;

        Ok(ResponseValue::new(name, amount))
    }
}

pub async fn greeting() -> &'static str {
    debug!("Greeting handler is run");
    GREETING
}

pub async fn greeting_with_value(
    query: Result<Query<Params>, QueryRejection>,
) -> Result<Json<ResponseValue>, AppError> {
    let Query(params) = query?;
    debug!(?params, "Greeting with value handler is run");
    params.bind().map(Json)
}
