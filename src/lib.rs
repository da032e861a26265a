pub mod config;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;

use axum::{middleware::from_fn, routing::get, Router};
use lambda_http::{run, Error};
use tracing::info;

use crate::config::{Config, Runtime};
use crate::routes::hello;

pub fn create_app() -> Router {
    Router::new()
        .route("/hello", get(hello::greeting))
        .route("/hello/dto", get(hello::greeting_with_value))
        .fallback(routes::not_found)
        .layer(from_fn(middleware::trace_request))
}

pub async fn run_app(config: Config) -> Result<(), Error> {
    logging::init_logger(config.log_level);
    let app = create_app();

    match config.runtime {
        Runtime::Lambda => {
            info!("Starting in Lambda runtime");
            run(app).await
        }
        Runtime::Standalone => Ok(server::serve(app, config.addr).await?),
    }
}
