use hello_api::{config::Config, run_app};
use lambda_http::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env()?;
    run_app(config).await
}
