use cashflow_core::{last_year_cashflow, Cashflow, EsClient};
use lambda_http::{run, service_fn, tracing};
use lambda_http::{Body, Error, Request, Response};

async fn function_handler(client: &EsClient, _event: Request) -> Result<Response<Body>, Error> {
    let cashflow = last_year_cashflow(client).await?;

    proxy_response(&cashflow)
}

/// API Gateway proxy envelope. The dashboard is served from another origin,
/// so every response carries the wildcard CORS header.
fn proxy_response(cashflow: &Cashflow) -> Result<Response<Body>, Error> {
    let body = serde_json::to_string(cashflow)?;

    Ok(Response::builder()
        .status(200)
        .header("content-type", "application/json")
        .header("access-control-allow-origin", "*")
        .body(body.into())?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let es_url = std::env::var("ELASTICSEARCH_URL")?;
    let client = EsClient::new(es_url);

    run(service_fn(|event| function_handler(&client, event))).await
}
