use axum::http::StatusCode;
use axum::{response::IntoResponse, routing::get, Extension, Json, Router};
use cashflow_core::{last_year_cashflow, EsClient};
use dotenvy::dotenv;
use tower_http::cors::{Any, CorsLayer};

/// Local stand-in for the deployed lambda: same core, plain HTTP.
#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let es_url = std::env::var("ELASTICSEARCH_URL").expect("ELASTICSEARCH_URL is not set");
    let client = EsClient::new(es_url);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .route("/cashflow", get(get_cashflow))
        .layer(cors)
        .layer(Extension(client));

    let listener = tokio::net::TcpListener::bind("localhost:3000").await.unwrap();
    tracing::info!("listening on 3000");
    axum::serve(listener, router).await.unwrap();
}

async fn get_cashflow(
    Extension(client): Extension<EsClient>,
) -> Result<impl IntoResponse, ApiError> {
    let cashflow = last_year_cashflow(&client).await?;
    Ok(Json(cashflow))
}


pub struct ApiError(pub cashflow_core::Error);

impl From<cashflow_core::Error> for ApiError {
    fn from(err: cashflow_core::Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!("->> {}", self.0);

        let status = match &self.0 {
            cashflow_core::Error::Aggregate(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::BAD_GATEWAY,
        };
        let body = Json(serde_json::json!({
            "error": self.0.to_string()
        }));

        (status, body).into_response()
    }
}
