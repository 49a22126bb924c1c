use serde::{Deserialize, Serialize};

pub mod aggregate;
pub mod search;

pub use aggregate::{monthly_totals, AggregateError, MonthlyTotal};
pub use search::EsClient;


/// One debit-card transaction event, as stored in the search index.
#[derive(Deserialize, Debug, Clone)]
pub struct Transaction {
    #[serde(rename = "DEBIT_CARD_EVENT_DT")]
    pub event_date: String,
    #[serde(rename = "DEBIT_CARD_EVENT_AMT")]
    pub event_amount: String,
}


/// The cash-flow summary returned to the frontend.
#[derive(Serialize, Debug, Clone)]
pub struct Cashflow {
    pub data: Vec<MonthlyTotal>,
}


#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("search request failed: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("search index rejected the query: {0}")]
    Index(String),
    #[error(transparent)]
    Aggregate(#[from] AggregateError),
}


/// Queries the index for purchase events and rolls them up into one total
/// per calendar month.
pub async fn last_year_cashflow(client: &EsClient) -> Result<Cashflow, Error> {
    let records = client.debit_card_events().await?;
    let data = monthly_totals(&records)?;

    Ok(Cashflow { data })
}
