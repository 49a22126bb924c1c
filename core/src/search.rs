use crate::{Error, Transaction};
use serde::Deserialize;

const INDEX: &str = "debitcard";
const DOC_TYPE: &str = "DebitCardType";

/// Event type code for card purchases.
const PURCHASE_EVENT_CD: &str = "20";

/// The index holds well under a year of events per card, so a single page
/// covers everything.
const MAX_HITS: u32 = 10_000;


/// Client for the Elasticsearch index that stores debit-card events.
#[derive(Debug, Clone)]
pub struct EsClient {
    http: reqwest::Client,
    base_url: String,
}

impl EsClient {
    pub fn new(base_url: String) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Fetches every purchase event from the index.
    pub async fn debit_card_events(&self) -> Result<Vec<Transaction>, Error> {
        let url = format!("{}/{}/{}/_search", self.base_url, INDEX, DOC_TYPE);
        let query = serde_json::json!({
            "query": { "match": { "DEBIT_CARD_EVENT_TYPE_CD": PURCHASE_EVENT_CD } },
            "size": MAX_HITS,
        });

        let res = self
            .http
            .post(&url)
            .json(&query)
            .send()
            .await?
            .json::<serde_json::Value>()
            .await?;

        if let Some(err) = res.get("error") {
            let reason = err
                .get("reason")
                .and_then(|r| r.as_str())
                .unwrap_or("no reason given")
                .to_string();
            return Err(Error::Index(reason));
        }

        let res: SearchResponse = serde_json::from_value(res)?;

        tracing::debug!("search returned {} hits", res.hits.hits.len());
        for hit in &res.hits.hits {
            tracing::debug!("{}) {}", hit.id, hit.source.event_date);
        }

        Ok(res.hits.hits.into_iter().map(|h| h.source).collect())
    }
}


#[derive(Deserialize, Debug)]
struct SearchResponse {
    hits: Hits,
}

#[derive(Deserialize, Debug)]
struct Hits {
    hits: Vec<Hit>,
}

#[derive(Deserialize, Debug)]
struct Hit {
    #[serde(rename = "_id")]
    id: String,
    #[serde(rename = "_source")]
    source: Transaction,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_search_response_envelope() {
        let raw = serde_json::json!({
            "took": 3,
            "timed_out": false,
            "hits": {
                "total": 2,
                "max_score": 1.0,
                "hits": [
                    {
                        "_index": "debitcard",
                        "_type": "DebitCardType",
                        "_id": "1",
                        "_score": 1.0,
                        "_source": {
                            "DEBIT_CARD_EVENT_TYPE_CD": "20",
                            "DEBIT_CARD_EVENT_DT": "2024-01-15",
                            "DEBIT_CARD_EVENT_AMT": "10,50"
                        }
                    },
                    {
                        "_index": "debitcard",
                        "_type": "DebitCardType",
                        "_id": "2",
                        "_score": 1.0,
                        "_source": {
                            "DEBIT_CARD_EVENT_TYPE_CD": "20",
                            "DEBIT_CARD_EVENT_DT": "2024-02-03",
                            "DEBIT_CARD_EVENT_AMT": "7,25"
                        }
                    }
                ]
            }
        });

        let res: SearchResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(res.hits.hits.len(), 2);
        assert_eq!(res.hits.hits[0].id, "1");
        assert_eq!(res.hits.hits[0].source.event_date, "2024-01-15");
        assert_eq!(res.hits.hits[1].source.event_amount, "7,25");
    }

    #[test]
    fn strips_the_trailing_slash_from_the_base_url() {
        let client = EsClient::new("http://localhost:9200/".to_string());
        assert_eq!(client.base_url, "http://localhost:9200");
    }
}
