use crate::Transaction;
use serde::Serialize;
use std::collections::BTreeMap;


/// Total spend for one calendar month. The date is always the first of the
/// month, e.g. "2024-01-01".
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MonthlyTotal {
    pub date: String,
    pub amount: f64,
}


#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AggregateError {
    #[error("event amount {0:?} is not numeric")]
    ParseAmount(String),
}


/// Groups transactions by calendar month and sums their amounts.
///
/// The month key is the `YYYY-MM` prefix of the event date with `-01`
/// appended. Amounts come off the wire with a comma decimal separator.
/// Output is sorted by month.
pub fn monthly_totals(records: &[Transaction]) -> Result<Vec<MonthlyTotal>, AggregateError> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();

    for record in records {
        // an event date shorter than the prefix is used as-is
        let prefix = record.event_date.get(..7).unwrap_or(&record.event_date);
        let month = format!("{}-01", prefix);

        let amount = record
            .event_amount
            .replace(',', ".")
            .parse::<f64>()
            .map_err(|_| AggregateError::ParseAmount(record.event_amount.clone()))?;

        *totals.entry(month).or_insert(0.0) += amount;
    }

    Ok(totals
        .into_iter()
        .map(|(date, amount)| MonthlyTotal { date, amount })
        .collect())
}
