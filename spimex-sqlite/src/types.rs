//! Row mapping between SQLite and the core models.
//!
//! Everything is read back as plain text and integers, then converted into
//! the core's checked types. A row that fails the checks is reported as a
//! decode error rather than silently passed through.

use spimex_core::models::{TradingDate, TradingResult};

/// The columns selected for a trading result
pub(crate) const RESULT_COLUMNS: &str = "exchange_product_id, exchange_product_name, oil_id, \
     delivery_basis_id, delivery_basis_name, delivery_type_id, volume, total, count, date";

#[derive(sqlx::FromRow)]
pub(crate) struct TradingResultRow {
    pub exchange_product_id: String,
    pub exchange_product_name: String,
    pub oil_id: String,
    pub delivery_basis_id: String,
    pub delivery_basis_name: String,
    pub delivery_type_id: String,
    pub volume: i64,
    pub total: i64,
    pub count: i64,
    pub date: String,
}

impl TryFrom<TradingResultRow> for TradingResult {
    type Error = sqlx::Error;

    fn try_from(row: TradingResultRow) -> Result<Self, Self::Error> {
        Ok(Self {
            exchange_product_id: row.exchange_product_id.try_into().map_err(decode)?,
            exchange_product_name: row.exchange_product_name,
            oil_id: row.oil_id.try_into().map_err(decode)?,
            delivery_basis_id: row.delivery_basis_id.try_into().map_err(decode)?,
            delivery_basis_name: row.delivery_basis_name,
            delivery_type_id: row.delivery_type_id.try_into().map_err(decode)?,
            volume: row.volume,
            total: row.total,
            count: row.count,
            date: parse_date(&row.date)?,
        })
    }
}

pub(crate) fn parse_date(value: &str) -> Result<TradingDate, sqlx::Error> {
    value.parse().map_err(decode)
}

fn decode<E: std::error::Error + Send + Sync + 'static>(err: E) -> sqlx::Error {
    sqlx::Error::Decode(Box::new(err))
}
