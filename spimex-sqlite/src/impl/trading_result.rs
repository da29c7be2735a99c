use crate::{
    Db,
    types::{RESULT_COLUMNS, TradingResultRow, parse_date},
};
use spimex_core::{
    models::{ResultFilter, TradingDate, TradingResult},
    ports::TradingResultRepository,
};
use tracing::{Level, event};

impl TradingResultRepository for Db {
    async fn query_results(
        &self,
        filter: &ResultFilter,
        last_only: bool,
    ) -> Result<Vec<TradingResult>, Self::Error> {
        let mut query_builder = sqlx::QueryBuilder::<sqlx::Sqlite>::new("select ");
        query_builder
            .push(RESULT_COLUMNS)
            .push(" from trading_result where true");

        // The most recent session across the whole table, not just the rows
        // that survive the other filters.
        if last_only {
            query_builder.push(" and date = (select max(date) from trading_result)");
        }
        if let Some(oil_id) = &filter.product.oil_id {
            query_builder
                .push(" and oil_id = ")
                .push_bind(oil_id.as_str());
        }
        if let Some(delivery_type_id) = &filter.product.delivery_type_id {
            query_builder
                .push(" and delivery_type_id = ")
                .push_bind(delivery_type_id.as_str());
        }
        if let Some(delivery_basis_id) = &filter.product.delivery_basis_id {
            query_builder
                .push(" and delivery_basis_id = ")
                .push_bind(delivery_basis_id.as_str());
        }
        if let Some(range) = filter.range {
            query_builder
                .push(" and date between ")
                .push_bind(range.start().to_string())
                .push(" and ")
                .push_bind(range.end().to_string());
        }
        query_builder.push(" order by date desc, exchange_product_id asc");

        let rows = query_builder
            .build_query_as::<TradingResultRow>()
            .fetch_all(&self.reader)
            .await?;

        event!(
            Level::DEBUG,
            filter = %filter,
            last_only,
            rows = rows.len(),
            "queried trading results"
        );

        rows.into_iter().map(TradingResult::try_from).collect()
    }

    async fn distinct_trading_dates(&self, limit: i64) -> Result<Vec<TradingDate>, Self::Error> {
        // SQLite treats a negative limit as no limit at all
        if limit <= 0 {
            return Ok(Vec::new());
        }

        let dates = sqlx::query_scalar::<_, String>(
            r#"
            select distinct
                date
            from
                trading_result
            order by
                date desc
            limit $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.reader)
        .await?;

        dates.iter().map(|date| parse_date(date)).collect()
    }
}
