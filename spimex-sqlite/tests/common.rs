#![allow(dead_code)]

use spimex_core::models::{ProductFilter, TradingDate};
use spimex_sqlite::{Db, config::SqliteConfig};

/// A trading result as the ingest process would write it
pub struct Seed {
    pub exchange_product_id: &'static str,
    pub exchange_product_name: &'static str,
    pub delivery_basis_name: &'static str,
    pub volume: i64,
    pub total: i64,
    pub count: i64,
    pub date: &'static str,
}

pub const TRADING_RESULTS: [Seed; 5] = [
    Seed {
        exchange_product_id: "A106PDK001J",
        exchange_product_name: "Бензин АИ-100-К5, ПДК",
        delivery_basis_name: "Предкомбинатская-группа станций",
        volume: 100,
        total: 9_000_000,
        count: 2,
        date: "2025-07-16",
    },
    Seed {
        exchange_product_id: "A106MST002K",
        exchange_product_name: "Бензин АИ-100-К5, Москва",
        delivery_basis_name: "Московская станция",
        volume: 120,
        total: 9_500_000,
        count: 3,
        date: "2025-07-17",
    },
    Seed {
        exchange_product_id: "B205NVO003J",
        exchange_product_name: "Бензин АИ-95-К5, Новосибирск",
        delivery_basis_name: "Новосибирская станция",
        volume: 130,
        total: 9_800_000,
        count: 3,
        date: "2025-07-17",
    },
    Seed {
        exchange_product_id: "C303KZN004L",
        exchange_product_name: "Дизель Евро-5, Казань",
        delivery_basis_name: "Казанский терминал",
        volume: 140,
        total: 10_000_000,
        count: 4,
        date: "2025-07-18",
    },
    Seed {
        exchange_product_id: "D410PDK005J",
        exchange_product_name: "Дизель зимний Евро-5, ПДК",
        delivery_basis_name: "Предкомбинатская-группа станций",
        volume: 150,
        total: 10_500_000,
        count: 4,
        date: "2025-07-18",
    },
];

/// Open a fresh in-memory database holding `TRADING_RESULTS`
pub async fn seeded_db() -> anyhow::Result<Db> {
    let db = Db::open(&SqliteConfig::default()).await?;
    insert(&db, &TRADING_RESULTS).await?;
    Ok(db)
}

/// Write rows through the writer pool, the way ingestion does
pub async fn insert(db: &Db, rows: &[Seed]) -> anyhow::Result<()> {
    let mut query_builder = sqlx::QueryBuilder::<sqlx::Sqlite>::new(
        "insert into trading_result (exchange_product_id, exchange_product_name, delivery_basis_name, volume, total, count, date) ",
    );
    query_builder.push_values(rows, |mut b, row| {
        b.push_bind(row.exchange_product_id)
            .push_bind(row.exchange_product_name)
            .push_bind(row.delivery_basis_name)
            .push_bind(row.volume)
            .push_bind(row.total)
            .push_bind(row.count)
            .push_bind(row.date);
    });
    query_builder.build().execute(&db.writer).await?;
    Ok(())
}

pub fn date(value: &str) -> TradingDate {
    value.parse().unwrap()
}

pub fn product_filter(
    oil_id: Option<&str>,
    delivery_type_id: Option<&str>,
    delivery_basis_id: Option<&str>,
) -> ProductFilter {
    ProductFilter {
        oil_id: oil_id.map(|x| x.parse().unwrap()),
        delivery_type_id: delivery_type_id.map(|x| x.parse().unwrap()),
        delivery_basis_id: delivery_basis_id.map(|x| x.parse().unwrap()),
    }
}
