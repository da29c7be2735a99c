use spimex_axum::{cache::MemoryCache, config::AxumConfig};
use spimex_core::{models::QueryLimits, ports::Application};
use spimex_sqlite::{Db, config::SqliteConfig};

#[derive(Clone)]
pub struct TestApp {
    pub db: Db,
    pub cache: MemoryCache,
    pub limits: QueryLimits,
}

impl Application for TestApp {
    type Repository = Db;
    type Cache = MemoryCache;

    fn database(&self) -> &Self::Repository {
        &self.db
    }

    fn cache(&self) -> &Self::Cache {
        &self.cache
    }

    fn limits(&self) -> &QueryLimits {
        &self.limits
    }
}

impl TestApp {
    /// A fresh in-memory store holding the five reference sessions
    pub async fn seeded() -> Self {
        let db = Db::open(&SqliteConfig::default()).await.unwrap();
        let app = Self {
            db,
            cache: MemoryCache::new(AxumConfig::default().cache_capacity),
            limits: QueryLimits::default(),
        };
        app.insert(&[
            ("A106PDK001J", "Бензин АИ-100-К5, ПДК", "Предкомбинатская-группа станций", 100, 9_000_000, 2, "2025-07-16"),
            ("A106MST002K", "Бензин АИ-100-К5, Москва", "Московская станция", 120, 9_500_000, 3, "2025-07-17"),
            ("B205NVO003J", "Бензин АИ-95-К5, Новосибирск", "Новосибирская станция", 130, 9_800_000, 3, "2025-07-17"),
            ("C303KZN004L", "Дизель Евро-5, Казань", "Казанский терминал", 140, 10_000_000, 4, "2025-07-18"),
            ("D410PDK005J", "Дизель зимний Евро-5, ПДК", "Предкомбинатская-группа станций", 150, 10_500_000, 4, "2025-07-18"),
        ])
        .await;
        app
    }

    /// Write rows the way the ingest process does, bypassing the cache
    pub async fn insert(&self, rows: &[(&str, &str, &str, i64, i64, i64, &str)]) {
        let mut query_builder = sqlx::QueryBuilder::<sqlx::Sqlite>::new(
            "insert into trading_result (exchange_product_id, exchange_product_name, delivery_basis_name, volume, total, count, date) ",
        );
        query_builder.push_values(rows, |mut b, row| {
            b.push_bind(row.0)
                .push_bind(row.1)
                .push_bind(row.2)
                .push_bind(row.3)
                .push_bind(row.4)
                .push_bind(row.5)
                .push_bind(row.6);
        });
        query_builder.build().execute(&self.db.writer).await.unwrap();
    }
}
