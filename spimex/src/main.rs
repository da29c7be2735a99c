use std::{fs::File, sync::Arc};

use spimex::{AppConfig, Cli, impls::SpimexApp};
use spimex_axum::{cache::MemoryCache, router, start_server};
use spimex_core::ports::ResponseCache as _;
use spimex_sqlite::Db;
use time::OffsetDateTime;
use tokio::select;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // By convention, we leverage `tracing` to instrument and log various
    // operations throughout this project; RUST_LOG selects what is written.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::import()?;

    let AppConfig {
        server,
        database,
        limits,
        schedule,
    } = AppConfig::load(&cli)?;

    let db = Db::open(&database).await?;
    let cache = MemoryCache::new(server.cache_capacity);
    let app = SpimexApp {
        db,
        cache: cache.clone(),
        limits: Arc::new(limits),
    };

    // If requested, dump the schema and exit.
    if let Some(path) = cli.schema {
        let (_, api) = router(app, server);
        serde_json::to_writer_pretty(File::create(path)?, api.as_ref())?;
        return Ok(());
    }

    // We always run the server task.
    let server_task = tokio::spawn(async move { start_server(server, app).await });

    // However, the daily clear may be disabled
    if schedule.at.is_some() {
        let clear_task = tokio::spawn(async move {
            let f = async move |_: OffsetDateTime| {
                let evicted = cache.len().await;
                cache.clear().await?;
                tracing::info!(evicted, "response cache cleared");
                Ok::<_, anyhow::Error>(())
            };
            schedule.schedule(f).await
        });

        select! {
            r = server_task => r??,
            r = clear_task => r??,
        }
    } else {
        server_task.await??;
    }

    Ok(())
}
