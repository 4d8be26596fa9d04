use sqlx::postgres::{PgPool, PgPoolOptions};
use std::sync::Arc;

pub type DbPool = Arc<PgPool>;

pub async fn create_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;
    Ok(Arc::new(pool))
}

/// Pool that only connects when first used.
pub fn create_lazy_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let pool = PgPoolOptions::new().connect_lazy(database_url)?;
    Ok(Arc::new(pool))
}
