//! Database pool construction and liveness ping.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Build a Postgres pool for the given URL, or `None` when no URL is
/// configured.
///
/// Connections are established lazily; reachability is proven by the
/// startup [`ping`], not here.
pub async fn init_pool(database_url: Option<&str>) -> Result<Option<PgPool>, sqlx::Error> {
    let Some(url) = database_url else {
        return Ok(None);
    };

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy(url)?;

    Ok(Some(pool))
}

/// Round-trip the pool to confirm the database is reachable.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
