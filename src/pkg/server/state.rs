use std::{sync::Arc, time::Duration};

use sqlx::{PgPool, Postgres, pool::PoolConnection, postgres::PgPoolOptions};

use crate::{conf::Settings, prelude::Result};

pub fn db_pool(settings: &Settings) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.database_pool_max_connections)
        .acquire_timeout(Duration::from_secs(settings.database_acquire_timeout_secs))
        .connect_lazy(&settings.database_url)?;
    Ok(pool)
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub db_pool: Arc<PgPool>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Result<AppState> {
        Ok(AppState {
            db_pool: Arc::new(db_pool(settings)?),
        })
    }

    /// Checks a connection out of the pool for the duration of a request.
    /// It goes back to the pool when dropped.
    pub async fn acquire(&self) -> Result<PoolConnection<Postgres>> {
        Ok(self.db_pool.acquire().await?)
    }
}
