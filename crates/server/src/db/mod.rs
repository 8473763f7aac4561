mod images;

pub use images::{ImageStore, PgImageStore};

use deadpool_postgres::{Config, Pool, Runtime};
use thiserror::Error;
use tokio_postgres::NoTls;

/// Create a connection pool from a database URL
pub fn create_pool(database_url: &str) -> Result<Pool, deadpool_postgres::CreatePoolError> {
    let mut cfg = Config::new();
    cfg.url = Some(database_url.to_string());
    cfg.create_pool(Some(Runtime::Tokio1), NoTls)
}

/// Image database failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database pool error: {0}")]
    Pool(#[from] deadpool_postgres::PoolError),

    #[error("Database error: {0}")]
    Query(#[from] tokio_postgres::Error),
}
