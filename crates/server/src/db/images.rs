use async_trait::async_trait;
use deadpool_postgres::Pool;
use xray_core::IdentityTuple;

use super::StoreError;

const FIND_IMAGE_SQL: &str = "SELECT data FROM patient_xray_images \
     WHERE first_name = $1 AND last_name = $2 AND gender = $3 AND birth_date::text = $4 \
     LIMIT 1";

/// Read access to stored X-ray images
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Exact-match lookup by identity tuple; empty images count as absent
    async fn find(&self, key: &IdentityTuple) -> Result<Option<Vec<u8>>, StoreError>;

    /// Round trip to the backing store
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Image store backed by the `patient_xray_images` table
#[derive(Clone)]
pub struct PgImageStore {
    pool: Pool,
}

impl PgImageStore {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ImageStore for PgImageStore {
    async fn find(&self, key: &IdentityTuple) -> Result<Option<Vec<u8>>, StoreError> {
        // The pooled connection goes back to the pool when `client` drops
        let client = self.pool.get().await?;
        let row = client
            .query_opt(
                FIND_IMAGE_SQL,
                &[
                    &key.first_name,
                    &key.last_name,
                    &key.gender,
                    &key.birth_date,
                ],
            )
            .await?;

        Ok(row
            .and_then(|row| row.get::<_, Option<Vec<u8>>>(0))
            .filter(|data| !data.is_empty()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let client = self.pool.get().await?;
        client.query_one("SELECT 1", &[]).await?;
        Ok(())
    }
}
