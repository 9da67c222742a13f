//! Result Cache
//!
//! Holds the one full fetch of the place index and answers page-range queries
//! against it. The dataset is filled lazily on the first request and never
//! refreshed afterwards; once non-empty its length is stable for the rest of
//! the process.

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::backend::types::PlaceHit;
use crate::backend::SearchBackend;
use crate::error::{Result, ServiceError};

pub struct ResultCache {
    backend: Arc<dyn SearchBackend>,
    dataset: OnceCell<Vec<PlaceHit>>,
}

impl ResultCache {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self {
            backend,
            dataset: OnceCell::new(),
        }
    }

    /// Returns the hits in `[offset, offset+limit)` plus the dataset total.
    ///
    /// The first call triggers exactly one `fetch_all`; concurrent first
    /// callers block on the same initializer and all observe the filled
    /// dataset. A failed fill leaves the cell empty, so a later request
    /// retries the fetch.
    ///
    /// Validation order: a negative offset is rejected, then any offset at or
    /// past the end (an empty dataset therefore rejects every offset), then
    /// the limit is clamped so a trailing partial page shrinks instead of
    /// overrunning.
    pub async fn get_page(&self, limit: usize, offset: i64) -> Result<(Vec<PlaceHit>, usize)> {
        let dataset = self
            .dataset
            .get_or_try_init(|| async {
                tracing::info!("warming place cache from search backend");
                self.backend.fetch_all().await
            })
            .await
            .map_err(ServiceError::Backend)?;

        if offset < 0 {
            return Err(ServiceError::InvalidPage(offset.to_string()));
        }

        let total = dataset.len();
        let offset = offset as usize;
        if offset >= total {
            return Err(ServiceError::InvalidPage(offset.to_string()));
        }

        let limit = limit.min(total - offset);
        Ok((dataset[offset..offset + limit].to_vec(), total))
    }
}
