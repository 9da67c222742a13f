//! Elasticsearch Client
//!
//! HTTP implementation of [`SearchBackend`] plus the one-time index setup
//! operations used by the `--setup` bootstrap path. Query bodies are built by
//! pure functions so their shape can be verified without a live cluster.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use serde_json::{json, Value};

use super::types::{PlaceHit, SearchEnvelope};
use super::SearchBackend;

/// Upper bound on a full-index fetch; the dataset is known to be far smaller.
const FETCH_ALL_SIZE: usize = 20_000;

/// Documents per `_bulk` request during ingestion.
const BULK_BATCH: usize = 1_000;

pub struct ElasticBackend {
    client: reqwest::Client,
    base_url: String,
    index: String,
}

impl ElasticBackend {
    pub fn new(base_url: &str, index: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            index: index.to_string(),
        }
    }

    /// Runs a `_search` request against the index and unwraps the hit list.
    async fn search(&self, body: Value) -> Result<Vec<PlaceHit>> {
        let url = format!("{}/{}/_search", self.base_url, self.index);
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("search request failed")?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(anyhow!("search returned {}: {}", status, detail));
        }

        let envelope: SearchEnvelope = response
            .json()
            .await
            .context("failed to decode search response")?;
        Ok(envelope.hits.hits)
    }

    /// Creates the index if it does not already exist.
    pub async fn ensure_index(&self) -> Result<()> {
        let url = format!("{}/{}", self.base_url, self.index);
        let head = self.client.head(&url).send().await?;
        if head.status().is_success() {
            tracing::info!("index '{}' already exists", self.index);
            return Ok(());
        }

        let response = self.client.put(&url).send().await?;
        if !response.status().is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(anyhow!("failed to create index: {}", detail));
        }
        tracing::info!("index '{}' created", self.index);
        Ok(())
    }

    /// Applies the place mapping; `location` must be a `geo_point` for the
    /// distance sort to work.
    pub async fn apply_mapping(&self) -> Result<()> {
        let url = format!("{}/{}/_mapping", self.base_url, self.index);
        let response = self
            .client
            .put(&url)
            .json(&place_mapping())
            .send()
            .await?;
        if !response.status().is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(anyhow!("failed to apply mapping: {}", detail));
        }
        tracing::info!("mapping applied to '{}'", self.index);
        Ok(())
    }

    /// Bulk-indexes `(id, document)` pairs in batches.
    pub async fn bulk_index(&self, docs: Vec<(String, Value)>) -> Result<usize> {
        let url = format!("{}/_bulk", self.base_url);
        let mut indexed = 0usize;

        for batch in docs.chunks(BULK_BATCH) {
            let mut body = String::new();
            for (id, doc) in batch {
                body.push_str(
                    &json!({"index": {"_index": self.index, "_id": id}}).to_string(),
                );
                body.push('\n');
                body.push_str(&doc.to_string());
                body.push('\n');
            }

            let response = self
                .client
                .post(&url)
                .header("Content-Type", "application/x-ndjson")
                .body(body)
                .send()
                .await
                .context("bulk request failed")?;
            if !response.status().is_success() {
                let detail = response.text().await.unwrap_or_default();
                return Err(anyhow!("bulk indexing failed: {}", detail));
            }

            let result: Value = response.json().await?;
            if result["errors"].as_bool().unwrap_or(false) {
                tracing::warn!("bulk batch reported item-level errors");
            }
            indexed += batch.len();
        }

        tracing::info!("indexed {} documents into '{}'", indexed, self.index);
        Ok(indexed)
    }
}

#[async_trait]
impl SearchBackend for ElasticBackend {
    async fn fetch_all(&self) -> Result<Vec<PlaceHit>> {
        self.search(match_all_query(FETCH_ALL_SIZE)).await
    }

    async fn nearest(&self, lat: f64, lon: f64, k: usize) -> Result<Vec<PlaceHit>> {
        self.search(nearest_query(lat, lon, k)).await
    }
}

/// Match-all query fetching up to `size` documents.
pub fn match_all_query(size: usize) -> Value {
    json!({
        "query": { "match_all": {} },
        "size": size,
    })
}

/// Geo-distance sorted query: ascending arc distance in kilometers, minimum
/// point-to-shape distance mode, documents without a mapped location ignored.
pub fn nearest_query(lat: f64, lon: f64, k: usize) -> Value {
    json!({
        "size": k,
        "sort": [{
            "_geo_distance": {
                "location": { "lat": lat, "lon": lon },
                "order": "asc",
                "unit": "km",
                "mode": "min",
                "distance_type": "arc",
                "ignore_unmapped": true,
            }
        }],
    })
}

fn place_mapping() -> Value {
    json!({
        "properties": {
            "name":     { "type": "text" },
            "address":  { "type": "text" },
            "phone":    { "type": "text" },
            "location": { "type": "geo_point" },
        }
    })
}
