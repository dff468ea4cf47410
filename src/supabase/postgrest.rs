//! PostgREST insert client (`{SUPABASE_URL}/rest/v1`).

use client::net::types::OptInRecord;

use super::RecordStore;
use super::types::{StoreError, error_message};
use crate::config::SupabaseConfig;

pub struct PostgrestClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl PostgrestClient {
    #[must_use]
    pub fn new(http: reqwest::Client, config: &SupabaseConfig) -> Self {
        Self { http, base_url: format!("{}/rest/v1", config.url), anon_key: config.anon_key.clone() }
    }
}

#[async_trait::async_trait]
impl RecordStore for PostgrestClient {
    async fn insert(&self, table: &str, record: &OptInRecord, access_token: Option<&str>) -> Result<(), StoreError> {
        let bearer = access_token.unwrap_or(&self.anon_key);
        let response = self
            .http
            .post(format!("{}/{table}", self.base_url))
            .header("apikey", &self.anon_key)
            .header("Prefer", "return=minimal")
            .bearer_auth(bearer)
            .json(record)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(StoreError::Rejected { status, message: error_message(status, &body) })
    }
}
