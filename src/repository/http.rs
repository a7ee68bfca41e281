//! Entity client speaking JSON over HTTP to the store API.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::domain::types::RecordId;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{RecordReader, RecordWriter};
use crate::schema::Entity;

/// Longest response excerpt written to the log.
const LOG_BODY_LIMIT: usize = 512;

/// Shared HTTP client for every entity resource.
///
/// Cloning is cheap: the underlying connection pool is reference counted.
#[derive(Clone, Debug)]
pub struct HttpRepository {
    client: Client,
    base_url: String,
}

impl HttpRepository {
    /// Builds a client rooted at `base_url` (e.g. `http://localhost:5119/api`).
    ///
    /// `timeout` of `None` lets requests wait indefinitely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> RepositoryResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self, resource: &str) -> String {
        format!("{}/{resource}", self.base_url)
    }

    fn record_url(&self, resource: &str, id: RecordId) -> String {
        format!("{}/{resource}/{id}", self.base_url)
    }

    /// Sends the request and returns the body of a successful response.
    fn execute(
        &self,
        request: RequestBuilder,
        method: &str,
        url: &str,
    ) -> RepositoryResult<String> {
        log::debug!("{method} {url}");

        let response = request.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        log::debug!(
            "{method} {url} -> {status}: {}",
            truncate_for_log(&body)
        );

        check_status(status, body)
    }
}

/// Maps non-2xx statuses to [`RepositoryError`].
fn check_status(status: u16, body: String) -> RepositoryResult<String> {
    match status {
        200..=299 => Ok(body),
        404 => Err(RepositoryError::NotFound),
        _ => Err(RepositoryError::Status { status, body }),
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> RepositoryResult<T> {
    serde_json::from_str(body).map_err(|err| {
        log::error!("Failed to decode response: {err}");
        log::error!("Raw response: {}", truncate_for_log(body));
        RepositoryError::from(err)
    })
}

/// Decodes a record, falling back to `sent` when the server answered without a body.
fn decode_or_echo<E: Entity>(body: &str, sent: &E) -> RepositoryResult<E> {
    if body.trim().is_empty() {
        Ok(sent.clone())
    } else {
        decode(body)
    }
}

fn truncate_for_log(text: &str) -> String {
    if text.chars().count() <= LOG_BODY_LIMIT {
        text.to_string()
    } else {
        let head: String = text.chars().take(LOG_BODY_LIMIT).collect();
        format!("{head}...")
    }
}

impl<E: Entity> RecordReader<E> for HttpRepository {
    fn list(&self) -> RepositoryResult<Vec<E>> {
        let url = self.collection_url(E::SCHEMA.resource);
        let body = self.execute(self.client.get(&url), "GET", &url)?;
        decode(&body)
    }

    fn get(&self, id: RecordId) -> RepositoryResult<E> {
        let url = self.record_url(E::SCHEMA.resource, id);
        let body = self.execute(self.client.get(&url), "GET", &url)?;
        decode(&body)
    }
}

impl<E: Entity> RecordWriter<E> for HttpRepository {
    fn create(&self, record: &E) -> RepositoryResult<E> {
        let url = self.collection_url(E::SCHEMA.resource);
        let body = self.execute(self.client.post(&url).json(record), "POST", &url)?;
        decode_or_echo(&body, record)
    }

    fn update(&self, id: RecordId, record: &E) -> RepositoryResult<E> {
        let url = self.record_url(E::SCHEMA.resource, id);
        let body = self.execute(self.client.put(&url).json(record), "PUT", &url)?;
        decode_or_echo(&body, record)
    }

    fn remove(&self, id: RecordId) -> RepositoryResult<()> {
        let url = self.record_url(E::SCHEMA.resource, id);
        self.execute(self.client.delete(&url), "DELETE", &url)?;
        Ok(())
    }
}
