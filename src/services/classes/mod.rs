// Class data source
// Fetches the class list from the schedule endpoint; the grid builder only
// ever sees the decoded (possibly empty) list.

use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;

use crate::models::class::ClassEvent;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/classes";

/// Source of class definitions, kept behind a trait so the UI and tests can
/// swap in a stub.
#[cfg_attr(test, mockall::automock)]
pub trait ClassSource: Send {
    fn fetch_classes(&self) -> Result<Vec<ClassEvent>>;
}

pub struct HttpClassSource {
    client: Client,
    endpoint: String,
    max_response_bytes: usize,
}

impl HttpClassSource {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(20))
            .build()
            .context("Failed to build class fetch HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            max_response_bytes: 2 * 1024 * 1024,
        })
    }

    fn fetch_once(&self) -> Result<Vec<ClassEvent>> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .context("Network error during class fetch")?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(anyhow!("Class fetch failed with HTTP status {}", status));
        }

        if let Some(content_length) = response.content_length() {
            if content_length as usize > self.max_response_bytes {
                return Err(anyhow!(
                    "Class response too large ({} bytes > {} bytes)",
                    content_length,
                    self.max_response_bytes
                ));
            }
        }

        let bytes = response
            .bytes()
            .context("Failed to read class response body")?;

        if bytes.len() > self.max_response_bytes {
            return Err(anyhow!(
                "Class response too large ({} bytes > {} bytes)",
                bytes.len(),
                self.max_response_bytes
            ));
        }

        decode_classes(&bytes)
    }
}

impl ClassSource for HttpClassSource {
    fn fetch_classes(&self) -> Result<Vec<ClassEvent>> {
        self.fetch_once()
            .with_context(|| format!("Failed to fetch classes from {}", self.endpoint))
    }
}

/// Decode the endpoint's JSON array, dropping records that fail validation.
///
/// A record with an empty title or schedule is logged and skipped rather than
/// poisoning the whole list; a malformed body is an error.
pub fn decode_classes(bytes: &[u8]) -> Result<Vec<ClassEvent>> {
    let decoded: Vec<ClassEvent> =
        serde_json::from_slice(bytes).context("Class response is not a valid class list")?;

    let mut classes = Vec::with_capacity(decoded.len());
    for class in decoded {
        match class.validate() {
            Ok(()) => classes.push(class),
            Err(reason) => {
                log::warn!("Skipping invalid class record {}: {}", class.id, reason);
            }
        }
    }

    Ok(classes)
}
