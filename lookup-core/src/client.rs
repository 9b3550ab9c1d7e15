use async_trait::async_trait;
use reqwest::Client;

use crate::{
    error::{GENERIC_FAILURE_MESSAGE, LookupError},
    model::{ErrorBody, RecordPayload, WeatherRecord},
};

/// Anything that can resolve an identifier to a stored weather record.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch(&self, id: &str) -> Result<WeatherRecord, LookupError>;
}

/// Record source backed by the HTTP backend (`GET {base_url}/weather/{id}`).
#[derive(Debug, Clone)]
pub struct HttpRecordSource {
    base_url: String,
    http: Client,
}

impl HttpRecordSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, http: Client::new() }
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch(&self, id: &str) -> Result<WeatherRecord, LookupError> {
        if id.is_empty() {
            return Err(LookupError::EmptyId);
        }

        // The identifier is embedded as-is, matching what the backend stores.
        let url = format!("{}/weather/{}", self.base_url, id);
        tracing::debug!(%url, "fetching weather record");

        let res = self.http.get(&url).send().await.map_err(LookupError::Network)?;
        let status = res.status();
        let body = res.text().await.map_err(LookupError::Network)?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), body = %truncate_body(&body), "backend error");
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.detail)
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
            return Err(LookupError::Backend { status: status.as_u16(), message });
        }

        let payload: RecordPayload =
            serde_json::from_str(&body).map_err(LookupError::Malformed)?;
        payload.into_record()
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    // Cut on a char boundary; MAX itself may fall inside a multi-byte char.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
