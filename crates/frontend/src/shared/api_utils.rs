//! API transport for console-to-store communication
//!
//! [`ApiTransport`] is the single seam between the console and the store. The
//! production implementation is [`HttpTransport`]; tests substitute a scripted
//! in-memory transport.

use crate::shared::error::{ConsoleError, ConsoleResult};
use async_trait::async_trait;
use reqwest::header::{HeaderName, CONTENT_DISPOSITION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Binary response of a report endpoint
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub bytes: Vec<u8>,
    /// Name suggested by `Content-Disposition`, if the store sent one
    pub filename: Option<String>,
    pub content_type: Option<String>,
}

/// Paths are relative to the API base URL (`/produtos/`), queries are already
/// encoded (`busca=x&page=1`) or empty.
#[async_trait(?Send)]
pub trait ApiTransport {
    async fn get_json(&self, path: &str, query: &str) -> ConsoleResult<Value>;
    async fn post_json(&self, path: &str, body: &Value) -> ConsoleResult<Value>;
    async fn put_json(&self, path: &str, body: &Value) -> ConsoleResult<Value>;
    async fn delete(&self, path: &str) -> ConsoleResult<()>;
    async fn get_document(&self, path: &str, query: &str) -> ConsoleResult<Document>;
}

/// Build a full API URL from base, path and an encoded query
pub fn api_url(base: &str, path: &str, query: &str) -> String {
    let base = base.trim_end_matches('/');
    if query.is_empty() {
        format!("{}{}", base, path)
    } else {
        format!("{}{}?{}", base, path, query)
    }
}

pub fn decode<T: DeserializeOwned>(value: Value) -> ConsoleResult<T> {
    Ok(serde_json::from_value(value)?)
}

fn encode<B: Serialize>(body: &B) -> ConsoleResult<Value> {
    serde_json::to_value(body)
        .map_err(|e| ConsoleError::Validation(format!("cannot encode request: {}", e)))
}

pub async fn get<T, A>(api: &A, path: &str, query: &str) -> ConsoleResult<T>
where
    T: DeserializeOwned,
    A: ApiTransport + ?Sized,
{
    decode(api.get_json(path, query).await?)
}

pub async fn post<B, T, A>(api: &A, path: &str, body: &B) -> ConsoleResult<T>
where
    B: Serialize,
    T: DeserializeOwned,
    A: ApiTransport + ?Sized,
{
    decode(api.post_json(path, &encode(body)?).await?)
}

pub async fn put<B, T, A>(api: &A, path: &str, body: &B) -> ConsoleResult<T>
where
    B: Serialize,
    T: DeserializeOwned,
    A: ApiTransport + ?Sized,
{
    decode(api.put_json(path, &encode(body)?).await?)
}

// ============================================================================
// HTTP
// ============================================================================

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> ConsoleResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConsoleError::Transport(format!("cannot build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str, query: &str) -> String {
        api_url(&self.base_url, path, query)
    }
}

async fn read_json(response: reqwest::Response) -> ConsoleResult<Value> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        tracing::warn!("store answered {}: {}", status, body);
        return Err(ConsoleError::from_status(status, &body));
    }
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&body)?)
}

/// `attachment; filename="relatorio.pdf"` -> `relatorio.pdf`
pub fn filename_from_disposition(header: &str) -> Option<String> {
    header.split(';').map(str::trim).find_map(|part| {
        let (key, value) = part.split_once('=')?;
        if !key.trim().eq_ignore_ascii_case("filename") {
            return None;
        }
        let name = value.trim().trim_matches('"');
        (!name.is_empty()).then(|| name.to_string())
    })
}

#[async_trait(?Send)]
impl ApiTransport for HttpTransport {
    async fn get_json(&self, path: &str, query: &str) -> ConsoleResult<Value> {
        let url = self.url(path, query);
        tracing::debug!("GET {}", url);
        read_json(self.client.get(&url).send().await?).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> ConsoleResult<Value> {
        let url = self.url(path, "");
        tracing::debug!("POST {}", url);
        read_json(self.client.post(&url).json(body).send().await?).await
    }

    async fn put_json(&self, path: &str, body: &Value) -> ConsoleResult<Value> {
        let url = self.url(path, "");
        tracing::debug!("PUT {}", url);
        read_json(self.client.put(&url).json(body).send().await?).await
    }

    async fn delete(&self, path: &str) -> ConsoleResult<()> {
        let url = self.url(path, "");
        tracing::debug!("DELETE {}", url);
        read_json(self.client.delete(&url).send().await?)
            .await
            .map(|_| ())
    }

    async fn get_document(&self, path: &str, query: &str) -> ConsoleResult<Document> {
        let url = self.url(path, query);
        tracing::debug!("GET {} (document)", url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ConsoleError::from_status(status, &body));
        }
        let header = |name: HeaderName| {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let filename = header(CONTENT_DISPOSITION).and_then(|h| filename_from_disposition(&h));
        let content_type = header(CONTENT_TYPE);
        let bytes = response.bytes().await?.to_vec();
        tracing::info!("received document: {} bytes", bytes.len());
        Ok(Document {
            bytes,
            filename,
            content_type,
        })
    }
}
