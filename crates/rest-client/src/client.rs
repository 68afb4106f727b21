//! Default transport built on reqwest.

use crate::error::RestError;
use crate::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use std::time::Duration;

/// reqwest-backed implementation of [`HttpTransport`].
///
/// No timeout is applied unless one is configured with
/// [`RestClient::with_timeout`].
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
}

impl RestClient {
    /// Create a new REST client with reqwest defaults.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new() -> Result<Self, RestError> {
        Self::from_builder(Client::builder())
    }

    /// Create a new REST client with a request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, RestError> {
        Self::from_builder(Client::builder().timeout(timeout))
    }

    /// Wrap an already configured reqwest client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    fn from_builder(builder: reqwest::ClientBuilder) -> Result<Self, RestError> {
        let client = builder
            .build()
            .map_err(|e| RestError::RequestBuild(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for RestClient {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, RestError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        tracing::debug!(method = %method, url = %url, has_body = body.is_some(), "HTTP request");

        let mut builder = self
            .client
            .request(to_reqwest_method(method), &url)
            .headers(build_header_map(&headers)?);

        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!(status = status, url = %url, "HTTP response");

        Ok(HttpResponse { status, body })
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Build a header map where later pairs replace earlier pairs of the same name.
fn build_header_map(headers: &[(String, String)]) -> Result<HeaderMap, RestError> {
    let mut map = HeaderMap::with_capacity(headers.len());

    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| RestError::RequestBuild(format!("invalid header name {name}: {e}")))?;
        let value = HeaderValue::from_str(value).map_err(|e| {
            RestError::RequestBuild(format!("invalid value for {}: {e}", name.as_str()))
        })?;
        map.insert(name, value);
    }

    Ok(map)
}
