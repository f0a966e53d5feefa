use std::env;

use anyhow::{Context, Result};
use bytes::Bytes;
use http::{Request, Response};
use platform::{Config, HttpRequest};

use crate::config;

/// Host provider backed by `reqwest` and the process environment.
#[derive(Debug, Clone)]
pub struct Provider {
    client: reqwest::Client,
}

impl Provider {
    /// Build the provider, applying any configured request timeout.
    ///
    /// # Errors
    /// Returns an error when the HTTP client cannot be initialised (for
    /// example, when no TLS backend is available).
    pub fn new() -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(format!("DriveHub/{}", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config::get_request_timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().context("building HTTP client")?;
        Ok(Self { client })
    }
}

impl HttpRequest for Provider {
    async fn fetch(&self, request: Request<Bytes>) -> Result<Response<Bytes>> {
        let request = reqwest::Request::try_from(request).context("converting request")?;
        let response = self.client.execute(request).await.context("sending request")?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.context("reading response body")?;

        let mut response = Response::new(body);
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        Ok(response)
    }
}

impl Config for Provider {
    async fn get(&self, key: &str) -> Result<String> {
        match key {
            trip::BASE_URL_KEY => Ok(config::get_api_base_url()),
            _ => env::var(key).with_context(|| format!("getting `{key}`")),
        }
    }
}
