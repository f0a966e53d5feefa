use std::borrow::Cow;
use std::fmt::Write as _;

use anyhow::Context;
use bytes::Bytes;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderValue, Method, Request, Response, Uri};
use platform::{Config, Error, HttpRequest, Result};
use tracing::{info, warn};

use crate::model::TripRecord;
use crate::outcome::{Failure, Outcome};

/// Path of the driver's active trip resource, relative to the API base URL.
pub const ACTIVE_TRIP_PATH: &str = "/trip/driver/active";

/// Configuration key holding the API base URL.
pub const BASE_URL_KEY: &str = "API_BASE_URL";

const JSON: &str = "application/json";

/// Issues `GET {base}/trip/driver/active` on behalf of a driver.
///
/// Each call is independent: the fetcher holds no per-request state, so it
/// can be shared or cloned freely.
#[derive(Debug, Clone)]
pub struct ActiveTripFetcher<P> {
    provider: P,
    endpoint: String,
}

impl<P: HttpRequest> ActiveTripFetcher<P> {
    /// Create a fetcher for the backend at `base_url`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] when `base_url` does not form an
    /// absolute URI.
    pub fn new(provider: P, base_url: &str) -> Result<Self> {
        let endpoint = format!("{}{ACTIVE_TRIP_PATH}", base_url.trim_end_matches('/'));

        let uri = endpoint
            .parse::<Uri>()
            .map_err(|err| Error::InvalidConfig(format!("invalid base url `{base_url}`: {err}")))?;
        if uri.scheme().is_none() || uri.authority().is_none() {
            return Err(Error::InvalidConfig(format!("base url `{base_url}` is not absolute")));
        }

        Ok(Self { provider, endpoint })
    }

    /// Create a fetcher using the base URL supplied by the provider's
    /// configuration.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] when the setting is unavailable or
    /// malformed.
    pub async fn from_config(provider: P) -> Result<Self>
    where
        P: Config,
    {
        let base_url = Config::get(&provider, BASE_URL_KEY)
            .await
            .map_err(|err| Error::InvalidConfig(format!("getting `{BASE_URL_KEY}`: {err}")))?;
        Self::new(provider, &base_url)
    }

    /// The fully qualified URL requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the active trip for the driver identified by `session_token`.
    ///
    /// The token is not validated locally; the backend rejects bad tokens.
    ///
    /// # Errors
    /// Returns the response status as a [`Failure`], or
    /// [`Failure::NO_RESPONSE`] when the backend could not be reached.
    pub async fn fetch(&self, session_token: &str) -> Outcome {
        self.request(session_token).await.map_err(|err| {
            let failure = Failure::from(&err);
            warn!(status = failure.status(), error = %err, "active trip request failed");
            failure
        })
    }

    /// Fetch the active trip in the background and hand the outcome to
    /// `completion`.
    ///
    /// `completion` runs exactly once, on a Tokio worker. If the task is
    /// dropped before the request finishes (for example, the runtime shuts
    /// down), `completion` receives [`Failure::NO_RESPONSE`]. No handle is
    /// returned: the request cannot be cancelled once started.
    ///
    /// # Panics
    /// Panics when called outside a Tokio runtime.
    pub fn fetch_then<F>(&self, session_token: &str, completion: F)
    where
        P: Clone + 'static,
        F: FnOnce(Outcome) + Send + 'static,
    {
        let fetcher = self.clone();
        let session_token = session_token.to_string();
        let completion = Completion::new(completion);

        tokio::spawn(async move {
            let outcome = fetcher.fetch(&session_token).await;
            completion.deliver(outcome);
        });
    }

    async fn request(&self, session_token: &str) -> Result<TripRecord> {
        let request = Request::builder()
            .method(Method::GET)
            .uri(&self.endpoint)
            .header(AUTHORIZATION, format!("Bearer {session_token}"))
            .body(Bytes::new())
            .context("building active trip request")?;

        info!("Get Active Trip request: {}", curl_description(&request));

        let response =
            HttpRequest::fetch(&self.provider, request).await.context("fetching active trip")?;

        decode(&response)
    }
}

/// One-shot continuation that reports [`Failure::NO_RESPONSE`] if dropped
/// before an outcome was delivered.
struct Completion<F: FnOnce(Outcome)> {
    callback: Option<F>,
}

impl<F: FnOnce(Outcome)> Completion<F> {
    const fn new(callback: F) -> Self {
        Self { callback: Some(callback) }
    }

    fn deliver(mut self, outcome: Outcome) {
        if let Some(callback) = self.callback.take() {
            callback(outcome);
        }
    }
}

impl<F: FnOnce(Outcome)> Drop for Completion<F> {
    fn drop(&mut self) {
        if let Some(callback) = self.callback.take() {
            warn!("active trip request abandoned before completion");
            callback(Err(Failure::NO_RESPONSE));
        }
    }
}

// Status first, then content type, then the body.
fn decode(response: &Response<Bytes>) -> Result<TripRecord> {
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status(status.as_u16()));
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .map(|value| header_text(value).into_owned())
        .unwrap_or_default();
    if !is_json(&content_type) {
        return Err(Error::ContentType { status: status.as_u16(), content_type });
    }

    serde_json::from_slice(response.body())
        .map_err(|err| Error::Decode { status: status.as_u16(), message: err.to_string() })
}

fn is_json(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(JSON))
}

/// Render the request as a single `curl` command line for the logs.
fn curl_description(request: &Request<Bytes>) -> String {
    let mut line = format!("curl -v -X {}", request.method());

    for (name, value) in request.headers() {
        let value =
            if name == AUTHORIZATION { redact(value) } else { header_text(value).into_owned() };
        let _ = write!(line, " -H \"{name}: {value}\"");
    }

    let _ = write!(line, " \"{}\"", request.uri());
    line
}

// Keep the auth scheme, hide the credential.
fn redact(value: &HeaderValue) -> String {
    header_text(value)
        .split_once(' ')
        .map_or_else(|| "***".to_string(), |(scheme, _)| format!("{scheme} ***"))
}

fn header_text(value: &HeaderValue) -> Cow<'_, str> {
    String::from_utf8_lossy(value.as_bytes())
}

#[cfg(test)]
mod tests {
    use http::StatusCode;

    use super::*;

    fn response(status: u16, content_type: Option<&str>, body: &'static str) -> Response<Bytes> {
        let mut builder = Response::builder().status(status);
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        builder.body(Bytes::from_static(body.as_bytes())).expect("valid response")
    }

    #[test]
    fn json_essence() {
        assert!(is_json("application/json"));
        assert!(is_json("Application/JSON; charset=utf-8"));
        assert!(!is_json("application/problem+json"));
        assert!(!is_json("text/plain"));
        assert!(!is_json(""));
    }

    #[test]
    fn curl_line() {
        let request = Request::builder()
            .method(Method::GET)
            .uri("http://localhost:8080/trip/driver/active")
            .header(AUTHORIZATION, "Bearer secret-token")
            .body(Bytes::new())
            .expect("valid request");

        let line = curl_description(&request);
        assert_eq!(
            line,
            r#"curl -v -X GET -H "authorization: Bearer ***" "http://localhost:8080/trip/driver/active""#
        );
        assert!(!line.contains("secret-token"));
    }

    #[test]
    fn status_checked_before_content_type() {
        let err = decode(&response(404, Some("text/html"), "<h1>Not Found</h1>"))
            .expect_err("should fail");
        assert_eq!(err, Error::Status(StatusCode::NOT_FOUND.as_u16()));
    }

    #[test]
    fn missing_content_type() {
        let err = decode(&response(200, None, "{}")).expect_err("should fail");
        assert_eq!(err, Error::ContentType { status: 200, content_type: String::new() });
    }

    #[test]
    fn completion_delivers_once() {
        let mut received = Vec::new();
        Completion::new(|outcome: Outcome| received.push(outcome)).deliver(Err(Failure::new(404)));
        assert_eq!(received, vec![Err(Failure::new(404))]);
    }

    #[test]
    fn completion_dropped_undelivered() {
        let mut received = Vec::new();
        drop(Completion::new(|outcome: Outcome| received.push(outcome)));
        assert_eq!(received, vec![Err(Failure::NO_RESPONSE)]);
    }

    #[test]
    fn decode_error_keeps_status() {
        let err = decode(&response(200, Some(JSON), r#"{"id": 1}"#)).expect_err("should fail");
        assert!(matches!(err, Error::Decode { status: 200, .. }));
    }
}
