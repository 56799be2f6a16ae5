use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::ClientError;

/// One upstream service: a shared HTTP client plus the service's base URL.
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    http: reqwest::Client,
    base: Url,
}

impl Transport {
    pub(crate) fn new(http: reqwest::Client, base: Url) -> Self {
        Self { http, base }
    }

    pub(crate) fn base(&self) -> &Url {
        &self.base
    }

    /// Append percent-encoded path segments to the base URL, keeping any base path prefix.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ClientError::InvalidEndpoint {
                    base: self.base.to_string(),
                })?;
            path.pop_if_empty().extend(segments);
        }
        url.set_query(None);
        Ok(url)
    }

    pub(crate) fn get(&self, url: Url) -> RequestBuilder {
        self.http.get(url)
    }

    pub(crate) fn post(&self, url: Url) -> RequestBuilder {
        self.http.post(url)
    }

    /// Send exactly one request and decode a JSON success body.
    pub(crate) async fn execute<T>(
        &self,
        context: &'static str,
        request: RequestBuilder,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let mut request = request
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .build()
            .map_err(|source| ClientError::Transport { context, source })?;
        // `.json()` bodies set this already; bodyless requests get it here.
        request
            .headers_mut()
            .entry(CONTENT_TYPE)
            .or_insert(HeaderValue::from_static("application/json"));
        let method = request.method().clone();
        let url = request.url().clone();

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|source| ClientError::Transport { context, source })?;

        let status = response.status();
        debug!(%method, %url, %status, "upstream responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(%method, %url, %status, %body, "upstream rejected request");
            return Err(ClientError::status(context, status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ClientError::Transport { context, source })?;

        serde_json::from_slice(&body).map_err(|source| ClientError::Decode { context, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(base: &str) -> Transport {
        Transport::new(
            reqwest::Client::new(),
            Url::parse(base).expect("valid base"),
        )
    }

    #[test]
    fn endpoint_joins_segments_onto_root_base() {
        let url = transport("http://localhost:8080")
            .endpoint(&["api", "v1", "talents"])
            .expect("endpoint builds");
        assert_eq!(url.as_str(), "http://localhost:8080/api/v1/talents");
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        let with_slash = transport("https://gateway.test/portal/")
            .endpoint(&["api", "v1", "jobs"])
            .expect("endpoint builds");
        let without_slash = transport("https://gateway.test/portal")
            .endpoint(&["api", "v1", "jobs"])
            .expect("endpoint builds");

        assert_eq!(with_slash.as_str(), "https://gateway.test/portal/api/v1/jobs");
        assert_eq!(with_slash, without_slash);
    }

    #[test]
    fn endpoint_percent_encodes_identifiers() {
        let url = transport("http://localhost:8080")
            .endpoint(&["api", "v1", "feedback", "talent", "a b/c", "stats"])
            .expect("endpoint builds");
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/v1/feedback/talent/a%20b%2Fc/stats"
        );
    }
}
