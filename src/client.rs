//! HTTP client wrapper shared by the listing fetch and chart downloads.
//!
//! Automatic response decompression is left off: the listing decoder reads the
//! declared `Content-Encoding` itself, and chart PDFs are streamed as-is.

use reqwest::Client;
use reqwest::header::ACCEPT_ENCODING;
use tracing::debug;

/// Project URL for User-Agent identification.
const PROJECT_UA_URL: &str = "https://github.com/fierce/faa-charts";

/// Default User-Agent for all requests (identifies the tool).
#[must_use]
pub(crate) fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("faa-charts/{version} (chart-downloader; +{PROJECT_UA_URL})")
}

/// HTTP client passed explicitly to the fetch and download stages.
///
/// Create it once per run and reuse it; the inner reqwest client pools
/// connections.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a client with the default User-Agent and reqwest's default timeouts.
    ///
    /// # Errors
    ///
    /// Returns the reqwest builder error if the TLS backend cannot be
    /// initialized.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(default_user_agent())
            .build()?;
        Ok(Self { client })
    }

    /// Starts a GET request that asks for a gzip-encoded response.
    pub(crate) fn get_gzip(&self, url: &str) -> reqwest::RequestBuilder {
        debug!(url, "GET (accept gzip)");
        self.client.get(url).header(ACCEPT_ENCODING, "gzip")
    }

    /// Starts a plain GET request.
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        debug!(url, "GET");
        self.client.get(url)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_contains_version_and_url() {
        let ua = default_user_agent();
        assert!(ua.contains(PROJECT_UA_URL), "UA must contain project URL: {ua}");
        assert_eq!(
            env!("CARGO_PKG_VERSION"),
            ua.strip_prefix("faa-charts/")
                .and_then(|s| s.split(' ').next())
                .unwrap()
        );
    }

    #[test]
    fn test_http_client_builds() {
        let client = HttpClient::new();
        assert!(client.is_ok());
    }
}
