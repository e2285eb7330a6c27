//! Chart listing fetch and response decoding.
//!
//! One GET to the NFDC airport display page, with gzip requested. The body is
//! read to the end, gunzipped when the response declares gzip, parsed, and
//! handed to the catalog extractor. Failures are returned to the caller
//! without retry.

mod decoder;
mod error;

pub use decoder::{decode_body, decode_document, is_gzip_encoded};
pub use error::FetchError;

use reqwest::header::CONTENT_ENCODING;
use tracing::{debug, info, instrument};
use url::Url;

use crate::airport::AirportId;
use crate::catalog::{Catalog, extract_catalog};
use crate::client::HttpClient;

/// Airport display page; the identifier is appended as the `airportId` value.
pub const LISTING_URL_BASE: &str =
    "https://nfdc.faa.gov/nfdcApps/services/ajv5/airportDisplay.jsp?airportId=";

/// Builds the listing URL for an airport.
#[must_use]
pub fn listing_url(airport: &AirportId) -> String {
    format!("{LISTING_URL_BASE}{airport}")
}

/// Raw listing response with its declared encoding.
#[derive(Debug, Clone)]
pub struct ListingBody {
    /// `Content-Encoding` header value, if any.
    pub content_encoding: Option<String>,
    /// Body bytes exactly as received.
    pub bytes: Vec<u8>,
}

/// Fetches the listing body without decoding it.
///
/// # Errors
///
/// Returns [`FetchError::Transport`] on network failure and
/// [`FetchError::HttpStatus`] for a non-2xx response.
#[instrument(skip(client))]
pub async fn fetch_listing(client: &HttpClient, url: &str) -> Result<ListingBody, FetchError> {
    let response = client
        .get_gzip(url)
        .send()
        .await
        .map_err(|e| FetchError::transport(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::http_status(url, status.as_u16()));
    }

    let content_encoding = response
        .headers()
        .get(CONTENT_ENCODING)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let bytes = response
        .bytes()
        .await
        .map_err(|e| FetchError::transport(url, e))?
        .to_vec();

    debug!(
        bytes = bytes.len(),
        encoding = content_encoding.as_deref().unwrap_or("identity"),
        "listing received"
    );
    Ok(ListingBody {
        content_encoding,
        bytes,
    })
}

/// Fetches and extracts the catalog from an explicit listing URL.
///
/// # Errors
///
/// Returns [`FetchError`] for transport, status, decode, or extraction
/// failures.
#[instrument(skip(client))]
pub async fn fetch_catalog_from(client: &HttpClient, url: &str) -> Result<Catalog, FetchError> {
    let base = Url::parse(url).map_err(|_| FetchError::invalid_url(url))?;
    let body = fetch_listing(client, url).await?;

    let document = decode_document(body.content_encoding.as_deref(), &body.bytes)
        .map_err(|e| FetchError::decode(url, e))?;
    let catalog = extract_catalog(&document, &base).map_err(|source| FetchError::Catalog {
        url: url.to_string(),
        source,
    })?;

    info!(charts = catalog.len(), "chart listing loaded");
    Ok(catalog)
}

/// Fetches and extracts the catalog for an airport.
///
/// # Errors
///
/// See [`fetch_catalog_from`].
pub async fn fetch_catalog(client: &HttpClient, airport: &AirportId) -> Result<Catalog, FetchError> {
    fetch_catalog_from(client, &listing_url(airport)).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_url_contains_identifier() {
        let airport = AirportId::parse("kord").unwrap();
        assert_eq!(
            listing_url(&airport),
            "https://nfdc.faa.gov/nfdcApps/services/ajv5/airportDisplay.jsp?airportId=KORD"
        );
        assert!(Url::parse(&listing_url(&airport)).is_ok());
    }

    #[tokio::test]
    async fn test_fetch_catalog_from_invalid_url() {
        let client = HttpClient::new().unwrap();
        let result = fetch_catalog_from(&client, "not a url").await;
        assert!(matches!(result, Err(FetchError::InvalidUrl { .. })));
    }
}
