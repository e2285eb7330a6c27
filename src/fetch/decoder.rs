//! Response body decoding for the listing page.

use std::io::Read;

use flate2::read::GzDecoder;
use scraper::Html;
use tracing::debug;

/// Returns true if a `Content-Encoding` value declares gzip (case-insensitive).
#[must_use]
pub fn is_gzip_encoded(content_encoding: Option<&str>) -> bool {
    content_encoding.is_some_and(|value| value.to_ascii_lowercase().contains("gzip"))
}

/// Reverses the declared content encoding and returns the markup text.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
///
/// # Errors
///
/// Returns the gzip reader's error for a truncated or corrupt stream.
pub fn decode_body(content_encoding: Option<&str>, body: &[u8]) -> Result<String, std::io::Error> {
    let bytes = if is_gzip_encoded(content_encoding) {
        let mut decoded = Vec::new();
        GzDecoder::new(body).read_to_end(&mut decoded)?;
        debug!(
            compressed = body.len(),
            decompressed = decoded.len(),
            "gzip listing body decoded"
        );
        decoded
    } else {
        body.to_vec()
    };

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Decodes and parses a listing body into a document.
///
/// # Errors
///
/// See [`decode_body`]. HTML parsing itself recovers from malformed markup.
pub fn decode_document(content_encoding: Option<&str>, body: &[u8]) -> Result<Html, std::io::Error> {
    let markup = decode_body(content_encoding, body)?;
    Ok(Html::parse_document(&markup))
}
