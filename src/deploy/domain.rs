// ABOUTME: Extracts the host part of an environment URL.
// ABOUTME: Used for the `domain` step output.

use url::Url;

/// Host of `url`, with the port appended when it is not the scheme default.
///
/// URLs without a host (`mailto:`, `data:`) yield an empty string.
pub fn domain_from_url(url: &str) -> Result<String, url::ParseError> {
    let parsed = Url::parse(url)?;
    let host = parsed.host_str().unwrap_or_default();
    Ok(match parsed.port() {
        Some(port) if !host.is_empty() => format!("{host}:{port}"),
        _ => host.to_string(),
    })
}
