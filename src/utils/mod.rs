//! Small helpers shared across the SDK: API host normalization and time.

use crate::{Error, Result};
use std::time::{SystemTime, UNIX_EPOCH};
use url::Url;

/// Normalize an API host into a canonical base URL.
///
/// The scheme is forced to `https` (a bare host or `http://` both become
/// `https://`) and any trailing slash is stripped, so routes can be appended
/// verbatim. Fails with [`Error::InvalidConfiguration`] when no parseable
/// network location remains after normalization.
pub fn normalize_api_host(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_configuration("API host must not be empty"));
    }

    let lower = trimmed.to_ascii_lowercase();
    let mut host = if lower.starts_with("http://") {
        format!("https://{}", &trimmed["http://".len()..])
    } else if lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    while host.ends_with('/') {
        host.pop();
    }

    let parsed = Url::parse(&host)
        .map_err(|e| Error::invalid_configuration(format!("invalid API host '{raw}': {e}")))?;
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(Error::invalid_configuration(format!(
            "API host '{raw}' has no network location"
        )));
    }

    Ok(host)
}

/// Current Unix time in seconds.
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
