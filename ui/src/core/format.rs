//! Display formatting for server-assigned timestamps.

use time::{format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime};

/// Render an RFC 3339 timestamp as a compact badge like `Mar 4, 2026`.
/// Unparseable input falls back to its date portion.
pub fn format_created_at(raw: &str) -> String {
    match OffsetDateTime::parse(raw, &Rfc3339) {
        Ok(ts) => ts
            .format(&format_description!(
                "[month repr:short] [day padding:none], [year]"
            ))
            .unwrap_or_else(|_| raw.to_string()),
        Err(_) => raw.split('T').next().unwrap_or(raw).to_string(),
    }
}
