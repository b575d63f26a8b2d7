//! Format utilities (time)

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Current UTC time as an RFC 3339 string, e.g. `2026-08-25T14:03:07Z`.
///
/// This is the default timestamp segment. Formatting a valid
/// [`OffsetDateTime`] into RFC 3339 cannot fail in practice; the empty-string
/// fallback keeps the logger factory infallible regardless.
#[must_use]
pub fn iso_timestamp() -> String {
    OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default()
}
