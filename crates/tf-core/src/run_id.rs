//! Process-level run ID plus fresh IDs for individual records.
//!
//! Each process gets one ULID at startup; every ranking pass logged within
//! the process carries it, so a batch of log lines can be traced back to
//! the run that produced them. `generate` mints fresh ULIDs for
//! per-record ids (applications, request ids).

use once_cell::sync::Lazy;
use ulid::Ulid;

static RUN_ID: Lazy<String> = Lazy::new(|| Ulid::new().to_string());

/// Returns the process-level run ID: generated once at first access,
/// time-ordered, 26 characters, URL-safe.
#[inline]
pub fn get() -> &'static str {
    &RUN_ID
}

/// Generates a fresh ULID.
#[inline]
pub fn generate() -> String {
    Ulid::new().to_string()
}
