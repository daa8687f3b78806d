//! Utility modules.

/// Timestamp (de)serialization for post `created_at` fields.
pub mod datetime;

/// Keeps response bodies in logs short and on one line.
pub mod log_sanitizer;
