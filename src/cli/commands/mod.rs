//! Command implementations.

/// Supported-language listing.
pub mod languages;

/// Document translation.
pub mod translate;
