//! Constants used throughout the ward core crate.

/// Data file used when no explicit location is configured.
pub const DEFAULT_DATA_FILE: &str = "data/wardbook.json";

/// Environment variable that overrides the data file location.
pub const DATA_FILE_ENV: &str = "WARD_DATA_FILE";
