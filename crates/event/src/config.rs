//! Configuration types for event decoding.
//!
//! [`DecodeConfig`] controls how raw records are split and whether the
//! synthetic `geo_location` field is produced. It is cheap to clone and
//! serializable, so it can be embedded in external configuration files.
//!
//! ```rust
//! use event::DecodeConfig;
//!
//! let config = DecodeConfig::default();
//! config.validate().expect("defaults are valid");
//! assert_eq!(config.delimiter, '\t');
//! ```
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::DEFAULT_DELIMITER;

/// Runtime configuration for record decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
    /// Configuration version. Must be at least `1`.
    ///
    /// Default: `1`
    pub version: u32,

    /// Column separator. Enriched events use a horizontal tab and never
    /// escape it inside a column.
    ///
    /// Default: `'\t'`
    pub delimiter: char,

    /// Whether whole-event materialization adds `geo_location`
    /// (`"<lat>,<lon>"`) when both geo columns are present.
    ///
    /// Default: `false`
    pub include_geo_location: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            delimiter: DEFAULT_DELIMITER,
            include_geo_location: false,
        }
    }
}

impl DecodeConfig {
    /// Validates this configuration. Call once at start-up.
    ///
    /// The delimiter may not be a line break or a character that is
    /// structural in the JSON columns.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 {
            return Err(ConfigError::InvalidVersion(self.version));
        }
        if matches!(self.delimiter, '\n' | '\r' | '{' | '}' | '"') {
            return Err(ConfigError::InvalidDelimiter(self.delimiter));
        }
        Ok(())
    }
}

/// Errors raised while validating decode configuration or building a field
/// table. These are start-up errors, never request-time errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("decode config version must be >= 1, got {0}")]
    InvalidVersion(u32),

    #[error("delimiter {0:?} cannot separate enriched event columns")]
    InvalidDelimiter(char),

    #[error("field table is empty")]
    EmptyTable,

    #[error("field {0} appears more than once in the field table")]
    DuplicateField(String),

    #[error("geo column {0} is not in the field table")]
    UnknownGeoField(String),

    #[error("geo column {0} must be of kind double")]
    GeoFieldNotDouble(String),
}
