//! Shopify Admin API version selection.
//!
//! The version is embedded in every request path as
//! `admin/api/{version}/...`.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A Shopify Admin API version.
///
/// Stable versions are released quarterly and identified by `YYYY-MM`.
///
/// # Example
///
/// ```rust
/// use shopify_client::ApiVersion;
///
/// let version: ApiVersion = "2024-10".parse().unwrap();
/// assert_eq!(version, ApiVersion::stable(2024, 10).unwrap());
/// assert_eq!(version.to_string(), "2024-10");
///
/// let unstable: ApiVersion = "unstable".parse().unwrap();
/// assert!(!unstable.is_stable());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ApiVersion {
    /// A dated, quarterly release.
    Stable {
        /// Release year, e.g. `2025`.
        year: u16,
        /// Release month: one of 1, 4, 7 or 10.
        month: u8,
    },
    /// The unstable version, for development only.
    Unstable,
}

impl ApiVersion {
    const RELEASE_MONTHS: [u8; 4] = [1, 4, 7, 10];

    /// Creates a stable version for the given quarter.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if `month` is not a
    /// quarterly release month.
    pub fn stable(year: u16, month: u8) -> Result<Self, ConfigError> {
        if !Self::RELEASE_MONTHS.contains(&month) || year < 2000 {
            return Err(ConfigError::InvalidApiVersion {
                version: format!("{year:04}-{month:02}"),
            });
        }
        Ok(Self::Stable { year, month })
    }

    /// Returns the newest stable version known to this crate.
    #[must_use]
    pub const fn latest() -> Self {
        Self::Stable {
            year: 2025,
            month: 10,
        }
    }

    /// Returns `true` for dated releases.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        matches!(self, Self::Stable { .. })
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stable { year, month } => write!(f, "{year:04}-{month:02}"),
            Self::Unstable => f.write_str("unstable"),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidApiVersion {
            version: s.to_string(),
        };

        let s = s.trim();
        if s.eq_ignore_ascii_case("unstable") {
            return Ok(Self::Unstable);
        }

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year = year.parse::<u16>().map_err(|_| invalid())?;
        let month = month.parse::<u8>().map_err(|_| invalid())?;

        Self::stable(year, month).map_err(|_| invalid())
    }
}
