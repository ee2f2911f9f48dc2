//! Validated newtype wrappers for configuration values.
//!
//! These wrappers validate on construction so a [`ClientConfig`](super::ClientConfig)
//! can never hold an empty token or a malformed shop domain.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Shopify Admin API access token.
///
/// The `Debug` implementation masks the token so it never ends up in logs.
///
/// # Example
///
/// ```rust
/// use shopify_client::AccessToken;
///
/// let token = AccessToken::new("shpat_123").unwrap();
/// assert_eq!(token.as_ref(), "shpat_123");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// API key and password of a private app, sent as HTTP basic auth.
///
/// Only used when no [`AccessToken`] is configured.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateAppCredentials {
    api_key: String,
    password: String,
}

impl PrivateAppCredentials {
    /// Creates a new credential pair.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPrivateAppCredential`] if either value is empty.
    pub fn new(api_key: impl Into<String>, password: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        let password = password.into();
        if api_key.is_empty() {
            return Err(ConfigError::EmptyPrivateAppCredential { field: "api_key" });
        }
        if password.is_empty() {
            return Err(ConfigError::EmptyPrivateAppCredential { field: "password" });
        }
        Ok(Self { api_key, password })
    }

    /// Returns the API key (basic auth user name).
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the password (basic auth password).
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for PrivateAppCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateAppCredentials")
            .field("api_key", &self.api_key)
            .field("password", &"*****")
            .finish()
    }
}

/// A normalized Shopify shop domain.
///
/// Surrounding whitespace and dots are trimmed and `.myshopify.com` is
/// appended when missing, so `" myshop."`, `"myshop"` and
/// `"myshop.myshopify.com"` all name the same shop.
///
/// # Example
///
/// ```rust
/// use shopify_client::ShopDomain;
///
/// let domain = ShopDomain::new(" myshop. ").unwrap();
/// assert_eq!(domain.full_name(), "myshop.myshopify.com");
/// assert_eq!(domain.short_name(), "myshop");
/// assert_eq!(domain.base_url(), "https://myshop.myshopify.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ShopDomain {
    full_name: String,
}

impl ShopDomain {
    const SUFFIX: &'static str = ".myshopify.com";

    /// Creates a new normalized shop domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopDomain`] if nothing remains after
    /// trimming or the shop name contains characters other than ASCII
    /// letters, digits and hyphens.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = domain.into();
        let trimmed = raw.trim().trim_matches('.').to_lowercase();

        let full_name = if trimmed.contains("myshopify.com") {
            trimmed
        } else {
            format!("{trimmed}{}", Self::SUFFIX)
        };

        let short = full_name.strip_suffix(Self::SUFFIX).unwrap_or_default();
        let valid = !short.is_empty()
            && !short.starts_with('-')
            && !short.ends_with('-')
            && short
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

        if !valid {
            return Err(ConfigError::InvalidShopDomain { domain: raw });
        }

        Ok(Self { full_name })
    }

    /// Returns the full domain, e.g. `myshop.myshopify.com`.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Returns the shop name without the `.myshopify.com` suffix.
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.full_name
            .strip_suffix(Self::SUFFIX)
            .unwrap_or(&self.full_name)
    }

    /// Returns the HTTPS base URL of the shop.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("https://{}", self.full_name)
    }
}

impl AsRef<str> for ShopDomain {
    fn as_ref(&self) -> &str {
        &self.full_name
    }
}

impl fmt::Display for ShopDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

impl Serialize for ShopDomain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.full_name)
    }
}

impl<'de> Deserialize<'de> for ShopDomain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_rejects_empty_string() {
        assert!(matches!(
            AccessToken::new(""),
            Err(ConfigError::EmptyAccessToken)
        ));
        assert!(matches!(
            AccessToken::new("   "),
            Err(ConfigError::EmptyAccessToken)
        ));
    }

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("super-secret").unwrap();
        assert_eq!(format!("{token:?}"), "AccessToken(*****)");
    }

    #[test]
    fn test_private_app_credentials_mask_password() {
        let creds = PrivateAppCredentials::new("key", "hunter2").unwrap();
        let debug = format!("{creds:?}");
        assert!(debug.contains("key"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_private_app_credentials_reject_empty_fields() {
        assert!(matches!(
            PrivateAppCredentials::new("", "pw"),
            Err(ConfigError::EmptyPrivateAppCredential { field: "api_key" })
        ));
        assert!(matches!(
            PrivateAppCredentials::new("key", ""),
            Err(ConfigError::EmptyPrivateAppCredential { field: "password" })
        ));
    }

    #[test]
    fn test_shop_full_name_normalization() {
        for input in [
            "myshop",
            "myshop.",
            " myshop",
            "myshop ",
            "myshop \n",
            "myshop.myshopify.com",
        ] {
            let domain = ShopDomain::new(input).unwrap();
            assert_eq!(domain.full_name(), "myshop.myshopify.com", "input {input:?}");
        }
    }

    #[test]
    fn test_shop_short_name_normalization() {
        for input in ["myshop", "myshop.", "myshop \n", ".myshop.myshopify.com."] {
            let domain = ShopDomain::new(input).unwrap();
            assert_eq!(domain.short_name(), "myshop", "input {input:?}");
        }
    }

    #[test]
    fn test_shop_base_url() {
        let domain = ShopDomain::new("myshop").unwrap();
        assert_eq!(domain.base_url(), "https://myshop.myshopify.com");
    }

    #[test]
    fn test_shop_domain_rejects_invalid_names() {
        assert!(ShopDomain::new("").is_err());
        assert!(ShopDomain::new("  . ").is_err());
        assert!(ShopDomain::new("my shop").is_err());
        assert!(ShopDomain::new("-myshop").is_err());
    }

    #[test]
    fn test_shop_domain_serde_uses_full_name() {
        let domain = ShopDomain::new("my-store").unwrap();
        let json = serde_json::to_string(&domain).unwrap();
        assert_eq!(json, r#""my-store.myshopify.com""#);

        let parsed: ShopDomain = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, domain);
    }
}
