//! Serde support for date-only fields such as payout dates.
//!
//! Use with `#[serde(default, with = "shopify_client::rest::date_only")]` on an
//! `Option<NaiveDate>` field. `"2013-11-01"` decodes to a date, while `null`
//! and `""` decode to `None`.

/// Serde adapter for `Option<NaiveDate>` in `YYYY-MM-DD` form.
pub mod date_only {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    /// Serializes `Some(date)` as `"YYYY-MM-DD"` and `None` as `null`.
    ///
    /// # Errors
    ///
    /// Returns the serializer's error.
    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes `"YYYY-MM-DD"`, treating `null` and `""` as `None`.
    ///
    /// # Errors
    ///
    /// Returns an error for strings that are not valid dates.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("" | "null") => Ok(None),
            Some(s) => NaiveDate::parse_from_str(s, FORMAT)
                .map(Some)
                .map_err(de::Error::custom),
        }
    }
}
