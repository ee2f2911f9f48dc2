//! Cursor pagination via the `Link` response header.
//!
//! Shopify paginates REST list endpoints with opaque `page_info` tokens
//! carried in a header of the form:
//!
//! ```text
//! <https://shop.myshopify.com/admin/api/2025-10/payouts.json?page_info=abc&limit=2>; rel="next",
//! <https://shop.myshopify.com/admin/api/2025-10/payouts.json?page_info=xyz>; rel="previous"
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::errors::{PaginationError, ResponseDecodingError};

/// Common query options accepted by list and count endpoints.
///
/// Unset fields are omitted from the query string.
///
/// # Example
///
/// ```rust
/// use shopify_client::clients::{to_query_params, ListOptions};
///
/// let options = ListOptions {
///     limit: Some(50),
///     ids: Some(vec![1, 2, 3]),
///     ..Default::default()
/// };
/// let query = to_query_params(&options).unwrap();
/// assert_eq!(query.get("ids").map(String::as_str), Some("1,2,3"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Cursor returned by a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
    /// Maximum results per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Only return results after this ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,
    /// Created at or after.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    /// Created at or before.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    /// Updated at or after.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    /// Updated at or before.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
    /// Sort order, e.g. `"created_at desc"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    /// Comma-separated list of fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    /// Restrict to these IDs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,
}

impl ListOptions {
    /// Options that fetch the page identified by `page_info`.
    #[must_use]
    pub fn page(page_info: impl Into<String>) -> Self {
        Self {
            page_info: Some(page_info.into()),
            ..Self::default()
        }
    }
}

/// Navigation options for the pages around the current one.
///
/// Either side is `None` when the header did not mention it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Options that fetch the next page.
    pub next_page_options: Option<ListOptions>,
    /// Options that fetch the previous page.
    pub previous_page_options: Option<ListOptions>,
}

impl Pagination {
    /// Returns `true` if a next page exists.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.next_page_options.is_some()
    }

    /// Returns `true` if a previous page exists.
    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.previous_page_options.is_some()
    }
}

#[derive(Clone, Copy)]
enum Rel {
    Next,
    Previous,
}

/// Parses a `Link` header into a [`Pagination`].
///
/// An absent or empty header yields an empty pagination.
///
/// # Errors
///
/// - `"could not extract pagination link header"` when an entry is not
///   `<url>; rel="next"` or `<url>; rel="previous"`
/// - `"pagination does not contain a valid URL"` when the URL does not parse
/// - [`PaginationError::InvalidEscape`] for a malformed percent escape in the query
/// - `"page_info is missing"` when the URL has no `page_info`
/// - [`PaginationError::InvalidLimit`] when `limit` is not an integer
///
/// # Example
///
/// ```rust
/// use shopify_client::clients::parse_link_header;
///
/// let header = r#"<https://x.myshopify.com/a.json?page_info=foo&limit=2>; rel="next""#;
/// let pagination = parse_link_header(Some(header)).unwrap();
/// let next = pagination.next_page_options.unwrap();
/// assert_eq!(next.page_info.as_deref(), Some("foo"));
/// assert_eq!(next.limit, Some(2));
/// assert!(pagination.previous_page_options.is_none());
/// ```
pub fn parse_link_header(header: Option<&str>) -> Result<Pagination, PaginationError> {
    let mut pagination = Pagination::default();

    let Some(header) = header.filter(|h| !h.is_empty()) else {
        return Ok(pagination);
    };

    for entry in header.split(',') {
        let (raw_url, rel) = split_entry(entry).ok_or_else(|| {
            ResponseDecodingError::message("could not extract pagination link header")
        })?;

        let url = url::Url::parse(raw_url).map_err(|_| {
            ResponseDecodingError::message("pagination does not contain a valid URL")
        })?;

        let options = page_options(&url)?;
        match rel {
            Rel::Next => pagination.next_page_options = Some(options),
            Rel::Previous => pagination.previous_page_options = Some(options),
        }
    }

    Ok(pagination)
}

/// Splits `  <url>; rel="next"  ` into its URL and relation.
fn split_entry(entry: &str) -> Option<(&str, Rel)> {
    let entry = entry.trim_matches(' ');
    let rest = entry.strip_prefix('<')?;
    let (url, params) = rest.split_once('>')?;
    if url.is_empty() {
        return None;
    }
    let rel = match params {
        r#"; rel="next""# => Rel::Next,
        r#"; rel="previous""# => Rel::Previous,
        _ => return None,
    };
    Some((url, rel))
}

fn page_options(url: &url::Url) -> Result<ListOptions, PaginationError> {
    let query = url.query().unwrap_or_default();
    check_escapes(query)?;

    let mut page_info = None;
    let mut limit = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "page_info" if page_info.is_none() => page_info = Some(value.into_owned()),
            "limit" if limit.is_none() => limit = Some(value.into_owned()),
            _ => {}
        }
    }

    let page_info = page_info
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ResponseDecodingError::message("page_info is missing"))?;

    let limit = match limit.filter(|l| !l.is_empty()) {
        Some(limit) => Some(limit.parse::<u32>()?),
        None => None,
    };

    Ok(ListOptions {
        page_info: Some(page_info),
        limit,
        ..ListOptions::default()
    })
}

/// Rejects `%` sequences not followed by two hex digits.
fn check_escapes(query: &str) -> Result<(), PaginationError> {
    let bytes = query.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'%' {
            continue;
        }
        let valid = bytes.len() > i + 2
            && bytes[i + 1].is_ascii_hexdigit()
            && bytes[i + 2].is_ascii_hexdigit();
        if !valid {
            let end = (i + 3).min(query.len());
            let escape = query.get(i..end).unwrap_or(&query[i..]);
            return Err(PaginationError::InvalidEscape(escape.to_string()));
        }
    }
    Ok(())
}
