//! REST client for the Shopify Admin API.
//!
//! [`RestClient`] offers `get`, `post`, `put`, `delete`, `count` and
//! `list_with_pagination` on top of the shared
//! [`HttpClient`](crate::clients::HttpClient).
//!
//! # Path Normalization
//!
//! - Leading slashes are stripped: `/gift_cards` -> `gift_cards.json`
//! - A trailing `.json` is stripped and re-added: `gift_cards.json` -> `gift_cards.json`
//! - Paths are resolved under `admin/api/{version}/`

mod client;

pub use client::{normalize_path, RestClient};
