//! Collects link a product to a custom collection.
//!
//! Collects are created and deleted but never updated.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_client::rest::resources::{Collect, CollectListOptions};
//!
//! let collects = client.collects();
//! let linked = collects
//!     .create(&Collect {
//!         product_id: Some(921728736),
//!         collection_id: Some(841564295),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let in_collection = collects
//!     .count(&CollectListOptions {
//!         collection_id: Some(841564295),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::clients::ListOptions;
use crate::rest::RestResource;

/// Membership of a product in a custom collection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collect {
    /// The unique identifier.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The custom collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<u64>,

    /// The product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// Position in a manually sorted collection.
    #[serde(skip_serializing)]
    pub position: Option<i64>,

    /// Sort key, zero-padded.
    #[serde(skip_serializing)]
    pub sort_value: Option<String>,

    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<FixedOffset>>,

    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

impl RestResource for Collect {
    const SINGULAR: &'static str = "collect";
    const PLURAL: &'static str = "collects";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Options for listing and counting collects.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CollectListOptions {
    /// Common list options.
    #[serde(flatten)]
    pub list: ListOptions,

    /// Only collects in this collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<u64>,

    /// Only collects for this product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
}
