//! Inventory levels.
//!
//! An inventory level is the quantity of one inventory item at one location.
//! It has no ID of its own; the pair `inventory_item_id` + `location_id`
//! identifies it, so it gets a dedicated [`InventoryLevelService`] instead of
//! the generic CRUD adapter.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_client::rest::resources::InventoryLevelListOptions;
//!
//! let levels = client.inventory_levels();
//!
//! let at_warehouse = levels
//!     .list(&InventoryLevelListOptions {
//!         location_ids: Some("655441491".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let adjusted = levels.adjust(808950810, 655441491, -5).await?;
//! let set = levels.set(808950810, 655441491, 100, false).await?;
//! levels.delete(808950810, 655441491).await?;
//! ```

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::clients::{HttpError, RestClient};
use crate::rest::resource::unwrap_key;
use crate::rest::ResourceResponse;

const BASE_PATH: &str = "inventory_levels";
const SINGULAR: &str = "inventory_level";
const PLURAL: &str = "inventory_levels";

/// The quantity of an inventory item at a location.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLevel {
    /// The inventory item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_item_id: Option<u64>,

    /// The location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,

    /// Quantity available for sale. `None` when the item is not tracked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<i64>,

    /// When the level last changed.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<FixedOffset>>,

    /// The GraphQL GID.
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

/// Options for listing inventory levels.
///
/// At least one of `inventory_item_ids` or `location_ids` is required by
/// Shopify. Both take comma-separated IDs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct InventoryLevelListOptions {
    /// Comma-separated inventory item IDs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_item_ids: Option<String>,
    /// Comma-separated location IDs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_ids: Option<String>,
    /// Maximum results per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Only levels updated at or after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    /// Cursor returned by a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
}

#[derive(Serialize)]
struct LevelKey {
    inventory_item_id: u64,
    location_id: u64,
}

/// Operations on inventory levels.
#[derive(Clone, Debug)]
pub struct InventoryLevelService {
    rest: RestClient,
}

impl InventoryLevelService {
    /// Creates a service over a REST client.
    #[must_use]
    pub const fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// Lists inventory levels.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body does not decode.
    pub async fn list(
        &self,
        options: &InventoryLevelListOptions,
    ) -> Result<Vec<InventoryLevel>, HttpError> {
        let body: Value = self.rest.get(BASE_PATH, options).await?;
        unwrap_key(body, PLURAL)
    }

    /// Lists inventory levels with the cursors of the surrounding pages.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Pagination`] if the `Link` header is malformed,
    /// otherwise as [`list`](Self::list).
    pub async fn list_with_pagination(
        &self,
        options: &InventoryLevelListOptions,
    ) -> Result<ResourceResponse<Vec<InventoryLevel>>, HttpError> {
        let (body, pagination): (Value, _) =
            self.rest.list_with_pagination(BASE_PATH, options).await?;
        Ok(ResourceResponse::new(unwrap_key(body, PLURAL)?, pagination))
    }

    /// Changes the available quantity by `available_adjustment`, which may
    /// be negative.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body does not decode.
    pub async fn adjust(
        &self,
        inventory_item_id: u64,
        location_id: u64,
        available_adjustment: i64,
    ) -> Result<InventoryLevel, HttpError> {
        let body = json!({
            "inventory_item_id": inventory_item_id,
            "location_id": location_id,
            "available_adjustment": available_adjustment,
        });
        self.post("adjust", &body).await
    }

    /// Connects an inventory item to a location.
    ///
    /// With `relocate_if_necessary`, an item stocked at a single other
    /// location is moved rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body does not decode.
    pub async fn connect(
        &self,
        inventory_item_id: u64,
        location_id: u64,
        relocate_if_necessary: bool,
    ) -> Result<InventoryLevel, HttpError> {
        let body = json!({
            "inventory_item_id": inventory_item_id,
            "location_id": location_id,
            "relocate_if_necessary": relocate_if_necessary,
        });
        self.post("connect", &body).await
    }

    /// Sets the available quantity, connecting the item to the location
    /// first if needed.
    ///
    /// With `disconnect_if_necessary`, the item is disconnected from any
    /// location that cannot stock it.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body does not decode.
    pub async fn set(
        &self,
        inventory_item_id: u64,
        location_id: u64,
        available: i64,
        disconnect_if_necessary: bool,
    ) -> Result<InventoryLevel, HttpError> {
        let body = json!({
            "inventory_item_id": inventory_item_id,
            "location_id": location_id,
            "available": available,
            "disconnect_if_necessary": disconnect_if_necessary,
        });
        self.post("set", &body).await
    }

    /// Removes an inventory item from a location.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete(&self, inventory_item_id: u64, location_id: u64) -> Result<(), HttpError> {
        let key = LevelKey {
            inventory_item_id,
            location_id,
        };
        self.rest.delete(BASE_PATH, &key).await
    }

    async fn post(&self, action: &str, body: &Value) -> Result<InventoryLevel, HttpError> {
        let response: Value = self
            .rest
            .post(&format!("{BASE_PATH}/{action}"), body)
            .await?;
        unwrap_key(response, SINGULAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::to_query_params;

    #[test]
    fn test_deserializes_level() {
        let level: InventoryLevel = serde_json::from_value(json!({
            "inventory_item_id": 808950810,
            "location_id": 655441491,
            "available": 6,
            "updated_at": "2024-01-02T09:15:00-05:00",
            "admin_graphql_api_id": "gid://shopify/InventoryLevel/655441491?inventory_item_id=808950810"
        }))
        .unwrap();
        assert_eq!(level.available, Some(6));
        assert!(level.updated_at.is_some());
    }

    #[test]
    fn test_untracked_level_has_no_quantity() {
        let level: InventoryLevel =
            serde_json::from_value(json!({"inventory_item_id": 1, "location_id": 2, "available": null}))
                .unwrap();
        assert!(level.available.is_none());
    }

    #[test]
    fn test_delete_key_becomes_query() {
        let query = to_query_params(&LevelKey {
            inventory_item_id: 808_950_810,
            location_id: 655_441_491,
        })
        .unwrap();
        assert_eq!(
            query.get("inventory_item_id").map(String::as_str),
            Some("808950810")
        );
        assert_eq!(query.get("location_id").map(String::as_str), Some("655441491"));
    }

    #[test]
    fn test_list_options_query() {
        let options = InventoryLevelListOptions {
            inventory_item_ids: Some("1,2".to_string()),
            limit: Some(5),
            ..Default::default()
        };
        let query = to_query_params(&options).unwrap();
        assert_eq!(query.get("inventory_item_ids").map(String::as_str), Some("1,2"));
        assert_eq!(query.len(), 2);
    }
}
