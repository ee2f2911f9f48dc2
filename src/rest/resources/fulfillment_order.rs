//! Fulfillment orders.
//!
//! A fulfillment order groups the line items of an order that ship from one
//! location. Apps acting as fulfillment services read the orders assigned to
//! them through `assigned_fulfillment_orders`, which answers with the same
//! `fulfillment_orders` wrapper:
//!
//! ```rust,ignore
//! use shopify_client::rest::resources::{AssignedFulfillmentOrderOptions, AssignmentStatus};
//!
//! let requested = client
//!     .assigned_fulfillment_orders()
//!     .list(&AssignedFulfillmentOrderOptions {
//!         assignment_status: Some(AssignmentStatus::FulfillmentRequested),
//!         location_ids: Some("24826418".to_string()),
//!     })
//!     .await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::rest::RestResource;

/// Where a fulfillment order ships to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillmentOrderDestination {
    pub id: Option<u64>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub company: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub province: Option<String>,
    pub zip: Option<String>,
}

/// One line of a fulfillment order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillmentOrderLineItem {
    pub id: Option<u64>,
    pub shop_id: Option<u64>,
    pub fulfillment_order_id: Option<u64>,
    pub line_item_id: Option<u64>,
    pub inventory_item_id: Option<u64>,
    pub variant_id: Option<u64>,
    /// Units ordered.
    pub quantity: Option<u64>,
    /// Units still to fulfill.
    pub fulfillable_quantity: Option<u64>,
}

/// A group of order line items fulfilled from one location.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillmentOrder {
    /// The unique identifier.
    pub id: Option<u64>,

    pub shop_id: Option<u64>,

    /// The order this fulfillment order belongs to.
    pub order_id: Option<u64>,

    /// Location the items are fulfilled from.
    pub assigned_location_id: Option<u64>,

    /// Fulfillment state, e.g. `"open"` or `"in_progress"`.
    pub status: Option<String>,

    /// State of the request to the fulfillment service, e.g. `"submitted"`.
    pub request_status: Option<String>,

    /// Actions currently allowed, e.g. `"cancel_fulfillment_order"`.
    #[serde(default)]
    pub supported_actions: Vec<String>,

    pub destination: Option<FulfillmentOrderDestination>,

    #[serde(default)]
    pub line_items: Vec<FulfillmentOrderLineItem>,
}

impl RestResource for FulfillmentOrder {
    const SINGULAR: &'static str = "fulfillment_order";
    const PLURAL: &'static str = "fulfillment_orders";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Assignment state filter for assigned fulfillment orders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    /// A merchant asked the service to cancel.
    CancellationRequested,
    /// A merchant asked the service to fulfill.
    FulfillmentRequested,
    /// The service accepted the request.
    FulfillmentAccepted,
}

/// Options for listing assigned fulfillment orders.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AssignedFulfillmentOrderOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_status: Option<AssignmentStatus>,
    /// Comma-separated location IDs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_ids: Option<String>,
}
