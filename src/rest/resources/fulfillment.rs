//! Fulfillments of an order.
//!
//! Fulfillments are read through
//! [`fulfillment_path_prefix`](crate::rest::fulfillment_path_prefix), usually
//! nested under `orders/{id}`. Besides CRUD, an existing fulfillment can be
//! completed, reopened or cancelled.
//!
//! # Example
//!
//! ```rust,ignore
//! let fulfillments = client.fulfillments(450789469);
//! let shipped = fulfillments.complete(255858046).await?;
//! let cancelled = fulfillments.cancel(255858046).await?;
//! ```

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::clients::HttpError;
use crate::rest::resource::unwrap_key;
use crate::rest::{ResourceService, RestResource};

/// Shipment of some or all items of an order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fulfillment {
    /// The unique identifier.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The fulfilled order.
    #[serde(skip_serializing)]
    pub order_id: Option<u64>,

    /// Fulfillment state, e.g. `"success"` or `"cancelled"`.
    #[serde(skip_serializing)]
    pub status: Option<String>,

    /// Carrier state of the shipment, e.g. `"in_transit"`.
    #[serde(skip_serializing)]
    pub shipment_status: Option<String>,

    /// Location the items shipped from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,

    /// Shipping carrier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_company: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tracking_numbers: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tracking_urls: Vec<String>,

    /// Fulfillment service handle.
    #[serde(skip_serializing)]
    pub service: Option<String>,

    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<FixedOffset>>,

    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<FixedOffset>>,

    /// The GraphQL GID.
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for Fulfillment {
    const SINGULAR: &'static str = "fulfillment";
    const PLURAL: &'static str = "fulfillments";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

impl ResourceService<Fulfillment> {
    /// Marks a pending fulfillment as complete.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body does not decode.
    pub async fn complete(&self, id: u64) -> Result<Fulfillment, HttpError> {
        self.transition_to(id, "complete").await
    }

    /// Moves a fulfillment back to the open state.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body does not decode.
    pub async fn transition(&self, id: u64) -> Result<Fulfillment, HttpError> {
        self.transition_to(id, "open").await
    }

    /// Cancels a fulfillment.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body does not decode.
    pub async fn cancel(&self, id: u64) -> Result<Fulfillment, HttpError> {
        self.transition_to(id, "cancel").await
    }

    async fn transition_to(&self, id: u64, action: &str) -> Result<Fulfillment, HttpError> {
        let response: Value = self
            .rest()
            .post(&format!("{}/{action}", self.record_path(id)), &json!({}))
            .await?;
        unwrap_key(response, Fulfillment::SINGULAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserializes_fulfillment() {
        let fulfillment: Fulfillment = serde_json::from_value(json!({
            "id": 255858046,
            "order_id": 450789469,
            "status": "failure",
            "created_at": "2024-01-02T09:15:00-05:00",
            "service": "manual",
            "tracking_company": "USPS",
            "shipment_status": null,
            "location_id": 655441491,
            "tracking_number": "1Z2345",
            "tracking_numbers": ["1Z2345"],
            "tracking_urls": ["https://tools.usps.com/go/TrackConfirmAction?tLabels=1Z2345"]
        }))
        .unwrap();
        assert_eq!(fulfillment.order_id, Some(450_789_469));
        assert_eq!(fulfillment.tracking_numbers, vec!["1Z2345".to_string()]);
        assert!(fulfillment.shipment_status.is_none());
    }

    #[test]
    fn test_empty_tracking_lists_are_omitted() {
        let fulfillment = Fulfillment {
            location_id: Some(1),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&fulfillment).unwrap(),
            json!({"location_id": 1})
        );
    }
}
