//! Tracking events of a fulfillment.
//!
//! Events live under `orders/{order_id}/fulfillments/{fulfillment_id}/events`.
//! Shopify reads new events from an `event` key but answers with
//! `fulfillment_event`, so they get a dedicated [`FulfillmentEventService`].

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{HttpError, RestClient};
use crate::rest::fulfillment_path_prefix;
use crate::rest::resource::{unwrap_key, wrap_key};

/// A carrier update on a shipment, e.g. "out for delivery".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FulfillmentEvent {
    /// The unique identifier.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    #[serde(skip_serializing)]
    pub fulfillment_id: Option<u64>,

    #[serde(skip_serializing)]
    pub order_id: Option<u64>,

    #[serde(skip_serializing)]
    pub shop_id: Option<u64>,

    /// Shipment state, e.g. `"in_transit"` or `"delivered"`. Required on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Free-form description of the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// When the event occurred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub happened_at: Option<DateTime<FixedOffset>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery_at: Option<DateTime<FixedOffset>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<FixedOffset>>,

    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

/// Operations on the events of one fulfillment.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_client::rest::resources::FulfillmentEvent;
///
/// let events = client.fulfillment_events(450789469, 255858046);
/// let created = events
///     .create(&FulfillmentEvent {
///         status: Some("in_transit".to_string()),
///         ..Default::default()
///     })
///     .await?;
/// let all = events.list().await?;
/// ```
#[derive(Clone, Debug)]
pub struct FulfillmentEventService {
    rest: RestClient,
    base_path: String,
}

impl FulfillmentEventService {
    /// Creates a service for the events of one fulfillment of an order.
    #[must_use]
    pub fn new(rest: RestClient, order_id: u64, fulfillment_id: u64) -> Self {
        Self {
            rest,
            base_path: format!(
                "{}/{fulfillment_id}/events",
                fulfillment_path_prefix("orders", order_id)
            ),
        }
    }

    /// Returns the collection path.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Lists the events of the fulfillment.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body does not decode.
    pub async fn list(&self) -> Result<Vec<FulfillmentEvent>, HttpError> {
        let body: Value = self.rest.get(&self.base_path, &()).await?;
        unwrap_key(body, "fulfillment_events")
    }

    /// Fetches one event.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body does not decode.
    pub async fn get(&self, event_id: u64) -> Result<FulfillmentEvent, HttpError> {
        let body: Value = self.rest.get(&self.event_path(event_id), &()).await?;
        unwrap_key(body, "fulfillment_event")
    }

    /// Records a new event.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body does not decode.
    pub async fn create(&self, event: &FulfillmentEvent) -> Result<FulfillmentEvent, HttpError> {
        let body: Value = self
            .rest
            .post(&self.base_path, &wrap_key("event", event)?)
            .await?;
        unwrap_key(body, "fulfillment_event")
    }

    /// Deletes an event.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete(&self, event_id: u64) -> Result<(), HttpError> {
        self.rest.delete(&self.event_path(event_id), &()).await
    }

    fn event_path(&self, event_id: u64) -> String {
        format!("{}/{event_id}", self.base_path)
    }
}
