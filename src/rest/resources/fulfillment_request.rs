//! Fulfillment requests.
//!
//! A merchant sends a fulfillment request to the fulfillment service assigned
//! to a fulfillment order; the service then accepts or rejects it. All three
//! calls answer with the affected [`FulfillmentOrder`].
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_client::rest::resources::FulfillmentRequest;
//!
//! let requests = client.fulfillment_requests();
//!
//! let submitted = requests
//!     .send(1046000829, &FulfillmentRequest::with_message("Fulfill this ASAP please."))
//!     .await?;
//! let accepted = requests
//!     .accept(1046000829, &FulfillmentRequest::with_message("We will start processing."))
//!     .await?;
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{HttpError, RestClient};
use crate::rest::resource::{unwrap_key, wrap_key};
use crate::rest::resources::FulfillmentOrder;

const BASE_PATH: &str = "fulfillment_orders";
const KEY: &str = "fulfillment_request";

/// Quantity of one fulfillment order line item to request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillmentRequestLineItem {
    /// The fulfillment order line item.
    pub id: u64,
    pub quantity: u64,
}

/// Per-item message when rejecting a request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillmentRequestRejectedItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_order_line_item_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body of a send, accept or reject call.
///
/// Every field is optional; an empty request sends the whole fulfillment
/// order without a message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillmentRequest {
    /// Note for the other party.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Items to request when sending. Omit to request every item.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fulfillment_order_line_items: Vec<FulfillmentRequestLineItem>,

    /// Rejection reason, e.g. `"inventory_out_of_stock"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Items that caused a rejection.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub line_items: Vec<FulfillmentRequestRejectedItem>,
}

impl FulfillmentRequest {
    /// Creates a request carrying only a message.
    #[must_use]
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Default::default()
        }
    }
}

/// Send, accept and reject fulfillment requests.
#[derive(Clone, Debug)]
pub struct FulfillmentRequestService {
    rest: RestClient,
}

impl FulfillmentRequestService {
    /// Creates a service over a REST client.
    #[must_use]
    pub const fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// Sends a fulfillment request to the service assigned to a fulfillment
    /// order, returning the order as it was before the request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body does not decode.
    pub async fn send(
        &self,
        fulfillment_order_id: u64,
        request: &FulfillmentRequest,
    ) -> Result<FulfillmentOrder, HttpError> {
        let path = format!("{BASE_PATH}/{fulfillment_order_id}/{KEY}");
        let response: Value = self.rest.post(&path, &wrap_key(KEY, request)?).await?;
        unwrap_key(response, "original_fulfillment_order")
    }

    /// Accepts a fulfillment request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body does not decode.
    pub async fn accept(
        &self,
        fulfillment_order_id: u64,
        request: &FulfillmentRequest,
    ) -> Result<FulfillmentOrder, HttpError> {
        self.respond(fulfillment_order_id, "accept", request).await
    }

    /// Rejects a fulfillment request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body does not decode.
    pub async fn reject(
        &self,
        fulfillment_order_id: u64,
        request: &FulfillmentRequest,
    ) -> Result<FulfillmentOrder, HttpError> {
        self.respond(fulfillment_order_id, "reject", request).await
    }

    async fn respond(
        &self,
        fulfillment_order_id: u64,
        action: &str,
        request: &FulfillmentRequest,
    ) -> Result<FulfillmentOrder, HttpError> {
        let path = format!("{BASE_PATH}/{fulfillment_order_id}/{KEY}/{action}");
        let response: Value = self.rest.post(&path, &wrap_key(KEY, request)?).await?;
        unwrap_key(response, "fulfillment_order")
    }
}
