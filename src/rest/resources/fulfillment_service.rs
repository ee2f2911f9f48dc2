//! Third-party fulfillment services.
//!
//! Full CRUD under `fulfillment_services`. Listing accepts a `scope` of
//! `current_client` (the default) or `all`.

use serde::{Deserialize, Serialize};

use crate::rest::RestResource;

/// A warehouse or service that fulfills orders for the merchant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillmentService {
    /// The unique identifier.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// Name shown to merchants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing)]
    pub service_name: Option<String>,

    /// URL-safe form of the name.
    #[serde(skip_serializing)]
    pub handle: Option<String>,

    /// Whether the service uses fulfillment orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_orders_opt_in: Option<bool>,

    /// Whether pending stock counts toward availability.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_pending_stock: Option<bool>,

    #[serde(skip_serializing)]
    pub provider_id: Option<u64>,

    /// The location created for the service.
    #[serde(skip_serializing)]
    pub location_id: Option<u64>,

    /// URL Shopify notifies about fulfillment requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,

    /// Whether the service provides tracking numbers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_support: Option<bool>,

    /// Whether the service tracks inventory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_management: Option<bool>,

    /// The GraphQL GID.
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,

    /// Whether merchants can share SKUs with other services.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permits_sku_sharing: Option<bool>,
}

impl RestResource for FulfillmentService {
    const SINGULAR: &'static str = "fulfillment_service";
    const PLURAL: &'static str = "fulfillment_services";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Which fulfillment services to list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentServiceScope {
    /// Services created by the calling app.
    #[default]
    CurrentClient,
    /// Every service on the shop.
    All,
}

/// Options for listing fulfillment services.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FulfillmentServiceListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<FulfillmentServiceScope>,
}
