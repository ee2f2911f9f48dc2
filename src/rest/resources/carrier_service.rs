//! Carrier services that provide real-time shipping rates.
//!
//! Full CRUD under `carrier_services`.

use serde::{Deserialize, Serialize};

use crate::rest::RestResource;

/// A carrier service registered by an app.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierService {
    /// The unique identifier.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// Name shown to merchants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether rates are being returned at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// Whether merchants can send dummy data to the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_discovery: Option<bool>,

    /// `"api"` for app-registered services, `"legacy"` otherwise.
    #[serde(skip_serializing)]
    pub carrier_service_type: Option<String>,

    /// The GraphQL GID.
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,

    /// Payload format; only `"json"` is supported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// URL Shopify calls for rates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

impl RestResource for CarrierService {
    const SINGULAR: &'static str = "carrier_service";
    const PLURAL: &'static str = "carrier_services";

    fn id(&self) -> Option<u64> {
        self.id
    }
}
