//! Abandoned checkouts.
//!
//! Checkouts a customer started but never completed, listed under
//! `checkouts`. Shopify only supports listing and counting them.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::ListOptions;
use crate::rest::RestResource;

/// A checkout that was not completed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbandonedCheckout {
    /// The unique identifier.
    pub id: Option<u64>,

    pub token: Option<String>,
    pub cart_token: Option<String>,

    /// Customer email.
    pub email: Option<String>,
    pub phone: Option<String>,
    pub name: Option<String>,

    /// Link that brings the customer back to the checkout.
    pub abandoned_checkout_url: Option<String>,

    pub gateway: Option<String>,
    pub currency: Option<String>,
    pub presentment_currency: Option<String>,
    pub customer_locale: Option<String>,
    pub source_name: Option<String>,
    pub landing_site: Option<String>,
    pub referring_site: Option<String>,
    pub note: Option<String>,

    #[serde(default)]
    pub buyer_accepts_marketing: bool,
    #[serde(default)]
    pub taxes_included: bool,

    /// Weight in grams.
    pub total_weight: Option<u64>,

    pub subtotal_price: Option<String>,
    pub total_discounts: Option<String>,
    pub total_line_items_price: Option<String>,
    pub total_price: Option<String>,
    pub total_tax: Option<String>,

    #[serde(default)]
    pub line_items: Vec<Value>,
    #[serde(default)]
    pub discount_codes: Vec<Value>,
    pub billing_address: Option<Value>,
    pub shipping_address: Option<Value>,
    pub customer: Option<Value>,

    pub created_at: Option<DateTime<FixedOffset>>,
    pub updated_at: Option<DateTime<FixedOffset>>,
    /// Set once the checkout was recovered.
    pub completed_at: Option<DateTime<FixedOffset>>,
    pub closed_at: Option<DateTime<FixedOffset>>,

    /// The GraphQL GID.
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for AbandonedCheckout {
    const SINGULAR: &'static str = "checkout";
    const PLURAL: &'static str = "checkouts";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Whether a checkout is still open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbandonedCheckoutStatus {
    /// Not yet recovered or expired.
    Open,
    /// Recovered or expired.
    Closed,
}

/// Options for listing abandoned checkouts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AbandonedCheckoutListOptions {
    #[serde(flatten)]
    pub list: ListOptions,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AbandonedCheckoutStatus>,
}
