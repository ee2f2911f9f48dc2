//! Gift cards.
//!
//! Gift cards support list, count, get, create and update. They cannot be
//! deleted; [`disable`](ResourceService::disable) them instead. A disabled
//! gift card cannot be re-enabled.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_client::rest::resources::{GiftCard, GiftCardListOptions, GiftCardStatus};
//!
//! let gift_cards = client.gift_cards();
//!
//! let created = gift_cards
//!     .create(&GiftCard {
//!         initial_value: Some("100.00".to_string()),
//!         note: Some("Employee reward".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let enabled = gift_cards
//!     .count(&GiftCardListOptions {
//!         status: Some(GiftCardStatus::Enabled),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let disabled = gift_cards.disable(created.id.unwrap()).await?;
//! assert!(disabled.disabled_at.is_some());
//! ```

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::clients::{HttpError, ListOptions};
use crate::rest::dates::date_only;
use crate::rest::resource::unwrap_key;
use crate::rest::{ResourceService, RestResource};

/// A gift card.
///
/// `code` is write-only; after creation only `last_characters` is returned.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GiftCard {
    /// The unique identifier.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The remaining balance.
    #[serde(skip_serializing)]
    pub balance: Option<String>,

    /// The value the card was issued with. Required on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,

    /// ISO 4217 currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// The redemption code, 8 to 20 characters. Generated when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Last four characters of the code.
    #[serde(skip_serializing)]
    pub last_characters: Option<String>,

    /// The customer the card belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,

    /// Internal note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Last day the card can be used.
    #[serde(default, with = "date_only", skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<NaiveDate>,

    /// Liquid template suffix for the card's page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,

    /// When the card was disabled.
    #[serde(skip_serializing)]
    pub disabled_at: Option<DateTime<FixedOffset>>,

    /// The order that sold the card.
    #[serde(skip_serializing)]
    pub order_id: Option<u64>,

    /// The line item that sold the card.
    #[serde(skip_serializing)]
    pub line_item_id: Option<u64>,

    /// The app that issued the card.
    #[serde(skip_serializing)]
    pub api_client_id: Option<u64>,

    /// The staff member that issued the card.
    #[serde(skip_serializing)]
    pub user_id: Option<u64>,

    /// When the card was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<FixedOffset>>,

    /// When the card was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

impl GiftCard {
    /// Returns `true` if the card has been disabled.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled_at.is_some()
    }
}

impl RestResource for GiftCard {
    const SINGULAR: &'static str = "gift_card";
    const PLURAL: &'static str = "gift_cards";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Gift card status filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GiftCardStatus {
    /// Cards that can be redeemed.
    Enabled,
    /// Cards that were disabled.
    Disabled,
}

/// Options for listing and counting gift cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GiftCardListOptions {
    /// Common list options.
    #[serde(flatten)]
    pub list: ListOptions,

    /// Restrict to enabled or disabled cards.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<GiftCardStatus>,
}

impl ResourceService<GiftCard> {
    /// Disables a gift card. This cannot be undone.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body does not decode.
    pub async fn disable(&self, id: u64) -> Result<GiftCard, HttpError> {
        let body = json!({ "gift_card": { "id": id } });
        let response: serde_json::Value = self
            .rest()
            .post(&format!("{}/disable", self.record_path(id)), &body)
            .await?;
        unwrap_key(response, GiftCard::SINGULAR)
    }
}
