//! Shopify Payments payouts.
//!
//! Payouts are read-only: list, list with pagination and get, under
//! `shopify_payments/payouts`.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_client::rest::resources::{PayoutListOptions, PayoutStatus};
//!
//! let page = client
//!     .payouts()
//!     .list_with_pagination(&PayoutListOptions {
//!         status: Some(PayoutStatus::Paid),
//!         limit: Some(50),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! for payout in page.iter() {
//!     println!("{:?}: {:?} {:?}", payout.date, payout.amount, payout.currency);
//! }
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::rest::dates::date_only;
use crate::rest::RestResource;

/// Lifecycle state of a payout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutStatus {
    /// Created but not yet sent.
    Scheduled,
    /// Sent to the bank.
    InTransit,
    /// Deposited.
    Paid,
    /// Rejected by the bank.
    Failed,
    /// Cancelled before it was sent.
    Canceled,
}

/// A transfer of funds to the merchant's bank account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    /// The unique identifier.
    pub id: Option<u64>,

    /// The date the payout was issued.
    #[serde(default, with = "date_only", skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// ISO 4217 currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Net amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// Current state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PayoutStatus>,
}

impl RestResource for Payout {
    const SINGULAR: &'static str = "payout";
    const PLURAL: &'static str = "payouts";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Options for listing payouts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PayoutListOptions {
    /// Cursor returned by a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
    /// Maximum results per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Comma-separated list of fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    /// Only payouts before this ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_id: Option<u64>,
    /// Only payouts after this ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,
    /// Only payouts in this state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PayoutStatus>,
    /// Issued on or after.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_min: Option<NaiveDate>,
    /// Issued on or before.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_max: Option<NaiveDate>,
    /// Issued on exactly this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}
