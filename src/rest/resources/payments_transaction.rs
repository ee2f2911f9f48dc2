//! Shopify Payments balance transactions.
//!
//! Every movement of funds in the Shopify Payments balance: charges,
//! refunds, disputes and the payouts that settle them. Read-only, under
//! `shopify_payments/balance/transactions`.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_client::rest::resources::PaymentsTransactionListOptions;
//!
//! let page = client
//!     .payments_transactions()
//!     .list_with_pagination(&PaymentsTransactionListOptions {
//!         payout_id: Some(623721858),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::rest::dates::date_only;
use crate::rest::resources::PayoutStatus;
use crate::rest::RestResource;

/// Kind of balance transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentsTransactionType {
    Charge,
    Refund,
    Dispute,
    Reserve,
    Adjustment,
    Credit,
    Debit,
    Payout,
    PayoutFailure,
    PayoutCancellation,
}

/// One movement of funds in the Shopify Payments balance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentsTransaction {
    /// The unique identifier.
    pub id: Option<u64>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<PaymentsTransactionType>,

    /// Whether the transaction was made in test mode.
    #[serde(default)]
    pub test: bool,

    /// The payout that settles this transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_status: Option<PayoutStatus>,

    /// ISO 4217 currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Gross amount, negative for debits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<String>,

    /// `amount` minus `fee`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net: Option<String>,

    /// The resource that caused the transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<u64>,

    /// Type of `source_id`, e.g. `"charge"` or `"adjustment"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_order_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_order_transaction_id: Option<u64>,

    /// The date the transaction was processed.
    #[serde(default, with = "date_only", skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<NaiveDate>,
}

impl RestResource for PaymentsTransaction {
    const SINGULAR: &'static str = "transaction";
    const PLURAL: &'static str = "transactions";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Options for listing balance transactions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PaymentsTransactionListOptions {
    /// Cursor returned by a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
    /// Maximum results per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    /// Only transactions before this ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_id: Option<u64>,
    /// Only transactions after this ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,
    /// Only transactions settled by this payout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_status: Option<PayoutStatus>,
    /// Processed on or after.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_min: Option<NaiveDate>,
    /// Processed on or before.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_max: Option<NaiveDate>,
    /// Processed on exactly this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<NaiveDate>,
}
