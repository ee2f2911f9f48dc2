//! Fraud risk assessments attached to an order.
//!
//! Order risks live under `orders/{order_id}/risks` and are wrapped in
//! `risk` / `risks` rather than the type name.

use serde::{Deserialize, Serialize};

use crate::rest::RestResource;

/// What the merchant should do with an order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderRiskRecommendation {
    /// The order should be cancelled.
    Cancel,
    /// The order should be reviewed.
    Investigate,
    /// The order can be fulfilled.
    Accept,
}

/// A single fraud assessment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRisk {
    /// The unique identifier.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The assessed order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,

    /// The checkout the order came from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_id: Option<u64>,

    /// Who produced the assessment, e.g. `"External"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Score between 0.0 and 1.0, sent as a string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,

    /// Suggested action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<OrderRiskRecommendation>,

    /// Whether the risk is shown in the admin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,

    /// Whether this risk caused the order to be cancelled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause_cancel: Option<bool>,

    /// Message shown to the merchant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Message shown in the order risk summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_message: Option<String>,
}

impl RestResource for OrderRisk {
    const SINGULAR: &'static str = "risk";
    const PLURAL: &'static str = "risks";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Returns the risks collection path for an order.
#[must_use]
pub fn order_risk_path(order_id: u64) -> String {
    format!("orders/{order_id}/risks")
}
