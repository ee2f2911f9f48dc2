//! Resource adapters.
//!
//! Each resource is a plain serde struct implementing
//! [`RestResource`](crate::rest::RestResource), operated on through
//! [`ResourceService`](crate::rest::ResourceService). Resource-specific
//! actions are inherent methods on the service, e.g.
//! `ResourceService<GiftCard>::disable`. Inventory levels, fulfillment
//! events and fulfillment requests don't fit the CRUD shape and get
//! dedicated services instead.
//!
//! Read-only fields (IDs, timestamps, GraphQL GIDs) are skipped when a
//! record is serialized for create or update.

mod abandoned_checkout;
mod carrier_service;
mod collect;
mod fulfillment;
mod fulfillment_event;
mod fulfillment_order;
mod fulfillment_request;
mod fulfillment_service;
mod gift_card;
mod inventory_level;
mod metafield;
mod order_risk;
mod payments_transaction;
mod payout;

pub use abandoned_checkout::{
    AbandonedCheckout, AbandonedCheckoutListOptions, AbandonedCheckoutStatus,
};
pub use carrier_service::CarrierService;
pub use collect::{Collect, CollectListOptions};
pub use fulfillment::Fulfillment;
pub use fulfillment_event::{FulfillmentEvent, FulfillmentEventService};
pub use fulfillment_order::{
    AssignedFulfillmentOrderOptions, AssignmentStatus, FulfillmentOrder,
    FulfillmentOrderDestination, FulfillmentOrderLineItem,
};
pub use fulfillment_request::{
    FulfillmentRequest, FulfillmentRequestLineItem, FulfillmentRequestRejectedItem,
    FulfillmentRequestService,
};
pub use fulfillment_service::{
    FulfillmentService, FulfillmentServiceListOptions, FulfillmentServiceScope,
};
pub use gift_card::{GiftCard, GiftCardListOptions, GiftCardStatus};
pub use inventory_level::{InventoryLevel, InventoryLevelListOptions, InventoryLevelService};
pub use metafield::{Metafield, MetafieldListOptions};
pub use order_risk::{order_risk_path, OrderRisk, OrderRiskRecommendation};
pub use payments_transaction::{
    PaymentsTransaction, PaymentsTransactionListOptions, PaymentsTransactionType,
};
pub use payout::{Payout, PayoutListOptions, PayoutStatus};

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AbandonedCheckout>();
    assert_send_sync::<CarrierService>();
    assert_send_sync::<Collect>();
    assert_send_sync::<Fulfillment>();
    assert_send_sync::<FulfillmentEvent>();
    assert_send_sync::<FulfillmentEventService>();
    assert_send_sync::<FulfillmentOrder>();
    assert_send_sync::<FulfillmentRequestService>();
    assert_send_sync::<FulfillmentService>();
    assert_send_sync::<GiftCard>();
    assert_send_sync::<InventoryLevel>();
    assert_send_sync::<InventoryLevelService>();
    assert_send_sync::<Metafield>();
    assert_send_sync::<OrderRisk>();
    assert_send_sync::<PaymentsTransaction>();
    assert_send_sync::<Payout>();
};
