//! Entry point tying the transport, REST and GraphQL clients together.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::clients::errors::HttpError;
use crate::clients::graphql::GraphqlClient;
use crate::clients::http_client::HttpClient;
use crate::clients::rate_limit::RateLimitTracker;
use crate::clients::rest::RestClient;
use crate::clients::sleeper::Sleeper;
use crate::config::ClientConfig;
use crate::rest::resources::{
    order_risk_path, AbandonedCheckout, CarrierService, Collect, Fulfillment,
    FulfillmentEventService, FulfillmentOrder, FulfillmentRequestService, FulfillmentService,
    GiftCard, InventoryLevelService, Metafield, OrderRisk, PaymentsTransaction, Payout,
};
use crate::rest::{fulfillment_path_prefix, metafield_path_prefix, ResourceService};

/// A Shopify Admin API client.
///
/// One `ShopifyClient` owns one transport. The REST client, the GraphQL
/// client and every resource service it hands out share that transport,
/// so they share its rate-limit tracker and cancellation token too.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_client::clients::ShopifyClient;
/// use shopify_client::{AccessToken, ClientConfig, ShopDomain};
///
/// let config = ClientConfig::builder()
///     .shop(ShopDomain::new("my-store")?)
///     .access_token(AccessToken::new("shpat_xxx")?)
///     .retries(3)
///     .build()?;
///
/// let client = ShopifyClient::new(&config)?;
///
/// let payouts = client.payouts().list(&()).await?;
/// let shop: serde_json::Value = client.graphql().query("{ shop { name } }", None).await?;
///
/// if let Some(cost) = client.rate_limits().graphql_cost() {
///     println!("{} points left", cost.throttle_status.currently_available);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct ShopifyClient {
    http_client: HttpClient,
    rest: RestClient,
    graphql: GraphqlClient,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopifyClient>();
};

impl ShopifyClient {
    /// Creates a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be created.
    pub fn new(config: &ClientConfig) -> Result<Self, HttpError> {
        Ok(Self::from_http_client(HttpClient::new(config)?))
    }

    /// Creates a client over an existing transport.
    #[must_use]
    pub fn from_http_client(http_client: HttpClient) -> Self {
        Self {
            rest: RestClient::new(http_client.clone()),
            graphql: GraphqlClient::new(http_client.clone()),
            http_client,
        }
    }

    /// Replaces the delay used between retry attempts.
    #[must_use]
    pub fn with_sleeper(self, sleeper: Arc<dyn Sleeper>) -> Self {
        Self::from_http_client(self.http_client.with_sleeper(sleeper))
    }

    /// Returns a client that aborts on `token`. The rate-limit tracker stays
    /// shared with `self`.
    #[must_use]
    pub fn with_cancellation_token(&self, token: CancellationToken) -> Self {
        Self::from_http_client(self.http_client.with_cancellation_token(token))
    }

    /// Returns the latest rate-limit telemetry.
    #[must_use]
    pub const fn rate_limits(&self) -> &RateLimitTracker {
        self.http_client.rate_limits()
    }

    /// Returns the transport.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the REST client.
    #[must_use]
    pub const fn rest(&self) -> &RestClient {
        &self.rest
    }

    /// Returns the GraphQL client.
    #[must_use]
    pub const fn graphql(&self) -> &GraphqlClient {
        &self.graphql
    }

    /// Gift cards under `gift_cards`.
    #[must_use]
    pub fn gift_cards(&self) -> ResourceService<GiftCard> {
        self.service("gift_cards")
    }

    /// Payouts under `shopify_payments/payouts`.
    #[must_use]
    pub fn payouts(&self) -> ResourceService<Payout> {
        self.service("shopify_payments/payouts")
    }

    /// Carrier services under `carrier_services`.
    #[must_use]
    pub fn carrier_services(&self) -> ResourceService<CarrierService> {
        self.service("carrier_services")
    }

    /// Fraud risks of one order.
    #[must_use]
    pub fn order_risks(&self, order_id: u64) -> ResourceService<OrderRisk> {
        self.service(order_risk_path(order_id))
    }

    /// Inventory levels.
    #[must_use]
    pub fn inventory_levels(&self) -> InventoryLevelService {
        InventoryLevelService::new(self.rest.clone())
    }

    /// The shop's own metafields.
    #[must_use]
    pub fn metafields(&self) -> ResourceService<Metafield> {
        self.service(metafield_path_prefix("", 0))
    }

    /// Metafields of another resource, e.g. `("products", 632910392)`.
    #[must_use]
    pub fn metafields_for(&self, resource: &str, resource_id: u64) -> ResourceService<Metafield> {
        self.service(metafield_path_prefix(resource, resource_id))
    }

    /// Fulfillment services under `fulfillment_services`.
    #[must_use]
    pub fn fulfillment_services(&self) -> ResourceService<FulfillmentService> {
        self.service("fulfillment_services")
    }

    /// Fulfillments of one order.
    #[must_use]
    pub fn fulfillments(&self, order_id: u64) -> ResourceService<Fulfillment> {
        self.service(fulfillment_path_prefix("orders", order_id))
    }

    /// Tracking events of one fulfillment of an order.
    #[must_use]
    pub fn fulfillment_events(
        &self,
        order_id: u64,
        fulfillment_id: u64,
    ) -> FulfillmentEventService {
        FulfillmentEventService::new(self.rest.clone(), order_id, fulfillment_id)
    }

    /// Fulfillment requests on fulfillment orders.
    #[must_use]
    pub fn fulfillment_requests(&self) -> FulfillmentRequestService {
        FulfillmentRequestService::new(self.rest.clone())
    }

    /// Fulfillment orders assigned to the calling app. Use `list`.
    #[must_use]
    pub fn assigned_fulfillment_orders(&self) -> ResourceService<FulfillmentOrder> {
        self.service("assigned_fulfillment_orders")
    }

    /// Collects under `collects`.
    #[must_use]
    pub fn collects(&self) -> ResourceService<Collect> {
        self.service("collects")
    }

    /// Abandoned checkouts under `checkouts`.
    #[must_use]
    pub fn abandoned_checkouts(&self) -> ResourceService<AbandonedCheckout> {
        self.service("checkouts")
    }

    /// Shopify Payments balance transactions.
    #[must_use]
    pub fn payments_transactions(&self) -> ResourceService<PaymentsTransaction> {
        self.service("shopify_payments/balance/transactions")
    }

    fn service<R: crate::rest::RestResource>(
        &self,
        base_path: impl Into<String>,
    ) -> ResourceService<R> {
        ResourceService::new(self.rest.clone(), base_path)
    }
}
