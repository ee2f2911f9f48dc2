//! Integration tests for the typed REST resources.

mod common;

use chrono::NaiveDate;
use serde_json::json;
use shopify_client::clients::{HttpError, InvalidHttpRequestError, ListOptions};
use shopify_client::rest::resources::{
    AbandonedCheckoutListOptions, AbandonedCheckoutStatus, AssignedFulfillmentOrderOptions,
    AssignmentStatus, CarrierService, Collect, FulfillmentEvent, FulfillmentRequest, GiftCard,
    GiftCardListOptions, GiftCardStatus, InventoryLevelListOptions, Metafield,
    OrderRiskRecommendation, PaymentsTransactionListOptions, PaymentsTransactionType,
    PayoutListOptions, PayoutStatus,
};
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{api_path, client};

// === Gift cards ===

#[tokio::test]
async fn test_gift_card_create_wraps_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("gift_cards.json")))
        .and(body_json(json!({"gift_card": {"initial_value": "100.00", "note": "Reward"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "gift_card": {
                "id": 1063936318,
                "initial_value": "100.00",
                "balance": "100.00",
                "note": "Reward",
                "last_characters": "0y0y",
                "expires_on": null
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client(&server, 1);
    let created = client
        .gift_cards()
        .create(&GiftCard {
            initial_value: Some("100.00".to_string()),
            note: Some("Reward".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(created.id, Some(1_063_936_318));
    assert_eq!(created.last_characters.as_deref(), Some("0y0y"));
}

#[tokio::test]
async fn test_gift_card_disable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("gift_cards/1035197676/disable.json")))
        .and(body_json(json!({"gift_card": {"id": 1035197676}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "gift_card": {
                "id": 1035197676,
                "disabled_at": "2024-01-02T09:15:00-05:00"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client(&server, 1);
    let disabled = client.gift_cards().disable(1_035_197_676).await.unwrap();
    assert!(disabled.is_disabled());
}

#[tokio::test]
async fn test_gift_card_count_by_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("gift_cards/count.json")))
        .and(query_param("status", "enabled"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 3})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client(&server, 1);
    let count = client
        .gift_cards()
        .count(&GiftCardListOptions {
            status: Some(GiftCardStatus::Enabled),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(count, 3);
}

#[tokio::test]
async fn test_update_without_id_is_rejected() {
    let server = MockServer::start().await;
    let (client, _) = client(&server, 1);

    let error = client
        .gift_cards()
        .update(&GiftCard::default())
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        HttpError::InvalidRequest(InvalidHttpRequestError::MissingResourceId {
            resource: "gift_card"
        })
    ));
    assert_eq!(error.to_string(), "Cannot update gift_card without an id.");
}

// === Payouts ===

#[tokio::test]
async fn test_payouts_list_with_pagination() {
    let server = MockServer::start().await;
    let link = format!(
        "<{}/admin/api/2025-10/shopify_payments/payouts.json?page_info=abc&limit=1>; rel=\"next\"",
        server.uri()
    );
    Mock::given(method("GET"))
        .and(path(api_path("shopify_payments/payouts.json")))
        .and(query_param("status", "paid"))
        .and(query_param("date_min", "2012-11-01"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", link.as_str())
                .set_body_json(json!({
                    "payouts": [{
                        "id": 623721858,
                        "status": "paid",
                        "date": "2012-11-12",
                        "currency": "USD",
                        "amount": "41.90"
                    }]
                })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client(&server, 1);
    let page = client
        .payouts()
        .list_with_pagination(&PayoutListOptions {
            status: Some(PayoutStatus::Paid),
            date_min: NaiveDate::from_ymd_opt(2012, 11, 1),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(page[0].date, NaiveDate::from_ymd_opt(2012, 11, 12));
    assert_eq!(page[0].amount.as_deref(), Some("41.90"));
    assert!(page.has_next_page());
    assert_eq!(
        page.next_page_options().and_then(|o| o.page_info.as_deref()),
        Some("abc")
    );
}

#[tokio::test]
async fn test_payout_get_with_empty_date() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("shopify_payments/payouts/623721858.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "payout": {"id": 623721858, "date": "", "status": "scheduled"}
        })))
        .mount(&server)
        .await;

    let (client, _) = client(&server, 1);
    let payout = client.payouts().get(623_721_858, &()).await.unwrap();
    assert!(payout.date.is_none());
    assert_eq!(payout.status, Some(PayoutStatus::Scheduled));
}

// === Inventory levels ===

#[tokio::test]
async fn test_inventory_adjust_and_set() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("inventory_levels/adjust.json")))
        .and(body_json(json!({
            "inventory_item_id": 808950810,
            "location_id": 655441491,
            "available_adjustment": -5
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "inventory_level": {"inventory_item_id": 808950810, "location_id": 655441491, "available": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(api_path("inventory_levels/set.json")))
        .and(body_json(json!({
            "inventory_item_id": 808950810,
            "location_id": 655441491,
            "available": 42,
            "disconnect_if_necessary": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "inventory_level": {"inventory_item_id": 808950810, "location_id": 655441491, "available": 42}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client(&server, 1);
    let levels = client.inventory_levels();

    let adjusted = levels.adjust(808_950_810, 655_441_491, -5).await.unwrap();
    assert_eq!(adjusted.available, Some(1));

    let set = levels.set(808_950_810, 655_441_491, 42, false).await.unwrap();
    assert_eq!(set.available, Some(42));
}

#[tokio::test]
async fn test_inventory_connect_list_and_delete() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("inventory_levels/connect.json")))
        .and(body_json(json!({
            "inventory_item_id": 1,
            "location_id": 2,
            "relocate_if_necessary": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "inventory_level": {"inventory_item_id": 1, "location_id": 2, "available": null}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("inventory_levels.json")))
        .and(query_param("location_ids", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "inventory_levels": [{"inventory_item_id": 1, "location_id": 2, "available": 0}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(api_path("inventory_levels.json")))
        .and(query_param("inventory_item_id", "1"))
        .and(query_param("location_id", "2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client(&server, 1);
    let levels = client.inventory_levels();

    let connected = levels.connect(1, 2, true).await.unwrap();
    assert!(connected.available.is_none());

    let listed = levels
        .list(&InventoryLevelListOptions {
            location_ids: Some("2".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);

    assert_ok!(levels.delete(1, 2).await);
}

// === Nested resources ===

#[tokio::test]
async fn test_order_risks_are_nested_under_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("orders/450789469/risks.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "risks": [{"id": 284138680, "order_id": 450789469, "recommendation": "investigate", "score": "0.5"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client(&server, 1);
    let risks = client.order_risks(450_789_469).list(&()).await.unwrap();

    assert_eq!(risks.len(), 1);
    assert_eq!(
        risks[0].recommendation,
        Some(OrderRiskRecommendation::Investigate)
    );
}

#[tokio::test]
async fn test_metafields_for_owner_resource() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("products/632910392/metafields.json")))
        .and(body_json(json!({
            "metafield": {"namespace": "my_fields", "key": "sponsor", "value": "Shopify", "type": "single_line_text_field"}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "metafield": {
                "id": 1069228953,
                "namespace": "my_fields",
                "key": "sponsor",
                "value": "Shopify",
                "type": "single_line_text_field",
                "owner_id": 632910392,
                "owner_resource": "product"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client(&server, 1);
    let metafield = client
        .metafields_for("products", 632_910_392)
        .create(&Metafield {
            namespace: Some("my_fields".to_string()),
            key: Some("sponsor".to_string()),
            value: Some(json!("Shopify")),
            value_type: Some("single_line_text_field".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(metafield.owner_id, Some(632_910_392));
    assert_eq!(metafield.owner_resource.as_deref(), Some("product"));
}

#[tokio::test]
async fn test_fulfillments_for_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("orders/450789469/fulfillments/255858046.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "fulfillment": {"id": 255858046, "order_id": 450789469, "status": "success"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client(&server, 1);
    let fulfillment = client
        .fulfillments(450_789_469)
        .get(255_858_046, &())
        .await
        .unwrap();
    assert_eq!(fulfillment.status.as_deref(), Some("success"));
}

#[tokio::test]
async fn test_fulfillment_state_transitions() {
    let server = MockServer::start().await;
    for (action, status) in [("complete", "success"), ("open", "open"), ("cancel", "cancelled")] {
        Mock::given(method("POST"))
            .and(path(api_path(&format!(
                "orders/450789469/fulfillments/255858046/{action}.json"
            ))))
            .and(body_json(json!({})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "fulfillment": {"id": 255858046, "status": status}
            })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let (client, _) = client(&server, 1);
    let fulfillments = client.fulfillments(450_789_469);

    let completed = fulfillments.complete(255_858_046).await.unwrap();
    assert_eq!(completed.status.as_deref(), Some("success"));

    let reopened = fulfillments.transition(255_858_046).await.unwrap();
    assert_eq!(reopened.status.as_deref(), Some("open"));

    let cancelled = fulfillments.cancel(255_858_046).await.unwrap();
    assert_eq!(cancelled.status.as_deref(), Some("cancelled"));
}

// === Fulfillment events ===

fn event_json() -> serde_json::Value {
    json!({
        "id": 944956391,
        "fulfillment_id": 255858046,
        "status": "in_transit",
        "happened_at": "2023-10-20T23:39:23-04:00",
        "shop_id": 548380009,
        "order_id": 450789469
    })
}

#[tokio::test]
async fn test_fulfillment_events_list_and_get() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("orders/450789469/fulfillments/255858046/events.json")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"fulfillment_events": [event_json()]})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path(
            "orders/450789469/fulfillments/255858046/events/944956391.json",
        )))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"fulfillment_event": event_json()})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client(&server, 1);
    let events = client.fulfillment_events(450_789_469, 255_858_046);

    let all = events.list().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].status.as_deref(), Some("in_transit"));

    let one = events.get(944_956_391).await.unwrap();
    assert_eq!(one.order_id, Some(450_789_469));
}

#[tokio::test]
async fn test_fulfillment_event_create_and_delete() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("orders/450789469/fulfillments/255858046/events.json")))
        .and(body_json(json!({"event": {"status": "in_transit"}})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"fulfillment_event": event_json()})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(api_path(
            "orders/450789469/fulfillments/255858046/events/944956391.json",
        )))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client(&server, 1);
    let events = client.fulfillment_events(450_789_469, 255_858_046);

    let created = events
        .create(&FulfillmentEvent {
            status: Some("in_transit".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created.id, Some(944_956_391));

    assert_ok!(events.delete(944_956_391).await);
}

// === Fulfillment orders and requests ===

fn fulfillment_order_json(request_status: &str) -> serde_json::Value {
    json!({
        "id": 1046000829,
        "order_id": 450789469,
        "assigned_location_id": 24826418,
        "status": "open",
        "request_status": request_status
    })
}

#[tokio::test]
async fn test_fulfillment_request_send() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("fulfillment_orders/1046000829/fulfillment_request.json")))
        .and(body_json(json!({
            "fulfillment_request": {"message": "Fulfill this ASAP please."}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "original_fulfillment_order": fulfillment_order_json("submitted"),
            "submitted_fulfillment_order": fulfillment_order_json("submitted")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client(&server, 1);
    let order = client
        .fulfillment_requests()
        .send(
            1_046_000_829,
            &FulfillmentRequest::with_message("Fulfill this ASAP please."),
        )
        .await
        .unwrap();

    assert_eq!(order.id, Some(1_046_000_829));
    assert_eq!(order.request_status.as_deref(), Some("submitted"));
}

#[tokio::test]
async fn test_fulfillment_request_accept_and_reject() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path(
            "fulfillment_orders/1046000829/fulfillment_request/accept.json",
        )))
        .and(body_json(json!({"fulfillment_request": {"message": "On it"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "fulfillment_order": fulfillment_order_json("accepted")
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(api_path(
            "fulfillment_orders/1046000829/fulfillment_request/reject.json",
        )))
        .and(body_json(json!({"fulfillment_request": {}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "fulfillment_order": fulfillment_order_json("rejected")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client(&server, 1);
    let requests = client.fulfillment_requests();

    let accepted = requests
        .accept(1_046_000_829, &FulfillmentRequest::with_message("On it"))
        .await
        .unwrap();
    assert_eq!(accepted.request_status.as_deref(), Some("accepted"));

    let rejected = requests
        .reject(1_046_000_829, &FulfillmentRequest::default())
        .await
        .unwrap();
    assert_eq!(rejected.request_status.as_deref(), Some("rejected"));
}

#[tokio::test]
async fn test_assigned_fulfillment_orders() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("assigned_fulfillment_orders.json")))
        .and(query_param("assignment_status", "fulfillment_requested"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"fulfillment_orders": [{"id": 1}, {"id": 2}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client(&server, 1);
    let orders = client
        .assigned_fulfillment_orders()
        .list(&AssignedFulfillmentOrderOptions {
            assignment_status: Some(AssignmentStatus::FulfillmentRequested),
            ..Default::default()
        })
        .await
        .unwrap();

    let ids: Vec<_> = orders.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![Some(1), Some(2)]);
}

// === CRUD round trips ===

#[tokio::test]
async fn test_carrier_service_update_uses_record_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(api_path("carrier_services/14079244.json")))
        .and(body_json(json!({"carrier_service": {"name": "Renamed", "active": false}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "carrier_service": {"id": 14079244, "name": "Renamed", "active": false}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client(&server, 1);
    let updated = client
        .carrier_services()
        .update(&CarrierService {
            id: Some(14_079_244),
            name: Some("Renamed".to_string()),
            active: Some(false),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(updated.name.as_deref(), Some("Renamed"));
}

#[tokio::test]
async fn test_collects_list_and_delete() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("collects.json")))
        .and(query_param("since_id", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "collects": [{"id": 455204334, "collection_id": 841564295, "product_id": 632910392}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(api_path("collects/455204334.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client(&server, 1);
    let collects: Vec<Collect> = client
        .collects()
        .list(&ListOptions {
            since_id: Some(10),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(collects[0].collection_id, Some(841_564_295));

    assert_ok!(client.collects().delete(455_204_334).await);
}

// === Abandoned checkouts ===

#[tokio::test]
async fn test_abandoned_checkouts_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("checkouts.json")))
        .and(query_param("status", "open"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"checkouts": [{"id": 1}, {"id": 2}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client(&server, 1);
    let checkouts = client
        .abandoned_checkouts()
        .list(&AbandonedCheckoutListOptions {
            status: Some(AbandonedCheckoutStatus::Open),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(checkouts.len(), 2);
    assert_eq!(checkouts[1].id, Some(2));
}

// === Payments transactions ===

#[tokio::test]
async fn test_payments_transactions_list_with_pagination() {
    let server = MockServer::start().await;
    let link = format!(
        "<{}/admin/api/2025-10/shopify_payments/balance/transactions.json?page_info=pg2>; rel=\"next\"",
        server.uri()
    );
    Mock::given(method("GET"))
        .and(path(api_path("shopify_payments/balance/transactions.json")))
        .and(query_param("payout_id", "623721858"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", link.as_str())
                .set_body_json(json!({
                    "transactions": [{
                        "id": 699519475,
                        "type": "debit",
                        "payout_id": 623721858,
                        "payout_status": "paid",
                        "amount": "-50.00",
                        "processed_at": "2013-11-01"
                    }]
                })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client(&server, 1);
    let page = client
        .payments_transactions()
        .list_with_pagination(&PaymentsTransactionListOptions {
            payout_id: Some(623_721_858),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(page[0].transaction_type, Some(PaymentsTransactionType::Debit));
    assert_eq!(page[0].processed_at, NaiveDate::from_ymd_opt(2013, 11, 1));
    assert_eq!(
        page.next_page_options().and_then(|o| o.page_info.as_deref()),
        Some("pg2")
    );
}

#[tokio::test]
async fn test_payments_transaction_get() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("shopify_payments/balance/transactions/623721858.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transaction": {"id": 699519475, "type": "debit", "net": "-50.00"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client(&server, 1);
    let transaction = client
        .payments_transactions()
        .get(623_721_858, &())
        .await
        .unwrap();
    assert_eq!(transaction.id, Some(699_519_475));
    assert_eq!(transaction.net.as_deref(), Some("-50.00"));
}

#[tokio::test]
async fn test_payments_transactions_bad_date_fails_to_decode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("shopify_payments/balance/transactions.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transactions": [{"id": 1, "processed_at": "20-02-2"}]
        })))
        .mount(&server)
        .await;

    let (client, _) = client(&server, 1);
    let error = client
        .payments_transactions()
        .list(&())
        .await
        .unwrap_err();
    assert!(matches!(error, HttpError::Decode(_)));
}
