//! Path helpers for resources that can be nested under an owner.

/// Returns the metafields collection path for an owner resource.
///
/// An empty `resource` addresses the shop's own metafields.
///
/// # Example
///
/// ```rust
/// use shopify_client::rest::metafield_path_prefix;
///
/// assert_eq!(metafield_path_prefix("", 0), "metafields");
/// assert_eq!(metafield_path_prefix("products", 1), "products/1/metafields");
/// ```
#[must_use]
pub fn metafield_path_prefix(resource: &str, resource_id: u64) -> String {
    nested_prefix(resource, resource_id, "metafields")
}

/// Returns the fulfillments collection path for an owner resource.
///
/// # Example
///
/// ```rust
/// use shopify_client::rest::fulfillment_path_prefix;
///
/// assert_eq!(fulfillment_path_prefix("", 0), "fulfillments");
/// assert_eq!(fulfillment_path_prefix("orders", 450789469), "orders/450789469/fulfillments");
/// ```
#[must_use]
pub fn fulfillment_path_prefix(resource: &str, resource_id: u64) -> String {
    nested_prefix(resource, resource_id, "fulfillments")
}

fn nested_prefix(resource: &str, resource_id: u64, collection: &str) -> String {
    let resource = resource.trim_matches('/');
    if resource.is_empty() {
        collection.to_string()
    } else {
        format!("{resource}/{resource_id}/{collection}")
    }
}
