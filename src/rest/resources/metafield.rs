//! Metafields attached to the shop or to another resource.
//!
//! The collection path depends on the owner; see
//! [`metafield_path_prefix`](crate::rest::metafield_path_prefix).

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::ListOptions;
use crate::rest::RestResource;

/// A custom field attached to a resource.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Metafield {
    /// The unique identifier.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// Key within the namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Stored value. Its JSON shape depends on `value_type`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    /// Metafield type, e.g. `"single_line_text_field"`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,

    /// Groups related metafields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// ID of the owning resource.
    #[serde(skip_serializing)]
    pub owner_id: Option<u64>,

    /// Kind of the owning resource, e.g. `"product"`.
    #[serde(skip_serializing)]
    pub owner_resource: Option<String>,

    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<FixedOffset>>,

    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<FixedOffset>>,

    /// The GraphQL GID.
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for Metafield {
    const SINGULAR: &'static str = "metafield";
    const PLURAL: &'static str = "metafields";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Options for listing and counting metafields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MetafieldListOptions {
    /// Common list options.
    #[serde(flatten)]
    pub list: ListOptions,

    /// Only metafields in this namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Only metafields with this key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Only metafields of this type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
}
