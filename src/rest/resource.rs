//! Generic typed CRUD adapter.
//!
//! Every Shopify REST resource follows the same shape: a collection path,
//! `{path}/{id}` for single records, `{path}/count` for counting, and JSON
//! bodies wrapped in the singular or plural resource name:
//!
//! ```text
//! GET  gift_cards.json        -> {"gift_cards": [...]}
//! GET  gift_cards/1.json      -> {"gift_card": {...}}
//! POST gift_cards.json        <- {"gift_card": {...}}
//! GET  gift_cards/count.json  -> {"count": 3}
//! ```
//!
//! [`RestResource`] names the wrapping keys and [`ResourceService`]
//! implements the operations once for all resources.
//!
//! # Implementing a Resource
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use shopify_client::rest::RestResource;
//!
//! #[derive(Clone, Debug, Default, Serialize, Deserialize)]
//! pub struct Redirect {
//!     #[serde(skip_serializing)]
//!     pub id: Option<u64>,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub path: Option<String>,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub target: Option<String>,
//! }
//!
//! impl RestResource for Redirect {
//!     const SINGULAR: &'static str = "redirect";
//!     const PLURAL: &'static str = "redirects";
//!
//!     fn id(&self) -> Option<u64> {
//!         self.id
//!     }
//! }
//! ```

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::clients::{HttpError, InvalidHttpRequestError, RestClient};
use crate::rest::ResourceResponse;

/// A REST resource whose bodies are wrapped in its singular or plural name.
pub trait RestResource: Serialize + DeserializeOwned + Send + Sync {
    /// Key wrapping a single record, e.g. `"gift_card"`.
    const SINGULAR: &'static str;

    /// Key wrapping a list of records, e.g. `"gift_cards"`.
    const PLURAL: &'static str;

    /// Returns the record's ID, or `None` if it has not been saved.
    fn id(&self) -> Option<u64>;
}

/// CRUD operations for one resource type under a base path.
///
/// Options are any [`Serialize`] value flattened into query parameters;
/// pass `&()` for none.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_client::clients::ListOptions;
///
/// let collects = client.collects();
/// let all = collects.list(&ListOptions::default()).await?;
/// let total = collects.count(&()).await?;
/// let one = collects.get(841564295, &()).await?;
/// collects.delete(841564295).await?;
/// ```
pub struct ResourceService<R> {
    rest: RestClient,
    base_path: String,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self {
            rest: self.rest.clone(),
            base_path: self.base_path.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R> std::fmt::Debug for ResourceService<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceService")
            .field("base_path", &self.base_path)
            .finish_non_exhaustive()
    }
}

impl<R: RestResource> ResourceService<R> {
    /// Creates a service for records under `base_path`, e.g. `"gift_cards"`.
    #[must_use]
    pub fn new(rest: RestClient, base_path: impl Into<String>) -> Self {
        Self {
            rest,
            base_path: base_path.into(),
            _resource: PhantomData,
        }
    }

    /// Returns the collection path.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the REST client used for requests.
    #[must_use]
    pub const fn rest(&self) -> &RestClient {
        &self.rest
    }

    /// Lists records.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body does not decode.
    pub async fn list<Q>(&self, options: &Q) -> Result<Vec<R>, HttpError>
    where
        Q: Serialize + ?Sized,
    {
        let body: Value = self.rest.get(&self.base_path, options).await?;
        unwrap_key(body, R::PLURAL)
    }

    /// Lists records along with the cursors of the surrounding pages.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Pagination`] if the `Link` header is malformed,
    /// otherwise as [`list`](Self::list).
    pub async fn list_with_pagination<Q>(
        &self,
        options: &Q,
    ) -> Result<ResourceResponse<Vec<R>>, HttpError>
    where
        Q: Serialize + ?Sized,
    {
        let (body, pagination): (Value, _) =
            self.rest.list_with_pagination(&self.base_path, options).await?;
        Ok(ResourceResponse::new(unwrap_key(body, R::PLURAL)?, pagination))
    }

    /// Counts records.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body is not `{"count": N}`.
    pub async fn count<Q>(&self, options: &Q) -> Result<u64, HttpError>
    where
        Q: Serialize + ?Sized,
    {
        self.rest
            .count(&format!("{}/count", self.base_path), options)
            .await
    }

    /// Fetches one record.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body does not decode.
    pub async fn get<Q>(&self, id: u64, options: &Q) -> Result<R, HttpError>
    where
        Q: Serialize + ?Sized,
    {
        let body: Value = self.rest.get(&self.record_path(id), options).await?;
        unwrap_key(body, R::SINGULAR)
    }

    /// Creates a record and returns it as stored.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body does not decode.
    pub async fn create(&self, resource: &R) -> Result<R, HttpError> {
        let body: Value = self
            .rest
            .post(&self.base_path, &wrap_key(R::SINGULAR, resource)?)
            .await?;
        unwrap_key(body, R::SINGULAR)
    }

    /// Updates a record and returns it as stored.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingResourceId`] if `resource`
    /// has no ID, otherwise as [`create`](Self::create).
    pub async fn update(&self, resource: &R) -> Result<R, HttpError> {
        let id = resource
            .id()
            .ok_or(InvalidHttpRequestError::MissingResourceId {
                resource: R::SINGULAR,
            })?;
        let body: Value = self
            .rest
            .put(&self.record_path(id), &wrap_key(R::SINGULAR, resource)?)
            .await?;
        unwrap_key(body, R::SINGULAR)
    }

    /// Deletes a record.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete(&self, id: u64) -> Result<(), HttpError> {
        self.rest.delete(&self.record_path(id), &()).await
    }

    pub(crate) fn record_path(&self, id: u64) -> String {
        format!("{}/{id}", self.base_path)
    }
}

/// Wraps `value` as `{key: value}`.
pub(crate) fn wrap_key<T: Serialize + ?Sized>(key: &str, value: &T) -> Result<Value, HttpError> {
    let mut map = Map::new();
    map.insert(key.to_string(), serde_json::to_value(value)?);
    Ok(Value::Object(map))
}

/// Decodes the value stored under `key`.
pub(crate) fn unwrap_key<T: DeserializeOwned>(mut body: Value, key: &str) -> Result<T, HttpError> {
    let inner = body.get_mut(key).map(Value::take).unwrap_or(Value::Null);
    Ok(serde_json::from_value(inner)?)
}
