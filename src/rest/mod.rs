//! Typed REST resources.
//!
//! - [`RestResource`] describes how a resource is wrapped in JSON bodies.
//! - [`ResourceService`] implements list, count, get, create, update and
//!   delete once for every resource under a base path.
//! - [`ResourceResponse`] carries paginated list results.
//! - [`resources`] holds the individual resource adapters.
//!
//! Services are usually obtained from
//! [`ShopifyClient`](crate::clients::ShopifyClient):
//!
//! ```rust,ignore
//! use shopify_client::rest::resources::GiftCardListOptions;
//!
//! let cards = client.gift_cards().list(&GiftCardListOptions::default()).await?;
//! let risks = client.order_risks(450789469).list(&()).await?;
//! let shop_metafields = client.metafields().count(&()).await?;
//! ```

mod dates;
mod path;
mod resource;
pub mod resources;
mod response;

pub use dates::date_only;
pub use path::{fulfillment_path_prefix, metafield_path_prefix};
pub use resource::{ResourceService, RestResource};
pub use response::ResourceResponse;
