//! Paginated list results.
//!
//! [`ResourceResponse<T>`] pairs decoded data with the cursors parsed from
//! the `Link` header. It implements `Deref<Target = T>`, so a
//! `ResourceResponse<Vec<Payout>>` can be iterated and indexed directly:
//!
//! ```rust,ignore
//! let mut page = client.payouts().list_with_pagination(&PayoutListOptions::default()).await?;
//! loop {
//!     for payout in page.iter() {
//!         println!("{:?} {:?}", payout.id, payout.amount);
//!     }
//!     let Some(next) = page.next_page_options().cloned() else { break };
//!     page = client.payouts().list_with_pagination(&next).await?;
//! }
//! ```

use std::ops::{Deref, DerefMut};

use crate::clients::{ListOptions, Pagination};

/// Decoded data plus the navigation cursors of the page it came from.
///
/// # Example
///
/// ```rust
/// use shopify_client::clients::{ListOptions, Pagination};
/// use shopify_client::rest::ResourceResponse;
///
/// let response = ResourceResponse::new(
///     vec!["a", "b"],
///     Pagination {
///         next_page_options: Some(ListOptions::page("eyJsYXN0X2lkIjo0fQ")),
///         previous_page_options: None,
///     },
/// );
///
/// assert_eq!(response.len(), 2);
/// assert!(response.has_next_page());
/// assert!(!response.has_previous_page());
/// assert_eq!(response.into_inner(), vec!["a", "b"]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceResponse<T> {
    data: T,
    pagination: Pagination,
}

impl<T> ResourceResponse<T> {
    /// Creates a response from decoded data and parsed cursors.
    #[must_use]
    pub const fn new(data: T, pagination: Pagination) -> Self {
        Self { data, pagination }
    }

    /// Consumes the response and returns the data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Consumes the response and returns data and cursors.
    #[must_use]
    pub fn into_parts(self) -> (T, Pagination) {
        (self.data, self.pagination)
    }

    /// Returns the cursors.
    #[must_use]
    pub const fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Returns `true` if there is a next page.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.pagination.has_next_page()
    }

    /// Returns `true` if there is a previous page.
    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.pagination.has_previous_page()
    }

    /// Options that fetch the next page, if there is one.
    #[must_use]
    pub const fn next_page_options(&self) -> Option<&ListOptions> {
        self.pagination.next_page_options.as_ref()
    }

    /// Options that fetch the previous page, if there is one.
    #[must_use]
    pub const fn previous_page_options(&self) -> Option<&ListOptions> {
        self.pagination.previous_page_options.as_ref()
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}
