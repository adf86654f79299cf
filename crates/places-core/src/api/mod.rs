//! Places operations: each builds query parameters and hands them to a
//! [`Transport`].
//!
//! The free functions take any transport. [`PlacesApi`] exposes the same
//! operations as methods on every transport.

pub mod autocomplete;
pub mod details;
pub mod photo;
pub mod search;

pub use autocomplete::{AutocompleteRequest, places_autocomplete};
pub use details::{PlaceDetailsRequest, place};
pub use photo::{PhotoRequest, places_photo};
pub use search::{TextSearchRequest, places};

use crate::error::PlacesError;
use crate::types::{Envelope, PhotoStream, Transport};

pub const TEXT_SEARCH_PATH: &str = "/maps/api/place/textsearch/json";
pub const DETAILS_PATH: &str = "/maps/api/place/details/json";
pub const PHOTO_PATH: &str = "/maps/api/place/photo";
pub const AUTOCOMPLETE_PATH: &str = "/maps/api/place/queryautocomplete/json";

/// Method-style access to the Places operations
#[async_trait::async_trait]
pub trait PlacesApi: Transport {
    async fn places(&self, request: &TextSearchRequest) -> Result<Envelope, PlacesError> {
        search::places(self, request).await
    }

    async fn place(&self, request: &PlaceDetailsRequest) -> Result<Envelope, PlacesError> {
        details::place(self, request).await
    }

    async fn places_photo(&self, request: &PhotoRequest) -> Result<PhotoStream, PlacesError> {
        photo::places_photo(self, request).await
    }

    async fn places_autocomplete(
        &self,
        request: &AutocompleteRequest,
    ) -> Result<Vec<serde_json::Value>, PlacesError> {
        autocomplete::places_autocomplete(self, request).await
    }
}

impl<T: Transport + ?Sized> PlacesApi for T {}
