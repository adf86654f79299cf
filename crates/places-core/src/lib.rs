//! # places-core - Google Places API bindings
//!
//! Typed request builders for the Google Places web service. Each operation
//! turns a request struct into query parameters, hands them to a
//! [`Transport`], and returns the response envelope (or the part of it that
//! matters).
//!
//! ## Features
//!
//! - **Text search**, **place details**, **photo download** and **query autocomplete**
//! - **Pluggable transport** - operations only depend on the [`Transport`] trait
//! - **Streaming photos** - image bodies arrive as a lazy stream of chunks
//! - **Coordinate normalization** - strings, named pairs and positional pairs
//!   all become the same `"lat,lng"` wire string
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use places_core::{PlacesClient, PlacesConfig, TextSearchRequest, places};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PlacesClient::new(PlacesConfig::new("your-api-key"))?;
//!
//!     let request = TextSearchRequest::new("restaurant")
//!         .location((-33.8670522, 151.1957362))
//!         .radius(500)
//!         .open_now(true);
//!
//!     let envelope = places(&client, &request).await?;
//!     println!("{}", envelope["results"]);
//!     Ok(())
//! }
//! ```
//!
//! The same operations are available as methods through [`PlacesApi`]:
//!
//! ```rust,no_run
//! use places_core::{AutocompleteRequest, PlacesApi, PlacesClient};
//!
//! # async fn example() -> Result<(), places_core::PlacesError> {
//! let client = PlacesClient::from_env()?;
//! let predictions = client
//!     .places_autocomplete(&AutocompleteRequest::new("pizza near New York"))
//!     .await?;
//! for prediction in predictions {
//!     println!("{}", prediction["description"]);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, PlacesError>`](PlacesError). The only
//! error raised locally is [`PlacesError::InvalidArgument`] (a photo request
//! with no size hint, or a malformed coordinate); everything else comes from
//! the transport and is passed through unchanged.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod location;
pub mod middleware;
pub mod types;

#[cfg(test)]
mod tests;
#[cfg(test)]
mod utils;

pub use api::{
    AutocompleteRequest, PhotoRequest, PlaceDetailsRequest, PlacesApi, TextSearchRequest, place,
    places, places_autocomplete, places_photo,
};
pub use client::{ApiStatus, PlacesClient};
pub use config::{ConfigBuilder, PlacesConfig};
pub use error::PlacesError;
pub use location::{Location, latlng};
pub use middleware::{LoggingTransport, MiddlewareConfig, PhotoMetricsStream};
pub use types::{Envelope, ParamValue, Params, PhotoStream, Transport};
