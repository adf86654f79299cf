use super::DETAILS_PATH;
use crate::error::PlacesError;
use crate::types::{Envelope, Params, Transport};

/// Parameters for a place details lookup
#[derive(Debug, Clone, Default)]
pub struct PlaceDetailsRequest {
    /// Opaque identifier returned by a search
    pub place_id: String,
    pub language: Option<String>,
}

impl PlaceDetailsRequest {
    pub fn new(place_id: impl Into<String>) -> Self {
        Self {
            place_id: place_id.into(),
            language: None,
        }
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .insert("placeid", self.place_id.as_str())
            .insert_text("language", self.language.as_deref());
        params
    }
}

/// Comprehensive details for a single place.
///
/// The envelope carries `result` and `html_attributions`.
pub async fn place<T>(transport: &T, request: &PlaceDetailsRequest) -> Result<Envelope, PlacesError>
where
    T: Transport + ?Sized,
{
    transport.get(DETAILS_PATH, &request.to_params()).await
}
