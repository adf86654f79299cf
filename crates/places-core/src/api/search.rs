use super::TEXT_SEARCH_PATH;
use crate::error::PlacesError;
use crate::location::{Location, latlng};
use crate::types::{Envelope, Params, Transport};

/// Parameters for a Places text search
#[derive(Debug, Clone, Default)]
pub struct TextSearchRequest {
    /// Free-text query, e.g. `"restaurant"`. Empty only for continuation pages.
    pub query: String,
    pub location: Option<Location>,
    /// Bias radius in meters
    pub radius: Option<u32>,
    pub language: Option<String>,
    /// Lowest price level (the API understands 0..=4)
    pub min_price: Option<u8>,
    /// Highest price level (the API understands 0..=4)
    pub max_price: Option<u8>,
    /// Only places open right now. `false` sends nothing.
    pub open_now: bool,
    /// Place type restriction, joined with `|` on the wire
    pub types: Vec<String>,
    /// `next_page_token` from a previous search
    pub page_token: Option<String>,
}

impl TextSearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// Request the continuation page of an earlier search
    pub fn next_page(page_token: impl Into<String>) -> Self {
        Self {
            page_token: Some(page_token.into()),
            ..Default::default()
        }
    }

    pub fn location(mut self, location: impl Into<Location>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn radius(mut self, radius: u32) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn min_price(mut self, min_price: u8) -> Self {
        self.min_price = Some(min_price);
        self
    }

    pub fn max_price(mut self, max_price: u8) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn open_now(mut self, open_now: bool) -> Self {
        self.open_now = open_now;
        self
    }

    pub fn place_type(mut self, place_type: impl Into<String>) -> Self {
        self.types.push(place_type.into());
        self
    }

    pub fn page_token(mut self, page_token: impl Into<String>) -> Self {
        self.page_token = Some(page_token.into());
        self
    }

    /// Build the wire parameters, normalizing the location
    pub fn to_params(&self) -> Result<Params, PlacesError> {
        let mut params = Params::new();
        params
            .insert_text("query", Some(self.query.as_str()))
            .insert_opt("location", self.location.as_ref().map(latlng).transpose()?)
            .insert_opt("radius", self.radius)
            .insert_text("language", self.language.as_deref())
            .insert_opt("minprice", self.min_price)
            .insert_opt("maxprice", self.max_price)
            .insert_flag("opennow", self.open_now)
            .insert_text("pagetoken", self.page_token.as_deref());

        if !self.types.is_empty() {
            params.insert("type", self.types.join("|"));
        }

        Ok(params)
    }
}

/// Text search for places.
///
/// Returns the envelope untouched: `results`, `html_attributions` and, when
/// more results exist, `next_page_token`.
pub async fn places<T>(transport: &T, request: &TextSearchRequest) -> Result<Envelope, PlacesError>
where
    T: Transport + ?Sized,
{
    let params = request.to_params()?;
    transport.get(TEXT_SEARCH_PATH, &params).await
}
