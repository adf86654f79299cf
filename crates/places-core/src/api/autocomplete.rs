use super::AUTOCOMPLETE_PATH;
use crate::error::PlacesError;
use crate::location::{Location, latlng};
use crate::types::{Params, Transport};

/// Parameters for query autocomplete
#[derive(Debug, Clone, Default)]
pub struct AutocompleteRequest {
    /// Text typed so far, e.g. `"pizza near New York"`
    pub input: String,
    /// Position of the last character the service should match on
    pub offset: Option<u32>,
    pub location: Option<Location>,
    /// Bias radius in meters
    pub radius: Option<u32>,
    pub language: Option<String>,
}

impl AutocompleteRequest {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Default::default()
        }
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
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

    pub fn to_params(&self) -> Result<Params, PlacesError> {
        let mut params = Params::new();
        params
            .insert("input", self.input.as_str())
            .insert_opt("offset", self.offset)
            .insert_opt("location", self.location.as_ref().map(latlng).transpose()?)
            .insert_opt("radius", self.radius)
            .insert_text("language", self.language.as_deref());
        Ok(params)
    }
}

/// Place predictions for a partial text query.
///
/// Unlike search and details, this unwraps the envelope and returns only the
/// `predictions` array.
pub async fn places_autocomplete<T>(
    transport: &T,
    request: &AutocompleteRequest,
) -> Result<Vec<serde_json::Value>, PlacesError>
where
    T: Transport + ?Sized,
{
    let params = request.to_params()?;
    let envelope = transport.get(AUTOCOMPLETE_PATH, &params).await?;

    match envelope {
        serde_json::Value::Object(mut map) => match map.remove("predictions") {
            Some(serde_json::Value::Array(predictions)) => Ok(predictions),
            Some(_) => Err(PlacesError::serialization(
                "Autocomplete response field `predictions` is not an array",
            )),
            None => Err(PlacesError::serialization(
                "Autocomplete response has no `predictions` field",
            )),
        },
        _ => Err(PlacesError::serialization(
            "Autocomplete response is not a JSON object",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ParamValue;
    use crate::utils::test_helpers::StubTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_returns_predictions_only() {
        let stub = StubTransport::with_envelope(json!({
            "status": "OK",
            "predictions": [{"description": "Pizza Place"}]
        }));

        let predictions = places_autocomplete(&stub, &AutocompleteRequest::new("pizza near New York"))
            .await
            .unwrap();
        assert_eq!(predictions, vec![json!({"description": "Pizza Place"})]);

        let call = stub.only_call();
        assert_eq!(call.path, "/maps/api/place/queryautocomplete/json");
        assert_eq!(
            call.params.to_query_pairs(),
            vec![("input", "pizza near New York".to_string())]
        );
    }

    #[test]
    fn test_all_fields() {
        let params = AutocompleteRequest::new("Google")
            .offset(3)
            .location(Location::map(40.714224, -73.961452))
            .radius(5000)
            .language("fr")
            .to_params()
            .unwrap();

        assert_eq!(params.get("offset"), Some(&ParamValue::Int(3)));
        assert_eq!(
            params.get("location"),
            Some(&ParamValue::from("40.714224,-73.961452"))
        );
        assert_eq!(params.get("radius"), Some(&ParamValue::Int(5000)));
        assert_eq!(params.get("language"), Some(&ParamValue::from("fr")));
    }

    #[test]
    fn test_offset_passed_through_unchecked() {
        let params = AutocompleteRequest::new("abc").offset(99).to_params().unwrap();
        assert_eq!(params.get("offset"), Some(&ParamValue::Int(99)));
    }

    #[tokio::test]
    async fn test_empty_predictions() {
        let stub = StubTransport::with_envelope(json!({"status": "ZERO_RESULTS", "predictions": []}));
        let predictions = places_autocomplete(&stub, &AutocompleteRequest::new("zzzz"))
            .await
            .unwrap();
        assert!(predictions.is_empty());
    }

    #[tokio::test]
    async fn test_missing_predictions_is_an_error() {
        let stub = StubTransport::with_envelope(json!({"status": "OK"}));
        let err = places_autocomplete(&stub, &AutocompleteRequest::new("pizza"))
            .await
            .unwrap_err();
        assert!(matches!(err, PlacesError::Serialization { .. }));
    }
}
