use crate::api::{
    AUTOCOMPLETE_PATH, AutocompleteRequest, DETAILS_PATH, PhotoRequest, PlaceDetailsRequest,
    PlacesApi, TEXT_SEARCH_PATH, TextSearchRequest, place, places, places_autocomplete,
    places_photo,
};
use crate::error::PlacesError;
use crate::location::{Location, latlng};
use crate::types::{ParamValue, Params, Transport};
use crate::utils::test_helpers::StubTransport;
use futures::StreamExt;
use serde_json::json;
use std::sync::Arc;

// Transport that refuses to be called
struct UnreachableTransport;

#[async_trait::async_trait]
impl Transport for UnreachableTransport {
    async fn get(&self, path: &str, _params: &Params) -> Result<crate::Envelope, PlacesError> {
        panic!("unexpected JSON request to {path}");
    }

    async fn get_raw(
        &self,
        path: &str,
        _params: &Params,
    ) -> Result<crate::PhotoStream, PlacesError> {
        panic!("unexpected raw request to {path}");
    }
}

#[test]
fn test_coordinate_shapes_agree() {
    let from_text = latlng(&Location::from("1,2")).unwrap();
    let from_map = latlng(&Location::map(1.0, 2.0)).unwrap();
    let from_seq = latlng(&Location::from([1.0, 2.0])).unwrap();

    assert_eq!(from_text, "1,2");
    assert_eq!(from_map, "1,2");
    assert_eq!(from_seq, "1,2");
}

#[tokio::test]
async fn test_photo_without_size_hints_never_reaches_transport() {
    let result = places_photo(&UnreachableTransport, &PhotoRequest::new("CnRvAAAA")).await;
    assert!(matches!(result, Err(PlacesError::InvalidArgument { .. })));
}

#[tokio::test]
async fn test_photo_with_max_height_only() {
    let stub = StubTransport::with_chunks(&["data"]);
    let stream = places_photo(&stub, &PhotoRequest::new("CnRvAAAA").max_height(200))
        .await
        .unwrap();
    let body: Vec<_> = stream.collect().await;
    assert_eq!(body.len(), 1);

    let call = stub.only_call();
    assert_eq!(call.params.get("maxheight"), Some(&ParamValue::Int(200)));
    assert!(!call.params.contains_key("maxwidth"));
}

#[tokio::test]
async fn test_open_now_serialization() {
    let stub = StubTransport::with_envelope(json!({"results": []}));

    places(&stub, &TextSearchRequest::new("cafe").open_now(true))
        .await
        .unwrap();
    places(&stub, &TextSearchRequest::new("cafe"))
        .await
        .unwrap();

    let calls = stub.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].params.get("opennow"), Some(&ParamValue::from("true")));
    assert!(!calls[1].params.contains_key("opennow"));
    assert!(calls.iter().all(|c| c.path == TEXT_SEARCH_PATH));
}

#[tokio::test]
async fn test_page_token_forwarded() {
    let stub = StubTransport::with_envelope(json!({"results": [], "next_page_token": "next"}));

    let first = places(&stub, &TextSearchRequest::new("hotels in Paris"))
        .await
        .unwrap();
    let token = first["next_page_token"].as_str().unwrap();

    places(&stub, &TextSearchRequest::next_page(token))
        .await
        .unwrap();

    let calls = stub.calls();
    assert_eq!(calls[1].params.get("pagetoken"), Some(&ParamValue::from("next")));
    assert!(!calls[1].params.contains_key("query"));
}

#[tokio::test]
async fn test_autocomplete_scenario() {
    let stub = StubTransport::with_envelope(json!({
        "predictions": [{"description": "Pizza Place"}]
    }));

    let predictions = places_autocomplete(&stub, &AutocompleteRequest::new("pizza near New York"))
        .await
        .unwrap();

    assert_eq!(predictions, vec![json!({"description": "Pizza Place"})]);
    assert_eq!(stub.only_call().path, AUTOCOMPLETE_PATH);
}

#[tokio::test]
async fn test_place_details_scenario() {
    let stub = StubTransport::with_envelope(json!({"result": {}, "html_attributions": []}));

    place(&stub, &PlaceDetailsRequest::new("abc123").language("en"))
        .await
        .unwrap();

    let call = stub.only_call();
    let mut expected = Params::new();
    expected.insert("placeid", "abc123").insert("language", "en");

    assert_eq!(call.path, DETAILS_PATH);
    assert_eq!(call.params, expected);
}

#[tokio::test]
async fn test_concurrent_calls_share_transport() {
    let stub = Arc::new(StubTransport::with_envelope(json!({"predictions": []})));

    let handles: Vec<_> = ["a", "b", "c", "d"]
        .into_iter()
        .map(|input| {
            let stub = Arc::clone(&stub);
            tokio::spawn(async move {
                stub.places_autocomplete(&AutocompleteRequest::new(input))
                    .await
                    .map(|p| p.len())
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), 0);
    }
    assert_eq!(stub.calls().len(), 4);
}
