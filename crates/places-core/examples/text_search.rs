//! Text search followed by a details lookup for the first hit.
//!
//! Requires `GOOGLE_MAPS_API_KEY`.

use places_core::{PlaceDetailsRequest, PlacesApi, PlacesClient, TextSearchRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let client = PlacesClient::from_env()?;

    let request = TextSearchRequest::new("coffee")
        .location((-33.8670522, 151.1957362))
        .radius(800)
        .open_now(true);

    let envelope = client.places(&request).await?;
    let results = envelope["results"].as_array().cloned().unwrap_or_default();
    println!("Found {} places", results.len());

    for result in &results {
        println!(
            "  {} ({})",
            result["name"].as_str().unwrap_or("?"),
            result["formatted_address"].as_str().unwrap_or("no address")
        );
    }

    if let Some(place_id) = results.first().and_then(|r| r["place_id"].as_str()) {
        let details = client
            .place(&PlaceDetailsRequest::new(place_id).language("en"))
            .await?;
        println!(
            "\nFirst result phone: {}",
            details["result"]["formatted_phone_number"]
                .as_str()
                .unwrap_or("unknown")
        );
    }

    if let Some(token) = envelope["next_page_token"].as_str() {
        println!("\nMore results available, page token: {token}");
    }

    Ok(())
}
