//! Download a place photo to disk, chunk by chunk.
//!
//! Usage: `cargo run --example download_photo -- <PHOTO_REFERENCE> [OUTPUT]`
//! Requires `GOOGLE_MAPS_API_KEY`.

use futures::StreamExt;
use places_core::{LoggingTransport, PhotoRequest, PlacesClient, places_photo};
use tokio::io::AsyncWriteExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let reference = args.next().ok_or("missing photo reference")?;
    let output = args.next().unwrap_or_else(|| "photo.jpg".to_string());

    let transport = LoggingTransport::new(PlacesClient::from_env()?);
    let request = PhotoRequest::new(reference).max_width(1600);

    let mut stream = places_photo(&transport, &request).await?;
    let mut file = tokio::fs::File::create(&output).await?;
    let mut written = 0usize;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        written += chunk.len();
        file.write_all(&chunk).await?;
    }
    file.flush().await?;

    println!("Wrote {written} bytes to {output}");
    Ok(())
}
