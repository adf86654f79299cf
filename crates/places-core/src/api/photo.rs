use super::PHOTO_PATH;
use crate::error::PlacesError;
use crate::types::{Params, PhotoStream, Transport};

/// Parameters for downloading a place photo
#[derive(Debug, Clone, Default)]
pub struct PhotoRequest {
    /// Reference taken from a search or details result
    pub photo_reference: String,
    /// Maximum width in pixels
    pub max_width: Option<u32>,
    /// Maximum height in pixels
    pub max_height: Option<u32>,
}

impl PhotoRequest {
    pub fn new(photo_reference: impl Into<String>) -> Self {
        Self {
            photo_reference: photo_reference.into(),
            ..Default::default()
        }
    }

    pub fn max_width(mut self, max_width: u32) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn max_height(mut self, max_height: u32) -> Self {
        self.max_height = Some(max_height);
        self
    }

    /// Build the wire parameters. At least one non-zero size hint is
    /// required; a zero hint counts as absent.
    pub fn to_params(&self) -> Result<Params, PlacesError> {
        let max_width = self.max_width.filter(|&w| w > 0);
        let max_height = self.max_height.filter(|&h| h > 0);
        if max_width.is_none() && max_height.is_none() {
            return Err(PlacesError::invalid_argument(
                "a max_width or max_height arg is required",
            ));
        }

        let mut params = Params::new();
        params
            .insert("photoreference", self.photo_reference.as_str())
            .insert_opt("maxwidth", max_width)
            .insert_opt("maxheight", max_height);
        Ok(params)
    }
}

/// Download a place photo.
///
/// The returned stream yields the image body chunk by chunk as it arrives;
/// nothing is buffered up front. Dropping the stream abandons the transfer.
///
/// ```no_run
/// use futures::StreamExt;
/// use places_core::{PhotoRequest, PlacesClient, places_photo};
/// use tokio::io::AsyncWriteExt;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = PlacesClient::from_env()?;
/// let mut stream = places_photo(&client, &PhotoRequest::new("CnRvAAAA").max_width(400)).await?;
/// let mut file = tokio::fs::File::create("photo.jpg").await?;
/// while let Some(chunk) = stream.next().await {
///     file.write_all(&chunk?).await?;
/// }
/// # Ok(())
/// # }
/// ```
pub async fn places_photo<T>(transport: &T, request: &PhotoRequest) -> Result<PhotoStream, PlacesError>
where
    T: Transport + ?Sized,
{
    let params = request.to_params()?;
    transport.get_raw(PHOTO_PATH, &params).await
}
