use anyhow::{Context, Result};
use clap::Args;
use futures::{Stream, StreamExt};
use places_core::{PhotoRequest, PlacesApi, PlacesError};
use std::path::PathBuf;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::args::{Cli, CliConfig};
use crate::output::OutputLevel;

#[derive(Args)]
pub struct PhotoArgs {
    /// Photo reference from a search or details result
    pub photo_reference: String,

    /// Maximum width in pixels
    #[arg(long)]
    pub max_width: Option<u32>,

    /// Maximum height in pixels
    #[arg(long)]
    pub max_height: Option<u32>,

    /// File to write the image to
    #[arg(short, long)]
    pub output: PathBuf,
}

impl PhotoArgs {
    pub fn to_request(&self) -> PhotoRequest {
        PhotoRequest {
            photo_reference: self.photo_reference.clone(),
            max_width: self.max_width,
            max_height: self.max_height,
        }
    }

    pub async fn run(
        &self,
        output_level: OutputLevel,
        cli_config: &CliConfig,
        cli: &Cli,
    ) -> Result<()> {
        let client = crate::client::from_cli(cli, cli_config)?;
        let request = self.to_request();

        let spinner = super::spinner_for("Downloading photo", output_level);
        spinner.start();
        let result = self.download(&client, &request).await;
        spinner.stop();

        let written = result?;
        crate::output::success(
            &format!("Wrote {} ({written} bytes)", self.output.display()),
            output_level,
        );
        Ok(())
    }

    async fn download<T: PlacesApi + ?Sized>(
        &self,
        client: &T,
        request: &PhotoRequest,
    ) -> Result<u64> {
        // Fail on bad arguments or HTTP errors before touching the file system
        let stream = client.places_photo(request).await?;

        let mut file = tokio::fs::File::create(&self.output)
            .await
            .with_context(|| format!("Failed to create {}", self.output.display()))?;

        match write_stream(stream, &mut file).await {
            Ok(written) => Ok(written),
            Err(e) => {
                drop(file);
                let _ = tokio::fs::remove_file(&self.output).await;
                Err(e)
            }
        }
    }
}

/// Copy every chunk of `stream` into `writer`, returning the byte count
pub async fn write_stream<S, W>(mut stream: S, writer: &mut W) -> Result<u64>
where
    S: Stream<Item = Result<bytes::Bytes, PlacesError>> + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut written = 0u64;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        writer.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    writer.flush().await?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use futures::stream;

    #[tokio::test]
    async fn test_write_stream_concatenates_chunks() {
        let chunks = stream::iter(vec![
            Ok::<_, PlacesError>(Bytes::from_static(b"<jpeg>")),
            Ok(Bytes::from_static(b"body")),
            Ok(Bytes::from_static(b"</jpeg>")),
        ]);

        let mut sink = Vec::new();
        let written = write_stream(chunks, &mut sink).await.unwrap();

        assert_eq!(written, 17);
        assert_eq!(sink, b"<jpeg>body</jpeg>".to_vec());
    }

    #[tokio::test]
    async fn test_write_stream_surfaces_mid_stream_error() {
        let chunks = stream::iter(vec![
            Ok(Bytes::from_static(b"partial")),
            Err(PlacesError::network("connection reset")),
        ]);

        let mut sink = Vec::new();
        let err = write_stream(chunks, &mut sink).await.unwrap_err();
        assert!(err.to_string().contains("connection reset"));
    }

    #[test]
    fn test_to_request() {
        let args = PhotoArgs {
            photo_reference: "CnRvAAAA".to_string(),
            max_width: None,
            max_height: Some(300),
            output: PathBuf::from("out.jpg"),
        };
        let params = args.to_request().to_params().unwrap();
        assert_eq!(params.get("photoreference").unwrap().to_string(), "CnRvAAAA");
        assert_eq!(params.get("maxheight").unwrap().to_string(), "300");
        assert!(!params.contains_key("maxwidth"));
    }
}
