//! Thumbnail generation and caching.
//!
//! The thumbnail for a project is derived from its cover image (the first
//! image reference in the README). A previously generated `thumb.png` in
//! the project directory short-circuits the whole stage; otherwise the
//! cover is fetched once, resized to a fixed width and persisted back to
//! the directory as a durable cache. Concurrent invocations racing on the
//! cache are not synchronized: the content is idempotent and last write
//! wins.

use std::io::{self, Cursor};
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use curricula_core::{Error, Result};
use image::imageops::FilterType;
use image::ImageFormat;

use crate::document::Document;

/// Fixed thumbnail width in pixels; height preserves the aspect ratio.
pub const THUMB_WIDTH: u32 = 395;

/// Cache filename inside the project directory.
pub const THUMB_FILE: &str = "thumb.png";

/// Produce the thumbnail data URI for a project, or `None` when the
/// document has no cover image and no cache exists.
pub async fn generate(
    client: &reqwest::Client,
    dir: &Path,
    doc: &Document,
) -> Result<Option<String>> {
    let cache = dir.join(THUMB_FILE);

    match tokio::fs::read(&cache).await {
        Ok(bytes) => {
            tracing::debug!(path = %cache.display(), "reusing cached thumbnail");
            return Ok(Some(data_uri(&bytes)));
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(source) => {
            return Err(Error::Io {
                path: cache,
                source,
            })
        }
    }

    let Some(url) = doc.first_image_url() else {
        tracing::debug!("no cover image, skipping thumbnail");
        return Ok(None);
    };

    tracing::debug!(%url, "fetching cover image");
    let response = client.get(url).send().await.map_err(Error::fetch)?;
    let status = response.status();
    if status.as_u16() != 200 {
        return Err(Error::Http {
            status: status.as_u16(),
        });
    }

    let body = response.bytes().await.map_err(Error::fetch)?;
    let png = resize_to_png(&body)?;

    tokio::fs::write(&cache, &png)
        .await
        .map_err(|source| Error::Io {
            path: cache.clone(),
            source,
        })?;
    tracing::debug!(path = %cache.display(), "thumbnail cached");

    Ok(Some(data_uri(&png)))
}

/// Decode, resize to [`THUMB_WIDTH`] preserving aspect ratio, re-encode
/// as PNG.
fn resize_to_png(bytes: &[u8]) -> Result<Vec<u8>> {
    let img = image::load_from_memory(bytes).map_err(Error::image)?;

    let height = (f64::from(img.height()) * f64::from(THUMB_WIDTH) / f64::from(img.width()))
        .round()
        .max(1.0) as u32;
    let resized = img.resize_exact(THUMB_WIDTH, height, FilterType::Lanczos3);

    let mut out = Vec::new();
    resized
        .write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
        .map_err(Error::image)?;
    Ok(out)
}

fn data_uri(bytes: &[u8]) -> String {
    format!("data:image/png;base64,{}", BASE64.encode(bytes))
}
