//! Image upload (admin).
//!
//! Uploads bypass the JSON core: the body is `multipart/form-data` with
//! the boundary content type set by `reqwest`, and the JSON content type
//! deliberately absent. Only the auth header is attached.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use secrecy::ExposeSecret;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::{ApiError, ApiResult};
use crate::http::{StoreClient, parse_envelope};

/// Response to a successful image upload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    /// Stored path (`/uploads/products/...`), usable as a product image
    /// source.
    pub path: String,
}

fn mime_for_extension(path: &Path) -> Option<&'static str> {
    match path
        .extension()
        .and_then(|ext| ext.to_str())?
        .to_ascii_lowercase()
        .as_str()
    {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

impl StoreClient {
    /// Upload a product image (admin). `POST /upload/image`
    ///
    /// # Errors
    ///
    /// Returns a validation error for unsupported file types, an I/O
    /// error if the file cannot be read, or an API error from the
    /// backend.
    #[instrument(skip(self), fields(file = %file_path.display()))]
    pub async fn upload_image(&self, file_path: &Path) -> ApiResult<UploadedImage> {
        let mime = mime_for_extension(file_path).ok_or_else(|| {
            ApiError::Validation(format!(
                "unsupported image type: {}",
                file_path.display()
            ))
        })?;

        let file_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_owned();

        let contents = tokio::fs::read(file_path).await?;
        debug!(size = contents.len(), %file_name, "uploading image");

        let part = Part::bytes(contents)
            .file_name(file_name)
            .mime_str(mime)
            .map_err(ApiError::Network)?;
        let form = Form::new().part("image", part);

        let url = format!("{}/upload/image", self.api_url());
        let mut request = self.http().post(&url).multipart(form);
        if let Some(token) = self.bearer() {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await.map_err(ApiError::Network)?;
        let status = response.status();
        let text = response.text().await.map_err(ApiError::Network)?;
        parse_envelope(status, &text).map_err(|e| e.with_fallback("Failed to upload image"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_image_extensions() {
        assert_eq!(mime_for_extension(Path::new("a.JPG")), Some("image/jpeg"));
        assert_eq!(mime_for_extension(Path::new("a.webp")), Some("image/webp"));
        assert_eq!(mime_for_extension(Path::new("a.pdf")), None);
        assert_eq!(mime_for_extension(Path::new("noext")), None);
    }
}
