/**
 * Multipart Post Form
 *
 * Reads the `multipart/form-data` body of the create and update endpoints:
 *
 * - `title`, `content` - text fields
 * - `image` - either an uploaded file or, on update, a text field holding
 *   the current image reference or `unspecified`
 * - `oldPath` - text field naming an image the client wants reclaimed
 *
 * Uploaded files that are not PNG or JPEG are dropped without an error.
 * A file stored while reading a form is reclaimed again if the form turns
 * out to be unreadable, and callers reclaim it if the mutation fails.
 */

use axum::extract::multipart::{Multipart, MultipartError};

use crate::backend::error::{BackendError, BackendResult};
use crate::backend::feed::images::{DiskImages, ImageReclaimer};

/// Fields of a post form
#[derive(Debug, Default)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    /// `image` sent as a text field
    pub image_text: Option<String>,
    /// Reference of the file stored from this request's `image` part
    pub uploaded: Option<String>,
    pub old_path: Option<String>,
}

fn malformed(e: MultipartError) -> BackendError {
    tracing::warn!("Rejected multipart body: {}", e);
    BackendError::invalid_input("Invalid form data.", Vec::new())
}

impl PostForm {
    /// Read every field, storing an uploaded image on the way
    pub async fn read(multipart: &mut Multipart, images: &DiskImages) -> BackendResult<Self> {
        let mut form = Self::default();
        if let Err(e) = form.read_fields(multipart, images).await {
            form.discard_upload(images);
            return Err(e);
        }
        Ok(form)
    }

    async fn read_fields(
        &mut self,
        multipart: &mut Multipart,
        images: &DiskImages,
    ) -> BackendResult<()> {
        while let Some(field) = multipart.next_field().await.map_err(malformed)? {
            let name = field.name().unwrap_or_default().to_string();
            let file_name = field.file_name().map(str::to_string);

            match (name.as_str(), file_name) {
                ("image", Some(file_name)) => {
                    let content_type = field.content_type().unwrap_or_default().to_string();
                    let data = field.bytes().await.map_err(malformed)?;
                    if let Some(stored) = images.store(&file_name, &content_type, &data).await? {
                        if let Some(replaced) = self.uploaded.replace(stored) {
                            images.schedule_delete(&replaced);
                        }
                    }
                }
                ("image", None) => self.image_text = Some(field.text().await.map_err(malformed)?),
                ("title", _) => self.title = field.text().await.map_err(malformed)?,
                ("content", _) => self.content = field.text().await.map_err(malformed)?,
                ("oldPath", _) => self.old_path = Some(field.text().await.map_err(malformed)?),
                _ => tracing::debug!("Ignoring form field: {}", name),
            }
        }
        Ok(())
    }

    /// The image the request asks for: the uploaded file, else the text field
    pub fn image_url(&self) -> String {
        self.uploaded
            .clone()
            .or_else(|| self.image_text.clone())
            .unwrap_or_default()
    }

    /// Reclaim the file stored from this request, if any
    pub fn discard_upload(&self, images: &dyn ImageReclaimer) {
        if let Some(uploaded) = &self.uploaded {
            tracing::info!("Discarding upload of failed request: {}", uploaded);
            images.schedule_delete(uploaded);
        }
    }
}
