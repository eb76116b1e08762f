/**
 * Image Lifecycle
 *
 * Stores uploaded post images on disk and reclaims the ones a mutation has
 * made unreachable.
 *
 * # Storage Layout
 *
 * Files live directly inside the configured image directory and are
 * referenced by posts as `images/<timestamp>-<uuid>-<sanitised name>`.
 * The same directory is served under `/images`.
 *
 * # Reclamation
 *
 * Deletion is best-effort and runs on a background task. A missing file, a
 * permission error or a reference that points outside the image directory is
 * logged and otherwise ignored; it never fails the mutation that asked for it.
 */

use chrono::Utc;
use std::io;
use std::path::{Component, Path, PathBuf};
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::backend::error::{BackendError, BackendResult};

/// URL prefix under which stored images are referenced and served
pub const IMAGE_URL_PREFIX: &str = "images";

/// Content types accepted for upload
pub const ACCEPTED_CONTENT_TYPES: [&str; 3] = ["image/png", "image/jpg", "image/jpeg"];

const MAX_NAME_LEN: usize = 100;

/// Reclaims images that are no longer referenced
///
/// `schedule_delete` must return immediately; the actual removal happens
/// in the background and its failures are only logged.
pub trait ImageReclaimer: Send + Sync {
    fn schedule_delete(&self, image_url: &str);
}

/// Whether an uploaded part with this content type is kept
pub fn is_accepted_content_type(content_type: &str) -> bool {
    ACCEPTED_CONTENT_TYPES
        .iter()
        .any(|accepted| accepted.eq_ignore_ascii_case(content_type.trim()))
}

/// Reduce a client-supplied file name to a safe single path segment
pub fn sanitise_file_name(name: &str) -> String {
    let base = name.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .take(MAX_NAME_LEN)
        .collect();

    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned.to_string()
    }
}

/// Image files kept in a local directory
#[derive(Debug, Clone)]
pub struct DiskImages {
    root: PathBuf,
}

impl DiskImages {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory the images are stored in
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Store an uploaded image
    ///
    /// Returns `Ok(None)` when the content type is not an accepted image; such
    /// parts are dropped rather than rejected. On success the returned value
    /// is the reference to put on the post.
    pub async fn store(
        &self,
        file_name: &str,
        content_type: &str,
        data: &[u8],
    ) -> BackendResult<Option<String>> {
        if !is_accepted_content_type(content_type) {
            tracing::warn!("Ignoring upload with unsupported type: {}", content_type);
            return Ok(None);
        }

        let stored_name = format!(
            "{}-{}-{}",
            Utc::now().timestamp_millis(),
            Uuid::new_v4().simple(),
            sanitise_file_name(file_name)
        );

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| {
                BackendError::internal(format!("failed to create image directory: {}", e))
            })?;
        tokio::fs::write(self.root.join(&stored_name), data)
            .await
            .map_err(|e| BackendError::internal(format!("failed to store image: {}", e)))?;

        let image_url = format!("{}/{}", IMAGE_URL_PREFIX, stored_name);
        tracing::info!("Stored image {} ({} bytes)", image_url, data.len());
        Ok(Some(image_url))
    }

    /// Map an image reference to a file inside the image directory
    ///
    /// Anything that is not exactly one plain file name below the prefix is
    /// refused.
    pub fn resolve(&self, image_url: &str) -> Option<PathBuf> {
        let relative = image_url
            .trim_start_matches('/')
            .strip_prefix(IMAGE_URL_PREFIX)?
            .strip_prefix('/')?;

        let mut components = Path::new(relative).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(file)), None) => Some(self.root.join(file)),
            _ => None,
        }
    }

    /// Remove an image now
    ///
    /// Returns `Ok(false)` when the reference was refused.
    pub async fn remove(&self, image_url: &str) -> io::Result<bool> {
        match self.resolve(image_url) {
            Some(path) => {
                tokio::fs::remove_file(&path).await?;
                tracing::info!("Deleted image: {}", path.display());
                Ok(true)
            }
            None => {
                tracing::warn!("Refusing to delete image outside image directory: {}", image_url);
                Ok(false)
            }
        }
    }
}

impl DiskImages {
    /// Remove an image on a background task
    ///
    /// Failures are logged, never returned. `None` when called outside a
    /// runtime, in which case nothing is removed.
    pub fn spawn_remove(&self, image_url: &str) -> Option<JoinHandle<()>> {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("No runtime available, image not deleted: {}", image_url);
            return None;
        };

        let images = self.clone();
        let image_url = image_url.to_string();
        Some(runtime.spawn(async move {
            if let Err(e) = images.remove(&image_url).await {
                tracing::warn!("Failed to delete image {}: {}", image_url, e);
            }
        }))
    }
}

impl ImageReclaimer for DiskImages {
    fn schedule_delete(&self, image_url: &str) {
        self.spawn_remove(image_url);
    }
}
