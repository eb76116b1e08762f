//! Feed Handlers Module
//!
//! REST handlers for posts, image uploads and the status line.
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports
//! ├── types.rs    - Request and response types
//! ├── form.rs     - Multipart post form reader
//! ├── posts.rs    - Post CRUD handlers
//! ├── upload.rs   - Standalone image upload
//! └── status.rs   - Status line handlers
//! ```

/// Request and response types
pub mod types;

/// Multipart post form
pub mod form;

/// Post handlers
pub mod posts;

/// Image upload handler
pub mod upload;

/// Status handlers
pub mod status;

pub use posts::{create_post, delete_post, get_post, list_posts, update_post};
pub use status::{get_status, update_status};
pub use upload::store_post_image;
