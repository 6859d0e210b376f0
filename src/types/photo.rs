//! Photo files for upload.

use std::path::{Path, PathBuf};

use reqwest::multipart::Part;

use crate::Error;
use crate::error::map_reqwest_error;

/// A photo file resolved to an absolute path on disk.
///
/// Resolution happens before any request is built: the path is
/// canonicalized, and it must name a regular file. The file itself is only
/// opened when the request body is assembled; the handle moves into the body
/// and is closed when the request finishes, whether it succeeds or fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetPhoto {
    path: PathBuf,
    file_name: String,
    mime_type: &'static str,
    len: u64,
}

impl PetPhoto {
    /// Resolves a photo path.
    ///
    /// Relative paths are resolved against the current working directory.
    ///
    /// # Errors
    ///
    /// - [`InvalidArgument`](crate::ErrorKind::InvalidArgument) if the path is
    ///   empty or does not name a regular file
    /// - [`NotFound`](crate::ErrorKind::NotFound) if nothing exists at the path
    /// - [`Forbidden`](crate::ErrorKind::Forbidden) if it cannot be accessed
    pub async fn resolve(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(Error::invalid_argument("photo path is empty"));
        }

        let absolute = tokio::fs::canonicalize(path).await.map_err(|e| {
            let err = Error::from(e);
            Error::new(
                err.kind(),
                format!("cannot resolve photo {}: {}", path.display(), err.message()),
            )
            .with_source(err)
        })?;

        let metadata = tokio::fs::metadata(&absolute).await?;
        if !metadata.is_file() {
            return Err(Error::invalid_argument(format!(
                "photo path {} is not a regular file",
                absolute.display()
            )));
        }

        let file_name = absolute
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "photo".to_string());

        Ok(Self {
            mime_type: mime_type_for(&absolute),
            path: absolute,
            file_name,
            len: metadata.len(),
        })
    }

    /// Returns the absolute path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file name sent in the multipart part.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the content type sent in the multipart part.
    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    /// Returns the file size in bytes at resolution time.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Returns `true` if the file was empty at resolution time.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Opens the file and wraps it in a streaming multipart part.
    pub(crate) async fn into_part(self) -> Result<Part, Error> {
        let file = tokio::fs::File::open(&self.path).await?;
        Part::stream_with_length(reqwest::Body::from(file), self.len)
            .file_name(self.file_name)
            .mime_str(self.mime_type)
            .map_err(map_reqwest_error)
    }
}

fn mime_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}
