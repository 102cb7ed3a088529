use std::io;

use actix_files::NamedFile;
use actix_web::mime;

use crate::domain::{RelativePath, SiteRoot};
use crate::services::{ServiceError, ServiceResult};
use crate::{FAVICON_FILE, INDEX_FILE};

/// Service resolving request paths against the site root on disk.
#[derive(Clone, Debug)]
pub struct SiteService {
    root: SiteRoot,
}

impl SiteService {
    pub fn new(root: SiteRoot) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &SiteRoot {
        &self.root
    }

    /// Whether anything (file or directory) exists at `relative`.
    pub fn exists(&self, relative: &RelativePath) -> bool {
        self.root.resolve(relative).exists()
    }

    /// Open the regular file at `relative`.
    pub async fn resolve(&self, relative: &RelativePath) -> ServiceResult<NamedFile> {
        let path = self.root.resolve(relative);
        if !path.is_file() {
            return Err(ServiceError::NotFound);
        }

        NamedFile::open_async(&path).await.map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                ServiceError::NotFound
            } else {
                log::error!("Failed to open {path:?}: {err}");
                ServiceError::ReadFile(err)
            }
        })
    }

    /// The SPA shell, always served as HTML.
    pub async fn index(&self) -> ServiceResult<NamedFile> {
        let relative =
            RelativePath::try_from_str(INDEX_FILE).map_err(|_| ServiceError::InvalidPath)?;
        match self.resolve(&relative).await {
            Ok(file) => Ok(file.set_content_type(mime::TEXT_HTML)),
            Err(ServiceError::NotFound) => {
                log::error!("{INDEX_FILE} is missing from {:?}", self.root.as_path());
                Err(ServiceError::IndexMissing)
            }
            Err(err) => Err(err),
        }
    }

    pub async fn favicon(&self) -> ServiceResult<NamedFile> {
        let relative =
            RelativePath::try_from_str(FAVICON_FILE).map_err(|_| ServiceError::InvalidPath)?;
        self.resolve(&relative).await
    }

    /// Decide what an unmatched route gets.
    ///
    /// Something on disk at that path is a genuine miss; anything else is a
    /// client-side route and receives the shell.
    pub async fn fallback(&self, request_path: &str) -> ServiceResult<NamedFile> {
        let relative =
            RelativePath::try_from_str(request_path).map_err(|_| ServiceError::InvalidPath)?;

        if self.exists(&relative) {
            log::debug!("{request_path} exists on disk but has no route");
            return Err(ServiceError::NotFound);
        }

        self.index().await
    }
}
