use actix_files::NamedFile;
use actix_web::{HttpRequest, get, web};

use crate::routes::ApiError;
use crate::services::ServiceError;
use crate::services::site::SiteService;

#[get("/")]
pub async fn index(site: web::Data<SiteService>) -> Result<NamedFile, ApiError> {
    site.index().await.map_err(|err| match err {
        ServiceError::IndexMissing => ApiError::Internal("index.html not found on server"),
        other => other.into(),
    })
}

#[get("/favicon.ico")]
pub async fn favicon(site: web::Data<SiteService>) -> Result<NamedFile, ApiError> {
    Ok(site.favicon().await?)
}

/// Default service: anything no route claimed, whatever the method.
pub async fn spa_fallback(
    req: HttpRequest,
    site: web::Data<SiteService>,
) -> Result<NamedFile, ApiError> {
    Ok(site.fallback(req.path()).await?)
}
