use actix_web::{
    Error,
    dev::{self, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{self, HeaderValue},
};
use futures_util::future::LocalBoxFuture;
use std::future::{Ready, ready};

const CACHE_CONTROL_DIRECTIVES: &str = "no-store, no-cache, must-revalidate, max-age=0";
const PRAGMA_DIRECTIVE: &str = "no-cache";

/// Stamps every response with cache-disabling headers when enabled.
///
/// Constructed from [`crate::models::config::ServerConfig::debug_mode`];
/// disabled it passes responses through untouched.
#[derive(Clone, Copy, Debug)]
pub struct NoCache {
    enabled: bool,
}

impl NoCache {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl<S, B> Transform<S, ServiceRequest> for NoCache
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = NoCacheMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(NoCacheMiddleware {
            service,
            enabled: self.enabled,
        }))
    }
}

pub struct NoCacheMiddleware<S> {
    service: S,
    enabled: bool,
}

impl<S, B> Service<ServiceRequest> for NoCacheMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let enabled = self.enabled;
        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;

            if enabled {
                let headers = res.headers_mut();
                headers.insert(
                    header::CACHE_CONTROL,
                    HeaderValue::from_static(CACHE_CONTROL_DIRECTIVES),
                );
                headers.insert(header::PRAGMA, HeaderValue::from_static(PRAGMA_DIRECTIVE));
            }

            Ok(res)
        })
    }
}
