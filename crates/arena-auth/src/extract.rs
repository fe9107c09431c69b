use super::*;
use actix_web::FromRequest;
use actix_web::HttpMessage;
use actix_web::HttpRequest;
use actix_web::dev::Payload;
use actix_web::web;
use std::future::Future;
use std::pin::Pin;

type Resolution = Pin<Box<dyn Future<Output = Result<Option<Session>, actix_web::Error>>>>;

/// Bearer header first, session cookie second.
pub fn credential(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|s| s.trim().to_owned())
        .or_else(|| {
            req.cookie(arena_core::SESSION_COOKIE)
                .map(|c| c.value().to_owned())
        })
        .filter(|s| !s.is_empty())
}

/// Resolves the session for a request through the injected [`Resolver`].
/// A session already attached to the request extensions is reused.
pub fn resolve(req: &HttpRequest) -> Resolution {
    let attached = req.extensions().get::<Session>().cloned();
    if let Some(session) = attached {
        return Box::pin(async move { Ok(Some(session)) });
    }
    let resolver = req.app_data::<web::Data<dyn Resolver>>().cloned();
    let credential = credential(req);
    Box::pin(async move {
        let resolver = resolver.ok_or_else(|| {
            actix_web::error::ErrorInternalServerError("session resolver not configured")
        })?;
        match credential {
            None => Ok(None),
            Some(ref token) => resolver
                .resolve(token)
                .await
                .inspect_err(|e| log::error!("session resolution failed: {}", e))
                .map_err(actix_web::Error::from),
        }
    })
}

/// Extractor for requests that must carry a session.
pub struct Auth(pub Session);

impl Auth {
    pub fn session(&self) -> &Session {
        &self.0
    }
    pub fn user(&self) -> &Member {
        self.0.user()
    }
}

impl FromRequest for Auth {
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let resolution = resolve(req);
        Box::pin(async move {
            resolution
                .await?
                .map(Auth)
                .ok_or_else(|| actix_web::error::ErrorUnauthorized("not signed in"))
        })
    }
}

/// Best-effort extractor: anonymous visitors yield `None`.
/// Resolver failures still reject the request.
pub struct MaybeAuth(pub Option<Session>);

impl MaybeAuth {
    pub fn session(&self) -> Option<&Session> {
        self.0.as_ref()
    }
    pub fn is_admin(&self) -> bool {
        self.0.as_ref().is_some_and(Session::is_admin)
    }
}

impl FromRequest for MaybeAuth {
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let resolution = resolve(req);
        Box::pin(async move { resolution.await.map(MaybeAuth) })
    }
}
