use actix_web::Error;
use actix_web::HttpMessage;
use actix_web::HttpResponse;
use actix_web::body::EitherBody;
use actix_web::body::MessageBody;
use actix_web::dev::ServiceRequest;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::LOCATION;
use actix_web::middleware::Next;

/// Route guard for signed-in pages.
///
/// Anonymous visitors get `302 Found` to the sign-in page and the wrapped
/// handler never runs. Otherwise the resolved session is attached to the
/// request so the handler's `Auth` extractor reuses it.
pub async fn protect<B>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error>
where
    B: MessageBody + 'static,
{
    match arena_auth::resolve(req.request()).await? {
        None => {
            log::debug!(
                "redirecting anonymous visitor of {} to {}",
                req.path(),
                arena_core::SIGN_IN_PATH
            );
            let redirect = HttpResponse::Found()
                .insert_header((LOCATION, arena_core::SIGN_IN_PATH))
                .finish();
            Ok(req.into_response(redirect).map_into_right_body())
        }
        Some(session) => {
            req.extensions_mut().insert(session);
            next.call(req).await.map(ServiceResponse::map_into_left_body)
        }
    }
}
