use super::*;
use actix_web::HttpMessage;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::cookie::Cookie;
use actix_web::cookie::SameSite;
use actix_web::http::header::LOCATION;
use actix_web::web;

fn cookie(tokens: &Tokens, token: String) -> Cookie<'static> {
    Cookie::build(arena_core::SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .secure(tokens.is_secure())
        .same_site(SameSite::Lax)
        .max_age(actix_web::cookie::time::Duration::seconds(
            Crypto::duration().as_secs() as i64,
        ))
        .finish()
}

fn redirect(location: &str) -> actix_web::HttpResponseBuilder {
    let mut builder = HttpResponse::Found();
    builder.insert_header((LOCATION, location));
    builder
}

fn is_form(req: &HttpRequest) -> bool {
    req.content_type() == "application/x-www-form-urlencoded"
}

async fn authenticate(
    directory: &dyn Directory,
    tokens: &Tokens,
    req: &SignInRequest,
) -> Result<(String, Member), AuthError> {
    let member = directory
        .verify(&req.email, &req.password)
        .await?
        .ok_or_else(|| {
            log::info!("failed sign-in for {}", req.email.trim());
            AuthError::Credentials
        })?;
    let (token, _) = tokens.issue(&member)?;
    Ok((token, member))
}

/// JSON clients get `{token, user}`. Browser form posts are redirected to
/// the dashboard, or back to the sign-in page on bad credentials.
pub async fn sign_in(
    directory: web::Data<dyn Directory>,
    tokens: web::Data<Tokens>,
    body: web::Either<web::Json<SignInRequest>, web::Form<SignInRequest>>,
) -> Result<HttpResponse, AuthError> {
    match body {
        web::Either::Left(json) => {
            let (token, member) = authenticate(&**directory, &tokens, &json).await?;
            Ok(HttpResponse::Ok()
                .cookie(cookie(&tokens, token.clone()))
                .json(AuthResponse {
                    token,
                    user: member,
                }))
        }
        web::Either::Right(form) => match authenticate(&**directory, &tokens, &form).await {
            Ok((token, _)) => Ok(redirect(arena_core::DASHBOARD_PATH)
                .cookie(cookie(&tokens, token))
                .finish()),
            Err(AuthError::Credentials) => Ok(redirect(&format!(
                "{}?error=credentials",
                arena_core::SIGN_IN_PATH
            ))
            .finish()),
            Err(e) => Err(e),
        },
    }
}

pub async fn sign_out(req: HttpRequest, tokens: web::Data<Tokens>, auth: Auth) -> HttpResponse {
    tokens.revoke(auth.session()).await;
    let mut removal = Cookie::build(arena_core::SESSION_COOKIE, "")
        .path("/")
        .finish();
    removal.make_removal();
    match is_form(&req) {
        true => redirect(arena_core::HOME_PATH).cookie(removal).finish(),
        false => HttpResponse::Ok()
            .cookie(removal)
            .json(serde_json::json!({"status": "signed_out"})),
    }
}

/// Current member, or `null` for anonymous visitors.
pub async fn session(auth: MaybeAuth) -> HttpResponse {
    HttpResponse::Ok().json(auth.session().map(Session::user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::App;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use arena_core::ID;
    use std::sync::Arc;

    struct Fixture {
        tokens: web::Data<Tokens>,
        resolver: web::Data<dyn Resolver>,
        directory: web::Data<dyn Directory>,
    }

    fn fixture() -> Fixture {
        let member = Member::new(ID::default(), "admin@league.gg".into(), Role::Admin)
            .with_name("Commissioner");
        let roster = Roster::default().with(member, Roster::hashword("correct horse").unwrap());
        let tokens = Arc::new(Tokens::new(
            Crypto::new(b"handlers"),
            Arc::new(Revocations::default()),
        ));
        Fixture {
            resolver: web::Data::from(tokens.clone() as Arc<dyn Resolver>),
            tokens: web::Data::from(tokens),
            directory: web::Data::from(Arc::new(roster) as Arc<dyn Directory>),
        }
    }

    macro_rules! app {
        ($f:expr) => {
            test::init_service(
                App::new()
                    .app_data($f.tokens.clone())
                    .app_data($f.resolver.clone())
                    .app_data($f.directory.clone())
                    .route("/auth/sign-in", web::post().to(sign_in))
                    .route("/auth/sign-out", web::post().to(sign_out))
                    .route("/auth/session", web::get().to(session)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn sign_in_issues_cookie_and_token() {
        let f = fixture();
        let app = app!(f);
        let req = test::TestRequest::post()
            .uri("/auth/sign-in")
            .set_json(serde_json::json!({"email": "admin@league.gg", "password": "correct horse"}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status() == StatusCode::OK);
        let (value, http_only) = res
            .response()
            .cookies()
            .find(|c| c.name() == arena_core::SESSION_COOKIE)
            .map(|c| (c.value().to_owned(), c.http_only()))
            .unwrap();
        assert!(http_only == Some(true));
        let body: serde_json::Value = test::read_body_json(res).await;
        assert!(body["token"].as_str() == Some(value.as_str()));
        assert!(body["user"]["role"] == "ADMIN");
    }

    #[actix_web::test]
    async fn wrong_password_is_unauthorized() {
        let f = fixture();
        let app = app!(f);
        let req = test::TestRequest::post()
            .uri("/auth/sign-in")
            .set_json(serde_json::json!({"email": "admin@league.gg", "password": "wrong"}))
            .to_request();
        assert!(test::call_service(&app, req).await.status() == StatusCode::UNAUTHORIZED);
        let req = test::TestRequest::post()
            .uri("/auth/sign-in")
            .set_json(serde_json::json!({"email": "nobody@league.gg", "password": "x"}))
            .to_request();
        assert!(test::call_service(&app, req).await.status() == StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn browser_form_sign_in_redirects_with_cookie() {
        let f = fixture();
        let app = app!(f);
        let req = test::TestRequest::post()
            .uri("/auth/sign-in")
            .set_form([("email", "admin@league.gg"), ("password", "correct horse")])
            .to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status() == StatusCode::FOUND);
        assert!(res.headers().get(LOCATION).unwrap() == arena_core::DASHBOARD_PATH);
        let token = res
            .response()
            .cookies()
            .find(|c| c.name() == arena_core::SESSION_COOKIE)
            .map(|c| c.value().to_owned())
            .unwrap();
        let req = test::TestRequest::get()
            .uri("/auth/session")
            .cookie(Cookie::new(arena_core::SESSION_COOKIE, token))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["email"] == "admin@league.gg");
    }

    #[actix_web::test]
    async fn browser_form_with_wrong_password_returns_to_sign_in() {
        let f = fixture();
        let app = app!(f);
        let req = test::TestRequest::post()
            .uri("/auth/sign-in")
            .set_form([("email", "admin@league.gg"), ("password", "wrong")])
            .to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status() == StatusCode::FOUND);
        assert!(res.headers().get(LOCATION).unwrap() == "/sign-in?error=credentials");
        assert!(res.response().cookies().next().is_none());
    }

    #[actix_web::test]
    async fn browser_form_sign_out_goes_home() {
        let f = fixture();
        let app = app!(f);
        let member = Member::new(ID::default(), "fan@league.gg".into(), Role::User);
        let (token, _) = f.tokens.issue(&member).unwrap();
        let req = test::TestRequest::post()
            .uri("/auth/sign-out")
            .cookie(Cookie::new(arena_core::SESSION_COOKIE, token.clone()))
            .insert_header(actix_web::http::header::ContentType::form_url_encoded())
            .to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status() == StatusCode::FOUND);
        assert!(res.headers().get(LOCATION).unwrap() == arena_core::HOME_PATH);
        let cleared = res
            .response()
            .cookies()
            .find(|c| c.name() == arena_core::SESSION_COOKIE)
            .map(|c| c.value().is_empty())
            .unwrap();
        assert!(cleared);
        let req = test::TestRequest::get()
            .uri("/auth/session")
            .cookie(Cookie::new(arena_core::SESSION_COOKIE, token))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert!(body.is_null());
    }

    #[actix_web::test]
    async fn anonymous_session_is_null() {
        let f = fixture();
        let app = app!(f);
        let req = test::TestRequest::get().uri("/auth/session").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert!(body.is_null());
    }

    #[actix_web::test]
    async fn sign_out_revokes_the_session() {
        let f = fixture();
        let app = app!(f);
        let member = Member::new(ID::default(), "mgr@league.gg".into(), Role::Manager);
        let (token, _) = f.tokens.issue(&member).unwrap();
        let bearer = ("Authorization", format!("Bearer {}", token));
        let req = test::TestRequest::get()
            .uri("/auth/session")
            .insert_header(bearer.clone())
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["email"] == "mgr@league.gg");
        let req = test::TestRequest::post()
            .uri("/auth/sign-out")
            .insert_header(bearer.clone())
            .to_request();
        assert!(test::call_service(&app, req).await.status() == StatusCode::OK);
        let req = test::TestRequest::get()
            .uri("/auth/session")
            .insert_header(bearer)
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert!(body.is_null());
    }

    #[actix_web::test]
    async fn sign_out_requires_a_session() {
        let f = fixture();
        let app = app!(f);
        let req = test::TestRequest::post().uri("/auth/sign-out").to_request();
        assert!(test::call_service(&app, req).await.status() == StatusCode::UNAUTHORIZED);
    }
}
