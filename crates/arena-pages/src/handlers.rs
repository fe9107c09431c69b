use super::*;
use arena_auth::Auth;
use arena_auth::MaybeAuth;
use arena_auth::Session;
use actix_web::error::ErrorInternalServerError;
use actix_web::web;

pub async fn home() -> Page {
    let cards = Resource::all()
        .iter()
        .map(|r| format!(r#"<a class="card" href="{}">{}</a>"#, r.path(), r.title()))
        .collect::<String>();
    Page::new(
        "Home",
        format!(
            r#"<section class="hero"><h1>Arena</h1><p>Fixtures, rosters, and brackets for every season.</p></section><section class="cards">{}</section>"#,
            cards
        ),
    )
}

pub async fn about() -> Page {
    Page::new(
        "About",
        r#"<section><h1>About Arena</h1><p>Arena tracks matches, players, teams, and tournaments for league organisers and their communities.</p></section>"#,
    )
}

/// Set by the sign-in endpoint when a form post is rejected.
#[derive(Debug, serde::Deserialize)]
pub struct Notice {
    error: Option<String>,
}

pub async fn sign_in(notice: web::Query<Notice>) -> Page {
    let alert = match notice.error.as_deref() {
        Some("credentials") => r#"<p class="alert">Email or password is incorrect.</p>"#,
        Some(_) => r#"<p class="alert">Sign-in failed, please try again.</p>"#,
        None => "",
    };
    Page::new(
        "Sign in",
        format!(
            r#"<section class="sign-in"><h1>Sign in</h1>{}<form method="post" action="/auth/sign-in"><label>Email <input type="email" name="email" required></label><label>Password <input type="password" name="password" required></label><button type="submit">Sign in</button></form></section>"#,
            alert
        ),
    )
}

/// Rows for one listing, through the query cache.
pub async fn load(
    resource: Resource,
    catalog: &dyn Catalog,
    listings: &Listings,
) -> anyhow::Result<Vec<Record>> {
    listings
        .fetch(resource.key(), move || catalog.list(resource))
        .await
}

/// Shared body of the four listing pages. The session is optional: anonymous
/// visitors see the listing without admin actions.
pub async fn listing(
    resource: Resource,
    auth: MaybeAuth,
    catalog: web::Data<dyn Catalog>,
    listings: web::Data<Listings>,
) -> actix_web::Result<Page> {
    let is_admin = auth.is_admin();
    let records = load(resource, &**catalog, &listings)
        .await
        .map_err(ErrorInternalServerError)?;
    log::debug!("rendering {} for admin={}", resource.component(), is_admin);
    Ok(PageClient::new(resource, is_admin, records).page())
}

pub async fn matches(
    auth: MaybeAuth,
    catalog: web::Data<dyn Catalog>,
    listings: web::Data<Listings>,
) -> actix_web::Result<Page> {
    listing(Resource::Matches, auth, catalog, listings).await
}
pub async fn players(
    auth: MaybeAuth,
    catalog: web::Data<dyn Catalog>,
    listings: web::Data<Listings>,
) -> actix_web::Result<Page> {
    listing(Resource::Players, auth, catalog, listings).await
}
pub async fn teams(
    auth: MaybeAuth,
    catalog: web::Data<dyn Catalog>,
    listings: web::Data<Listings>,
) -> actix_web::Result<Page> {
    listing(Resource::Teams, auth, catalog, listings).await
}
pub async fn tournaments(
    auth: MaybeAuth,
    catalog: web::Data<dyn Catalog>,
    listings: web::Data<Listings>,
) -> actix_web::Result<Page> {
    listing(Resource::Tournaments, auth, catalog, listings).await
}

pub async fn dashboard(
    auth: Auth,
    catalog: web::Data<dyn Catalog>,
    listings: web::Data<Listings>,
) -> actix_web::Result<Page> {
    let catalog = &**catalog;
    let listings = &**listings;
    let counts = futures::future::try_join_all(
        Resource::all()
            .into_iter()
            .map(|r| async move { load(r, catalog, listings).await.map(|rows| (r, rows.len())) }),
    )
    .await
    .map_err(ErrorInternalServerError)?;
    let stats = counts
        .iter()
        .map(|(r, n)| {
            format!(
                r#"<a class="stat" href="{}"><span class="count">{}</span> {}</a>"#,
                r.path(),
                n,
                r.slug()
            )
        })
        .collect::<String>();
    let user = auth.user();
    let body = format!(
        r#"<section class="dashboard"><h1>Welcome, {}</h1><p class="role">Role: {}</p>{}<div class="stats">{}</div></section>"#,
        escape(user.display()),
        user.role(),
        team(auth.session()),
        stats
    );
    Ok(Page::new("Dashboard", body).within(Shell::App(user.clone())))
}

pub async fn profile(auth: Auth) -> Page {
    let user = auth.user();
    let body = format!(
        r#"<section class="profile"><h1>Profile</h1><dl><dt>Email</dt><dd>{}</dd><dt>Name</dt><dd>{}</dd><dt>Role</dt><dd>{}</dd><dt>Team</dt><dd>{}</dd></dl></section>"#,
        escape(user.email()),
        escape(user.name().unwrap_or("-")),
        user.role(),
        user.team().map(|t| t.to_string()).unwrap_or_else(|| "-".to_string())
    );
    Page::new("Profile", body).within(Shell::App(user.clone()))
}

fn team(session: &Session) -> String {
    session
        .user()
        .team()
        .map(|t| format!(r#"<p class="team">Team <code>{}</code></p>"#, t))
        .unwrap_or_default()
}
