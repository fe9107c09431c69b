use super::*;
use arena_auth::Member;

/// Layout chrome wrapped around a page body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shell {
    /// Marketing pages; no session involved.
    Public,
    /// Listing pages; public chrome plus resource tabs.
    Resource(Resource),
    /// Signed-in pages; only rendered behind the guard.
    App(Member),
}

impl Shell {
    pub fn wrap(&self, body: &str) -> String {
        match self {
            Self::Public => format!(
                r#"<div class="public-shell">{}<main>{}</main>{}</div>"#,
                header(),
                body,
                footer()
            ),
            Self::Resource(active) => format!(
                r#"<div class="public-shell">{}{}<main>{}</main>{}</div>"#,
                header(),
                tabs(*active),
                body,
                footer()
            ),
            Self::App(member) => format!(
                r#"<div class="app-shell">{}<div class="app-body">{}<main>{}</main></div>{}</div>"#,
                app_header(member),
                sidebar(),
                body,
                footer()
            ),
        }
    }
}

fn header() -> String {
    let links = Resource::all()
        .iter()
        .map(|r| format!(r#"<a href="{}">{}</a>"#, r.path(), r.title()))
        .collect::<String>();
    format!(
        r#"<header class="site-header"><a class="brand" href="/">Arena</a><nav>{}<a href="/about">About</a><a class="sign-in" href="{}">Sign in</a></nav></header>"#,
        links,
        arena_core::SIGN_IN_PATH
    )
}

fn footer() -> String {
    r#"<footer class="site-footer"><p>Arena League · matches, players, teams, tournaments</p></footer>"#
        .to_string()
}

fn tabs(active: Resource) -> String {
    let tabs = Resource::all()
        .iter()
        .map(|r| match *r == active {
            true => format!(r#"<a class="tab active" href="{}">{}</a>"#, r.path(), r.title()),
            false => format!(r#"<a class="tab" href="{}">{}</a>"#, r.path(), r.title()),
        })
        .collect::<String>();
    format!(r#"<nav class="resource-tabs">{}</nav>"#, tabs)
}

fn app_header(member: &Member) -> String {
    format!(
        r#"<header class="app-header"><a class="brand" href="/dashboard">Arena</a><span class="user">{} · {}</span><form method="post" action="/auth/sign-out"><button type="submit">Sign out</button></form></header>"#,
        escape(member.display()),
        member.role()
    )
}

fn sidebar() -> String {
    let links = Resource::all()
        .iter()
        .map(|r| format!(r#"<a href="{}">{}</a>"#, r.path(), r.title()))
        .collect::<String>();
    format!(
        r#"<aside class="sidebar"><a href="/dashboard">Dashboard</a><a href="/profile">Profile</a>{}</aside>"#,
        links
    )
}
