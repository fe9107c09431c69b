use super::*;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::body::BoxBody;
use actix_web::http::header::ContentType;

/// Rendered page body plus the shell it belongs in.
#[derive(Debug, Clone)]
pub struct Page {
    title: String,
    body: String,
    shell: Shell,
}

impl Page {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            shell: Shell::Public,
        }
    }
    pub fn within(self, shell: Shell) -> Self {
        Self { shell, ..self }
    }
    pub fn shell(&self) -> &Shell {
        &self.shell
    }
    pub fn render(&self) -> String {
        document(&self.title, &self.shell.wrap(&self.body))
    }
}

impl Responder for Page {
    type Body = BoxBody;
    fn respond_to(self, _: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(self.render())
    }
}
