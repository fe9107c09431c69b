use super::*;

/// Listing component for one resource.
///
/// `is_admin` is the only capability input: it decides whether create,
/// edit, and delete controls are rendered at all.
#[derive(Debug, Clone)]
pub struct PageClient {
    resource: Resource,
    is_admin: bool,
    records: Vec<Record>,
}

impl PageClient {
    pub fn new(resource: Resource, is_admin: bool, records: Vec<Record>) -> Self {
        Self {
            resource,
            is_admin,
            records,
        }
    }
    pub fn component(&self) -> &'static str {
        self.resource.component()
    }
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }
    pub fn render(&self) -> String {
        let r = self.resource;
        let create = match self.is_admin {
            true => format!(
                r#"<a class="action create" href="{}/new">New {}</a>"#,
                r.path(),
                r.singular()
            ),
            false => String::new(),
        };
        let rows = match self.records.is_empty() {
            true => format!(r#"<p class="empty">No {} yet.</p>"#, r.slug()),
            false => format!(
                r#"<ul class="records">{}</ul>"#,
                self.records
                    .iter()
                    .map(|record| self.row(record))
                    .collect::<String>()
            ),
        };
        format!(
            r#"<section data-component="{}" data-admin="{}"><h1>{}</h1>{}{}</section>"#,
            self.component(),
            self.is_admin,
            r.title(),
            create,
            rows
        )
    }
    pub fn page(self) -> Page {
        Page::new(self.resource.title(), self.render()).within(Shell::Resource(self.resource))
    }

    fn row(&self, record: &Record) -> String {
        let detail = record
            .detail
            .as_deref()
            .map(|d| format!(r#"<span class="detail">{}</span>"#, escape(d)))
            .unwrap_or_default();
        let actions = match self.is_admin {
            true => format!(
                r#"<a class="action edit" href="{path}/{id}/edit">Edit</a><button class="action delete" data-id="{id}">Delete</button>"#,
                path = self.resource.path(),
                id = record.id
            ),
            false => String::new(),
        };
        format!(
            r#"<li data-id="{}"><span class="name">{}</span>{}{}</li>"#,
            record.id,
            escape(&record.name),
            detail,
            actions
        )
    }
}
