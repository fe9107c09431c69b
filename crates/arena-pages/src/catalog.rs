use super::*;
use serde::Deserialize;
use serde::Serialize;

/// One row of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: uuid::Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::now_v7(),
            name: name.into(),
            detail: None,
        }
    }
    pub fn with_detail(self, detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
            ..self
        }
    }
}

/// Collaborator serving listing rows; the data store lives behind it.
#[async_trait::async_trait]
pub trait Catalog: Send + Sync {
    async fn list(&self, resource: Resource) -> anyhow::Result<Vec<Record>>;
}

/// Catalog backed by a JSON file with one array per resource.
#[derive(Debug, Default, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    matches: Vec<Record>,
    #[serde(default)]
    players: Vec<Record>,
    #[serde(default)]
    teams: Vec<Record>,
    #[serde(default)]
    tournaments: Vec<Record>,
}

impl Fixtures {
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let ref text = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("read {}: {}", path.display(), e))?;
        let fixtures = serde_json::from_str::<Self>(text)
            .map_err(|e| anyhow::anyhow!("parse {}: {}", path.display(), e))?;
        log::info!(
            "loaded catalog fixtures from {} ({} records)",
            path.display(),
            Resource::all()
                .iter()
                .map(|r| fixtures.records(*r).len())
                .sum::<usize>()
        );
        Ok(fixtures)
    }
    pub fn with(mut self, resource: Resource, records: Vec<Record>) -> Self {
        *self.records_mut(resource) = records;
        self
    }
    fn records(&self, resource: Resource) -> &Vec<Record> {
        match resource {
            Resource::Matches => &self.matches,
            Resource::Players => &self.players,
            Resource::Teams => &self.teams,
            Resource::Tournaments => &self.tournaments,
        }
    }
    fn records_mut(&mut self, resource: Resource) -> &mut Vec<Record> {
        match resource {
            Resource::Matches => &mut self.matches,
            Resource::Players => &mut self.players,
            Resource::Teams => &mut self.teams,
            Resource::Tournaments => &mut self.tournaments,
        }
    }
}

#[async_trait::async_trait]
impl Catalog for Fixtures {
    async fn list(&self, resource: Resource) -> anyhow::Result<Vec<Record>> {
        Ok(self.records(resource).clone())
    }
}
