use super::*;
use arena_core::ID;
use arena_core::Team;
use arena_core::Unique;
use serde::Deserialize;
use serde::Serialize;

/// Identity record shared by the directory, the session, and the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    id: ID<Self>,
    email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default)]
    role: Role,
    #[serde(default, rename = "teamId", skip_serializing_if = "Option::is_none")]
    team: Option<ID<Team>>,
}

impl Member {
    pub fn new(id: ID<Self>, email: String, role: Role) -> Self {
        Self {
            id,
            email,
            name: None,
            role,
            team: None,
        }
    }
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
    pub fn with_team(mut self, team: ID<Team>) -> Self {
        self.team = Some(team);
        self
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    pub fn role(&self) -> Role {
        self.role
    }
    pub fn team(&self) -> Option<ID<Team>> {
        self.team
    }
    /// Name if present, email otherwise.
    pub fn display(&self) -> &str {
        self.name().unwrap_or(self.email())
    }
}

impl Unique for Member {
    fn id(&self) -> ID<Self> {
        self.id
    }
}
