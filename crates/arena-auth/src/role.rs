use serde::Deserialize;
use serde::Serialize;

/// Access level attached to every member.
/// Only [`Role::Admin`] unlocks create, edit, and delete actions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Manager,
    Player,
    #[default]
    User,
}

impl Role {
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
    pub const fn all() -> [Self; 4] {
        [Self::Admin, Self::Manager, Self::Player, Self::User]
    }
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Manager => "MANAGER",
            Self::Player => "PLAYER",
            Self::User => "USER",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown role: {}", s))
    }
}
