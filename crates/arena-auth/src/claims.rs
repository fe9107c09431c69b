use super::*;
use arena_core::ID;
use arena_core::Unique;

/// JWT payload. Carries the full [`Member`] field set so a session can be
/// rebuilt from the token alone.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    pub sub: uuid::Uuid,
    pub sid: uuid::Uuid,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tid: Option<uuid::Uuid>,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(member: &Member, session: ID<Session>) -> Self {
        let now = now();
        Self {
            sub: member.id().inner(),
            sid: session.inner(),
            email: member.email().to_string(),
            name: member.name().map(str::to_string),
            role: member.role(),
            tid: member.team().map(|t| t.inner()),
            iat: now,
            exp: now + Crypto::duration().as_secs() as i64,
        }
    }
    pub fn expired(&self) -> bool {
        self.exp < now()
    }
    pub fn user(&self) -> ID<Member> {
        ID::from(self.sub)
    }
    pub fn session(&self) -> ID<Session> {
        ID::from(self.sid)
    }
    pub fn member(&self) -> Member {
        let member = Member::new(self.user(), self.email.clone(), self.role);
        let member = match self.name.clone() {
            Some(name) => member.with_name(name),
            None => member,
        };
        match self.tid {
            Some(team) => member.with_team(ID::from(team)),
            None => member,
        }
    }
}

fn now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}
