use super::*;
use arena_core::ID;
use arena_core::Unique;

/// Server-validated identity for the current request.
/// Built by a [`Resolver`] per request and dropped when the request ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: ID<Self>,
    user: Member,
    expires: std::time::SystemTime,
}

impl Unique for Session {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

impl Session {
    pub fn new(id: ID<Self>, user: Member) -> Self {
        Self {
            id,
            user,
            expires: std::time::SystemTime::now() + Crypto::duration(),
        }
    }
    pub fn user(&self) -> &Member {
        &self.user
    }
    pub fn role(&self) -> Role {
        self.user.role()
    }
    pub fn is_admin(&self) -> bool {
        self.user.role().is_admin()
    }
    pub fn expires_at(&self) -> std::time::SystemTime {
        self.expires
    }
}

impl From<&Claims> for Session {
    fn from(claims: &Claims) -> Self {
        Self {
            id: claims.session(),
            user: claims.member(),
            expires: std::time::UNIX_EPOCH
                + std::time::Duration::from_secs(claims.exp.max(0) as u64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_flag_follows_role() {
        for role in Role::all() {
            let member = Member::new(ID::default(), "m@league.gg".into(), role);
            let session = Session::new(ID::default(), member);
            assert!(session.is_admin() == (role == Role::Admin));
        }
    }

    #[test]
    fn rebuilds_from_claims() {
        let member = Member::new(ID::default(), "m@league.gg".into(), Role::Admin);
        let claims = Claims::new(&member, ID::default());
        let session = Session::from(&claims);
        assert!(session.id() == claims.session());
        assert!(session.user() == &member);
        assert!(session.expires_at() > std::time::SystemTime::now());
    }
}
