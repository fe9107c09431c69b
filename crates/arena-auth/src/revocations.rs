use super::*;
use arena_core::ID;
use arena_core::Unique;
use std::collections::HashMap;
use std::time::SystemTime;
use tokio::sync::RwLock;

/// Sessions signed out before their token expired.
/// Entries are dropped once the token would have expired anyway.
#[derive(Debug, Default)]
pub struct Revocations {
    revoked: RwLock<HashMap<ID<Session>, SystemTime>>,
}

impl Revocations {
    pub async fn revoke(&self, session: &Session) {
        let mut revoked = self.revoked.write().await;
        let now = SystemTime::now();
        revoked.retain(|_, expires| *expires > now);
        revoked.insert(session.id(), session.expires_at());
    }
    pub async fn is_revoked(&self, session: ID<Session>) -> bool {
        self.revoked.read().await.contains_key(&session)
    }
    pub async fn len(&self) -> usize {
        self.revoked.read().await.len()
    }
}
