use super::*;
use arena_core::ID;
use arena_core::Unique;
use std::sync::Arc;

/// Turns a request credential into a session.
///
/// `Ok(None)` means the visitor is anonymous. `Err` means the provider
/// itself failed and the caller cannot tell either way.
#[async_trait::async_trait]
pub trait Resolver: Send + Sync {
    async fn resolve(&self, credential: &str) -> Result<Option<Session>, AuthError>;
}

/// JWT-backed resolver and issuer.
pub struct Tokens {
    crypto: Crypto,
    revocations: Arc<Revocations>,
    secure: bool,
}

impl Tokens {
    pub fn new(crypto: Crypto, revocations: Arc<Revocations>) -> Self {
        Self {
            crypto,
            revocations,
            secure: false,
        }
    }
    /// Mark issued cookies `Secure` (HTTPS-only deployments).
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }
    pub fn is_secure(&self) -> bool {
        self.secure
    }
    /// Opens a new session for a member and signs its token.
    pub fn issue(&self, member: &Member) -> Result<(String, Session), AuthError> {
        let id = ID::<Session>::default();
        let claims = Claims::new(member, id);
        let token = self.crypto.encode(&claims)?;
        log::info!(
            "issued session {} for {} ({})",
            id,
            member.email(),
            Crypto::fingerprint(&token)
        );
        Ok((token, Session::from(&claims)))
    }
    pub async fn revoke(&self, session: &Session) {
        log::info!("revoked session {} for {}", session.id(), session.user().email());
        self.revocations.revoke(session).await;
    }
}

#[async_trait::async_trait]
impl Resolver for Tokens {
    async fn resolve(&self, credential: &str) -> Result<Option<Session>, AuthError> {
        let claims = match self.crypto.decode(credential) {
            Ok(claims) => claims,
            Err(e) => {
                log::debug!("rejected token {}: {}", Crypto::fingerprint(credential), e);
                return Ok(None);
            }
        };
        if claims.expired() {
            return Ok(None);
        }
        if self.revocations.is_revoked(claims.session()).await {
            log::debug!("rejected revoked session {}", claims.sid);
            return Ok(None);
        }
        Ok(Some(Session::from(&claims)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> Tokens {
        Tokens::new(Crypto::new(b"test"), Arc::new(Revocations::default()))
    }

    fn admin() -> Member {
        Member::new(ID::default(), "admin@league.gg".into(), Role::Admin).with_name("Admin")
    }

    #[tokio::test]
    async fn resolves_issued_tokens() {
        let tokens = tokens();
        let (token, session) = tokens.issue(&admin()).unwrap();
        let resolved = tokens.resolve(&token).await.unwrap().unwrap();
        assert!(resolved.id() == session.id());
        assert!(resolved.is_admin());
    }

    #[tokio::test]
    async fn garbage_is_anonymous() {
        assert!(tokens().resolve("garbage").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn expired_tokens_are_anonymous() {
        let tokens = tokens();
        let mut claims = Claims::new(&admin(), ID::default());
        claims.iat -= 7200;
        claims.exp = claims.iat + 60;
        let token = Crypto::new(b"test").encode(&claims).unwrap();
        assert!(tokens.resolve(&token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn revoked_tokens_are_anonymous() {
        let tokens = tokens();
        let (token, session) = tokens.issue(&admin()).unwrap();
        tokens.revoke(&session).await;
        assert!(tokens.resolve(&token).await.unwrap().is_none());
    }
}
