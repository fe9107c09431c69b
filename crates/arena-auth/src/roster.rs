use super::*;
use argon2::Argon2;
use argon2::PasswordHash;
use argon2::PasswordHasher;
use argon2::PasswordVerifier;
use argon2::password_hash::SaltString;
use std::collections::HashMap;

/// Credential lookup collaborator used by sign-in.
#[async_trait::async_trait]
pub trait Directory: Send + Sync {
    /// Member and argon2 PHC hash for an email, if registered.
    async fn lookup(&self, email: &str) -> Result<Option<(Member, String)>, AuthError>;

    /// The member behind `email`, if `password` matches their stored hashword.
    async fn verify(&self, email: &str, password: &str) -> Result<Option<Member>, AuthError> {
        Ok(self
            .lookup(email)
            .await?
            .filter(|(_, hashword)| matches(password, hashword))
            .map(|(member, _)| member))
    }
}

/// Unparseable hashwords never match.
fn matches(password: &str, hashword: &str) -> bool {
    PasswordHash::new(hashword)
        .map(|ref phc| {
            Argon2::default()
                .verify_password(password.as_bytes(), phc)
                .is_ok()
        })
        .unwrap_or(false)
}

/// One member as stored on disk.
#[derive(Debug, serde::Deserialize)]
struct Entry {
    #[serde(flatten)]
    member: Member,
    hashword: String,
}

/// In-memory directory keyed by lowercased email.
#[derive(Debug, Default)]
pub struct Roster {
    members: HashMap<String, (Member, String)>,
}

impl Roster {
    /// Argon2 PHC string for a roster entry's `hashword` field.
    pub fn hashword(password: &str) -> Result<String, AuthError> {
        let ref salt = SaltString::encode_b64(&rand::random::<[u8; 16]>())?;
        Ok(Argon2::default()
            .hash_password(password.as_bytes(), salt)?
            .to_string())
    }
    /// Loads a JSON array of members, each with a `hashword` field.
    pub fn load(path: &std::path::Path) -> Result<Self, AuthError> {
        let ref text = std::fs::read_to_string(path)
            .map_err(|e| AuthError::Directory(format!("{}: {}", path.display(), e)))?;
        let roster = Self::parse(text)?;
        log::info!("loaded {} members from {}", roster.len(), path.display());
        Ok(roster)
    }
    pub fn parse(json: &str) -> Result<Self, AuthError> {
        serde_json::from_str::<Vec<Entry>>(json)
            .map(|entries| {
                entries
                    .into_iter()
                    .fold(Self::default(), |roster, e| roster.with(e.member, e.hashword))
            })
            .map_err(|e| AuthError::Directory(e.to_string()))
    }
    pub fn with(mut self, member: Member, hashword: String) -> Self {
        self.members
            .insert(member.email().to_lowercase(), (member, hashword));
        self
    }
    pub fn len(&self) -> usize {
        self.members.len()
    }
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[async_trait::async_trait]
impl Directory for Roster {
    async fn lookup(&self, email: &str) -> Result<Option<(Member, String)>, AuthError> {
        Ok(self.members.get(&email.trim().to_lowercase()).cloned())
    }
}
