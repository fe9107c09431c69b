use thiserror::Error;

/// Failures of the session layer.
///
/// Invalid, expired, or revoked tokens are not errors: they resolve to
/// no session at all.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown email or wrong password
    #[error("invalid credentials")]
    Credentials,

    /// Token could not be signed or parsed
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Password hashing failed
    #[error("password hashing error: {0}")]
    Hash(String),

    /// Member directory could not be read
    #[error("directory error: {0}")]
    Directory(String),

    /// Session provider could not answer
    #[error("session provider unavailable: {0}")]
    Unavailable(String),
}

impl From<argon2::password_hash::Error> for AuthError {
    fn from(e: argon2::password_hash::Error) -> Self {
        Self::Hash(e.to_string())
    }
}

#[cfg(feature = "server")]
impl actix_web::ResponseError for AuthError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match self {
            Self::Credentials => actix_web::http::StatusCode::UNAUTHORIZED,
            _ => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
