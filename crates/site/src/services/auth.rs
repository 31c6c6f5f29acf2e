//! Authentication service.
//!
//! Verifies admin logins against the configured credential: a username plus
//! an argon2 PHC hash. The handler never sees which half failed.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHashString, PasswordHasher, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};
use secrecy::ExposeSecret;
use thiserror::Error;

use crate::config::AdminConfig;
use crate::models::session::CurrentAdmin;

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Username or password did not match.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The configured password hash is not a valid PHC string.
    #[error("malformed password hash: {0}")]
    MalformedHash(String),
}

/// Authentication service.
///
/// Holds the parsed admin credential; constructed once at startup so a
/// malformed hash fails fast instead of on the first login.
pub struct AuthService {
    username: String,
    password_hash: PasswordHashString,
}

impl AuthService {
    /// Build the service from configuration, validating the stored hash.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MalformedHash` if the configured hash does not
    /// parse as a PHC string.
    pub fn from_config(config: &AdminConfig) -> Result<Self, AuthError> {
        let password_hash = PasswordHashString::new(config.password_hash.expose_secret())
            .map_err(|e| AuthError::MalformedHash(e.to_string()))?;

        Ok(Self {
            username: config.username.clone(),
            password_hash,
        })
    }

    /// Verify a login attempt.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` on any mismatch; callers
    /// cannot tell a wrong username from a wrong password.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<CurrentAdmin, AuthError> {
        if username != self.username {
            return Err(AuthError::InvalidCredentials);
        }

        verify_password(password, &self.password_hash.password_hash())?;

        Ok(CurrentAdmin {
            username: self.username.clone(),
        })
    }
}

/// Hash a password for storage (used by the CLI to mint `ADMIN_PASSWORD_HASH`).
///
/// # Errors
///
/// Returns `AuthError::MalformedHash` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::MalformedHash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verify a password against a parsed hash.
fn verify_password(password: &str, hash: &PasswordHash<'_>) -> Result<(), AuthError> {
    Argon2::default()
        .verify_password(password.as_bytes(), hash)
        .map_err(|e| match e {
            argon2::password_hash::Error::Password => AuthError::InvalidCredentials,
            other => AuthError::MalformedHash(other.to_string()),
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn service_with(username: &str, password: &str) -> AuthService {
        let hash = hash_password(password).unwrap();
        AuthService::from_config(&AdminConfig {
            username: username.to_string(),
            password_hash: SecretString::from(hash),
        })
        .unwrap()
    }

    #[test]
    fn test_authenticate_success() {
        let service = service_with("admin", "correct horse battery");
        let admin = service.authenticate("admin", "correct horse battery").unwrap();
        assert_eq!(admin.username, "admin");
    }

    #[test]
    fn test_authenticate_wrong_password() {
        let service = service_with("admin", "right");
        let err = service.authenticate("admin", "wrong").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn test_authenticate_wrong_username() {
        let service = service_with("admin", "right");
        let err = service.authenticate("root", "right").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn test_malformed_hash_fails_fast() {
        let result = AuthService::from_config(&AdminConfig {
            username: "admin".to_string(),
            password_hash: SecretString::from("not-a-phc-string"),
        });
        assert!(matches!(result, Err(AuthError::MalformedHash(_))));
    }

    #[test]
    fn test_hash_password_roundtrip() {
        let hash = hash_password("s3cure enough").unwrap();
        let parsed = PasswordHashString::new(&hash).unwrap();
        assert!(verify_password("s3cure enough", &parsed.password_hash()).is_ok());
    }
}
