use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::models::{Role, Session};

/// Errors that can occur when resolving a session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Missing bearer token")]
    MissingToken,

    #[error("Invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    #[error("Token has no subject")]
    MissingSubject,
}

/// Claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    #[serde(default)]
    pub role: Role,
    pub exp: u64,
}

/// Resolves `Authorization: Bearer` tokens into sessions
///
/// Tokens are HS256 JWTs issued by the sign-in service; this service only
/// verifies them.
pub struct SessionValidator {
    key: DecodingKey,
    validation: Validation,
}

impl SessionValidator {
    pub fn new(secret: &str, leeway_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = leeway_secs;

        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Validate a raw token
    pub fn validate(&self, token: &str) -> Result<Session, SessionError> {
        let data = decode::<SessionClaims>(token, &self.key, &self.validation)?;

        if data.claims.sub.trim().is_empty() {
            return Err(SessionError::MissingSubject);
        }

        Ok(Session {
            user_id: data.claims.sub,
            role: data.claims.role,
        })
    }

    /// Validate the value of an `Authorization` header
    pub fn validate_header(&self, header: Option<&str>) -> Result<Session, SessionError> {
        let token = header
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(SessionError::MissingToken)?;

        self.validate(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "test-secret";

    fn issue(sub: &str, role: Option<&str>, exp_offset: i64) -> String {
        let exp = chrono::Utc::now().timestamp() + exp_offset;
        let mut claims = serde_json::json!({ "sub": sub, "exp": exp });
        if let Some(role) = role {
            claims["role"] = serde_json::Value::String(role.to_string());
        }

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_valid_user_token() {
        let validator = SessionValidator::new(SECRET, 0);
        let token = issue("user_1", None, 3600);

        let session = validator.validate(&token).unwrap();

        assert_eq!(session.user_id, "user_1");
        assert_eq!(session.role, Role::User);
        assert!(!session.is_admin());
    }

    #[test]
    fn test_admin_token_from_header() {
        let validator = SessionValidator::new(SECRET, 0);
        let header = format!("Bearer {}", issue("admin_1", Some("ADMIN"), 3600));

        let session = validator.validate_header(Some(&header)).unwrap();

        assert!(session.is_admin());
    }

    #[test]
    fn test_expired_token_rejected() {
        let validator = SessionValidator::new(SECRET, 0);
        let token = issue("user_1", None, -3600);

        assert!(matches!(validator.validate(&token), Err(SessionError::InvalidToken(_))));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let validator = SessionValidator::new("another-secret", 0);
        let token = issue("user_1", None, 3600);

        assert!(validator.validate(&token).is_err());
    }

    #[test]
    fn test_missing_header() {
        let validator = SessionValidator::new(SECRET, 0);

        assert!(matches!(validator.validate_header(None), Err(SessionError::MissingToken)));
        assert!(matches!(
            validator.validate_header(Some("Basic abc")),
            Err(SessionError::MissingToken)
        ));
    }

    #[test]
    fn test_blank_subject_rejected() {
        let validator = SessionValidator::new(SECRET, 0);
        let token = issue("  ", None, 3600);

        assert!(matches!(validator.validate(&token), Err(SessionError::MissingSubject)));
    }
}
