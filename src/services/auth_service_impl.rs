//! HS256 JWT implementation of [`AuthService`].

use crate::config::AuthConfig;
use crate::services::auth_service::{AuthError, AuthService, Claims};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

pub struct JwtAuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    ttl: chrono::Duration,
}

impl JwtAuthService {
    #[must_use]
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.jwt_secret.as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            issuer: config.issuer.clone(),
            ttl: chrono::Duration::minutes(config.token_ttl_minutes),
        }
    }

    fn claims_for(&self, username: &str) -> Claims {
        let now = chrono::Utc::now();
        Claims {
            sub: username.to_string(),
            exp: (now + self.ttl).timestamp(),
            iat: now.timestamp(),
            iss: self.issuer.clone(),
        }
    }
}

impl AuthService for JwtAuthService {
    // No credential store exists; any non-empty username is accepted.
    fn login(&self, username: &str) -> Result<String, AuthError> {
        if username.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }

        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &self.claims_for(username),
            &self.encoding_key,
        )
        .map_err(|e| AuthError::Internal(format!("Failed to generate token: {e}")))
    }

    fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[self.issuer.as_str()]);

        jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}
