use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum Error {
    InvalidToken,
    ExpiredToken,
    UnexpectedError,
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: String,
    pub exp: i64,
}

/// Stateless verifier for the signed `token` cookie. Built once from the
/// configured secret and injected through the request context.
#[derive(Clone)]
pub struct Tokenizer {
    secret: String,
    expiry_hours: u64,
}

impl Tokenizer {
    pub fn new(secret: String, expiry_hours: u64) -> Self {
        Self {
            secret,
            expiry_hours,
        }
    }

    pub fn generate(&self, user_id: String) -> Result<String> {
        self.generate_with_expiry(user_id, Duration::hours(self.expiry_hours as i64))
    }

    fn generate_with_expiry(&self, user_id: String, expiry: Duration) -> Result<String> {
        let claims = Claims {
            user_id,
            exp: (Utc::now() + expiry).timestamp(),
        };

        jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|err| {
            tracing::error!("Failed to encode auth token: {}", err);
            Error::UnexpectedError
        })
    }

    pub fn verify(&self, token: &str) -> Result<Claims> {
        jsonwebtoken::decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map(|data| data.claims)
        .map_err(|err| match err.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => Error::ExpiredToken,
            jsonwebtoken::errors::ErrorKind::InvalidToken
            | jsonwebtoken::errors::ErrorKind::InvalidSignature
            | jsonwebtoken::errors::ErrorKind::ImmatureSignature
            | jsonwebtoken::errors::ErrorKind::Base64(_)
            | jsonwebtoken::errors::ErrorKind::Json(_)
            | jsonwebtoken::errors::ErrorKind::Utf8(_) => Error::InvalidToken,
            _ => {
                tracing::error!("Unexpected error while verifying auth token: {}", err);
                Error::UnexpectedError
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer() -> Tokenizer {
        Tokenizer::new(String::from("test-secret"), 24)
    }

    #[test]
    fn verifies_a_token_it_generated() {
        let tokenizer = tokenizer();
        let token = tokenizer.generate(String::from("user-1")).unwrap();

        let claims = tokenizer.verify(&token).unwrap();
        assert_eq!(claims.user_id, "user-1");
    }

    #[test]
    fn rejects_an_expired_token() {
        let tokenizer = tokenizer();
        let token = tokenizer
            .generate_with_expiry(String::from("user-1"), Duration::hours(-2))
            .unwrap();

        assert!(matches!(
            tokenizer.verify(&token),
            Err(Error::ExpiredToken)
        ));
    }

    #[test]
    fn rejects_a_token_signed_with_another_secret() {
        let other = Tokenizer::new(String::from("other-secret"), 24);
        let token = other.generate(String::from("user-1")).unwrap();

        assert!(matches!(
            tokenizer().verify(&token),
            Err(Error::InvalidToken)
        ));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            tokenizer().verify("not-a-token"),
            Err(Error::InvalidToken)
        ));
    }
}
