// JWT token creation and verification
// HS256 access tokens carrying the user id and email

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::AuthError;

/// JWT claims structure
///
/// # Fields
/// * `sub` - Subject (user_id)
/// * `email` - Email of the user at signing time
/// * `iat` - Issued-at (seconds since epoch)
/// * `exp` - Expiry time (seconds since epoch)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub iat: usize,
    pub exp: usize,
}

/// Creates a signed JWT for a user
///
/// # Arguments
/// * `user_id` - The user's ID, stored in the `sub` claim
/// * `email` - The user's email, stored in the `email` claim
/// * `secret` - The server-held signing secret
/// * `ttl` - How long the token stays valid
///
/// # Example
/// ```
/// use bookmarks_api::auth::jwt::create_token;
/// use chrono::Duration;
/// use uuid::Uuid;
///
/// let token = create_token(Uuid::new_v4(), "a@b.io", "secret", Duration::minutes(50))
///     .expect("valid token");
/// assert_eq!(token.split('.').count(), 3);
/// ```
pub fn create_token(
    user_id: Uuid,
    email: &str,
    secret: &str,
    ttl: Duration,
) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id,
        email: email.to_string(),
        iat: now.timestamp().max(0) as usize,
        exp: (now + ttl).timestamp().max(0) as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| AuthError::TokenCreation(e.to_string()))
}

/// Verifies signature and expiry, then decodes the claims
///
/// # Example
/// ```
/// use bookmarks_api::auth::jwt::{create_token, verify_token};
/// use chrono::Duration;
/// use uuid::Uuid;
///
/// let user_id = Uuid::new_v4();
/// let token = create_token(user_id, "a@b.io", "secret", Duration::minutes(50)).unwrap();
///
/// let claims = verify_token(&token, "secret").expect("valid token");
/// assert_eq!(claims.sub, user_id);
/// ```
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AuthError::InvalidToken(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test-secret-key-for-unit-tests";

    fn ttl() -> Duration {
        Duration::minutes(50)
    }

    #[test]
    fn create_and_verify_token() {
        let user_id = Uuid::new_v4();
        let token = create_token(user_id, "jane@example.com", TEST_SECRET, ttl())
            .expect("valid token");

        let claims = verify_token(&token, TEST_SECRET).expect("valid verification");
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.email, "jane@example.com");
    }

    #[test]
    fn wrong_secret_fails() {
        let token = create_token(Uuid::new_v4(), "jane@example.com", TEST_SECRET, ttl())
            .expect("valid token");

        let result = verify_token(&token, "wrong-secret");
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn invalid_token_fails() {
        let result = verify_token("invalid.token.string", TEST_SECRET);
        assert!(result.is_err());
    }

    #[test]
    fn expired_token_fails() {
        // well past the default 60s leeway
        let token = create_token(
            Uuid::new_v4(),
            "jane@example.com",
            TEST_SECRET,
            Duration::minutes(-10),
        )
        .expect("valid token");

        assert!(verify_token(&token, TEST_SECRET).is_err());
    }

    #[test]
    fn token_expiry_set() {
        let token = create_token(Uuid::new_v4(), "jane@example.com", TEST_SECRET, ttl())
            .expect("valid token");

        let claims = verify_token(&token, TEST_SECRET).expect("valid verification");
        let now = Utc::now().timestamp();
        let in_50_minutes = (Utc::now() + Duration::minutes(50)).timestamp();

        assert!(claims.exp as i64 > now);
        assert!(claims.exp as i64 <= in_50_minutes + 10);
        assert!(claims.iat as i64 <= now);
    }
}
