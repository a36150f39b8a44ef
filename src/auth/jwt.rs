// JWT token creation and verification
// Tokens are HS256-signed and carry the username plus a fixed expiry

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims structure
///
/// # Fields
/// * `sub` - Subject (username)
/// * `exp` - Expiry time (seconds since epoch)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Username (subject)
    pub sub: String,
    /// Expiry timestamp (seconds since epoch)
    pub exp: usize,
}

/// Creates a signed token for a username.
///
/// The token expires `expiry_minutes` after issuance and is signed with
/// HS256.
pub fn create_token(
    username: &str,
    secret: &str,
    expiry_minutes: i64,
) -> Result<String, String> {
    let expiry = Utc::now() + Duration::minutes(expiry_minutes);
    let claims = Claims {
        sub: username.to_string(),
        exp: expiry.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| e.to_string())
}

/// Verifies signature and expiry, returning the decoded claims.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test-secret-key-for-unit-tests";

    #[test]
    fn create_and_verify_token() {
        let token = create_token("admin", TEST_SECRET, 60).expect("valid token");

        let claims = verify_token(&token, TEST_SECRET).expect("valid verification");
        assert_eq!(claims.sub, "admin");
    }

    #[test]
    fn wrong_secret_fails() {
        let token = create_token("admin", TEST_SECRET, 60).expect("valid token");

        let result = verify_token(&token, "wrong-secret");
        assert!(result.is_err());
    }

    #[test]
    fn malformed_token_fails() {
        let result = verify_token("invalid.token.string", TEST_SECRET);
        assert!(result.is_err());
    }

    #[test]
    fn expired_token_fails() {
        // Issued already past its expiry; jsonwebtoken's default leeway
        // is 60 seconds, so go well beyond it.
        let token = create_token("admin", TEST_SECRET, -5).expect("valid token");

        let result = verify_token(&token, TEST_SECRET);
        assert!(result.is_err());
    }

    #[test]
    fn token_expiry_honors_configured_minutes() {
        let token = create_token("admin", TEST_SECRET, 60).expect("valid token");

        let claims = verify_token(&token, TEST_SECRET).expect("valid verification");
        let expiry_time = claims.exp as i64;
        let now = Utc::now().timestamp();
        let in_an_hour = (Utc::now() + Duration::minutes(60)).timestamp();

        assert!(expiry_time > now);
        assert!(expiry_time <= in_an_hour + 10); // 10 second buffer
    }
}
