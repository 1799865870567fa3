use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::debug;

use shared_models::auth::{Identity, SessionClaims};

type HmacSha256 = Hmac<Sha256>;

/// Validate an identity-provider session token (HMAC-SHA256 JWT) and
/// produce the Identity it certifies. The role claim passes through
/// unresolved; RoleResolver owns its interpretation.
pub fn validate_session_token(token: &str, jwt_secret: &str) -> Result<Identity, String> {
    if jwt_secret.is_empty() {
        return Err("Session token secret is not set".to_string());
    }

    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err("Invalid token format".to_string());
    }

    let header_b64 = parts[0];
    let claims_b64 = parts[1];
    let signature_b64 = parts[2];

    let signature = match URL_SAFE_NO_PAD.decode(signature_b64) {
        Ok(sig) => sig,
        Err(e) => {
            debug!("Failed to decode signature: {}", e);
            return Err("Invalid signature encoding".to_string());
        }
    };

    let signing_input = format!("{}.{}", header_b64, claims_b64);

    let mut mac = match HmacSha256::new_from_slice(jwt_secret.as_bytes()) {
        Ok(m) => m,
        Err(_) => return Err("Failed to create HMAC".to_string()),
    };

    mac.update(signing_input.as_bytes());

    if mac.verify_slice(&signature).is_err() {
        debug!("Token signature verification failed");
        return Err("Invalid token signature".to_string());
    }

    let claims_json = match URL_SAFE_NO_PAD.decode(claims_b64) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(json_str) => json_str,
            Err(_) => return Err("Invalid claims encoding".to_string()),
        },
        Err(_) => return Err("Invalid claims encoding".to_string()),
    };

    let claims: SessionClaims = match serde_json::from_str(&claims_json) {
        Ok(c) => c,
        Err(e) => {
            debug!("Failed to parse claims: {}", e);
            return Err("Invalid claims format".to_string());
        }
    };

    if let Some(exp) = claims.exp {
        let now = chrono::Utc::now().timestamp() as u64;
        if exp < now {
            debug!("Token expired at {} (now: {})", exp, now);
            return Err("Token expired".to_string());
        }
    }

    let identity = Identity {
        id: claims.sub,
        email: claims.email,
        role_claim: claims.role,
    };

    debug!("Token validated successfully for identity: {}", identity.id);
    Ok(identity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{TestIdentity, TokenTestUtils};

    const SECRET: &str = "test-secret-key-for-token-validation-must-be-long-enough";

    #[test]
    fn accepts_valid_token() {
        let subject = TestIdentity::patient("someone@example.com");
        let token = TokenTestUtils::create_test_token(&subject, SECRET, None);

        let identity = validate_session_token(&token, SECRET).unwrap();
        assert_eq!(identity.id, subject.id);
        assert_eq!(identity.email.as_deref(), Some("someone@example.com"));
        assert_eq!(identity.role_claim.as_deref(), Some("patient"));
    }

    #[test]
    fn rejects_expired_token() {
        let subject = TestIdentity::patient("someone@example.com");
        let token = TokenTestUtils::create_expired_token(&subject, SECRET);

        assert!(validate_session_token(&token, SECRET).is_err());
    }

    #[test]
    fn rejects_wrong_signature() {
        let subject = TestIdentity::patient("someone@example.com");
        let token = TokenTestUtils::create_invalid_signature_token(&subject);

        assert!(validate_session_token(&token, SECRET).is_err());
    }

    #[test]
    fn rejects_malformed_token() {
        assert!(validate_session_token("not-a-token", SECRET).is_err());
    }

    #[test]
    fn rejects_when_secret_unset() {
        let subject = TestIdentity::patient("someone@example.com");
        let token = TokenTestUtils::create_test_token(&subject, SECRET, None);

        assert!(validate_session_token(&token, "").is_err());
    }
}
