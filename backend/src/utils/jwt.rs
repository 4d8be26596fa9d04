use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // emp_id
    pub username: String,
    pub is_manager: bool,
    pub exp: i64,    // expiration time
    pub iat: i64,    // issued at
    pub jti: String, // JWT ID
}

impl Claims {
    pub fn new(emp_id: String, username: String, is_manager: bool, expiration_hours: u64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours as i64);

        Self {
            sub: emp_id,
            username,
            is_manager,
            exp: exp.timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }
}

pub fn create_access_token(
    emp_id: String,
    username: String,
    is_manager: bool,
    secret: &str,
    expiration_hours: u64,
) -> anyhow::Result<String> {
    let claims = Claims::new(emp_id, username, is_manager, expiration_hours);
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )?;

    Ok(token)
}

pub fn verify_access_token(token: &str, secret: &str) -> anyhow::Result<Claims> {
    let validation = Validation::default();
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &validation,
    )?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_verify_round_trip() {
        let token = create_access_token("EMP001".into(), "jsmith".into(), true, "secret", 1)
            .expect("create token");
        let claims = verify_access_token(&token, "secret").expect("verify token");
        assert_eq!(claims.sub, "EMP001");
        assert_eq!(claims.username, "jsmith");
        assert!(claims.is_manager);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn verify_rejects_wrong_secret() {
        let token =
            create_access_token("EMP002".into(), "arao".into(), false, "secret", 1).unwrap();
        assert!(verify_access_token(&token, "other").is_err());
    }

    #[test]
    fn verify_rejects_expired_token() {
        let mut claims = Claims::new("EMP002".into(), "arao".into(), false, 1);
        claims.exp = Utc::now().timestamp() - 3600;
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("secret".as_ref()),
        )
        .unwrap();
        assert!(verify_access_token(&token, "secret").is_err());
    }
}
