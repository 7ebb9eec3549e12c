//! Authentication service

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{
    config::JwtConfig,
    constants::user_states,
    error::{AppError, AppResult},
    models::UserModel,
    services::Services,
};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user id
    pub email: String,
    pub is_admin: bool,
    pub exp: i64,
    pub iat: i64,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Login with email and password, returning the user, a token and its lifetime in seconds
    pub async fn login(
        services: &Services,
        config: &JwtConfig,
        email: &str,
        password: &str,
    ) -> AppResult<(UserModel, String, i64)> {
        let user = services
            .users()
            .find_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !Self::verify_password(password, &user.password)? {
            return Err(AppError::InvalidCredentials);
        }

        if user.state != user_states::ACTIVE {
            return Err(AppError::Forbidden("Account disabled".to_string()));
        }

        let (token, expires_in) = Self::generate_access_token(&user, config)?;
        tracing::info!(user_id = ?user.id, "User logged in");

        Ok((user, token, expires_in))
    }

    /// Verify JWT token and extract claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Hash password using Argon2
    pub fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(hash)
    }

    /// Verify password against hash
    pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Generate access token
    pub fn generate_access_token(user: &UserModel, config: &JwtConfig) -> AppResult<(String, i64)> {
        let user_id = user
            .id
            .ok_or_else(|| AppError::InvalidInput("User has no id".to_string()))?;
        let now = Utc::now();
        let expires_at = now + Duration::hours(config.expiry_hours);
        let expires_in = config.expiry_hours * 3600;

        let claims = Claims {
            sub: user_id.to_string(),
            email: user.email.clone(),
            is_admin: user.is_admin,
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))?;

        Ok((token, expires_in))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db::mappers::MockMappers, entities::UserEntity};

    fn jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            expiry_hours: 1,
        }
    }

    fn services_with_user(password: &str, state: i32) -> Services {
        let hash = AuthService::hash_password(password).unwrap();
        let mut mocks = MockMappers::default();
        mocks.users.expect_find_by_email().returning(move |email| {
            if email != "owner@example.com" {
                return Ok(None);
            }
            Ok(Some(UserEntity {
                id: Some(2),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: email.to_string(),
                password: hash.clone(),
                state,
                ..Default::default()
            }))
        });
        Services::new(mocks.into())
    }

    #[test]
    fn test_password_hash_round_trip() {
        let hash = AuthService::hash_password("secret123").unwrap();

        assert_ne!(hash, "secret123");
        assert!(AuthService::verify_password("secret123", &hash).unwrap());
        assert!(!AuthService::verify_password("secret124", &hash).unwrap());
    }

    #[test]
    fn test_token_carries_user_claims() {
        let user = UserModel {
            id: Some(5),
            email: "admin@example.com".to_string(),
            is_admin: true,
            ..Default::default()
        };

        let (token, expires_in) = AuthService::generate_access_token(&user, &jwt_config()).unwrap();
        let claims = AuthService::verify_token(&token, "test-secret").unwrap();

        assert_eq!(expires_in, 3600);
        assert_eq!(claims.sub, "5");
        assert!(claims.is_admin);
        assert!(matches!(
            AuthService::verify_token(&token, "other-secret"),
            Err(AppError::InvalidToken)
        ));
    }

    #[tokio::test]
    async fn test_login_success() {
        let services = services_with_user("secret123", user_states::ACTIVE);

        let (user, token, _) =
            AuthService::login(&services, &jwt_config(), "owner@example.com", "secret123")
                .await
                .unwrap();

        assert_eq!(user.id, Some(2));
        assert_eq!(AuthService::verify_token(&token, "test-secret").unwrap().sub, "2");
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_password_and_unknown_email() {
        let services = services_with_user("secret123", user_states::ACTIVE);

        let wrong_password =
            AuthService::login(&services, &jwt_config(), "owner@example.com", "nope").await;
        let unknown = AuthService::login(&services, &jwt_config(), "x@example.com", "secret123").await;

        assert!(matches!(wrong_password, Err(AppError::InvalidCredentials)));
        assert!(matches!(unknown, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_rejects_disabled_account() {
        let services = services_with_user("secret123", user_states::DISABLED);

        let result =
            AuthService::login(&services, &jwt_config(), "owner@example.com", "secret123").await;

        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }
}
