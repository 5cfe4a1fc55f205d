use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use sea_orm::DatabaseConnection;
use serde::Deserialize;

use crate::{
    model::user::UserDto,
    server::{data::user::UserRepository, error::auth::AuthError, error::Error},
};

/// Claims carried by a pre-issued login token.
#[derive(Deserialize)]
struct TokenClaims {
    sub: String,
    #[allow(dead_code)]
    exp: usize,
}

/// Service resolving the identity attributed to writes.
///
/// Resolve-or-create semantics: a pre-issued HS256 token maps to the user with
/// the token's subject (created on first sight); no token means a fresh
/// anonymous user.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    token_secret: Option<&'a str>,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection, token_secret: Option<&'a str>) -> Self {
        Self { db, token_secret }
    }

    /// Resolves an identity for the session, creating one as needed.
    pub async fn resolve_identity(
        &self,
        token: Option<&str>,
    ) -> Result<entity::podium_user::Model, Error> {
        match token {
            Some(token) => self.resolve_token_identity(token).await,
            None => Ok(UserRepository::new(self.db).create(None).await?),
        }
    }

    async fn resolve_token_identity(
        &self,
        token: &str,
    ) -> Result<entity::podium_user::Model, Error> {
        let Some(secret) = self.token_secret else {
            return Err(AuthError::TokenLoginNotConfigured.into());
        };

        let claims = decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|err| AuthError::InvalidToken(err.to_string()))?
        .claims;

        let user_repository = UserRepository::new(self.db);

        if let Some(user) = user_repository.find_by_subject(&claims.sub).await? {
            return Ok(user);
        }

        Ok(user_repository.create(Some(claims.sub)).await?)
    }
}

/// Maps an identity row to the DTO exposed to the client.
pub fn user_dto(user: &entity::podium_user::Model) -> UserDto {
    UserDto {
        id: user.id,
        anonymous: user.subject.is_none(),
        created_at: user.created_at,
    }
}
