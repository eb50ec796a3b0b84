//! Auth service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use sqlx::PgPool;
use tracing::{debug, warn};

use crate::auth::{
    ApiTokenUuid, AuthServiceError, BearerToken, IssuedApiToken, NewApiToken, NewUser, User,
    UserUuid, repository::PgAuthRepository,
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    repository: PgAuthRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgAuthRepository::new(pool),
        }
    }

    /// Register a new user account.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::AlreadyExists`] when the email is taken.
    pub async fn create_user(&self, user: NewUser) -> Result<User, AuthServiceError> {
        self.repository
            .create_user(user)
            .await
            .map_err(AuthServiceError::from)
    }

    /// Issue a bearer token for `user`, valid until `expires_at` when given.
    pub async fn issue_api_token(
        &self,
        user: UserUuid,
        expires_at: Option<Timestamp>,
    ) -> Result<IssuedApiToken, AuthServiceError> {
        let token = BearerToken::generate();

        let metadata = self
            .repository
            .create_api_token(&NewApiToken {
                uuid: token.uuid(),
                user_uuid: user,
                token_hash: token.verifier(user),
                expires_at,
            })
            .await?;

        Ok(IssuedApiToken { token, metadata })
    }

    /// Revoke a token. Returns `false` if it was already revoked or never existed.
    pub async fn revoke_api_token(&self, token: ApiTokenUuid) -> Result<bool, AuthServiceError> {
        let revoked = self.repository.revoke_api_token(token).await?;

        Ok(revoked.is_some())
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserUuid, AuthServiceError> {
        let presented: BearerToken = bearer_token.parse().map_err(|error| {
            debug!("rejected bearer token: {error}");

            AuthServiceError::NotFound
        })?;

        let stored = self
            .repository
            .find_active_api_token(presented.uuid())
            .await?
            .ok_or(AuthServiceError::NotFound)?;

        if !presented.verify(stored.user_uuid, &stored.token_hash) {
            debug!(token = %presented.uuid(), "bearer token verifier mismatch");

            return Err(AuthServiceError::NotFound);
        }

        if let Err(source) = self
            .repository
            .touch_api_token_last_used(presented.uuid())
            .await
        {
            warn!(token = %presented.uuid(), "failed to record api token use: {source}");
        }

        Ok(stored.user_uuid)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserUuid, AuthServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::ToSpan;
    use jiff_sqlx::Timestamp as SqlxTimestamp;
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    async fn issued_token_authenticates_as_its_user() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("ada@example.com").await;

        let issued = ctx.auth.issue_api_token(user, None).await?;
        let authenticated = ctx.auth.authenticate_bearer(&issued.token.reveal()).await?;

        assert_eq!(authenticated, user);
        assert_eq!(issued.metadata.user_uuid, user);
        assert!(issued.metadata.revoked_at.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn successful_authentication_records_last_use() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("edsger@example.com").await;

        let issued = ctx.auth.issue_api_token(user, None).await?;

        assert!(issued.metadata.last_used_at.is_none());

        ctx.auth.authenticate_bearer(&issued.token.reveal()).await?;

        let last_used_at: Option<SqlxTimestamp> =
            sqlx::query_scalar("SELECT last_used_at FROM api_tokens WHERE uuid = $1")
                .bind(issued.metadata.uuid.into_uuid())
                .fetch_one(ctx.db.pool())
                .await?;

        assert!(last_used_at.is_some(), "last_used_at should be set");

        Ok(())
    }

    #[tokio::test]
    async fn tampered_secret_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("grace@example.com").await;

        let issued = ctx.auth.issue_api_token(user, None).await?;
        let revealed = issued.token.reveal();
        let (uuid_part, _secret) = revealed.split_once('.').ok_or("token has no secret")?;
        let forged = format!("{uuid_part}.{}", "11".repeat(32));

        let result = ctx.auth.authenticate_bearer(&forged).await;

        assert!(
            matches!(result, Err(AuthServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn revoked_token_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("linus@example.com").await;

        let issued = ctx.auth.issue_api_token(user, None).await?;

        assert!(ctx.auth.revoke_api_token(issued.metadata.uuid).await?);
        assert!(
            !ctx.auth.revoke_api_token(issued.metadata.uuid).await?,
            "second revoke should be a no-op"
        );

        let result = ctx.auth.authenticate_bearer(&issued.token.reveal()).await;

        assert!(matches!(result, Err(AuthServiceError::NotFound)));

        Ok(())
    }

    #[tokio::test]
    async fn expired_token_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("barbara@example.com").await;

        let expires_at = Timestamp::now().checked_sub(1.hour())?;
        let issued = ctx.auth.issue_api_token(user, Some(expires_at)).await?;

        let result = ctx.auth.authenticate_bearer(&issued.token.reveal()).await;

        assert!(matches!(result, Err(AuthServiceError::NotFound)));

        Ok(())
    }

    #[tokio::test]
    async fn malformed_token_is_rejected() {
        let ctx = TestContext::new().await;

        let result = ctx.auth.authenticate_bearer("not-a-token").await;

        assert!(matches!(result, Err(AuthServiceError::NotFound)));
    }

    #[tokio::test]
    async fn duplicate_email_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.create_user("dup@example.com").await;

        let result = ctx
            .auth
            .create_user(NewUser {
                uuid: UserUuid::new(),
                email: "dup@example.com".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthServiceError::AlreadyExists)));

        Ok(())
    }
}
