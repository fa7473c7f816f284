//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{info, warn};

use crate::{
    auth::{
        AuthServiceError, IssuedToken, NewRegistration, TokenService,
        password::{UNMATCHABLE_HASH, hash_password, verify_password},
    },
    database::Db,
    domain::users::{
        data::{NewUser, normalize_email},
        records::{Role, UserRecord, UserUuid},
        repository::PgUsersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    db: Db,
    users: PgUsersRepository,
    tokens: TokenService,
}

impl PgAuthService {
    #[must_use]
    pub fn new(db: Db, tokens: TokenService) -> Self {
        Self {
            db,
            users: PgUsersRepository::new(),
            tokens,
        }
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    #[tracing::instrument(name = "auth.register", skip_all, err)]
    async fn register(
        &self,
        registration: NewRegistration,
    ) -> Result<UserRecord, AuthServiceError> {
        let email = normalize_email(&registration.email);

        if email.is_empty()
            || registration.password.is_empty()
            || registration.full_name.trim().is_empty()
        {
            return Err(AuthServiceError::MissingRequiredData);
        }

        let password_hash = hash_password(registration.password).await?;

        let mut tx = self.db.begin().await?;

        // The unique index on email decides between concurrent registrations.
        let user = self
            .users
            .create_user(
                &mut tx,
                &NewUser {
                    uuid: UserUuid::new(),
                    email,
                    password_hash,
                    full_name: registration.full_name,
                    phone: registration.phone,
                    role: Role::User,
                },
            )
            .await?;

        tx.commit().await?;

        info!(user_uuid = %user.uuid, "user registered");

        Ok(user)
    }

    #[tracing::instrument(name = "auth.login", skip_all, err(level = "debug"))]
    async fn login(&self, email: &str, password: &str) -> Result<IssuedToken, AuthServiceError> {
        let email = normalize_email(email);

        let mut tx = self.db.begin().await?;

        let credentials = self.users.find_credentials_by_email(&mut tx, &email).await?;

        tx.commit().await?;

        let Some(credentials) = credentials else {
            verify_password(password.to_string(), UNMATCHABLE_HASH.to_string()).await?;

            return Err(AuthServiceError::InvalidCredentials);
        };

        let matches = verify_password(password.to_string(), credentials.password_hash).await?;

        if !matches {
            return Err(AuthServiceError::InvalidCredentials);
        }

        if !credentials.user.is_active {
            warn!(user_uuid = %credentials.user.uuid, "login attempt for disabled account");

            return Err(AuthServiceError::InvalidCredentials);
        }

        Ok(self.tokens.issue(&credentials.user.email, None)?)
    }

    async fn resolve_bearer(&self, token: &str) -> Result<UserRecord, AuthServiceError> {
        let claims = self
            .tokens
            .verify(token)
            .map_err(|_| AuthServiceError::Unauthorized)?;

        let mut tx = self.db.begin().await?;

        let user = self.users.find_user_by_email(&mut tx, &claims.sub).await?;

        tx.commit().await?;

        user.filter(|user| user.is_active)
            .ok_or(AuthServiceError::Unauthorized)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Creates a plain user account from a self-service sign-up.
    async fn register(&self, registration: NewRegistration) -> Result<UserRecord, AuthServiceError>;

    /// Exchanges an email and password for an access token.
    async fn login(&self, email: &str, password: &str) -> Result<IssuedToken, AuthServiceError>;

    /// Resolves a bearer token to the active user it names.
    async fn resolve_bearer(&self, token: &str) -> Result<UserRecord, AuthServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::{SignedDuration, Timestamp};
    use testresult::TestResult;

    use crate::{
        auth::SHORT_LIVED_TOKEN_TTL,
        domain::users::UsersService,
        test::{TestContext, helpers::registration},
    };

    use super::*;

    #[tokio::test]
    async fn register_creates_plain_active_user() -> TestResult {
        let ctx = TestContext::new().await;

        let user = ctx
            .auth
            .register(registration(" Ann@Example.com ", "pw", "Ann"))
            .await?;

        assert_eq!(user.email, "ann@example.com");
        assert_eq!(user.full_name, "Ann");
        assert_eq!(user.role, Role::User);
        assert!(user.is_active);

        Ok(())
    }

    #[tokio::test]
    async fn register_twice_returns_email_taken() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.auth.register(registration("a@x.com", "pw", "Ann")).await?;

        let result = ctx
            .auth
            .register(registration("A@X.COM", "other", "Impostor"))
            .await;

        assert!(
            matches!(result, Err(AuthServiceError::EmailTaken)),
            "expected EmailTaken, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn register_without_password_is_rejected() {
        let ctx = TestContext::new().await;

        let result = ctx.auth.register(registration("a@x.com", "", "Ann")).await;

        assert!(
            matches!(result, Err(AuthServiceError::MissingRequiredData)),
            "expected MissingRequiredData, got {result:?}"
        );
    }

    #[tokio::test]
    async fn stored_hash_is_not_the_password() -> TestResult {
        let ctx = TestContext::new().await;

        let user = ctx.auth.register(registration("a@x.com", "pw", "Ann")).await?;

        let hash: String = sqlx::query_scalar("SELECT password_hash FROM users WHERE uuid = $1")
            .bind(user.uuid.into_uuid())
            .fetch_one(ctx.db.pool())
            .await?;

        assert_ne!(hash, "pw");
        assert!(hash.starts_with("$argon2"), "unexpected hash format: {hash}");

        Ok(())
    }

    #[tokio::test]
    async fn login_then_resolve_returns_the_user() -> TestResult {
        let ctx = TestContext::new().await;

        let user = ctx.auth.register(registration("a@x.com", "pw", "Ann")).await?;

        let issued = ctx.auth.login("A@x.com", "pw").await?;
        let resolved = ctx.auth.resolve_bearer(&issued.token).await?;

        assert_eq!(resolved, user);
        assert!(issued.expires_at > Timestamp::now());

        Ok(())
    }

    #[tokio::test]
    async fn login_failures_are_indistinguishable() -> TestResult {
        let ctx = TestContext::new().await;

        let user = ctx.auth.register(registration("a@x.com", "pw", "Ann")).await?;

        let wrong_password = ctx.auth.login("a@x.com", "nope").await;
        let unknown_email = ctx.auth.login("b@x.com", "pw").await;

        ctx.users.set_active(user.uuid, false).await?;

        let disabled = ctx.auth.login("a@x.com", "pw").await;

        for result in [wrong_password, unknown_email, disabled] {
            assert!(
                matches!(result, Err(AuthServiceError::InvalidCredentials)),
                "expected InvalidCredentials, got {result:?}"
            );
        }

        Ok(())
    }

    #[tokio::test]
    async fn resolve_rejects_expired_token() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.auth.register(registration("a@x.com", "pw", "Ann")).await?;

        let issued_at = Timestamp::now().checked_sub(SignedDuration::from_hours(1))?;
        let expired = ctx
            .tokens
            .issue_at("a@x.com", issued_at, Some(SHORT_LIVED_TOKEN_TTL))?;

        let result = ctx.auth.resolve_bearer(&expired.token).await;

        assert!(
            matches!(result, Err(AuthServiceError::Unauthorized)),
            "expected Unauthorized, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn resolve_rejects_token_for_unknown_user() -> TestResult {
        let ctx = TestContext::new().await;

        let issued = ctx.tokens.issue("ghost@x.com", None)?;

        let result = ctx.auth.resolve_bearer(&issued.token).await;

        assert!(
            matches!(result, Err(AuthServiceError::Unauthorized)),
            "expected Unauthorized, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn resolve_rejects_garbage() {
        let ctx = TestContext::new().await;

        let result = ctx.auth.resolve_bearer("garbage").await;

        assert!(
            matches!(result, Err(AuthServiceError::Unauthorized)),
            "expected Unauthorized, got {result:?}"
        );
    }
}
