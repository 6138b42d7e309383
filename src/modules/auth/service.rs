use chrono::Utc;
use ulid::Ulid;

use super::repository::{self, Session};
use crate::types::Context;
use std::sync::Arc;

#[derive(Debug, PartialEq)]
pub enum Error {
    UnexpectedError,
    InvalidSession,
    ExpiredToken,
}

type Result<T> = std::result::Result<T, Error>;

pub async fn create_session(ctx: Arc<Context>, user_id: String) -> Result<Session> {
    ctx.store
        .sessions
        .create(repository::SessionCreationPayload {
            user_id,
            access_token: Ulid::new().to_string(),
            access_token_expires_at: Utc::now().naive_utc() + ctx.auth.session_ttl,
        })
        .await
        .map_err(|_| Error::UnexpectedError)
}

pub async fn verify_access_token(ctx: Arc<Context>, access_token: &str) -> Result<Session> {
    let session = ctx
        .store
        .sessions
        .find_by_access_token(access_token)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::InvalidSession)?;

    if session.access_token_expires_at < Utc::now().naive_utc() {
        end_session(ctx, &session).await?;
        return Err(Error::ExpiredToken);
    };

    Ok(session)
}

pub async fn end_session(ctx: Arc<Context>, session: &Session) -> Result<()> {
    ctx.store
        .sessions
        .delete_by_id(&session.id)
        .await
        .map_err(|_| Error::UnexpectedError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Config, Store};
    use crate::types::{AppConfig, AppEnvironment, AuthConfig, DatabaseConfig};

    fn context(session_ttl_hours: i64) -> Arc<Context> {
        let config = Config {
            app: AppConfig {
                host: String::from("127.0.0.1"),
                environment: AppEnvironment::Development,
                port: 0,
            },
            database: DatabaseConfig {
                url: None,
                max_connections: 1,
            },
            auth: AuthConfig { session_ttl_hours },
        };

        Arc::new(Context::new(&config, Store::in_memory()))
    }

    #[tokio::test]
    async fn issued_tokens_verify_until_the_session_ends() {
        let ctx = context(1);
        let session = create_session(ctx.clone(), String::from("user-1"))
            .await
            .unwrap();

        let verified = verify_access_token(ctx.clone(), &session.access_token)
            .await
            .unwrap();
        assert_eq!(verified, session);

        end_session(ctx.clone(), &session).await.unwrap();
        assert_eq!(
            verify_access_token(ctx, &session.access_token).await,
            Err(Error::InvalidSession)
        );
    }

    #[tokio::test]
    async fn rejects_unknown_tokens() {
        let ctx = context(1);

        assert_eq!(
            verify_access_token(ctx, "not-a-token").await,
            Err(Error::InvalidSession)
        );
    }

    #[tokio::test]
    async fn rejects_expired_tokens() {
        let ctx = context(1);
        let session = ctx
            .store
            .sessions
            .create(repository::SessionCreationPayload {
                user_id: String::from("user-1"),
                access_token: String::from("stale"),
                access_token_expires_at: Utc::now().naive_utc() - chrono::Duration::minutes(1),
            })
            .await
            .unwrap();

        assert_eq!(
            verify_access_token(ctx.clone(), &session.access_token).await,
            Err(Error::ExpiredToken)
        );
        assert_eq!(
            ctx.store.sessions.find_by_access_token("stale").await.unwrap(),
            None
        );
    }
}
