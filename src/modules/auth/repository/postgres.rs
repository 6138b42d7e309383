use super::{Error, Result, Session, SessionCreationPayload, SessionRepository};
use crate::utils::database::DatabaseConnection;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use ulid::Ulid;

#[derive(sqlx::FromRow)]
struct SessionRow {
    id: String,
    user_id: String,
    access_token: String,
    access_token_expires_at: NaiveDateTime,
    created_at: NaiveDateTime,
}

impl From<SessionRow> for Session {
    fn from(row: SessionRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            access_token: row.access_token,
            access_token_expires_at: row.access_token_expires_at,
            created_at: row.created_at,
        }
    }
}

pub struct PgSessionRepository {
    db_conn: DatabaseConnection,
}

impl PgSessionRepository {
    pub fn new(db_conn: DatabaseConnection) -> Self {
        Self { db_conn }
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    async fn create(&self, payload: SessionCreationPayload) -> Result<Session> {
        sqlx::query_as::<_, SessionRow>(
            "
            INSERT INTO sessions (id, user_id, access_token, access_token_expires_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            ",
        )
        .bind(Ulid::new().to_string())
        .bind(&payload.user_id)
        .bind(payload.access_token)
        .bind(payload.access_token_expires_at)
        .fetch_one(&self.db_conn.pool)
        .await
        .map(Session::from)
        .map_err(|err| {
            tracing::error!(
                "Error occurred while creating a new session for user with id {}: {}",
                payload.user_id,
                err
            );
            Error::UnexpectedError
        })
    }

    async fn find_by_access_token(&self, access_token: &str) -> Result<Option<Session>> {
        sqlx::query_as::<_, SessionRow>("SELECT * FROM sessions WHERE access_token = $1")
            .bind(access_token)
            .fetch_optional(&self.db_conn.pool)
            .await
            .map(|row| row.map(Session::from))
            .map_err(|err| {
                tracing::error!("Error occurred while fetching session by token: {}", err);
                Error::UnexpectedError
            })
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id)
            .execute(&self.db_conn.pool)
            .await
            .map(|_| ())
            .map_err(|err| {
                tracing::error!("Error occurred while deleting session {}: {}", id, err);
                Error::UnexpectedError
            })
    }
}
