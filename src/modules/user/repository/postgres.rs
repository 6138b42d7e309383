use super::{CreateUserPayload, Error, Result, User, UserRepository};
use crate::utils::database::DatabaseConnection;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use ulid::Ulid;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    email: String,
    password_hash: String,
    created_at: NaiveDateTime,
    updated_at: Option<NaiveDateTime>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            password_hash: row.password_hash,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

pub struct PgUserRepository {
    db_conn: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db_conn: DatabaseConnection) -> Self {
        Self { db_conn }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, payload: CreateUserPayload) -> Result<User> {
        sqlx::query_as::<_, UserRow>(
            "
            INSERT INTO users (id, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING *
            ",
        )
        .bind(Ulid::new().to_string())
        .bind(payload.email)
        .bind(payload.password_hash)
        .fetch_one(&self.db_conn.pool)
        .await
        .map(User::from)
        .map_err(|err| match err.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => Error::EmailTaken,
            _ => {
                tracing::error!("Error occurred while creating a user account: {}", err);
                Error::UnexpectedError
            }
        })
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db_conn.pool)
            .await
            .map(|row| row.map(User::from))
            .map_err(|err| {
                tracing::error!("Error occurred while fetching user with id {}: {}", id, err);
                Error::UnexpectedError
            })
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.db_conn.pool)
            .await
            .map(|row| row.map(User::from))
            .map_err(|err| {
                tracing::error!("Error occurred in find_by_email: {}", err);
                Error::UnexpectedError
            })
    }

    async fn find_many_by_ids(&self, ids: &[String]) -> Result<Vec<User>> {
        sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.db_conn.pool)
            .await
            .map(|rows| rows.into_iter().map(User::from).collect())
            .map_err(|err| {
                tracing::error!("Error occurred while fetching users by ids: {}", err);
                Error::UnexpectedError
            })
    }

    async fn update_password_by_id(&self, id: &str, password_hash: String) -> Result<()> {
        sqlx::query(
            "
            UPDATE users SET
                password_hash = $1,
                updated_at = NOW()
            WHERE
                id = $2
            ",
        )
        .bind(password_hash)
        .bind(id)
        .execute(&self.db_conn.pool)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to update the password of user {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
    }
}
