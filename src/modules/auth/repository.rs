pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::NaiveDateTime;

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub id: String,
    pub user_id: String,
    pub access_token: String,
    pub access_token_expires_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

pub struct SessionCreationPayload {
    pub user_id: String,
    pub access_token: String,
    pub access_token_expires_at: NaiveDateTime,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub type Result<T> = std::result::Result<T, Error>;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, payload: SessionCreationPayload) -> Result<Session>;

    async fn find_by_access_token(&self, access_token: &str) -> Result<Option<Session>>;

    async fn delete_by_id(&self, id: &str) -> Result<()>;
}
