pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateUserPayload {
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug)]
pub enum Error {
    EmailTaken,
    UnexpectedError,
}

pub type Result<T> = std::result::Result<T, Error>;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with `Error::EmailTaken` when the email already belongs to a user.
    async fn create(&self, payload: CreateUserPayload) -> Result<User>;

    async fn find_by_id(&self, id: &str) -> Result<Option<User>>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Unknown ids are skipped rather than reported.
    async fn find_many_by_ids(&self, ids: &[String]) -> Result<Vec<User>>;

    async fn update_password_by_id(&self, id: &str, password_hash: String) -> Result<()>;
}
