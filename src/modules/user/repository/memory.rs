use super::{CreateUserPayload, Error, Result, User, UserRepository};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use ulid::Ulid;

#[derive(Default)]
pub struct MemoryUserRepository {
    users: RwLock<BTreeMap<String, User>>,
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(&self, payload: CreateUserPayload) -> Result<User> {
        let mut users = self.users.write().await;

        if users.values().any(|user| user.email == payload.email) {
            return Err(Error::EmailTaken);
        }

        let user = User {
            id: Ulid::new().to_string(),
            email: payload.email,
            password_hash: payload.password_hash,
            created_at: Utc::now().naive_utc(),
            updated_at: None,
        };

        users.insert(user.id.clone(), user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn find_many_by_ids(&self, ids: &[String]) -> Result<Vec<User>> {
        let users = self.users.read().await;

        Ok(ids.iter().filter_map(|id| users.get(id).cloned()).collect())
    }

    async fn update_password_by_id(&self, id: &str, password_hash: String) -> Result<()> {
        if let Some(user) = self.users.write().await.get_mut(id) {
            user.password_hash = password_hash;
            user.updated_at = Some(Utc::now().naive_utc());
        }

        Ok(())
    }
}
