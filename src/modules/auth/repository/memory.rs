use super::{Result, Session, SessionCreationPayload, SessionRepository};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use ulid::Ulid;

#[derive(Default)]
pub struct MemorySessionRepository {
    sessions: RwLock<HashMap<String, Session>>,
}

#[async_trait]
impl SessionRepository for MemorySessionRepository {
    async fn create(&self, payload: SessionCreationPayload) -> Result<Session> {
        let session = Session {
            id: Ulid::new().to_string(),
            user_id: payload.user_id,
            access_token: payload.access_token,
            access_token_expires_at: payload.access_token_expires_at,
            created_at: Utc::now().naive_utc(),
        };

        self.sessions
            .write()
            .await
            .insert(session.id.clone(), session.clone());

        Ok(session)
    }

    async fn find_by_access_token(&self, access_token: &str) -> Result<Option<Session>> {
        Ok(self
            .sessions
            .read()
            .await
            .values()
            .find(|session| session.access_token == access_token)
            .cloned())
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        self.sessions.write().await.remove(id);
        Ok(())
    }
}
