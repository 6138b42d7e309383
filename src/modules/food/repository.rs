pub mod memory;
pub mod postgres;

use crate::{modules::user::repository::User, utils::ownership::Owned};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::{Map, Value};

/// A stored food document. Everything besides the server-owned keys lives in
/// `fields` and is serialized inline next to them.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Food {
    pub id: String,
    #[serde(rename = "owner")]
    pub owner_id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl Owned for Food {
    fn owner_id(&self) -> &str {
        &self.owner_id
    }
}

impl Food {
    /// Resolves the owner reference. `owner` is `None` when the user record is gone.
    pub fn populate(self, owner: Option<User>) -> PopulatedFood {
        PopulatedFood {
            id: self.id,
            owner,
            fields: self.fields,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct PopulatedFood {
    pub id: String,
    pub owner: Option<User>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateFoodPayload {
    pub owner_id: String,
    pub fields: Map<String, Value>,
}

/// Top-level keys to overwrite; keys not present are left as they are.
pub struct UpdateFoodPayload {
    pub fields: Map<String, Value>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub type Result<T> = std::result::Result<T, Error>;

#[async_trait]
pub trait FoodRepository: Send + Sync {
    async fn create(&self, payload: CreateFoodPayload) -> Result<Food>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Food>>;

    /// All foods, oldest first.
    async fn find_many(&self) -> Result<Vec<Food>>;

    async fn update_by_id(&self, id: &str, payload: UpdateFoodPayload) -> Result<()>;

    async fn delete_by_id(&self, id: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn food() -> Food {
        let mut fields = Map::new();
        fields.insert(String::from("title"), json!("Soup"));

        Food {
            id: String::from("food-1"),
            owner_id: String::from("user-1"),
            fields,
            created_at: Utc::now().naive_utc(),
            updated_at: None,
        }
    }

    #[test]
    fn serializes_fields_inline_with_owner_id() {
        let value = json!(food());

        assert_eq!(value["id"], json!("food-1"));
        assert_eq!(value["owner"], json!("user-1"));
        assert_eq!(value["title"], json!("Soup"));
        assert!(value.get("fields").is_none());
        assert!(value.get("owner_id").is_none());
    }

    #[test]
    fn populated_owner_hides_password_hash() {
        let owner = User {
            id: String::from("user-1"),
            email: String::from("cook@example.com"),
            password_hash: String::from("secret"),
            created_at: Utc::now().naive_utc(),
            updated_at: None,
        };

        let value = json!(food().populate(Some(owner)));

        assert_eq!(value["owner"]["id"], json!("user-1"));
        assert_eq!(value["owner"]["email"], json!("cook@example.com"));
        assert!(value["owner"].get("password_hash").is_none());
        assert_eq!(value["title"], json!("Soup"));
    }

    #[test]
    fn missing_owner_serializes_as_null() {
        assert_eq!(json!(food().populate(None))["owner"], Value::Null);
    }
}
