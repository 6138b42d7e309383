use super::{CreateFoodPayload, Food, FoodRepository, Result, UpdateFoodPayload};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use ulid::Ulid;

/// Foods in insertion order.
#[derive(Default)]
pub struct MemoryFoodRepository {
    foods: RwLock<Vec<Food>>,
}

#[async_trait]
impl FoodRepository for MemoryFoodRepository {
    async fn create(&self, payload: CreateFoodPayload) -> Result<Food> {
        let food = Food {
            id: Ulid::new().to_string(),
            owner_id: payload.owner_id,
            fields: payload.fields,
            created_at: Utc::now().naive_utc(),
            updated_at: None,
        };

        self.foods.write().await.push(food.clone());

        Ok(food)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Food>> {
        Ok(self
            .foods
            .read()
            .await
            .iter()
            .find(|food| food.id == id)
            .cloned())
    }

    async fn find_many(&self) -> Result<Vec<Food>> {
        Ok(self.foods.read().await.clone())
    }

    async fn update_by_id(&self, id: &str, payload: UpdateFoodPayload) -> Result<()> {
        if let Some(food) = self
            .foods
            .write()
            .await
            .iter_mut()
            .find(|food| food.id == id)
        {
            food.fields.extend(payload.fields);
            food.updated_at = Some(Utc::now().naive_utc());
        }

        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        self.foods.write().await.retain(|food| food.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map, Value};

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    async fn create(repository: &MemoryFoodRepository, title: &str) -> Food {
        repository
            .create(CreateFoodPayload {
                owner_id: String::from("user-1"),
                fields: fields(json!({ "title": title })),
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn lists_in_creation_order() {
        let repository = MemoryFoodRepository::default();
        let first = create(&repository, "Soup").await;
        let second = create(&repository, "Bread").await;

        let ids: Vec<String> = repository
            .find_many()
            .await
            .unwrap()
            .into_iter()
            .map(|food| food.id)
            .collect();

        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn update_merges_top_level_fields() {
        let repository = MemoryFoodRepository::default();
        let food = repository
            .create(CreateFoodPayload {
                owner_id: String::from("user-1"),
                fields: fields(json!({ "title": "Soup", "text": "hot" })),
            })
            .await
            .unwrap();

        repository
            .update_by_id(
                &food.id,
                UpdateFoodPayload {
                    fields: fields(json!({ "text": "cold", "vegan": true })),
                },
            )
            .await
            .unwrap();

        let food = repository.find_by_id(&food.id).await.unwrap().unwrap();
        assert_eq!(
            Value::Object(food.fields),
            json!({ "title": "Soup", "text": "cold", "vegan": true })
        );
        assert_eq!(food.owner_id, "user-1");
        assert!(food.updated_at.is_some());
    }

    #[tokio::test]
    async fn deleted_foods_are_gone() {
        let repository = MemoryFoodRepository::default();
        let food = create(&repository, "Soup").await;

        repository.delete_by_id(&food.id).await.unwrap();

        assert_eq!(repository.find_by_id(&food.id).await.unwrap(), None);
        assert!(repository.find_many().await.unwrap().is_empty());
    }
}
