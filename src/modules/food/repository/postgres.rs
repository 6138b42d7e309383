use super::{CreateFoodPayload, Error, Food, FoodRepository, Result, UpdateFoodPayload};
use crate::utils::database::DatabaseConnection;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde_json::{Map, Value};
use sqlx::types::Json;
use ulid::Ulid;

#[derive(sqlx::FromRow)]
struct FoodRow {
    id: String,
    owner_id: String,
    fields: Json<Map<String, Value>>,
    created_at: NaiveDateTime,
    updated_at: Option<NaiveDateTime>,
}

impl From<FoodRow> for Food {
    fn from(row: FoodRow) -> Self {
        Self {
            id: row.id,
            owner_id: row.owner_id,
            fields: row.fields.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

pub struct PgFoodRepository {
    db_conn: DatabaseConnection,
}

impl PgFoodRepository {
    pub fn new(db_conn: DatabaseConnection) -> Self {
        Self { db_conn }
    }
}

#[async_trait]
impl FoodRepository for PgFoodRepository {
    async fn create(&self, payload: CreateFoodPayload) -> Result<Food> {
        sqlx::query_as::<_, FoodRow>(
            "
            INSERT INTO foods
            (id, owner_id, fields)
            VALUES ($1, $2, $3)
            RETURNING *
            ",
        )
        .bind(Ulid::new().to_string())
        .bind(&payload.owner_id)
        .bind(Json(payload.fields))
        .fetch_one(&self.db_conn.pool)
        .await
        .map(Food::from)
        .map_err(|err| {
            tracing::error!(
                "Error occurred while creating a food for user {}: {}",
                payload.owner_id,
                err
            );
            Error::UnexpectedError
        })
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Food>> {
        sqlx::query_as::<_, FoodRow>("SELECT * FROM foods WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db_conn.pool)
            .await
            .map(|row| row.map(Food::from))
            .map_err(|err| {
                tracing::error!("Error occurred while fetching food with id {}: {}", id, err);
                Error::UnexpectedError
            })
    }

    async fn find_many(&self) -> Result<Vec<Food>> {
        sqlx::query_as::<_, FoodRow>("SELECT * FROM foods ORDER BY created_at, id")
            .fetch_all(&self.db_conn.pool)
            .await
            .map(|rows| rows.into_iter().map(Food::from).collect())
            .map_err(|err| {
                tracing::error!("Error occurred while trying to fetch many foods: {}", err);
                Error::UnexpectedError
            })
    }

    async fn update_by_id(&self, id: &str, payload: UpdateFoodPayload) -> Result<()> {
        sqlx::query(
            "
            UPDATE foods SET
                fields = fields || $1,
                updated_at = NOW()
            WHERE
                id = $2
            ",
        )
        .bind(Json(payload.fields))
        .bind(id)
        .execute(&self.db_conn.pool)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to update a food by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        sqlx::query("DELETE FROM foods WHERE id = $1")
            .bind(id)
            .execute(&self.db_conn.pool)
            .await
            .map(|_| ())
            .map_err(|err| {
                tracing::error!(
                    "Error occurred while trying to delete a food by id {}: {}",
                    id,
                    err
                );
                Error::UnexpectedError
            })
    }
}
