use super::repository::{Food, PopulatedFood};
use crate::{modules::user, types::Context};
use std::collections::HashMap;

/// Resolves every owner reference with a single user lookup.
pub async fn populate_many(
    ctx: &Context,
    foods: Vec<Food>,
) -> Result<Vec<PopulatedFood>, user::repository::Error> {
    let mut owner_ids: Vec<String> = foods.iter().map(|food| food.owner_id.clone()).collect();
    owner_ids.sort();
    owner_ids.dedup();

    let owners: HashMap<String, user::repository::User> = ctx
        .store
        .users
        .find_many_by_ids(&owner_ids)
        .await?
        .into_iter()
        .map(|owner| (owner.id.clone(), owner))
        .collect();

    Ok(foods
        .into_iter()
        .map(|food| {
            let owner = owners.get(&food.owner_id).cloned();
            food.populate(owner)
        })
        .collect())
}

pub async fn populate(
    ctx: &Context,
    food: Food,
) -> Result<PopulatedFood, user::repository::Error> {
    let owner = ctx.store.users.find_by_id(&food.owner_id).await?;

    Ok(food.populate(owner))
}
