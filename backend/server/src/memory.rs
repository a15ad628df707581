use async_trait::async_trait;
use bank::{Food, NewFood};
use parking_lot::RwLock;

use crate::{
    search::{name_matches, normalize_query},
    store::{FoodStore, StoreError, new_id},
};

/// Process-local store. Keeps insertion order, loses everything on restart.
#[derive(Default)]
pub struct MemoryStore {
    foods: RwLock<Vec<Food>>,
}

impl MemoryStore {
    pub fn with_foods(foods: impl IntoIterator<Item = Food>) -> Self {
        Self {
            foods: RwLock::new(foods.into_iter().collect()),
        }
    }
}

#[async_trait]
impl FoodStore for MemoryStore {
    async fn insert(&self, food: NewFood) -> Result<Food, StoreError> {
        let food = Food::new(new_id(), food);
        self.foods.write().push(food.clone());

        Ok(food)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Food>, StoreError> {
        Ok(self.foods.read().iter().find(|food| food.id == id).cloned())
    }

    async fn update_by_id(&self, id: &str, food: NewFood) -> Result<Option<Food>, StoreError> {
        let mut foods = self.foods.write();

        Ok(foods.iter_mut().find(|existing| existing.id == id).map(|existing| {
            existing.overwrite(food);
            existing.clone()
        }))
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Food>, StoreError> {
        let mut foods = self.foods.write();
        let index = foods.iter().position(|food| food.id == id);

        Ok(index.map(|index| foods.remove(index)))
    }

    async fn list_all(&self) -> Result<Vec<Food>, StoreError> {
        Ok(self.foods.read().clone())
    }

    async fn find_by_name_contains(&self, query: &str) -> Result<Vec<Food>, StoreError> {
        let query = normalize_query(Some(query));

        Ok(self
            .foods
            .read()
            .iter()
            .filter(|food| name_matches(&food.name, &query))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pho() -> NewFood {
        NewFood::new("Pho", "beef, noodles, broth")
    }

    #[tokio::test]
    async fn test_insert_assigns_unique_ids() {
        let store = MemoryStore::default();

        let first = store.insert(pho()).await.unwrap();
        let second = store.insert(pho()).await.unwrap();

        assert!(!first.id.is_empty());
        assert_ne!(first.id, second.id);
        assert_eq!(store.list_all().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_update_preserves_id() {
        let store = MemoryStore::default();
        let food = store.insert(pho()).await.unwrap();

        let updated = store
            .update_by_id(&food.id, NewFood::new("Pho Ga", "chicken, noodles"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, food.id);
        assert_eq!(updated.name, "Pho Ga");
        assert_eq!(store.get_by_id(&food.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_missing_ids() {
        let store = MemoryStore::default();

        assert_eq!(store.get_by_id("missing").await.unwrap(), None);
        assert_eq!(store.update_by_id("missing", pho()).await.unwrap(), None);
        assert_eq!(store.delete_by_id("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_returns_removed_record() {
        let store = MemoryStore::default();
        let food = store.insert(pho()).await.unwrap();

        assert_eq!(store.delete_by_id(&food.id).await.unwrap(), Some(food.clone()));
        assert_eq!(store.delete_by_id(&food.id).await.unwrap(), None);
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_name_contains() {
        let store = MemoryStore::default();
        let pho = store.insert(pho()).await.unwrap();
        store
            .insert(NewFood::new("Banh Mi", "bread, pork"))
            .await
            .unwrap();

        assert_eq!(store.find_by_name_contains("PH").await.unwrap(), vec![pho]);
        assert_eq!(store.find_by_name_contains("").await.unwrap().len(), 2);
        assert!(store.find_by_name_contains("curry").await.unwrap().is_empty());
    }
}
