//! Client-side mirror of the recipe list plus the create/edit form and search box.
//!
//! Every mutation goes to the server first and the local list is patched from
//! the response, so there is no full reload after a save or delete. A failed
//! request is logged and leaves the book exactly as it was.
use bank::{Food, NewFood};
use tracing::{error, info};

use crate::api::{ClientError, FoodsApi};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submitted {
    Created(Food),
    Updated(Food),
    /// One of the form fields was empty or blank, nothing was sent.
    Skipped,
}

pub struct RecipeBook<A> {
    api: A,
    pub form_name: String,
    pub form_recipe: String,
    pub search_query: String,
    foods: Vec<Food>,
    editing: Option<Food>,
}

fn logged<T>(action: &str, result: Result<T, ClientError>) -> Result<T, ClientError> {
    result.map_err(|e| {
        error!("Error {action}: {e}");

        e
    })
}

impl<A: FoodsApi> RecipeBook<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            form_name: String::new(),
            form_recipe: String::new(),
            search_query: String::new(),
            foods: Vec::new(),
            editing: None,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    pub fn editing(&self) -> Option<&Food> {
        self.editing.as_ref()
    }

    /// Initial load of the full list.
    pub async fn mount(&mut self) -> Result<(), ClientError> {
        self.foods = logged("fetching foods", self.api.list().await)?;

        Ok(())
    }

    /// Replaces the list with the matches for `search_query`, possibly none.
    pub async fn search(&mut self) -> Result<(), ClientError> {
        self.foods = logged("searching foods", self.api.search(&self.search_query).await)?;

        Ok(())
    }

    /// Creates a record, or updates the one being edited, then clears the form.
    pub async fn submit(&mut self) -> Result<Submitted, ClientError> {
        if self.form_name.trim().is_empty() || self.form_recipe.trim().is_empty() {
            return Ok(Submitted::Skipped);
        }

        let food = NewFood::new(self.form_name.clone(), self.form_recipe.clone());

        let submitted = match &self.editing {
            Some(editing) => {
                let updated = logged("updating food", self.api.update(&editing.id, &food).await)?;

                for existing in self.foods.iter_mut().filter(|f| f.id == updated.id) {
                    *existing = updated.clone();
                }
                self.editing = None;

                Submitted::Updated(updated)
            }
            None => {
                let created = logged("saving food", self.api.create(&food).await)?;
                self.foods.push(created.clone());

                Submitted::Created(created)
            }
        };

        self.form_name.clear();
        self.form_recipe.clear();

        Ok(submitted)
    }

    /// Loads a listed record into the form. Returns false if `id` is not in the list.
    pub fn edit(&mut self, id: &str) -> bool {
        let Some(food) = self.foods.iter().find(|food| food.id == id) else {
            return false;
        };

        self.form_name = food.name.clone();
        self.form_recipe = food.recipe.clone();
        self.editing = Some(food.clone());

        true
    }

    pub async fn delete(&mut self, id: &str) -> Result<Food, ClientError> {
        let deleted = logged("deleting food", self.api.delete(id).await)?;

        info!("{}: {}", deleted.message, deleted.deleted_food.name);
        self.foods.retain(|food| food.id != id);

        Ok(deleted.deleted_food)
    }
}
