use serde::{Deserialize, Serialize};

/// A persisted recipe. `id` is assigned by the store and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub id: String,
    pub name: String,
    pub recipe: String,
}

/// A validated name/recipe pair, ready to be inserted or written over an existing record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFood {
    pub name: String,
    pub recipe: String,
}

impl Food {
    pub fn new(id: impl Into<String>, food: NewFood) -> Self {
        Self {
            id: id.into(),
            name: food.name,
            recipe: food.recipe,
        }
    }

    /// Overwrites both fields, keeping the id.
    pub fn overwrite(&mut self, food: NewFood) {
        self.name = food.name;
        self.recipe = food.recipe;
    }

    /// Ingredients are stored as one comma separated string; this is only a display split.
    pub fn ingredients(&self) -> impl Iterator<Item = &str> {
        self.recipe.split(',').map(str::trim)
    }
}

impl NewFood {
    pub fn new(name: impl Into<String>, recipe: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            recipe: recipe.into(),
        }
    }
}
