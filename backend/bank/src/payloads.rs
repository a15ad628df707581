use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::foods::{Food, NewFood};

pub const FOOD_NOT_FOUND: &str = "Food not found";
pub const NO_FOODS_FOUND: &str = "No foods found";
pub const FOOD_DELETED: &str = "Food deleted successfully";
pub const SERVER_ERROR: &str = "Server error";
pub const MALFORMED_PAYLOAD: &str = "Malformed payload";

pub const NAME_FIELD: &str = "name";
pub const RECIPE_FIELD: &str = "recipe";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),
}

/// Create/update body as sent by a client. Fields are optional here so a
/// missing field is reported as a validation failure rather than a decode error.
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct FoodInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub recipe: Option<String>,
}

impl FoodInput {
    pub fn validate(self) -> Result<NewFood, ValidationError> {
        let name = required(self.name, NAME_FIELD)?;
        let recipe = required(self.recipe, RECIPE_FIELD)?;

        Ok(NewFood { name, recipe })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    value
        .filter(|value| !value.trim().is_empty())
        .ok_or(ValidationError::Missing(field))
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeletedFood {
    pub message: String,
    pub deleted_food: Food,
}

impl DeletedFood {
    pub fn new(deleted_food: Food) -> Self {
        Self {
            message: FOOD_DELETED.to_string(),
            deleted_food,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct SearchQuery {
    #[serde(default)]
    pub name: Option<String>,
}
