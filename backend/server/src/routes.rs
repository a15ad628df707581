use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use bank::{
    DeletedFood, Food, FoodInput, SearchQuery,
    payloads::{FOOD_NOT_FOUND, NO_FOODS_FOUND},
};
use tracing::{info, warn};

use crate::{error::AppError, state::AppState, utils::parse_food};

pub async fn create_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<FoodInput>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let food = parse_food(payload)?;
    let food = state.store.insert(food).await?;

    info!(id = %food.id, "Created food");

    Ok((StatusCode::CREATED, Json(food)))
}

pub async fn list_handler(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Food>>, AppError> {
    Ok(Json(state.store.list_all().await?))
}

pub async fn get_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Food>, AppError> {
    state
        .store
        .get_by_id(&id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound(FOOD_NOT_FOUND))
}

pub async fn update_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<FoodInput>, JsonRejection>,
) -> Result<Json<Food>, AppError> {
    let food = parse_food(payload)?;
    let food = state
        .store
        .update_by_id(&id, food)
        .await?
        .ok_or(AppError::NotFound(FOOD_NOT_FOUND))?;

    info!(id = %food.id, "Updated food");

    Ok(Json(food))
}

pub async fn delete_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeletedFood>, AppError> {
    let food = state
        .store
        .delete_by_id(&id)
        .await?
        .ok_or(AppError::NotFound(FOOD_NOT_FOUND))?;

    info!(id = %food.id, "Deleted food");

    Ok(Json(DeletedFood::new(food)))
}

pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<Vec<Food>>, AppError> {
    let Query(query) = query.map_err(|e| {
        warn!("Rejected search query: {e}");

        AppError::MalformedPayload
    })?;

    let foods = state
        .store
        .find_by_name_contains(query.name.as_deref().unwrap_or_default())
        .await?;

    if foods.is_empty() {
        return Err(AppError::NotFound(NO_FOODS_FOUND));
    }

    Ok(Json(foods))
}
