use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use sqlx::SqlitePool;

use db::Question;

use super::category_map;
use crate::error::{ApiError, JsonResult};
use crate::pagination::{paginate, PageQuery};

#[derive(Serialize)]
struct CategoriesResponse {
    success: bool,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct CategoryQuestionsResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: String,
}

async fn list_categories(State(pool): State<SqlitePool>) -> JsonResult<CategoriesResponse> {
    let categories = category_map(db::categories::get_categories(&pool).await?);
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

async fn questions_for_category(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Query(page): Query<PageQuery>,
) -> JsonResult<CategoryQuestionsResponse> {
    // Unknown category is a malformed request here, not a missing resource.
    let category = db::categories::get_category(&pool, id)
        .await?
        .ok_or(ApiError::BadRequest)?;

    let selection = db::questions::get_questions_for_category(&pool, category.id).await?;
    let current = paginate(&selection, page.page);

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: current.to_vec(),
        total_questions: selection.len(),
        current_category: category.kind,
    }))
}

pub fn category_router(pool: SqlitePool) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(questions_for_category))
        .with_state(pool)
}
