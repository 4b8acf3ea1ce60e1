use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use db::Question;

use super::category_map;
use crate::error::{ApiError, JsonResult};
use crate::pagination::{paginate, PageQuery};

/// A single POST endpoint handles both creation and search; a non-empty
/// `searchTerm` selects the search branch.
#[derive(Deserialize)]
struct QuestionPayload {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
    question: Option<String>,
    answer: Option<String>,
    difficulty: Option<i64>,
    category: Option<i64>,
}

#[derive(Serialize)]
struct QuestionsResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct SearchResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
}

#[derive(Serialize)]
struct CreatedResponse {
    success: bool,
    created: i64,
    created_question: String,
    questions: Vec<Question>,
    total_questions: usize,
}

#[derive(Serialize)]
struct DeletedResponse {
    success: bool,
    deleted: i64,
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    Query(page): Query<PageQuery>,
) -> JsonResult<QuestionsResponse> {
    let selection = db::questions::get_questions(&pool).await?;
    let current = paginate(&selection, page.page);

    // An out-of-range page and an empty table both read as "nothing here".
    if current.is_empty() {
        return Err(ApiError::NotFound);
    }

    let categories = category_map(db::categories::get_categories(&pool).await?);

    Ok(Json(QuestionsResponse {
        success: true,
        questions: current.to_vec(),
        total_questions: selection.len(),
        categories,
    }))
}

async fn create_or_search(
    State(pool): State<SqlitePool>,
    Query(page): Query<PageQuery>,
    Json(payload): Json<QuestionPayload>,
) -> Result<Response, ApiError> {
    if let Some(term) = payload.search_term.filter(|t| !t.is_empty()) {
        let selection = db::questions::search_questions(&pool, &term).await?;
        if selection.is_empty() {
            return Err(ApiError::NotFound);
        }
        let current = paginate(&selection, page.page);

        return Ok(Json(SearchResponse {
            success: true,
            questions: current.to_vec(),
            total_questions: selection.len(),
        })
        .into_response());
    }

    let (question, answer, difficulty, category) = match (
        payload.question,
        payload.answer,
        payload.difficulty,
        payload.category,
    ) {
        (Some(q), Some(a), Some(d), Some(c)) => (q, a, d, c),
        _ => return Err(ApiError::Unprocessable),
    };

    let created = db::questions::create_question(&pool, &question, &answer, difficulty, category)
        .await
        .map_err(ApiError::mutation)?;

    let selection = db::questions::get_questions(&pool).await?;
    let current = paginate(&selection, page.page);

    Ok(Json(CreatedResponse {
        success: true,
        created,
        created_question: question,
        questions: current.to_vec(),
        total_questions: selection.len(),
    })
    .into_response())
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> JsonResult<DeletedResponse> {
    db::questions::get_question(&pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    db::questions::delete_question(&pool, id)
        .await
        .map_err(ApiError::mutation)?;

    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
    }))
}

pub fn questions_router(pool: SqlitePool) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(create_or_search))
        .route("/questions/{id}", delete(delete_question))
        .with_state(pool)
}
