use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use db::Question;

use crate::error::{ApiError, JsonResult};

#[derive(Deserialize)]
struct QuizRequest {
    previous_questions: Option<Vec<i64>>,
    quiz_category: Option<QuizCategory>,
}

#[derive(Deserialize)]
struct QuizCategory {
    id: Option<i64>,
}

#[derive(Serialize)]
struct QuizResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    question: Option<Question>,
}

/// Draws one random question from the requested pool that has not been asked
/// yet. Sampling happens over the explicitly computed set of unused
/// candidates, so the draw terminates even when `previous_questions` holds
/// ids outside the pool, and an empty pool simply reads as exhausted.
async fn quiz_question(
    State(pool): State<SqlitePool>,
    Json(body): Json<QuizRequest>,
) -> JsonResult<QuizResponse> {
    let previous = body.previous_questions.ok_or(ApiError::BadRequest)?;
    let category = body
        .quiz_category
        .and_then(|c| c.id)
        .ok_or(ApiError::BadRequest)?;

    // id 0 means "any category"
    let candidates = if category == 0 {
        db::questions::get_questions(&pool).await?
    } else {
        db::questions::get_questions_for_category(&pool, category).await?
    };

    let remaining: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();

    let question = remaining.choose(&mut rand::thread_rng()).cloned();

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

pub fn quiz_router(pool: SqlitePool) -> Router {
    Router::new()
        .route("/quizzes", post(quiz_question))
        .with_state(pool)
}
