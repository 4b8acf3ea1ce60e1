pub mod categories;
pub mod questions;

pub use categories::Category;
pub use questions::Question;

use sqlx::sqlite::SqlitePool;

extern crate dotenv;

use dotenv::dotenv;
use sqlx::Error;

pub async fn establish_connection() -> Result<SqlitePool, Error> {
    dotenv().ok();
    let database_url = dotenv::var("DATABASE_URL").expect("DATABASE_URL must be set");
    SqlitePool::connect(&database_url).await
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

#[cfg(test)]
mod tests {
    use sqlx::sqlite::SqlitePoolOptions;

    use super::*;

    async fn test_pool() -> SqlitePool {
        // A single connection so every statement sees the same in-memory database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        run_migrations(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn create_and_fetch_question() {
        let pool = test_pool().await;
        let category = categories::create_category(&pool, "Science").await.unwrap();
        let id = questions::create_question(&pool, "What is H2O?", "Water", 1, category)
            .await
            .unwrap();

        let question = questions::get_question(&pool, id).await.unwrap().unwrap();
        assert_eq!(question.question, "What is H2O?");
        assert_eq!(question.answer, "Water");
        assert_eq!(question.difficulty, 1);
        assert_eq!(question.category, category);
    }

    #[tokio::test]
    async fn delete_question_removes_row() {
        let pool = test_pool().await;
        let category = categories::create_category(&pool, "History").await.unwrap();
        let id = questions::create_question(&pool, "Who was first?", "Nobody", 2, category)
            .await
            .unwrap();

        let deleted = questions::delete_question(&pool, id).await.unwrap();
        assert_eq!(deleted, 1);
        assert!(questions::get_question(&pool, id).await.unwrap().is_none());

        let deleted = questions::delete_question(&pool, id).await.unwrap();
        assert_eq!(deleted, 0);
    }

    #[tokio::test]
    async fn search_matches_substring_case_insensitively() {
        let pool = test_pool().await;
        let category = categories::create_category(&pool, "Art").await.unwrap();
        questions::create_question(&pool, "Who painted the Mona Lisa?", "Da Vinci", 3, category)
            .await
            .unwrap();
        questions::create_question(&pool, "What year is it?", "This one", 1, category)
            .await
            .unwrap();

        let found = questions::search_questions(&pool, "mona lisa").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].answer, "Da Vinci");

        let none = questions::search_questions(&pool, "basketball").await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn questions_filtered_by_category() {
        let pool = test_pool().await;
        let science = categories::create_category(&pool, "Science").await.unwrap();
        let art = categories::create_category(&pool, "Art").await.unwrap();
        questions::create_question(&pool, "q1", "a1", 1, science).await.unwrap();
        questions::create_question(&pool, "q2", "a2", 1, art).await.unwrap();
        questions::create_question(&pool, "q3", "a3", 1, science).await.unwrap();

        let found = questions::get_questions_for_category(&pool, science).await.unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|q| q.category == science));
    }
}
