//! HTTP-level integration tests for the trivia endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, post_raw, put_json, seed_question};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_categories_returns_seeded_map(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/categories").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["total_categories"], 6);
    assert_eq!(json["categories"]["1"], "Science");
    assert_eq!(json["categories"]["6"], "Sports");
}

// ---------------------------------------------------------------------------
// Paginated listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_questions_empty_bank_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/questions").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 404);
    assert_eq!(json["message"], "resource not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_questions_pages_are_ten_wide(pool: PgPool) {
    for i in 0..25 {
        seed_question(&pool, &format!("Question {i}?"), "Answer", Some(1), 1).await;
    }

    let response = get(common::build_test_app(pool.clone()), "/api/v1/questions").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["questions"].as_array().unwrap().len(), 10);
    assert_eq!(json["totalQuestions"], 10);
    assert!(json["currentCategory"].is_null());
    assert_eq!(json["categories"]["1"], "Science");

    let response = get(
        common::build_test_app(pool.clone()),
        "/api/v1/questions?page=3",
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["questions"].as_array().unwrap().len(), 5);

    let response = get(common::build_test_app(pool), "/api/v1/questions?page=200").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_numeric_page_falls_back_to_first_page(pool: PgPool) {
    // Legacy parser ignored a bad page value instead of failing the request.
    seed_question(&pool, "Only question?", "A", Some(1), 1).await;

    let response = get(common::build_test_app(pool), "/api/v1/questions?page=abc").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["questions"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_matches_substring_case_insensitively(pool: PgPool) {
    seed_question(&pool, "What is the title of the anthem?", "X", Some(1), 1).await;
    seed_question(&pool, "Whose TITLE was defended in 1974?", "Y", Some(6), 2).await;
    seed_question(&pool, "Unrelated question?", "Z", Some(1), 1).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/questions",
        serde_json::json!({"searchTerm": "title"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["questions"].as_array().unwrap().len(), 2);
    assert_eq!(json["totalQuestions"], 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_with_no_matches_is_success_not_404(pool: PgPool) {
    seed_question(&pool, "Only question", "A", Some(1), 1).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/questions",
        serde_json::json!({"searchTerm": "zzz-no-such-substring"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["questions"].as_array().unwrap().len(), 0);
    assert_eq!(json["totalQuestions"], 0);
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_question_returns_created_id(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/questions",
        serde_json::json!({
            "question": "What boxer's original name is Cassius Clay?",
            "answer": "Muhammad Ali",
            "category": 4,
            "difficulty": 1
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["created"].is_number());
    assert_eq!(json["questions"].as_array().unwrap().len(), 1);

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_question_with_missing_field_is_422(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/questions",
        serde_json::json!({
            "question": "Incomplete?",
            "answer": "Yes",
            "category": 1
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "unprocessable");

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_question_returns_deleted_id_and_refreshed_page(pool: PgPool) {
    let id = seed_question(&pool, "Doomed question?", "Yes", Some(1), 1).await;
    seed_question(&pool, "Surviving question?", "Also yes", Some(1), 1).await;

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/v1/questions/{id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["deleted"], id);
    assert_eq!(json["questions"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_missing_question_is_422_not_404(pool: PgPool) {
    // Legacy contract: delete of an absent id answers unprocessable.
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/v1/questions/999999").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["error"], 422);
    assert_eq!(json["message"], "unprocessable");
}

// ---------------------------------------------------------------------------
// List by category
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_by_category_scopes_and_names_the_category(pool: PgPool) {
    seed_question(&pool, "Science question?", "A", Some(1), 1).await;
    seed_question(&pool, "Art question?", "B", Some(2), 1).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/categories/1/questions").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["currentCategory"], "Science");
    let questions = json["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0]["category"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_by_unknown_category_is_422(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/categories/999/questions").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 422);
}

// ---------------------------------------------------------------------------
// Quiz
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn quiz_returns_question_from_selected_category(pool: PgPool) {
    seed_question(&pool, "Science question?", "A", Some(1), 1).await;
    seed_question(&pool, "Art question?", "B", Some(2), 1).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/quizzes",
        serde_json::json!({
            "previous_questions": [],
            "quiz_category": {"id": 1, "type": "Science"}
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["question"]["category"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn quiz_exhausted_category_is_404(pool: PgPool) {
    let a = seed_question(&pool, "Science one?", "A", Some(1), 1).await;
    let b = seed_question(&pool, "Science two?", "B", Some(1), 1).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/quizzes",
        serde_json::json!({
            "previous_questions": [a, b],
            "quiz_category": {"id": 1, "type": "Science"}
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "resource not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn quiz_with_missing_field_is_422(pool: PgPool) {
    seed_question(&pool, "Some question?", "A", Some(1), 1).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/quizzes",
        serde_json::json!({"previous_questions": []}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/quizzes",
        serde_json::json!({"quiz_category": {"id": 1}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn quiz_with_zero_category_selects_from_all(pool: PgPool) {
    seed_question(&pool, "Art question?", "B", Some(2), 1).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/quizzes",
        serde_json::json!({
            "previous_questions": [],
            "quiz_category": {"id": 0, "type": "click"}
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["question"]["category"], 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn quiz_with_unknown_category_falls_back_to_all(pool: PgPool) {
    // Deliberately different from the category-scoped listing, which
    // answers 422 for an unknown id.
    seed_question(&pool, "Some question?", "A", Some(1), 1).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/quizzes",
        serde_json::json!({
            "previous_questions": [],
            "quiz_category": {"id": 999}
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
}

// ---------------------------------------------------------------------------
// Malformed bodies
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_quiz_body_gets_422_envelope(pool: PgPool) {
    seed_question(&pool, "Some question?", "A", Some(1), 1).await;

    let app = common::build_test_app(pool);
    let response = post_raw(app, "/api/v1/quizzes", "application/json", "not json").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 422);
    assert_eq!(json["message"], "unprocessable");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn wrong_content_type_gets_422_envelope(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_raw(app, "/api/v1/questions", "text/plain", "{}").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "unprocessable");
}

// ---------------------------------------------------------------------------
// Verb and route fallbacks
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn unsupported_verb_gets_405_envelope(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/api/v1/questions", serde_json::json!({})).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 405);
    assert_eq!(json["message"], "method not allowed");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_route_gets_404_envelope(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/no-such-route").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "resource not found");
}
