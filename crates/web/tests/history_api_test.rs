mod common;

use axum::http::StatusCode;
use chrono::NaiveDate;
use common::TestApp;
use serde_json::json;
use storage::{
    dto::workout::CreateWorkoutRequest, models::WorkoutSet,
    repository::workout::WorkoutRepository,
};

fn workout(title: &str, day: u32) -> CreateWorkoutRequest {
    CreateWorkoutRequest {
        title: title.to_string(),
        workout_date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
        duration_minutes: 45,
        volume_kg: 0.0,
        sets: 0,
        workout_sets: Vec::new(),
        start_time: None,
        end_time: None,
    }
}

async fn seed(app: &TestApp, count: u32) {
    let workouts: Vec<_> = (1..=count).map(|d| workout(&format!("W{d}"), d)).collect();
    WorkoutRepository::new(app.db.pool())
        .insert_many(&workouts)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_page_beyond_data_is_empty_with_totals() {
    let app = TestApp::new().await;
    seed(&app, 10).await;

    let (status, body) = app.get("/api/history?page=3&page_size=20").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"], json!([]));
    assert_eq!(body["total"], 10);
    assert_eq!(body["total_pages"], 1);
    assert_eq!(body["page"], 3);
    assert_eq!(body["page_size"], 20);
}

#[tokio::test]
async fn test_defaults_and_ordering() {
    let app = TestApp::new().await;
    seed(&app, 25).await;

    let (status, body) = app.get("/api/history").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 1);
    assert_eq!(body["page_size"], 20);
    assert_eq!(body["total_pages"], 2);

    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 20);
    assert_eq!(items[0]["title"], "W25");
    assert_eq!(items[19]["title"], "W6");

    let (_, second) = app.get("/api/history?page=2&page_size=20").await;
    assert_eq!(second["items"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_empty_history() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/history").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
    assert_eq!(body["total_pages"], 0);
}

#[tokio::test]
async fn test_invalid_pagination_rejected() {
    let app = TestApp::new().await;

    for uri in [
        "/api/history?page=0",
        "/api/history?page_size=0",
        "/api/history?page_size=101",
        "/api/history?page=abc",
    ] {
        let (status, _) = app.get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[tokio::test]
async fn test_create_workout() {
    let app = TestApp::new().await;
    let set = WorkoutSet {
        exercise_title: "Deadlift".to_string(),
        superset_id: None,
        exercise_notes: None,
        set_index: 0,
        set_type: "normal".to_string(),
        weight_kg: Some(140.0),
        reps: Some(3),
    };

    let (status, body) = app
        .post(
            "/api/history",
            json!({
                "title": "Pull",
                "workout_date": "2024-03-10",
                "duration_minutes": 50,
                "volume_kg": 420.0,
                "sets": 1,
                "workout_sets": [set],
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_i64().is_some());
    assert_eq!(body["title"], "Pull");
    assert_eq!(body["workout_sets"][0]["exercise_title"], "Deadlift");

    let (_, page) = app.get("/api/history").await;
    assert_eq!(page["total"], 1);
}

#[tokio::test]
async fn test_create_workout_validates() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/history",
            json!({
                "title": "Pull",
                "workout_date": "2024-03-10",
                "duration_minutes": -5,
                "volume_kg": 0.0,
                "sets": 0,
                "workout_sets": [],
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");

    let (status, _) = app
        .post(
            "/api/history",
            json!({
                "title": "Pull",
                "workout_date": "2024-03-10",
                "duration_minutes": 5,
                "volume_kg": 0.0,
                "sets": 3,
                "workout_sets": [],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
