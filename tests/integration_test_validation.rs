mod common;

use axum::http::StatusCode;
use common::{TestApp, next_monday, parse_body};
use serde_json::{Value, json};

async fn errors_of(response: axum::response::Response) -> Vec<Value> {
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    parse_body(response).await["errors"]
        .as_array()
        .unwrap()
        .clone()
}

fn codes(errors: &[Value]) -> Vec<String> {
    errors
        .iter()
        .map(|e| e["code"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn empty_request_reports_every_missing_field() {
    let app = TestApp::new();

    let response = app.post("/api/v1/sessions", json!({})).await;
    let errors = errors_of(response).await;

    assert_eq!(errors.len(), 5);
    assert!(codes(&errors).iter().all(|c| c == "missing_field"));

    let fields: Vec<&str> = errors.iter().map(|e| e["field"].as_str().unwrap()).collect();
    assert_eq!(
        fields,
        vec!["trainer_id", "client_id", "date", "start_time", "end_time"]
    );
}

#[tokio::test]
async fn reversed_times_fail_even_when_everything_else_is_valid() {
    let app = TestApp::new();
    let trainer_id = app.create_trainer("Jonas Falk", 9000).await;
    let client_id = app.create_client("Lea Brandt", None).await;
    let date = next_monday();

    let response = app.book(&trainer_id, &client_id, &date, "14:00", "13:30").await;
    let errors = errors_of(response).await;

    assert_eq!(codes(&errors), vec!["time_order"]);
}

#[tokio::test]
async fn duration_bounds_are_enforced_inclusively() {
    let app = TestApp::new();
    let trainer_id = app.create_trainer("Jonas Falk", 9000).await;
    let client_id = app.create_client("Lea Brandt", None).await;
    let date = next_monday();

    let verdicts = [
        ("10:29", StatusCode::UNPROCESSABLE_ENTITY), // 29 minutes
        ("10:30", StatusCode::OK),                   // 30 minutes
        ("14:00", StatusCode::OK),                   // 240 minutes
        ("14:01", StatusCode::UNPROCESSABLE_ENTITY), // 241 minutes
    ];

    for (index, (end, expected)) in verdicts.iter().enumerate() {
        // separate trainer per case so accepted bookings do not collide
        let trainer_id = if index == 0 {
            trainer_id.clone()
        } else {
            app.create_trainer(&format!("Trainer {index}"), 9000).await
        };
        let response = app.book(&trainer_id, &client_id, &date, "10:00", end).await;
        assert_eq!(response.status(), *expected, "end {end}");
    }
}

#[tokio::test]
async fn malformed_times_and_date_are_reported_together() {
    let app = TestApp::new();
    let trainer_id = app.create_trainer("Jonas Falk", 9000).await;
    let client_id = app.create_client("Lea Brandt", None).await;

    let response = app
        .book(&trainer_id, &client_id, "10-08-2026", "25:00", "9am")
        .await;
    let errors = errors_of(response).await;

    assert_eq!(errors.len(), 3);
    assert!(codes(&errors).iter().all(|c| c == "format"));
}

#[tokio::test]
async fn past_dates_are_rejected() {
    let app = TestApp::new();
    let trainer_id = app.create_trainer("Jonas Falk", 9000).await;
    let client_id = app.create_client("Lea Brandt", None).await;

    let response = app
        .book(&trainer_id, &client_id, "2020-01-06", "10:00", "11:00")
        .await;
    let errors = errors_of(response).await;
    assert!(codes(&errors).contains(&"past_date".to_string()));
}

#[tokio::test]
async fn unknown_references_are_flagged_per_field() {
    let app = TestApp::new();
    let date = next_monday();

    let response = app.book("ghost-trainer", "ghost-client", &date, "10:00", "11:00").await;
    let errors = errors_of(response).await;

    assert_eq!(errors.len(), 2);
    assert!(codes(&errors).iter().all(|c| c == "not_found"));
}

#[tokio::test]
async fn out_of_working_hours_is_rejected() {
    let app = TestApp::new();
    let trainer_id = app.create_trainer("Jonas Falk", 9000).await;
    let client_id = app.create_client("Lea Brandt", None).await;
    let date = next_monday();

    let response = app.book(&trainer_id, &client_id, &date, "07:00", "08:00").await;
    let errors = errors_of(response).await;
    assert_eq!(codes(&errors), vec!["out_of_working_hours"]);
}

#[tokio::test]
async fn inactive_trainer_cannot_be_booked() {
    let app = TestApp::new();
    let trainer_id = app.create_trainer("Jonas Falk", 9000).await;
    let client_id = app.create_client("Lea Brandt", None).await;
    let date = next_monday();

    let response = app
        .put(
            &format!("/api/v1/trainers/{trainer_id}"),
            json!({ "status": "inactive" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.book(&trainer_id, &client_id, &date, "10:00", "11:00").await;
    let errors = errors_of(response).await;
    assert!(codes(&errors).contains(&"not_bookable".to_string()));
}

#[tokio::test]
async fn assigned_trainer_mismatch_is_overridable() {
    let app = TestApp::new();
    let regular = app.create_trainer("Jonas Falk", 9000).await;
    let substitute = app.create_trainer("Mia Weber", 6000).await;
    let client_id = app.create_client("Lea Brandt", Some(&regular)).await;
    let date = next_monday();

    let response = app.book(&substitute, &client_id, &date, "10:00", "11:00").await;
    let errors = errors_of(response).await;
    assert_eq!(codes(&errors), vec!["trainer_mismatch"]);

    let overridden = app
        .post(
            "/api/v1/sessions",
            json!({
                "trainer_id": substitute,
                "client_id": client_id,
                "date": date,
                "start_time": "10:00",
                "end_time": "11:00",
                "reassign_trainer": true,
            }),
        )
        .await;
    assert_eq!(overridden.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_type_and_status_tokens_are_collected() {
    let app = TestApp::new();
    let trainer_id = app.create_trainer("Jonas Falk", 9000).await;
    let client_id = app.create_client("Lea Brandt", None).await;
    let date = next_monday();

    let response = app
        .post(
            "/api/v1/sessions",
            json!({
                "trainer_id": trainer_id,
                "client_id": client_id,
                "date": date,
                "start_time": "10:00",
                "end_time": "11:00",
                "type": "aqua-jogging",
                "status": "tentative",
            }),
        )
        .await;
    let errors = errors_of(response).await;

    let mut found = codes(&errors);
    found.sort();
    assert_eq!(found, vec!["unknown_status", "unknown_type"]);
}

#[tokio::test]
async fn degraded_working_hours_fall_back_with_warnings() {
    let app = TestApp::new();

    let response = app
        .post(
            "/api/v1/trainers",
            json!({
                "name": "Nora Lindt",
                "email": "nora@club.test",
                "hourly_rate_cents": 7500,
                "working_hours": { "monday": { "start": "26:00", "end": "18:00", "is_working": true } },
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_body(response).await;
    let warnings = body["schedule_warnings"].as_array().unwrap();
    assert!(!warnings.is_empty());

    // fell back to the default week
    assert_eq!(body["working_hours"]["monday"]["start"], "09:00");
    assert_eq!(body["working_hours"]["sunday"]["is_working"], false);
}
