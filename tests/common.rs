use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, header},
    response::Response,
};
use chrono::{Datelike, Duration, Local};
use fitclub_backend::{
    api::router::create_router, config::Config, infra::factory::bootstrap_state, state::AppState,
};
use serde_json::{Value, json};
use tower::ServiceExt;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub fn new() -> Self {
        let state = Arc::new(bootstrap_state(&Config::default()));
        let router = create_router(state.clone());
        Self { router, state }
    }

    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");

        let request = match body {
            Some(json) => builder.body(Body::from(json.to_string())).unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.request("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> Response {
        self.request("POST", uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> Response {
        self.request("PUT", uri, Some(body)).await
    }

    /// Creates an active trainer on the default week (Mon-Fri 09:00-18:00,
    /// Sat 10:00-16:00, Sunday off) and returns its id.
    pub async fn create_trainer(&self, name: &str, hourly_rate_cents: i32) -> String {
        let response = self
            .post(
                "/api/v1/trainers",
                json!({
                    "name": name,
                    "email": format!("{}@club.test", name.to_lowercase().replace(' ', ".")),
                    "hourly_rate_cents": hourly_rate_cents,
                }),
            )
            .await;
        assert!(response.status().is_success(), "trainer setup failed");
        parse_body(response).await["id"].as_str().unwrap().to_string()
    }

    pub async fn create_client(&self, name: &str, assigned_trainer_id: Option<&str>) -> String {
        let mut payload = json!({
            "name": name,
            "email": format!("{}@club.test", name.to_lowercase().replace(' ', ".")),
        });
        if let Some(trainer_id) = assigned_trainer_id {
            payload["assigned_trainer_id"] = json!(trainer_id);
        }
        let response = self.post("/api/v1/clients", payload).await;
        assert!(response.status().is_success(), "client setup failed");
        parse_body(response).await["id"].as_str().unwrap().to_string()
    }

    pub async fn book(
        &self,
        trainer_id: &str,
        client_id: &str,
        date: &str,
        start: &str,
        end: &str,
    ) -> Response {
        self.post(
            "/api/v1/sessions",
            json!({
                "trainer_id": trainer_id,
                "client_id": client_id,
                "date": date,
                "start_time": start,
                "end_time": end,
            }),
        )
        .await
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// A Monday at least a week out, so date checks never collide with "today".
#[allow(dead_code)]
pub fn next_monday() -> String {
    let mut date = Local::now().date_naive() + Duration::days(7);
    while date.weekday() != chrono::Weekday::Mon {
        date += Duration::days(1);
    }
    date.format("%Y-%m-%d").to_string()
}

/// The Sunday following `next_monday`.
#[allow(dead_code)]
pub fn next_sunday() -> String {
    let mut date = Local::now().date_naive() + Duration::days(7);
    while date.weekday() != chrono::Weekday::Sun {
        date += Duration::days(1);
    }
    date.format("%Y-%m-%d").to_string()
}
