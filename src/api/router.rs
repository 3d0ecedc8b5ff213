use axum::{
    Router,
    body::Body,
    extract::Request,
    routing::{get, post, put},
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{classify::ServerErrorsFailureClass, trace::TraceLayer};
use tracing::{Span, error, info, info_span};
use uuid::Uuid;

use crate::api::handlers::{client, health, import, session, slots, trainer};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Trainers
        .route(
            "/api/v1/trainers",
            post(trainer::create_trainer).get(trainer::list_trainers),
        )
        .route(
            "/api/v1/trainers/{trainer_id}",
            get(trainer::get_trainer)
                .put(trainer::update_trainer)
                .delete(trainer::delete_trainer),
        )
        .route(
            "/api/v1/trainers/{trainer_id}/working-hours",
            get(trainer::get_working_hours).put(trainer::update_working_hours),
        )
        .route("/api/v1/trainers/{trainer_id}/slots", get(slots::get_slots))

        // Clients
        .route(
            "/api/v1/clients",
            post(client::create_client).get(client::list_clients),
        )
        .route(
            "/api/v1/clients/{client_id}",
            get(client::get_client).put(client::update_client),
        )

        // Booking flow
        .route(
            "/api/v1/sessions",
            post(session::create_session).get(session::list_sessions),
        )
        .route("/api/v1/sessions/{session_id}", get(session::get_session))
        .route(
            "/api/v1/sessions/{session_id}/status",
            put(session::update_session_status),
        )
        .route(
            "/api/v1/sessions/{session_id}/cancel",
            post(session::cancel_session),
        )

        // Bulk onboarding
        .route(
            "/api/v1/imports/sessions/validate",
            post(import::validate_import),
        )

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!(
                        "started processing request: {} {}",
                        request.method(),
                        request.uri().path()
                    );
                })
                .on_response(
                    |response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                        info!(
                            status = response.status().as_u16(),
                            latency_ms = latency.as_millis(),
                            "finished processing request"
                        );
                    },
                )
                .on_failure(
                    |error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                        error!("request failed: {:?}", error);
                    },
                ),
        )
        .with_state(state)
}
