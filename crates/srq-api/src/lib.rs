//! srq-api
//!
//! HTTP API for the SRQ-20 self-assessment service. Routes are listed in one
//! explicit table in [`router`]; each resource operation is a plain handler
//! function under [`routes`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod records;
pub mod routes;
pub mod state;
pub mod submission;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the application router over `state`.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let protected = Router::new()
        // Questionnaire
        .route("/srq20", get(routes::questionnaire::get_questionnaire))
        .route("/srq20", post(routes::questionnaire::submit_questionnaire))
        // Catalog
        .route("/questions", get(routes::questions::list_questions))
        .route("/questions/{id}", get(routes::questions::get_question))
        .route("/activities", get(routes::activities::list_activities))
        // Submitted data
        .route("/answers", get(routes::answers::list_answers))
        .route("/evaluations", get(routes::evaluations::list_evaluations))
        .route(
            "/evaluations/statistics",
            get(routes::evaluations::evaluation_statistics),
        )
        .route(
            "/evaluations/export",
            get(routes::evaluations::export_evaluations),
        )
        .route("/evaluations/{id}", get(routes::evaluations::get_evaluation))
        // Users
        .route("/users", get(routes::users::list_users))
        .route("/users/me", get(routes::users::get_me))
        .route("/users/me", put(routes::users::update_me))
        // Access history (staff)
        .route("/access-history", get(routes::access::list_access_history))
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health_check))
        .merge(protected)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
