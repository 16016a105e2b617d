//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Scheduling endpoints
    let schedules = Router::new()
        // Classroom registry
        .route(
            "/classrooms",
            get(handlers::list_classrooms).post(handlers::create_classroom),
        )
        .route(
            "/classrooms/{id}",
            get(handlers::get_classroom)
                .patch(handlers::update_classroom)
                .delete(handlers::delete_classroom),
        )
        // Time-slot registry
        .route(
            "/time-slots",
            get(handlers::list_time_slots).post(handlers::create_time_slot),
        )
        .route(
            "/time-slots/by-educational-level/{id}",
            get(handlers::list_time_slots_by_level),
        )
        .route(
            "/time-slots/{id}",
            get(handlers::get_time_slot)
                .patch(handlers::update_time_slot)
                .delete(handlers::delete_time_slot),
        )
        // Schedule sessions
        .route(
            "/sessions",
            get(handlers::list_sessions).post(handlers::create_session),
        )
        .route(
            "/sessions/by-teacher/{teacherId}",
            get(handlers::list_sessions_by_teacher),
        )
        .route(
            "/sessions/by-class-group/{classGroupId}",
            get(handlers::list_sessions_by_class_group),
        )
        .route(
            "/sessions/by-classroom/{classroomId}",
            get(handlers::list_sessions_by_classroom),
        )
        .route(
            "/sessions/{id}",
            patch(handlers::update_session).delete(handlers::delete_session),
        );

    // Reference registry endpoints
    let reference = Router::new()
        .route(
            "/educational-levels",
            get(handlers::list_educational_levels).post(handlers::create_educational_level),
        )
        .route(
            "/educational-levels/{id}",
            get(handlers::get_educational_level),
        )
        .route(
            "/academic-years",
            get(handlers::list_academic_years).post(handlers::create_academic_year),
        )
        .route("/academic-years/{id}", get(handlers::get_academic_year))
        .route(
            "/subject-assignments",
            get(handlers::list_subject_assignments).post(handlers::create_subject_assignment),
        )
        .route(
            "/subject-assignments/{id}",
            get(handlers::get_subject_assignment),
        );

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/schedules", schedules)
        .nest("/reference", reference)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
