pub mod dashboard;
pub mod health;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::generation::handlers as versions;
use crate::letters::handlers as letters;
use crate::master::handlers as master;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/dashboard", get(dashboard::handle_dashboard))
        .route("/api/v1/taxonomy", get(dashboard::handle_taxonomy))
        // Master resume
        .route(
            "/api/v1/resumes/master",
            get(master::handle_get_master).post(master::handle_save_master),
        )
        .route(
            "/api/v1/resumes/master/experiences",
            post(master::handle_add_experience),
        )
        .route(
            "/api/v1/resumes/master/experiences/:id",
            put(master::handle_update_experience)
                .delete(master::handle_remove_experience),
        )
        .route(
            "/api/v1/resumes/master/experiences/:id/tags",
            post(master::handle_add_tag).delete(master::handle_remove_tag),
        )
        // Job analysis
        .route("/api/v1/jobs/analyze", post(analysis::handle_analyze))
        .route(
            "/api/v1/jobs/analyses",
            get(analysis::handle_list_analyses).post(analysis::handle_save_analysis),
        )
        .route(
            "/api/v1/jobs/analyses/:id",
            delete(analysis::handle_delete_analysis),
        )
        .route(
            "/api/v1/jobs/analyses/:id/use",
            post(analysis::handle_use_analysis),
        )
        .route(
            "/api/v1/jobs/current",
            get(analysis::handle_get_current)
                .put(analysis::handle_set_current)
                .delete(analysis::handle_clear_current),
        )
        // Resume versions
        .route("/api/v1/versions/draft", post(versions::handle_open_draft))
        .route("/api/v1/versions/generate", post(versions::handle_generate))
        .route(
            "/api/v1/versions",
            get(versions::handle_list_versions).post(versions::handle_create_version),
        )
        .route(
            "/api/v1/versions/:id",
            get(versions::handle_get_version).delete(versions::handle_delete_version),
        )
        .route(
            "/api/v1/versions/:id/duplicate",
            post(versions::handle_duplicate_version),
        )
        // Cover letters
        .route(
            "/api/v1/letters",
            get(letters::handle_list_letters).post(letters::handle_create_letter),
        )
        .route(
            "/api/v1/letters/:id",
            get(letters::handle_get_letter)
                .put(letters::handle_update_letter)
                .delete(letters::handle_delete_letter),
        )
        .with_state(state)
}
