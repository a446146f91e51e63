use actix_web::{post, web, HttpResponse};
use std::sync::Arc;
use tracing::info;

use crate::state::AppState;
use crate::types::{error_response, SaveTextRequest};

/// POST /style-guide - Persist the edited style guide
#[post("/style-guide")]
pub async fn save_style_guide(
    body: web::Json<SaveTextRequest>,
    state: web::Data<Arc<AppState>>,
) -> HttpResponse {
    if let Err(e) = beonyeok_store::save_style_guide(&state.config.style_guide_path, &body.text) {
        return error_response(&e);
    }

    *state.style_guide.write().await = body.text.clone();
    info!("Style guide saved ({} chars)", body.text.len());
    HttpResponse::Ok().json(serde_json::json!({ "saved": true }))
}
