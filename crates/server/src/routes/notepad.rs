use actix_web::{get, post, web, HttpResponse};
use std::sync::Arc;

use crate::state::AppState;
use crate::types::{error_response, ErrorResponse, SaveTextRequest};

fn notepad_disabled() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "메모장 기능이 비활성화되어 있습니다".to_string(),
        details: None,
    })
}

/// GET /notepad - Shared notepad contents
#[get("/notepad")]
pub async fn get_notepad(state: web::Data<Arc<AppState>>) -> HttpResponse {
    if !state.config.notepad_enabled {
        return notepad_disabled();
    }

    let notepad = state.notepad.read().await;
    HttpResponse::Ok().json(serde_json::json!({ "text": *notepad }))
}

/// POST /notepad - Persist the shared notepad
#[post("/notepad")]
pub async fn save_notepad(
    body: web::Json<SaveTextRequest>,
    state: web::Data<Arc<AppState>>,
) -> HttpResponse {
    if !state.config.notepad_enabled {
        return notepad_disabled();
    }

    if let Err(e) = beonyeok_store::save_notepad(&state.config.notepad_path, &body.text) {
        return error_response(&e);
    }

    *state.notepad.write().await = body.text.clone();
    HttpResponse::Ok().json(serde_json::json!({ "saved": true }))
}
