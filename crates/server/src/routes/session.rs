use actix_web::{get, web, HttpResponse};
use std::sync::Arc;

use crate::state::AppState;
use crate::types::{ColumnLabels, SessionResponse};

/// GET /session - Current glossary, style guide and notepad for the form
#[get("/session")]
pub async fn get_session(state: web::Data<Arc<AppState>>) -> HttpResponse {
    let glossary = state.glossary.read().await;
    let style_guide = state.style_guide.read().await;

    let notepad = if state.config.notepad_enabled {
        Some(state.notepad.read().await.clone())
    } else {
        None
    };

    HttpResponse::Ok().json(SessionResponse {
        glossary: glossary.entries().to_vec(),
        style_guide: style_guide.clone(),
        notepad,
        columns: ColumnLabels {
            source: state.config.glossary_columns.source_header(),
            target: state.config.glossary_columns.target_header(),
        },
    })
}
