use actix_web::{post, web, HttpResponse};
use std::sync::Arc;

use crate::state::AppState;
use crate::types::{error_response, TranslateRequest, TranslateResponse};

/// POST /translate - Run one translation against a snapshot of the stores
///
/// A failure leaves all state untouched; the user retries manually.
#[post("/translate")]
pub async fn translate(
    body: web::Json<TranslateRequest>,
    state: web::Data<Arc<AppState>>,
) -> HttpResponse {
    // Snapshot so the external call runs without holding any lock
    let glossary = state.glossary.read().await.clone();
    let style_guide = state.style_guide.read().await.clone();

    match state
        .translator
        .translate(&body.text, &glossary, &style_guide)
        .await
    {
        Ok(translation) => HttpResponse::Ok().json(TranslateResponse { translation }),
        Err(e) => error_response(&e),
    }
}
