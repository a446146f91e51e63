use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse};
use beonyeok_common::BeonyeokError;
use beonyeok_store::{parse_import, Glossary};
use futures_util::StreamExt;
use std::sync::Arc;
use tracing::info;

use crate::state::AppState;
use crate::types::{error_response, ImportResponse, SaveGlossaryRequest, SaveGlossaryResponse};

/// POST /glossary - Replace the table with the edited rows
///
/// Persist first, commit to memory second: a failed write must not leave the
/// in-memory table ahead of the file.
#[post("/glossary")]
pub async fn save_glossary(
    body: web::Json<SaveGlossaryRequest>,
    state: web::Data<Arc<AppState>>,
) -> HttpResponse {
    let mut glossary = state.glossary.write().await;

    let mut updated = Glossary::new();
    let kept = updated.replace_entries(body.into_inner().entries);

    if let Err(e) = updated.save(&state.config.glossary_path, state.config.glossary_columns) {
        return error_response(&e);
    }
    *glossary = updated;

    info!("Glossary saved ({} rows)", kept);
    HttpResponse::Ok().json(SaveGlossaryResponse { kept })
}

/// POST /glossary/import - Bulk import an uploaded CSV
///
/// Validation failures abort before anything is merged; a merge that did run
/// is persisted atomically with respect to this handler's write lock.
#[post("/glossary/import")]
pub async fn import_glossary(
    payload: Multipart,
    state: web::Data<Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let bytes = match read_file_field(payload).await? {
        Some(bytes) => bytes,
        None => {
            return Ok(error_response(&BeonyeokError::import_validation(
                "No file was uploaded",
            )))
        }
    };

    let rows = match parse_import(&bytes, state.config.glossary_columns) {
        Ok(rows) => rows,
        Err(e) => return Ok(error_response(&e)),
    };

    let mut glossary = state.glossary.write().await;

    let mut updated = glossary.clone();
    let outcome = updated.merge(rows);

    if outcome.added > 0 {
        if let Err(e) = updated.save(&state.config.glossary_path, state.config.glossary_columns) {
            return Ok(error_response(&e));
        }
        *glossary = updated;
    }

    Ok(HttpResponse::Ok().json(ImportResponse::from(outcome)))
}

/// Collect the bytes of the multipart field named "file"
async fn read_file_field(mut payload: Multipart) -> actix_web::Result<Option<Vec<u8>>> {
    while let Some(field) = payload.next().await {
        let mut field = field?;

        if field.content_disposition().get_name() == Some("file") {
            let mut bytes = Vec::new();
            while let Some(chunk) = field.next().await {
                bytes.extend_from_slice(&chunk?);
            }
            return Ok(Some(bytes));
        }
    }

    Ok(None)
}
