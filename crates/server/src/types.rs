use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use beonyeok_common::BeonyeokError;
use beonyeok_store::{GlossaryEntry, MergeOutcome};
use serde::{Deserialize, Serialize};
use tracing::error;

/// Labels the form uses for the glossary table header
#[derive(Debug, Serialize)]
pub struct ColumnLabels {
    /// Source-language column header
    pub source: &'static str,

    /// Target-language column header
    pub target: &'static str,
}

/// GET /api/session response: everything the form needs to render
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    /// Current glossary rows
    pub glossary: Vec<GlossaryEntry>,

    /// Current style guide text
    pub style_guide: String,

    /// Current notepad text, when the notepad is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notepad: Option<String>,

    /// Glossary table header labels
    pub columns: ColumnLabels,
}

/// POST /api/style-guide and /api/notepad request
#[derive(Debug, Deserialize)]
pub struct SaveTextRequest {
    /// Full replacement text
    pub text: String,
}

/// POST /api/glossary request: full table replacement from the editor
#[derive(Debug, Deserialize)]
pub struct SaveGlossaryRequest {
    /// Edited rows
    pub entries: Vec<GlossaryEntry>,
}

/// POST /api/glossary response
#[derive(Debug, Serialize)]
pub struct SaveGlossaryResponse {
    /// Rows kept after dropping half-filled ones
    pub kept: usize,
}

/// POST /api/glossary/import response
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    /// Rows appended
    pub added: usize,

    /// Rows skipped as duplicates
    pub skipped: usize,
}

impl From<MergeOutcome> for ImportResponse {
    fn from(outcome: MergeOutcome) -> Self {
        Self {
            added: outcome.added,
            skipped: outcome.skipped,
        }
    }
}

/// POST /api/translate request
#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    /// English source text
    pub text: String,
}

/// POST /api/translate response
#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    /// Korean translation (empty for blank input)
    pub translation: String,
}

/// JSON error body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short user-facing message
    pub error: String,

    /// Underlying detail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Convert an error into its JSON response, logging it once on the way out.
pub fn error_response(err: &BeonyeokError) -> HttpResponse {
    error!("Request failed: {}", err);

    let status = StatusCode::from_u16(err.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let message = match err {
        BeonyeokError::Translation(_) => "번역 중 오류가 발생했습니다",
        BeonyeokError::Network(_) => "번역 서비스에 연결할 수 없습니다",
        BeonyeokError::ImportValidation(_) => "업로드한 CSV 파일을 확인해주세요",
        BeonyeokError::InvalidInput(_) | BeonyeokError::Json(_) => "요청 내용을 확인해주세요",
        _ => "서버 내부 오류가 발생했습니다",
    };

    HttpResponse::build(status).json(ErrorResponse {
        error: message.to_string(),
        details: Some(err.to_string()),
    })
}
