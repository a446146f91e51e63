//! Beonyeok HTTP Server
//!
//! Actix-web 기반 번역 폼 API + 정적 페이지 서빙

pub mod routes;
mod state;
mod types;

pub use state::AppState;
pub use types::{ErrorResponse, ImportResponse, SessionResponse, TranslateResponse};

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{web, App, HttpServer};
use beonyeok_common::{AppConfig, Result};
use beonyeok_llm::{OpenAiClient, Translator};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

/// Build the /api scope with every handler registered
fn api_scope() -> actix_web::Scope {
    web::scope("/api")
        .service(routes::session::get_session)
        .service(routes::style_guide::save_style_guide)
        .service(routes::glossary::save_glossary)
        .service(routes::glossary::import_glossary)
        .service(routes::translate::translate)
        .service(routes::notepad::get_notepad)
        .service(routes::notepad::save_notepad)
}

/// Start the HTTP server and block until shutdown.
pub async fn start_server(config: AppConfig) -> Result<()> {
    let client = OpenAiClient::new(
        &config.openai_base_url,
        &config.openai_api_key,
        &config.model,
        config.temperature,
    )?;
    let translator = Translator::new(Arc::new(client));
    let state = Arc::new(AppState::load(config.clone(), translator)?);

    let static_dir = std::env::var("STATIC_DIR")
        .unwrap_or_else(|_| concat!(env!("CARGO_MANIFEST_DIR"), "/static").to_string());
    let bind_address = config.server_bind_address();
    info!("Starting server on {} (static: {})", bind_address, static_dir);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(state.clone()))
            .service(api_scope())
            .service(Files::new("/", &static_dir).index_file("index.html"))
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}
