use anyhow::Result;
use beonyeok_common::{logger, AppConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
        }
    } else {
        // Fallback to default dotenv behavior
        dotenv::dotenv().ok();
    }
}

#[derive(Parser)]
#[command(name = "beonyeok")]
#[command(about = "Beonyeok - shared glossary and style guide translation form", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value = "8600")]
        port: u16,

        /// Data directory (glossary, style guide, notepad)
        #[arg(long)]
        data_dir: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env at project root
    // Note: AppConfig::from_env() also loads .env, but we do it here early
    // to ensure any CLI argument overrides work correctly
    load_dotenv_from_project_root();

    if let Some(Commands::Serve { host, port, data_dir }) = cli.command {
        // Override with CLI arguments
        std::env::set_var("SERVER_HOST", &host);
        std::env::set_var("SERVER_PORT", port.to_string());
        if let Some(dir) = &data_dir {
            std::env::set_var("DATA_DIR", dir);
        }
    }

    let config = AppConfig::from_env()?;

    // Missing API key (or any other bad configuration) is fatal: refuse to
    // serve a form whose translate action cannot ever succeed.
    if let Err(e) = config.validate() {
        eprintln!("🚨 {}", e);
        std::process::exit(1);
    }

    logger::setup_logging(&config.log_dir, &config.log_level)?;

    tracing::info!("Beonyeok starting...");
    tracing::info!("  Glossary: {}", config.glossary_path.display());
    tracing::info!("  Style guide: {}", config.style_guide_path.display());
    tracing::info!("  Notepad enabled: {}", config.notepad_enabled);
    tracing::info!("  Model: {}", config.model);

    println!("Server listening on http://{}", config.server_bind_address());

    beonyeok_server::start_server(config).await?;

    Ok(())
}
