use beonyeok_common::{AppConfig, Result};
use beonyeok_llm::Translator;
use beonyeok_store::{load_notepad, load_style_guide, Glossary};
use tokio::sync::RwLock;

/// Shared application state
///
/// All session state lives here explicitly and is passed into handlers; no
/// ambient globals. The locks serialize handlers within this process only;
/// concurrent instances writing the same files remain last-writer-wins.
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Translation pipeline
    pub translator: Translator,

    /// Shared term table
    pub glossary: RwLock<Glossary>,

    /// Shared style guide text
    pub style_guide: RwLock<String>,

    /// Shared notepad text (empty when the notepad is disabled)
    pub notepad: RwLock<String>,
}

impl AppState {
    /// Load all stores and build the state.
    ///
    /// A corrupt glossary or style-guide file aborts startup here rather
    /// than silently serving an empty table.
    pub fn load(config: AppConfig, translator: Translator) -> Result<Self> {
        let glossary = Glossary::load(&config.glossary_path, config.glossary_columns)?;
        let style_guide = load_style_guide(&config.style_guide_path)?;
        let notepad = if config.notepad_enabled {
            load_notepad(&config.notepad_path)?
        } else {
            String::new()
        };

        Ok(Self {
            config,
            translator,
            glossary: RwLock::new(glossary),
            style_guide: RwLock::new(style_guide),
            notepad: RwLock::new(notepad),
        })
    }
}
