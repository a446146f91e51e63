//! Beonyeok persistence layer
//!
//! 공유 단어장(CSV), 번역 문체(텍스트), 메모장(텍스트) 파일 저장소

mod glossary;
mod notepad;
mod style_guide;

pub use glossary::{parse_import, Glossary, GlossaryEntry, MergeOutcome};
pub use notepad::{load_notepad, save_notepad};
pub use style_guide::{load_style_guide, save_style_guide, DEFAULT_STYLE_GUIDE};
