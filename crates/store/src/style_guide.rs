use beonyeok_common::{BeonyeokError, Result};
use std::path::Path;
use tracing::info;

/// Seed text for a fresh deployment: formal, concise, respectful register.
pub const DEFAULT_STYLE_GUIDE: &str =
    "격식 있고 간결하며 정중한 어조로 번역합니다. 직역보다 자연스러운 한국어 표현을 우선합니다.";

/// Load the style guide, seeding the default text on first use.
///
/// The default is persisted immediately so a second load returns the exact
/// same string without mutating anything.
pub fn load_style_guide(path: &Path) -> Result<String> {
    if !path.exists() {
        info!("Style guide not found, seeding default: {}", path.display());
        save_style_guide(path, DEFAULT_STYLE_GUIDE)?;
        return Ok(DEFAULT_STYLE_GUIDE.to_string());
    }

    std::fs::read_to_string(path).map_err(|e| {
        BeonyeokError::file_parse(format!(
            "Style guide file {} is not readable as UTF-8 text: {}",
            path.display(),
            e
        ))
    })
}

/// Overwrite the persisted style guide unconditionally.
pub fn save_style_guide(path: &Path, text: &str) -> Result<()> {
    write_text_file(path, text)
}

pub(crate) fn write_text_file(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                BeonyeokError::file_system(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    std::fs::write(path, text).map_err(BeonyeokError::Io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_seeds_and_persists_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("style_guide.txt");

        let first = load_style_guide(&path).unwrap();
        assert_eq!(first, DEFAULT_STYLE_GUIDE);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_STYLE_GUIDE);

        // Stable across a second load, no further mutation
        let second = load_style_guide(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("style_guide.txt");

        save_style_guide(&path, "처음").unwrap();
        save_style_guide(&path, "Use formal tone.").unwrap();
        assert_eq!(load_style_guide(&path).unwrap(), "Use formal tone.");
    }

    #[test]
    fn test_load_rejects_invalid_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("style_guide.txt");
        std::fs::write(&path, [0xff, 0xfe, 0x41]).unwrap();

        let err = load_style_guide(&path).unwrap_err();
        assert!(matches!(err, BeonyeokError::FileParse(_)));
    }
}
