use crate::style_guide::write_text_file;
use beonyeok_common::{BeonyeokError, Result};
use std::path::Path;

/// Load the shared notepad. An absent file reads as empty and is not created
/// until something is saved.
pub fn load_notepad(path: &Path) -> Result<String> {
    if !path.exists() {
        return Ok(String::new());
    }

    std::fs::read_to_string(path).map_err(|e| {
        BeonyeokError::file_parse(format!(
            "Notepad file {} is not readable as UTF-8 text: {}",
            path.display(),
            e
        ))
    })
}

/// Overwrite the persisted notepad unconditionally.
pub fn save_notepad(path: &Path, text: &str) -> Result<()> {
    write_text_file(path, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_absent_notepad_reads_empty_without_creating() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notepad.txt");

        assert_eq!(load_notepad(&path).unwrap(), "");
        assert!(!path.exists());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notepad.txt");

        save_notepad(&path, "공유 메모").unwrap();
        assert_eq!(load_notepad(&path).unwrap(), "공유 메모");
    }
}
