use beonyeok_common::{BeonyeokError, ColumnScheme, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// One glossary row: a source-language term and its fixed translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryEntry {
    /// Source-language term
    pub source: String,

    /// Target-language term
    pub target: String,
}

impl GlossaryEntry {
    /// Create new entry
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// An entry is usable only when both fields carry text.
    pub fn is_valid(&self) -> bool {
        !self.source.trim().is_empty() && !self.target.trim().is_empty()
    }

    /// Dedup key: source term, case-folded
    pub fn key(&self) -> String {
        self.source.trim().to_lowercase()
    }
}

/// Result of a bulk import merge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MergeOutcome {
    /// Rows appended to the glossary
    pub added: usize,

    /// Rows skipped as case-insensitive duplicates
    pub skipped: usize,
}

/// The shared term table.
///
/// Entry order is insertion order and only matters for display. The working
/// invariant is that no two entries share a case-folded source term; `merge`
/// preserves it and `load` drops rows that cannot participate.
#[derive(Debug, Clone, Default)]
pub struct Glossary {
    entries: Vec<GlossaryEntry>,
}

impl Glossary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<GlossaryEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[GlossaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load the glossary from disk, initializing an empty table if the file
    /// does not exist yet.
    ///
    /// A file that is present but unreadable as CSV is a hard error; starting
    /// with a silently empty table would drop the team's shared terms from
    /// every later translation.
    pub fn load(path: &Path, scheme: ColumnScheme) -> Result<Self> {
        if !path.exists() {
            info!("Glossary file not found, creating empty table: {}", path.display());
            let glossary = Self::new();
            glossary.save(path, scheme)?;
            return Ok(glossary);
        }

        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader.headers()?.clone();

        let source_idx = headers
            .iter()
            .position(|h| h == scheme.source_header())
            .ok_or_else(|| {
                BeonyeokError::file_parse(format!(
                    "Glossary file {} is missing the '{}' column",
                    path.display(),
                    scheme.source_header()
                ))
            })?;
        let target_idx = headers
            .iter()
            .position(|h| h == scheme.target_header())
            .ok_or_else(|| {
                BeonyeokError::file_parse(format!(
                    "Glossary file {} is missing the '{}' column",
                    path.display(),
                    scheme.target_header()
                ))
            })?;

        let mut entries = Vec::new();
        for record in reader.records() {
            let record = record?;
            let entry = GlossaryEntry::new(
                record.get(source_idx).unwrap_or("").trim(),
                record.get(target_idx).unwrap_or("").trim(),
            );
            // Half-filled rows never reach prompts or persistence
            if entry.is_valid() {
                entries.push(entry);
            }
        }

        debug!("Loaded {} glossary entries from {}", entries.len(), path.display());
        Ok(Self { entries })
    }

    /// Overwrite the persisted table unconditionally.
    pub fn save(&self, path: &Path, scheme: ColumnScheme) -> Result<()> {
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

        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record([scheme.source_header(), scheme.target_header()])?;
        for entry in &self.entries {
            writer.write_record([entry.source.as_str(), entry.target.as_str()])?;
        }
        writer.flush().map_err(BeonyeokError::Io)?;

        debug!("Saved {} glossary entries to {}", self.entries.len(), path.display());
        Ok(())
    }

    /// Replace the whole table with edited rows.
    ///
    /// Half-filled rows and case-fold duplicates (first occurrence wins) are
    /// dropped, keeping the table well-formed even through manual edits.
    /// Returns how many rows were kept.
    pub fn replace_entries(&mut self, entries: Vec<GlossaryEntry>) -> usize {
        let mut seen = HashSet::new();
        self.entries = entries
            .into_iter()
            .filter(|e| e.is_valid() && seen.insert(e.key()))
            .collect();
        self.entries.len()
    }

    /// Bulk import: append rows whose source term is new to the table.
    ///
    /// Comparison is case-insensitive, against the current table and against
    /// rows appended earlier in this same merge, so an upload repeating a
    /// term cannot introduce a case-fold duplicate. Invalid rows are
    /// discarded before comparison and counted in neither total. The first
    /// stored casing of a term wins.
    pub fn merge(&mut self, incoming: Vec<GlossaryEntry>) -> MergeOutcome {
        let mut seen: HashSet<String> = self.entries.iter().map(GlossaryEntry::key).collect();

        let mut added = 0;
        let mut skipped = 0;
        for entry in incoming.into_iter().filter(GlossaryEntry::is_valid) {
            if seen.insert(entry.key()) {
                self.entries.push(entry);
                added += 1;
            } else {
                skipped += 1;
            }
        }

        info!("Glossary merge: {} added, {} skipped as duplicates", added, skipped);
        MergeOutcome { added, skipped }
    }
}

/// Parse an uploaded bulk-import CSV.
///
/// The file must carry both configured column headers; anything else aborts
/// the import before any merge happens.
pub fn parse_import(bytes: &[u8], scheme: ColumnScheme) -> Result<Vec<GlossaryEntry>> {
    let mut reader = csv::Reader::from_reader(bytes);
    let headers = reader
        .headers()
        .map_err(|e| {
            BeonyeokError::import_validation(format!("Uploaded file is not readable as CSV: {}", e))
        })?
        .clone();

    let source_idx = headers.iter().position(|h| h.trim() == scheme.source_header());
    let target_idx = headers.iter().position(|h| h.trim() == scheme.target_header());
    let (source_idx, target_idx) = match (source_idx, target_idx) {
        (Some(s), Some(t)) => (s, t),
        _ => {
            return Err(BeonyeokError::import_validation(format!(
                "CSV file must contain both '{}' and '{}' columns",
                scheme.source_header(),
                scheme.target_header()
            )))
        }
    };

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| {
            BeonyeokError::import_validation(format!("Malformed CSV row: {}", e))
        })?;
        rows.push(GlossaryEntry::new(
            record.get(source_idx).unwrap_or("").trim(),
            record.get(target_idx).unwrap_or("").trim(),
        ));
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn entry(s: &str, t: &str) -> GlossaryEntry {
        GlossaryEntry::new(s, t)
    }

    #[test]
    fn test_merge_dedup_and_counts() {
        let mut glossary = Glossary::from_entries(vec![entry("hello", "안녕")]);
        let outcome = glossary.merge(vec![entry("Hello", "안녕하세요"), entry("world", "세계")]);

        assert_eq!(outcome, MergeOutcome { added: 1, skipped: 1 });
        assert_eq!(
            glossary.entries(),
            &[entry("hello", "안녕"), entry("world", "세계")]
        );
    }

    #[test]
    fn test_merge_is_idempotent() {
        let mut glossary = Glossary::from_entries(vec![entry("hello", "안녕")]);
        let incoming = vec![entry("Hello", "안녕하세요"), entry("world", "세계")];

        glossary.merge(incoming.clone());
        let second = glossary.merge(incoming);

        assert_eq!(second.added, 0);
        assert_eq!(second.skipped, 2);
        assert_eq!(glossary.len(), 2);
    }

    #[test]
    fn test_merge_dedups_within_one_upload() {
        let mut glossary = Glossary::new();
        let outcome = glossary.merge(vec![
            entry("Cat", "고양이"),
            entry("cat", "냥이"),
            entry("CAT", "캣"),
        ]);

        assert_eq!(outcome, MergeOutcome { added: 1, skipped: 2 });
        // First stored casing wins
        assert_eq!(glossary.entries(), &[entry("Cat", "고양이")]);
    }

    #[test]
    fn test_merge_discards_invalid_rows_uncounted() {
        let mut glossary = Glossary::new();
        let outcome = glossary.merge(vec![
            entry("cat", ""),
            entry("", "고양이"),
            entry("  ", "고양이"),
            entry("dog", "개"),
        ]);

        assert_eq!(outcome, MergeOutcome { added: 1, skipped: 0 });
        assert_eq!(glossary.len(), 1);
    }

    #[test]
    fn test_load_initializes_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("glossary.csv");

        let glossary = Glossary::load(&path, ColumnScheme::Korean).unwrap();
        assert!(glossary.is_empty());
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("영어,한글"));

        // Second load parses the file it just wrote
        let again = Glossary::load(&path, ColumnScheme::Korean).unwrap();
        assert!(again.is_empty());
    }

    #[test]
    fn test_save_load_round_trip_preserves_hangul() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("glossary.csv");

        let glossary = Glossary::from_entries(vec![
            entry("liberty", "자유"),
            entry("comma, inc.", "쉼표 주식회사"),
        ]);
        glossary.save(&path, ColumnScheme::Korean).unwrap();

        let loaded = Glossary::load(&path, ColumnScheme::Korean).unwrap();
        assert_eq!(loaded.entries(), glossary.entries());
    }

    #[test]
    fn test_load_drops_half_filled_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("glossary.csv");
        std::fs::write(&path, "영어,한글\ncat,고양이\ndog,\n,강아지\n").unwrap();

        let glossary = Glossary::load(&path, ColumnScheme::Korean).unwrap();
        assert_eq!(glossary.entries(), &[entry("cat", "고양이")]);
    }

    #[test]
    fn test_load_rejects_wrong_schema() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("glossary.csv");
        std::fs::write(&path, "from,to\ncat,고양이\n").unwrap();

        let err = Glossary::load(&path, ColumnScheme::Korean).unwrap_err();
        assert!(matches!(err, BeonyeokError::FileParse(_)));
    }

    #[test]
    fn test_parse_import_requires_headers() {
        let err = parse_import(b"English,Korean\ncat,\xEA\xB3\xA0\xEC\x96\x91\xEC\x9D\xB4\n", ColumnScheme::Korean)
            .unwrap_err();
        assert!(matches!(err, BeonyeokError::ImportValidation(_)));
    }

    #[test]
    fn test_parse_import_reads_configured_columns() {
        let csv = "한글,영어\n고양이,cat\n세계,world\n";
        let rows = parse_import(csv.as_bytes(), ColumnScheme::Korean).unwrap();
        assert_eq!(rows, vec![entry("cat", "고양이"), entry("world", "세계")]);
    }

    #[test]
    fn test_replace_entries_drops_invalid_and_duplicates() {
        let mut glossary = Glossary::new();
        let kept = glossary.replace_entries(vec![
            entry("cat", "고양이"),
            entry("", "x"),
            entry("CAT", "냥이"),
        ]);
        assert_eq!(kept, 1);
        assert_eq!(glossary.entries(), &[entry("cat", "고양이")]);
    }
}
