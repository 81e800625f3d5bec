use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{AnimalCall, CallTable, ColumnNames};

/// File probed when no explicit data path is configured.
pub const DEFAULT_FILE_NAME: &str = "animal_sounds.csv";

/// Number of characters of a freshly loaded file echoed at debug level.
const PREVIEW_CHARS: usize = 200;

// ---------------------------------------------------------------------------
// Errors / options
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("header has no '{0}' column")]
    MissingColumn(String),
}

impl LoadError {
    /// True when the candidate file simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// How a candidate file is parsed.
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    pub columns: ColumnNames,
    pub delimiter: u8,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            columns: ColumnNames::default(),
            delimiter: b',',
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Probe `candidates` in order and return the first table that loads.
///
/// Never fails: when every candidate is missing or unreadable the service
/// still starts, with an empty table.
pub fn load_first(candidates: &[PathBuf], options: &LoaderOptions) -> CallTable {
    for path in candidates {
        match load_csv(path, options) {
            Ok(table) => {
                log::info!(
                    "Loaded {} records from {} ({} rows skipped)",
                    table.len(),
                    path.display(),
                    table.skipped_rows
                );
                return table;
            }
            Err(e) if e.is_not_found() => {
                log::warn!("CSV file not found at {}", path.display());
            }
            Err(e) => {
                log::warn!("Error loading data from {}: {e}", path.display());
            }
        }
    }

    log::error!(
        "No usable CSV file among {} candidate(s); serving an empty dataset",
        candidates.len()
    );
    CallTable::empty()
}

/// Candidate paths in probe order: the configured path first, then
/// [`DEFAULT_FILE_NAME`] relative to the working directory, beside the
/// running executable, and under the absolute working directory.
pub fn default_candidates(configured: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = configured.map(Path::to_path_buf).into_iter().collect();

    candidates.push(PathBuf::from(DEFAULT_FILE_NAME));
    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.push(dir.join(DEFAULT_FILE_NAME));
    }
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join(DEFAULT_FILE_NAME));
    }

    let mut seen = HashSet::new();
    candidates.retain(|p| seen.insert(p.clone()));
    candidates
}

/// Load a single CSV file into a [`CallTable`].
pub fn load_csv(path: &Path, options: &LoaderOptions) -> Result<CallTable, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let preview: String = text.chars().take(PREVIEW_CHARS).collect();
    log::debug!("CSV file found at {}: {preview:?}", path.display());

    let mut table = parse_calls(text.as_bytes(), options)?;
    table.source = Some(path.to_path_buf());
    Ok(table)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// CSV layout: header row naming (at least) the three configured columns, in
/// any order. Extra columns are ignored. A data row too short to reach one of
/// the required columns is skipped; every field is whitespace-trimmed.
pub fn parse_calls<R: Read>(input: R, options: &LoaderOptions) -> Result<CallTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
    };
    let animal_idx = column(options.columns.animal.as_str())?;
    let sound_idx = column(options.columns.sound.as_str())?;
    let call_for_idx = column(options.columns.call_for.as_str())?;

    let mut calls = Vec::new();
    let mut skipped_rows = 0;

    for (i, result) in reader.records().enumerate() {
        let row_no = i + 1;
        let record = result?;

        match (
            record.get(animal_idx),
            record.get(sound_idx),
            record.get(call_for_idx),
        ) {
            (Some(animal), Some(sound), Some(call_for)) => {
                calls.push(AnimalCall::new(animal, sound, call_for));
            }
            _ => {
                log::warn!(
                    "Row {row_no} missing required columns: {} of {} fields present",
                    record.len(),
                    headers.len()
                );
                skipped_rows += 1;
            }
        }
    }

    let mut table = CallTable::from_calls(calls);
    table.skipped_rows = skipped_rows;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_parse_trims_fields() {
        let csv = "Animal,Sound,Call_For\n  Cow , Moo ,  Hunger \nDog,Bark,Alert\n";
        let table = parse_calls(csv.as_bytes(), &LoaderOptions::default()).unwrap();

        assert_eq!(
            table.calls,
            vec![
                AnimalCall::new("Cow", "Moo", "Hunger"),
                AnimalCall::new("Dog", "Bark", "Alert"),
            ]
        );
        for call in &table.calls {
            assert_eq!(call.animal.trim(), call.animal);
            assert_eq!(call.sound.trim(), call.sound);
            assert_eq!(call.call_for.trim(), call.call_for);
        }
    }

    #[test]
    fn test_short_row_is_skipped() {
        let csv = "Animal,Sound,Call_For\nCow,Moo,Hunger\nCat,Meow\nDog,Bark,Hunger\n";
        let table = parse_calls(csv.as_bytes(), &LoaderOptions::default()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.skipped_rows, 1);
        assert!(table.calls.iter().all(|c| c.animal != "Cat"));
    }

    #[test]
    fn test_empty_fields_are_kept() {
        let csv = "Animal,Sound,Call_For\nOwl,Hoot,\n";
        let table = parse_calls(csv.as_bytes(), &LoaderOptions::default()).unwrap();

        assert_eq!(table.calls, vec![AnimalCall::new("Owl", "Hoot", "")]);
        assert_eq!(table.skipped_rows, 0);
    }

    #[test]
    fn test_columns_found_by_name_and_extras_ignored() {
        let csv = "Id,Call_For,Animal,Notes,Sound\n1,Warning,Goose,loud,Honk\n";
        let table = parse_calls(csv.as_bytes(), &LoaderOptions::default()).unwrap();

        assert_eq!(table.calls, vec![AnimalCall::new("Goose", "Honk", "Warning")]);
    }

    #[test]
    fn test_missing_header_column_fails() {
        let csv = "Animal,Sound\nCow,Moo\n";
        let err = parse_calls(csv.as_bytes(), &LoaderOptions::default()).unwrap_err();

        assert!(matches!(err, LoadError::MissingColumn(ref c) if c == "Call_For"));
    }

    #[test]
    fn test_custom_columns_and_delimiter() {
        let options = LoaderOptions {
            columns: ColumnNames {
                animal: "subject".to_string(),
                sound: "predicate".to_string(),
                call_for: "reason".to_string(),
            },
            delimiter: b';',
        };
        let csv = "subject;predicate;reason\nWolf;Howl;Gathering\n";
        let table = parse_calls(csv.as_bytes(), &options).unwrap();

        assert_eq!(table.calls, vec![AnimalCall::new("Wolf", "Howl", "Gathering")]);
    }

    #[test]
    fn test_load_csv_records_source() {
        let temp = TempDir::new().unwrap();
        let path = write_csv(
            temp.path(),
            "animal_sounds.csv",
            "Animal,Sound,Call_For\nCow,Moo,Hunger\n",
        );

        let table = load_csv(&path, &LoaderOptions::default()).unwrap();
        assert_eq!(table.source.as_deref(), Some(path.as_path()));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_load_csv_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = load_csv(&temp.path().join("nope.csv"), &LoaderOptions::default()).unwrap_err();

        assert!(err.is_not_found());
    }

    #[test]
    fn test_load_first_skips_bad_candidates() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.csv");
        let broken = write_csv(temp.path(), "broken.csv", "Animal,Noise\nCow,Moo\n");
        let good = write_csv(
            temp.path(),
            "good.csv",
            "Animal,Sound,Call_For\nDog,Bark,Alert\n",
        );

        let table = load_first(&[missing, broken, good.clone()], &LoaderOptions::default());

        assert_eq!(table.source, Some(good));
        assert_eq!(table.calls, vec![AnimalCall::new("Dog", "Bark", "Alert")]);
    }

    #[test]
    fn test_load_first_stops_at_first_success() {
        let temp = TempDir::new().unwrap();
        let first = write_csv(temp.path(), "a.csv", "Animal,Sound,Call_For\nCow,Moo,Hunger\n");
        let second = write_csv(temp.path(), "b.csv", "Animal,Sound,Call_For\nDog,Bark,Alert\n");

        let table = load_first(&[first.clone(), second], &LoaderOptions::default());
        assert_eq!(table.source, Some(first));
    }

    #[test]
    fn test_load_first_exhausted_is_empty() {
        let temp = TempDir::new().unwrap();
        let table = load_first(
            &[temp.path().join("a.csv"), temp.path().join("b.csv")],
            &LoaderOptions::default(),
        );

        assert!(table.is_empty());
        assert!(table.source.is_none());
    }

    #[test]
    fn test_bundled_sample_skips_its_short_row() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_FILE_NAME);
        let table = load_csv(&path, &LoaderOptions::default()).unwrap();

        assert_eq!(table.len(), 14);
        assert_eq!(table.skipped_rows, 1);
        assert!(table.calls.iter().all(|c| c.animal != "Frog"));
    }

    #[test]
    fn test_default_candidates_configured_first_without_duplicates() {
        let configured = PathBuf::from(DEFAULT_FILE_NAME);
        let candidates = default_candidates(Some(configured.as_path()));

        assert_eq!(candidates[0], configured);
        let unique: HashSet<_> = candidates.iter().collect();
        assert_eq!(unique.len(), candidates.len());
        assert!(candidates.iter().all(|p| p.ends_with(DEFAULT_FILE_NAME)));
    }
}
