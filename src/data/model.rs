use std::path::PathBuf;

// ---------------------------------------------------------------------------
// AnimalCall – one row of the source table
// ---------------------------------------------------------------------------

/// A single record: which animal makes which sound, and what it is calling for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalCall {
    pub animal: String,
    pub sound: String,
    /// Purpose of the call, e.g. "Hunger" or "Alert".
    pub call_for: String,
}

impl AnimalCall {
    pub fn new(
        animal: impl Into<String>,
        sound: impl Into<String>,
        call_for: impl Into<String>,
    ) -> Self {
        Self {
            animal: animal.into(),
            sound: sound.into(),
            call_for: call_for.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// ColumnNames – header names the loader looks for
// ---------------------------------------------------------------------------

/// Header names identifying the three required columns of the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    pub animal: String,
    pub sound: String,
    pub call_for: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            animal: "Animal".to_string(),
            sound: "Sound".to_string(),
            call_for: "Call_For".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// CallTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The loaded records in file-row order. Built once at startup, never mutated.
#[derive(Debug, Clone, Default)]
pub struct CallTable {
    /// All records, in the order they appear in the source file.
    pub calls: Vec<AnimalCall>,
    /// File the records were read from (None when nothing could be loaded).
    pub source: Option<PathBuf>,
    /// Data rows dropped because a required column was missing.
    pub skipped_rows: usize,
}

impl CallTable {
    /// A table with no records and no source, used when every candidate fails.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_calls(calls: Vec<AnimalCall>) -> Self {
        Self {
            calls,
            source: None,
            skipped_rows: 0,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}
