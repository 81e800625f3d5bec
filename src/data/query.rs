use std::collections::BTreeSet;

use serde::Serialize;

use super::model::CallTable;

/// Answer given when the table holds no records at all.
pub const NO_DATA: &str = "No data available";

/// Answer given when no record matches the requested pair.
pub const NO_MATCH: &str = "No information found for this combination";

// ---------------------------------------------------------------------------
// Distinct listings
// ---------------------------------------------------------------------------

/// Distinct animal names, sorted ascending.
pub fn animals(table: &CallTable) -> Vec<String> {
    table
        .calls
        .iter()
        .map(|c| c.animal.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Distinct sounds made by `animal` (exact, case-sensitive), sorted ascending.
/// An unknown animal yields an empty list.
pub fn sounds_for(table: &CallTable, animal: &str) -> Vec<String> {
    table
        .calls
        .iter()
        .filter(|c| c.animal == animal)
        .map(|c| c.sound.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Reason lookup
// ---------------------------------------------------------------------------

/// Outcome of resolving what an (animal, sound) pair is calling for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallLookup<'a> {
    Found(&'a str),
    /// The table is empty.
    NoData,
    /// The table has records, but none for this pair.
    NoMatch,
}

impl<'a> CallLookup<'a> {
    /// The reason, or the sentinel text standing in for it.
    pub fn message(&self) -> &'a str {
        match *self {
            CallLookup::Found(reason) => reason,
            CallLookup::NoData => NO_DATA,
            CallLookup::NoMatch => NO_MATCH,
        }
    }
}

/// Resolve the reason for an (animal, sound) pair.
///
/// When the source file holds the same pair more than once, the row that
/// appears first in the file wins.
pub fn call_for<'a>(table: &'a CallTable, animal: &str, sound: &str) -> CallLookup<'a> {
    if table.is_empty() {
        return CallLookup::NoData;
    }
    table
        .calls
        .iter()
        .find(|c| c.animal == animal && c.sound == sound)
        .map_or(CallLookup::NoMatch, |c| CallLookup::Found(c.call_for.as_str()))
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub data_loaded: bool,
    pub total_records: usize,
}

pub fn health(table: &CallTable) -> HealthReport {
    HealthReport {
        status: "healthy",
        data_loaded: !table.is_empty(),
        total_records: table.len(),
    }
}
