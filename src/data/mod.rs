/// Data layer: core types, loading, and queries.
///
/// Architecture:
/// ```text
///  animal_sounds.csv (first candidate that loads)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse header + rows → CallTable
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ CallTable │  Vec<AnimalCall>, file-row order, immutable
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  query    │  distinct animals / sounds, reason lookup, health
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod query;
