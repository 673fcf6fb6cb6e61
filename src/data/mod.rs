/// Data layer: core types, loading, inspection and coordinate validation.
///
/// Architecture:
/// ```text
///  points.csv / .tsv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  column names, Vec<Vec<CellValue>>
///   └──────────┘
///        │
///        ├──────────────┐
///        ▼              ▼
///   ┌──────────┐   ┌──────────┐
///   │ inspect   │   │ validate  │  lon/lat ranges → valid indices, bbox
///   └──────────┘   └──────────┘
/// ```

pub mod inspect;
pub mod loader;
pub mod model;
pub mod validate;
