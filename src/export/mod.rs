//! Export module for finplan
//!
//! Calculator results in machine-readable formats:
//! - JSON: versioned result envelope
//! - YAML: the same envelope, human-readable
//! - CSV: budget line items and section totals

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_budget_csv;
pub use json::{export_json, ExportKind, ResultExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;
