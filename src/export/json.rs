//! JSON export
//!
//! Wraps a calculator result in a versioned envelope and writes it as JSON.
//! Amounts are integer cents.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::FinplanResult;
use crate::models::Classification;
use crate::services::{BudgetReport, GoalBudgetReport, SavingsPlan};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Which calculator produced an export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportKind {
    SavingsPlan,
    Budget,
    GoalBudget,
}

/// Versioned export envelope around a single result
#[derive(Debug, Clone, Serialize)]
pub struct ResultExport<'a, T: Serialize> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    pub kind: ExportKind,

    /// Overall tone of the result
    pub classification: Classification,

    pub result: &'a T,
}

impl<'a, T: Serialize> ResultExport<'a, T> {
    fn new(kind: ExportKind, classification: Classification, result: &'a T) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            kind,
            classification,
            result,
        }
    }
}

impl<'a> ResultExport<'a, SavingsPlan> {
    pub fn savings(plan: &'a SavingsPlan) -> Self {
        Self::new(ExportKind::SavingsPlan, plan.classification(), plan)
    }
}

impl<'a> ResultExport<'a, BudgetReport> {
    pub fn budget(report: &'a BudgetReport) -> Self {
        Self::new(ExportKind::Budget, report.classification(), report)
    }
}

impl<'a> ResultExport<'a, GoalBudgetReport> {
    pub fn goal(report: &'a GoalBudgetReport) -> Self {
        Self::new(ExportKind::GoalBudget, report.classification(), report)
    }
}

/// Write an export envelope as JSON
pub fn export_json<W: Write, T: Serialize>(
    export: &ResultExport<'_, T>,
    writer: &mut W,
    pretty: bool,
) -> FinplanResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, export)?;
    } else {
        serde_json::to_writer(&mut *writer, export)?;
    }
    writeln!(writer)?;
    Ok(())
}
