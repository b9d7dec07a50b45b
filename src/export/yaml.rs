//! YAML export
//!
//! Same envelope as the JSON export, preceded by a short comment header.

use serde::Serialize;
use std::io::Write;

use crate::error::FinplanResult;
use crate::export::json::ResultExport;

/// Write an export envelope as YAML
pub fn export_yaml<W: Write, T: Serialize>(
    export: &ResultExport<'_, T>,
    writer: &mut W,
) -> FinplanResult<()> {
    writeln!(writer, "# finplan export")?;
    writeln!(writer, "# Generated: {}", export.exported_at)?;
    writeln!(writer, "# App Version: {}", export.app_version)?;
    writeln!(writer, "# Amounts are in cents.")?;
    writeln!(writer)?;

    serde_yaml::to_writer(writer, export)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CurrencyFormat, GoalBudgetInput, LineItem, Money};
    use crate::services::GoalBudgetEvaluator;

    #[test]
    fn test_goal_yaml_export() {
        let fmt = CurrencyFormat::default();
        let report = GoalBudgetEvaluator::new(&fmt)
            .evaluate(&GoalBudgetInput {
                income: Money::from_units(5000),
                expenses: vec![LineItem::new("Rent", Money::from_units(2000))],
                savings_target: Money::from_units(1000),
            })
            .unwrap();

        let mut out = Vec::new();
        export_yaml(&ResultExport::goal(&report), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("# finplan export"));
        assert!(text.contains("kind: goal_budget"));
        assert!(text.contains("status: healthy"));

        let body: String = text
            .lines()
            .filter(|line| !line.starts_with('#'))
            .collect::<Vec<_>>()
            .join("\n");
        let value: serde_yaml::Value = serde_yaml::from_str(&body).unwrap();
        assert_eq!(value["result"]["available"], serde_yaml::Value::from(300_000));
    }
}
