//! CSV export
//!
//! Writes the line items of a budget together with the evaluated section
//! totals, ready for a spreadsheet.

use std::io::Write;

use crate::error::FinplanResult;
use crate::models::{BudgetInput, LineItem, Money};
use crate::services::BudgetReport;

fn amount(money: Money) -> String {
    format!("{:.2}", money.as_f64())
}

fn share(pct: f64) -> String {
    format!("{:.1}", pct)
}

/// Export a budget as CSV
///
/// One row per line item, then one summary row per section.
pub fn export_budget_csv<W: Write>(
    input: &BudgetInput,
    report: &BudgetReport,
    writer: &mut W,
) -> FinplanResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["Section", "Item", "Amount", "Share of Income"])?;

    let sections: [(&str, &[LineItem]); 3] = [
        ("Income", &input.income),
        ("Fixed", &input.fixed),
        ("Variable", &input.variable),
    ];
    for (section, items) in sections {
        for item in items {
            let amount_str = amount(item.amount);
            let share_str = share(item.amount.percent_of(report.income));
            wtr.write_record([section, item.label.as_str(), amount_str.as_str(), share_str.as_str()])?;
        }
    }

    let totals = [
        ("Total", "Income", report.income, 100.0),
        ("Total", "Fixed", report.total_fixed, report.fixed_pct),
        ("Total", "Variable", report.total_variable, report.variable_pct),
        ("Total", "Available", report.disposable, report.disposable_pct),
        ("Total", "Balance", report.balance, report.balance.percent_of(report.income)),
    ];
    for (section, item, money, pct) in totals {
        wtr.write_record([section, item, amount(money).as_str(), share(pct).as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}
