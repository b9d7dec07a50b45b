//! Service layer for finplan
//!
//! The calculators. Each service validates its input, derives the figures,
//! classifies the outcome and attaches advisories. Services hold no state
//! between calls: identical inputs always give identical results.

pub mod budget;
pub mod goal_budget;
pub mod savings;

pub use budget::{BudgetEvaluator, BudgetReport, BudgetState, BudgetTotals, EmergencyFund};
pub use goal_budget::{GoalBudgetEvaluator, GoalBudgetReport, GoalStatus, SpendingControl};
pub use savings::{Feasibility, FeasibilityReport, SavingsPlan, SavingsPlanner, Timeline};

/// Width of a percentage bar, capped to 0..=100
pub fn bar_width(pct: f64) -> f64 {
    pct.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(42.5), 42.5);
        assert_eq!(bar_width(140.0), 100.0);
        assert_eq!(bar_width(-3.0), 0.0);
    }
}
