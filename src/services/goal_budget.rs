//! Goal budget evaluator service
//!
//! Checks whether a monthly savings target fits in what is left of the
//! income after a list of expenses.

use serde::Serialize;
use tracing::debug;

use crate::error::ValidationError;
use crate::models::{Advisory, Classification, CurrencyFormat, GoalBudgetInput, Money};

/// Spending above this share of income needs cutting back
const REDUCE_EXPENSES_PCT: f64 = 80.0;

/// Spending below this share of income is well under control
const GOOD_CONTROL_PCT: f64 = 50.0;

/// Whether the savings target can be met
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GoalStatus {
    /// Expenses exceed income
    NotViable { deficit: Money },
    /// Something is left, but less than the target
    Tight { gap: Money },
    /// The target fits with room to spare
    Healthy { surplus: Money },
}

impl GoalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotViable { .. } => "not viable",
            Self::Tight { .. } => "tight",
            Self::Healthy { .. } => "healthy",
        }
    }
}

/// How spending compares with income
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpendingControl {
    ReduceExpenses,
    Moderate,
    GoodControl,
}

/// Result of checking a savings target against a budget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalBudgetReport {
    pub income: Money,
    pub total_expenses: Money,
    pub savings_target: Money,
    /// Income minus expenses; negative when overspending
    pub available: Money,
    pub expense_pct: f64,
    /// How far `available` falls short of the target, never negative
    pub gap: Money,
    pub status: GoalStatus,
    pub spending: SpendingControl,
    pub advisories: Vec<Advisory>,
}

impl GoalBudgetReport {
    /// Summary outcome of the check
    pub fn classification(&self) -> Classification {
        match (self.status, self.spending) {
            (GoalStatus::NotViable { .. }, _) => Classification::Deficit,
            (GoalStatus::Tight { .. }, _) => Classification::Tight,
            (GoalStatus::Healthy { .. }, SpendingControl::GoodControl) => Classification::Excellent,
            (GoalStatus::Healthy { .. }, _) => Classification::Healthy,
        }
    }
}

/// Service for savings-target budget checks
pub struct GoalBudgetEvaluator<'a> {
    currency: &'a CurrencyFormat,
}

impl<'a> GoalBudgetEvaluator<'a> {
    /// Create a new evaluator that formats amounts with `currency`
    pub fn new(currency: &'a CurrencyFormat) -> Self {
        Self { currency }
    }

    /// Validate the input and evaluate the target
    pub fn evaluate(&self, input: &GoalBudgetInput) -> Result<GoalBudgetReport, ValidationError> {
        if !input.income.is_positive() {
            return Err(ValidationError::NonPositiveIncome);
        }
        if input.savings_target.is_negative() {
            return Err(ValidationError::NegativeSavingsTarget);
        }
        if input.savings_target > input.income {
            return Err(ValidationError::TargetExceedsIncome);
        }

        let fmt = self.currency;
        let income = input.income;
        let target = input.savings_target;
        let total_expenses = input.total_expenses();
        let available = income - total_expenses;
        let expense_pct = total_expenses.percent_of(income);
        let gap = (target - available).non_negative();

        let mut advisories = Vec::new();

        let status = if available.is_negative() {
            let deficit = available.abs();
            advisories.push(Advisory::danger(
                "Target not viable",
                format!(
                    "Your expenses exceed your income by {}. Balance your budget before saving.",
                    fmt.exact(deficit)
                ),
            ));
            GoalStatus::NotViable { deficit }
        } else if available < target {
            advisories.push(Advisory::warning(
                "Tight budget",
                format!(
                    "You have {} left but want to save {}. You are {} short.",
                    fmt.exact(available),
                    fmt.exact(target),
                    fmt.exact(gap)
                ),
            ));
            GoalStatus::Tight { gap }
        } else {
            let surplus = available - target;
            advisories.push(Advisory::success(
                "Healthy budget",
                format!(
                    "You can save {} and still have {} to spare.",
                    fmt.exact(target),
                    fmt.exact(surplus)
                ),
            ));
            GoalStatus::Healthy { surplus }
        };

        let spending = if expense_pct > REDUCE_EXPENSES_PCT {
            advisories.push(Advisory::warning(
                "Reduce expenses",
                format!(
                    "Your expenses take {:.1}% of your income. Look for costs to cut.",
                    expense_pct
                ),
            ));
            SpendingControl::ReduceExpenses
        } else if expense_pct < GOOD_CONTROL_PCT {
            advisories.push(Advisory::success(
                "Good spending control",
                format!("Your expenses are only {:.1}% of your income.", expense_pct),
            ));
            SpendingControl::GoodControl
        } else {
            advisories.push(Advisory::info(
                "Moderate spending",
                format!("Your expenses are {:.1}% of your income.", expense_pct),
            ));
            SpendingControl::Moderate
        };

        debug!(
            available = available.cents(),
            status = status.label(),
            expense_pct,
            "evaluated goal budget"
        );

        Ok(GoalBudgetReport {
            income,
            total_expenses,
            savings_target: target,
            available,
            expense_pct,
            gap,
            status,
            spending,
            advisories,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LineItem, Tone};

    fn input(income: i64, expenses: &[i64], target: i64) -> GoalBudgetInput {
        GoalBudgetInput {
            income: Money::from_units(income),
            expenses: expenses
                .iter()
                .map(|v| LineItem::new("Expense", Money::from_units(*v)))
                .collect(),
            savings_target: Money::from_units(target),
        }
    }

    fn evaluate(i: &GoalBudgetInput) -> Result<GoalBudgetReport, ValidationError> {
        let fmt = CurrencyFormat::default();
        GoalBudgetEvaluator::new(&fmt).evaluate(i)
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            evaluate(&input(0, &[], 0)),
            Err(ValidationError::NonPositiveIncome)
        );
        assert_eq!(
            evaluate(&input(1000, &[], -1)),
            Err(ValidationError::NegativeSavingsTarget)
        );
        assert_eq!(
            evaluate(&input(1000, &[], 1001)),
            Err(ValidationError::TargetExceedsIncome)
        );
        assert!(evaluate(&input(1000, &[], 1000)).is_ok());
    }

    #[test]
    fn test_not_viable() {
        let report = evaluate(&input(5000, &[6000], 0)).unwrap();
        assert_eq!(report.available, Money::from_units(-1000));
        assert_eq!(
            report.status,
            GoalStatus::NotViable {
                deficit: Money::from_units(1000)
            }
        );
        assert_eq!(report.classification(), Classification::Deficit);
        assert_eq!(report.advisories[0].tone, Tone::Danger);
        assert!(report.advisories[0].text.contains("$1,000.00"));
        assert_eq!(report.spending, SpendingControl::ReduceExpenses);
    }

    #[test]
    fn test_tight_reports_gap() {
        let report = evaluate(&input(5000, &[3000, 1000], 1500)).unwrap();
        assert_eq!(report.available, Money::from_units(1000));
        assert_eq!(report.gap, Money::from_units(500));
        assert_eq!(
            report.status,
            GoalStatus::Tight {
                gap: Money::from_units(500)
            }
        );
        assert_eq!(report.spending, SpendingControl::Moderate);
    }

    #[test]
    fn test_healthy_with_good_control() {
        let report = evaluate(&input(5000, &[1000, 500], 1000)).unwrap();
        assert_eq!(
            report.status,
            GoalStatus::Healthy {
                surplus: Money::from_units(2500)
            }
        );
        assert_eq!(report.gap, Money::zero());
        assert_eq!(report.spending, SpendingControl::GoodControl);
        assert_eq!(report.classification(), Classification::Excellent);
        assert!(report.advisories[1].text.contains("30.0%"));
    }

    #[test]
    fn test_healthy_moderate() {
        let report = evaluate(&input(5000, &[3000], 500)).unwrap();
        assert_eq!(report.spending, SpendingControl::Moderate);
        assert_eq!(report.classification(), Classification::Healthy);
    }

    #[test]
    fn test_status_serializes_with_tag() {
        let status = GoalStatus::Tight {
            gap: Money::from_cents(150),
        };
        assert_eq!(
            serde_json::to_string(&status).unwrap(),
            r#"{"status":"tight","gap":150}"#
        );
    }
}
