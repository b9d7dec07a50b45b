//! Calculator inputs
//!
//! Plain value structures built fresh for every calculation. Values read
//! from a form are never negative; values built in code are validated by the
//! calculator that consumes them.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// A labelled amount (an income source or an expense category)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    pub amount: Money,
}

impl LineItem {
    pub fn new(label: impl Into<String>, amount: Money) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// Sum the amounts of a list of line items
pub fn total(items: &[LineItem]) -> Money {
    items.iter().map(|item| item.amount).sum()
}

/// Inputs for the monthly savings planner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SavingsInput {
    /// Amount to reach
    pub goal: Money,
    /// Months available; may be fractional
    pub term_months: f64,
    /// Amount already saved
    pub current_savings: Money,
    /// Net monthly income (optional, zero when unknown)
    pub monthly_income: Money,
    /// Total monthly expenses (optional, zero when unknown)
    pub monthly_expenses: Money,
}

/// Inputs for the monthly budget breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BudgetInput {
    /// Income sources (salary, other income, ...)
    pub income: Vec<LineItem>,
    /// Recurring obligatory costs
    pub fixed: Vec<LineItem>,
    /// Discretionary costs
    pub variable: Vec<LineItem>,
    /// Optional monthly amount the user wants to put aside
    pub savings_target: Option<Money>,
}

impl BudgetInput {
    pub fn total_income(&self) -> Money {
        total(&self.income)
    }

    pub fn total_fixed(&self) -> Money {
        total(&self.fixed)
    }

    pub fn total_variable(&self) -> Money {
        total(&self.variable)
    }
}

/// Inputs for the savings-target budget check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GoalBudgetInput {
    pub income: Money,
    pub expenses: Vec<LineItem>,
    pub savings_target: Money,
}

impl GoalBudgetInput {
    pub fn total_expenses(&self) -> Money {
        total(&self.expenses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_totals() {
        let input = BudgetInput {
            income: vec![
                LineItem::new("Salary", Money::from_units(9000)),
                LineItem::new("Other income", Money::from_units(1000)),
            ],
            fixed: vec![
                LineItem::new("Rent", Money::from_units(4000)),
                LineItem::new("Utilities", Money::from_units(500)),
            ],
            variable: vec![LineItem::new("Food", Money::from_units(1500))],
            savings_target: None,
        };

        assert_eq!(input.total_income(), Money::from_units(10000));
        assert_eq!(input.total_fixed(), Money::from_units(4500));
        assert_eq!(input.total_variable(), Money::from_units(1500));
    }

    #[test]
    fn test_empty_total_is_zero() {
        assert_eq!(total(&[]), Money::zero());
        assert_eq!(GoalBudgetInput::default().total_expenses(), Money::zero());
    }
}
