//! Field bindings
//!
//! Maps each calculator's logical inputs to the field identifiers of the
//! surface they are read from. Bindings are part of [`Settings`] so a
//! different form layout only needs a different configuration.
//!
//! [`Settings`]: crate::config::Settings

use serde::{Deserialize, Serialize};

/// A labelled input field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub id: String,
    pub label: String,
}

impl FieldSpec {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Savings planner fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsFields {
    pub goal: String,
    pub term: String,
    pub current_savings: String,
    pub monthly_income: String,
    pub monthly_expenses: String,
}

impl Default for SavingsFields {
    fn default() -> Self {
        Self {
            goal: "goal".into(),
            term: "term".into(),
            current_savings: "current-savings".into(),
            monthly_income: "monthly-income".into(),
            monthly_expenses: "monthly-expenses".into(),
        }
    }
}

impl SavingsFields {
    /// All fields in form order with their labels
    pub fn specs(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::new(&self.goal, "Savings goal"),
            FieldSpec::new(&self.term, "Term (months)"),
            FieldSpec::new(&self.current_savings, "Current savings"),
            FieldSpec::new(&self.monthly_income, "Monthly income"),
            FieldSpec::new(&self.monthly_expenses, "Monthly expenses"),
        ]
    }
}

/// Monthly budget fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetFields {
    pub income: Vec<FieldSpec>,
    pub fixed: Vec<FieldSpec>,
    pub variable: Vec<FieldSpec>,
    /// Optional savings target
    pub savings_target: String,
}

impl Default for BudgetFields {
    fn default() -> Self {
        Self {
            income: vec![
                FieldSpec::new("salary", "Salary"),
                FieldSpec::new("other-income", "Other income"),
            ],
            fixed: vec![
                FieldSpec::new("rent", "Rent / mortgage"),
                FieldSpec::new("utilities", "Utilities"),
                FieldSpec::new("transport", "Transport"),
                FieldSpec::new("insurance", "Insurance"),
            ],
            variable: vec![
                FieldSpec::new("food", "Food"),
                FieldSpec::new("entertainment", "Entertainment"),
                FieldSpec::new("personal", "Personal"),
                FieldSpec::new("other-expenses", "Other"),
            ],
            savings_target: "budget-savings-target".into(),
        }
    }
}

impl BudgetFields {
    /// All fields in form order
    pub fn specs(&self) -> Vec<FieldSpec> {
        let mut specs: Vec<FieldSpec> = self
            .income
            .iter()
            .chain(&self.fixed)
            .chain(&self.variable)
            .cloned()
            .collect();
        specs.push(FieldSpec::new(&self.savings_target, "Savings target"));
        specs
    }
}

/// Goal budget fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalFields {
    pub income: String,
    pub expenses: Vec<FieldSpec>,
    pub savings_target: String,
}

impl Default for GoalFields {
    fn default() -> Self {
        Self {
            income: "goal-income".into(),
            expenses: vec![
                FieldSpec::new("expense-housing", "Housing"),
                FieldSpec::new("expense-food", "Food"),
                FieldSpec::new("expense-transport", "Transport"),
                FieldSpec::new("expense-services", "Services"),
                FieldSpec::new("expense-other", "Other"),
            ],
            savings_target: "goal-savings-target".into(),
        }
    }
}

impl GoalFields {
    /// All fields in form order
    pub fn specs(&self) -> Vec<FieldSpec> {
        let mut specs = vec![FieldSpec::new(&self.income, "Monthly income")];
        specs.extend(self.expenses.iter().cloned());
        specs.push(FieldSpec::new(&self.savings_target, "Savings target"));
        specs
    }
}

/// Field bindings for every calculator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FieldBindings {
    #[serde(default)]
    pub savings: SavingsFields,
    #[serde(default)]
    pub budget: BudgetFields,
    #[serde(default)]
    pub goal: GoalFields,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_budget_layout() {
        let fields = BudgetFields::default();
        assert_eq!(fields.income.len(), 2);
        assert_eq!(fields.fixed.len(), 4);
        assert_eq!(fields.variable.len(), 4);
        assert_eq!(fields.specs().len(), 11);
    }

    #[test]
    fn test_ids_are_unique() {
        let bindings = FieldBindings::default();
        let mut ids: Vec<String> = bindings
            .savings
            .specs()
            .into_iter()
            .chain(bindings.budget.specs())
            .chain(bindings.goal.specs())
            .map(|s| s.id)
            .collect();
        let count = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), count);
    }

    #[test]
    fn test_partial_bindings_deserialize() {
        let bindings: FieldBindings =
            serde_json::from_str(r#"{"savings": {"goal": "meta", "term": "plazo",
                "current_savings": "ahorro-actual", "monthly_income": "ingreso-mensual",
                "monthly_expenses": "gastos-mensuales"}}"#)
                .unwrap();
        assert_eq!(bindings.savings.goal, "meta");
        assert_eq!(bindings.budget, BudgetFields::default());
    }
}
