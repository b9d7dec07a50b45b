//! Build calculator inputs from a surface

use crate::models::{BudgetInput, GoalBudgetInput, LineItem, Money, SavingsInput};

use super::bindings::{BudgetFields, FieldSpec, GoalFields, SavingsFields};
use super::Surface;

/// Field value as money, rounded to the nearest cent
///
/// Sub-cent amounts such as `0.004` read as zero.
fn money(surface: &dyn Surface, id: &str) -> Money {
    Money::from_f64(surface.read_field(id))
}

fn line_items(surface: &dyn Surface, specs: &[FieldSpec]) -> Vec<LineItem> {
    specs
        .iter()
        .map(|spec| LineItem::new(&spec.label, money(surface, &spec.id)))
        .collect()
}

/// Read the savings planner form
pub fn read_savings_input(surface: &dyn Surface, fields: &SavingsFields) -> SavingsInput {
    SavingsInput {
        goal: money(surface, &fields.goal),
        term_months: surface.read_field(&fields.term),
        current_savings: money(surface, &fields.current_savings),
        monthly_income: money(surface, &fields.monthly_income),
        monthly_expenses: money(surface, &fields.monthly_expenses),
    }
}

/// Read the monthly budget form
///
/// An empty or zero savings target is treated as absent.
pub fn read_budget_input(surface: &dyn Surface, fields: &BudgetFields) -> BudgetInput {
    let target = money(surface, &fields.savings_target);
    BudgetInput {
        income: line_items(surface, &fields.income),
        fixed: line_items(surface, &fields.fixed),
        variable: line_items(surface, &fields.variable),
        savings_target: Some(target).filter(|t| t.is_positive()),
    }
}

/// Read the goal budget form
///
/// Expense fields left at zero are dropped from the list.
pub fn read_goal_input(surface: &dyn Surface, fields: &GoalFields) -> GoalBudgetInput {
    GoalBudgetInput {
        income: money(surface, &fields.income),
        expenses: line_items(surface, &fields.expenses)
            .into_iter()
            .filter(|item| !item.amount.is_zero())
            .collect(),
        savings_target: money(surface, &fields.savings_target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    #[test]
    fn test_read_savings() {
        let fields = SavingsFields::default();
        let surface = MemorySurface::new()
            .with_field(&fields.goal, "12,000")
            .with_field(&fields.term, "12")
            .with_field(&fields.current_savings, "oops");

        let input = read_savings_input(&surface, &fields);
        assert_eq!(input.goal, Money::from_units(12000));
        assert_eq!(input.term_months, 12.0);
        assert_eq!(input.current_savings, Money::zero());
        assert_eq!(input.monthly_income, Money::zero());
    }

    #[test]
    fn test_amounts_round_to_cents() {
        let fields = SavingsFields::default();
        let surface = MemorySurface::new()
            .with_field(&fields.goal, "0.004")
            .with_field(&fields.current_savings, "0.005")
            .with_field(&fields.term, "0.5");

        let input = read_savings_input(&surface, &fields);
        assert_eq!(input.goal, Money::zero());
        assert_eq!(input.current_savings, Money::from_cents(1));
        // The term is a month count, not money
        assert_eq!(input.term_months, 0.5);
    }

    #[test]
    fn test_read_budget() {
        let fields = BudgetFields::default();
        let surface = MemorySurface::new()
            .with_field("salary", "9000")
            .with_field("other-income", "1000")
            .with_field("rent", "6000")
            .with_field("food", "1000.50");

        let input = read_budget_input(&surface, &fields);
        assert_eq!(input.total_income(), Money::from_units(10000));
        assert_eq!(input.total_fixed(), Money::from_units(6000));
        assert_eq!(input.total_variable(), Money::from_cents(100_050));
        assert_eq!(input.fixed[0].label, "Rent / mortgage");
        assert_eq!(input.savings_target, None);
    }

    #[test]
    fn test_read_goal_drops_empty_expenses() {
        let fields = GoalFields::default();
        let surface = MemorySurface::new()
            .with_field(&fields.income, "5000")
            .with_field("expense-housing", "6000")
            .with_field(&fields.savings_target, "0");

        let input = read_goal_input(&surface, &fields);
        assert_eq!(input.income, Money::from_units(5000));
        assert_eq!(input.expenses.len(), 1);
        assert_eq!(input.total_expenses(), Money::from_units(6000));
        assert_eq!(input.savings_target, Money::zero());
    }
}
