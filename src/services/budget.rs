//! Budget evaluator service
//!
//! Breaks a month's income down into fixed expenses, variable expenses and
//! what is left over, then produces recommendations from a handful of
//! threshold checks.

use serde::Serialize;
use tracing::debug;

use crate::error::ValidationError;
use crate::models::{Advisory, BudgetInput, Classification, CurrencyFormat, Money};

use super::bar_width;

/// Fixed expenses above this share of income trigger a warning
const HIGH_FIXED_PCT: f64 = 50.0;

/// Variable expenses above this share of income trigger a warning
const HIGH_VARIABLE_PCT: f64 = 30.0;

/// Disposable income below this share is "low savings"
const LOW_SAVINGS_PCT: f64 = 10.0;

/// Disposable income at or above this share is "excellent"
const EXCELLENT_SAVINGS_PCT: f64 = 20.0;

/// Months of expenses an emergency fund should cover
const EMERGENCY_FUND_MONTHS: i64 = 6;

/// Overall state of the monthly budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetState {
    Deficit,
    Breakeven,
    LowSavings,
    Good,
    Excellent,
}

impl BudgetState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Deficit => "deficit",
            Self::Breakeven => "breakeven",
            Self::LowSavings => "low savings",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }
}

/// Emergency fund guidance, only given when there is a positive balance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmergencyFund {
    /// Six months of total expenses
    pub target: Money,
    /// `target / balance`, rounded to one decimal
    pub months_of_cover: f64,
}

/// Running totals shown while the form is being filled in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct BudgetTotals {
    pub income: Money,
    pub fixed: Money,
    pub variable: Money,
}

/// Result of evaluating a monthly budget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetReport {
    pub income: Money,
    pub total_fixed: Money,
    pub total_variable: Money,
    pub total_expenses: Money,
    /// Income minus all expenses; negative in a deficit
    pub balance: Money,
    /// `balance` clamped at zero
    pub disposable: Money,
    pub fixed_pct: f64,
    pub variable_pct: f64,
    pub disposable_pct: f64,
    pub state: BudgetState,
    pub emergency_fund: Option<EmergencyFund>,
    pub advisories: Vec<Advisory>,
}

impl BudgetReport {
    /// Bar width (0-100) for the fixed-expense share
    pub fn fixed_bar(&self) -> f64 {
        bar_width(self.fixed_pct)
    }

    /// Bar width (0-100) for the variable-expense share
    pub fn variable_bar(&self) -> f64 {
        bar_width(self.variable_pct)
    }

    /// Bar width (0-100) for the disposable share
    pub fn disposable_bar(&self) -> f64 {
        bar_width(self.disposable_pct)
    }

    /// Summary outcome of the budget
    pub fn classification(&self) -> Classification {
        match self.state {
            BudgetState::Deficit => Classification::Deficit,
            BudgetState::Breakeven | BudgetState::LowSavings => Classification::Tight,
            BudgetState::Good => Classification::Healthy,
            BudgetState::Excellent => Classification::Excellent,
        }
    }
}

/// Service for monthly budget evaluation
pub struct BudgetEvaluator<'a> {
    currency: &'a CurrencyFormat,
}

impl<'a> BudgetEvaluator<'a> {
    /// Create a new evaluator that formats amounts with `currency`
    pub fn new(currency: &'a CurrencyFormat) -> Self {
        Self { currency }
    }

    /// Totals per section, without any validation
    pub fn running_totals(input: &BudgetInput) -> BudgetTotals {
        BudgetTotals {
            income: input.total_income(),
            fixed: input.total_fixed(),
            variable: input.total_variable(),
        }
    }

    /// Validate the input and evaluate the budget
    pub fn evaluate(&self, input: &BudgetInput) -> Result<BudgetReport, ValidationError> {
        let income = input.total_income();
        if income.is_zero() {
            return Err(ValidationError::NoIncome);
        }

        let total_fixed = input.total_fixed();
        let total_variable = input.total_variable();
        let total_expenses = total_fixed + total_variable;
        let balance = income - total_expenses;
        let disposable = balance.non_negative();

        let fixed_pct = total_fixed.percent_of(income);
        let variable_pct = total_variable.percent_of(income);
        let disposable_pct = disposable.percent_of(income);

        let state = if balance.is_negative() {
            BudgetState::Deficit
        } else if balance.is_zero() {
            BudgetState::Breakeven
        } else if disposable_pct < LOW_SAVINGS_PCT {
            BudgetState::LowSavings
        } else if disposable_pct >= EXCELLENT_SAVINGS_PCT {
            BudgetState::Excellent
        } else {
            BudgetState::Good
        };

        let emergency_fund = if balance.is_positive() {
            let target = total_expenses * EMERGENCY_FUND_MONTHS;
            let months = target.as_f64() / balance.as_f64();
            Some(EmergencyFund {
                target,
                months_of_cover: (months * 10.0).round() / 10.0,
            })
        } else {
            None
        };

        debug!(
            income = income.cents(),
            balance = balance.cents(),
            state = state.label(),
            "evaluated budget"
        );

        let mut report = BudgetReport {
            income,
            total_fixed,
            total_variable,
            total_expenses,
            balance,
            disposable,
            fixed_pct,
            variable_pct,
            disposable_pct,
            state,
            emergency_fund,
            advisories: Vec::new(),
        };
        report.advisories = self.advise(&report, input.savings_target);

        Ok(report)
    }

    fn advise(&self, report: &BudgetReport, savings_target: Option<Money>) -> Vec<Advisory> {
        let fmt = self.currency;
        let mut advisories = Vec::new();

        advisories.push(match report.state {
            BudgetState::Deficit => Advisory::danger(
                "Alert: you spend more than you earn",
                format!(
                    "You have a deficit of {} a month.",
                    fmt.whole(report.balance.abs())
                ),
            ),
            BudgetState::Breakeven => Advisory::warning(
                "You are not saving",
                "You spend exactly what you earn.",
            ),
            BudgetState::LowSavings => Advisory::warning(
                "Low savings",
                format!("You only save {:.1}% of your income.", report.disposable_pct),
            ),
            BudgetState::Excellent => Advisory::success(
                "Excellent savings",
                format!(
                    "You save {:.1}% ({}).",
                    report.disposable_pct,
                    fmt.whole(report.balance)
                ),
            ),
            BudgetState::Good => Advisory::success(
                "Good job",
                format!("You save {:.1}% of your income.", report.disposable_pct),
            ),
        });

        if report.fixed_pct > HIGH_FIXED_PCT {
            advisories.push(Advisory::warning(
                "High fixed expenses",
                format!("They represent {:.1}% of your income.", report.fixed_pct),
            ));
        }

        if report.variable_pct > HIGH_VARIABLE_PCT {
            advisories.push(Advisory::warning(
                "High variable expenses",
                format!("They are {:.1}% of your income.", report.variable_pct),
            ));
        }

        if let Some(fund) = &report.emergency_fund {
            advisories.push(Advisory::info(
                "Emergency fund",
                format!(
                    "Target: {} ({:.1} months).",
                    fmt.whole(fund.target),
                    fund.months_of_cover
                ),
            ));
        }

        if let Some(target) = savings_target.filter(|t| t.is_positive()) {
            let text = if report.balance >= target {
                format!(
                    "Your balance of {} covers your savings target of {}.",
                    fmt.whole(report.balance),
                    fmt.whole(target)
                )
            } else {
                format!(
                    "Your balance of {} is {} short of your savings target of {}.",
                    fmt.whole(report.balance),
                    fmt.whole(target - report.balance),
                    fmt.whole(target)
                )
            };
            advisories.push(Advisory::info("Savings target", text));
        }

        advisories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LineItem, Tone};

    fn input(income: i64, fixed: &[i64], variable: &[i64]) -> BudgetInput {
        BudgetInput {
            income: vec![LineItem::new("Salary", Money::from_units(income))],
            fixed: fixed
                .iter()
                .map(|v| LineItem::new("Fixed", Money::from_units(*v)))
                .collect(),
            variable: variable
                .iter()
                .map(|v| LineItem::new("Variable", Money::from_units(*v)))
                .collect(),
            savings_target: None,
        }
    }

    fn evaluate(i: &BudgetInput) -> Result<BudgetReport, ValidationError> {
        let fmt = CurrencyFormat::default();
        BudgetEvaluator::new(&fmt).evaluate(i)
    }

    fn titles(report: &BudgetReport) -> Vec<&str> {
        report.advisories.iter().map(|a| a.title.as_str()).collect()
    }

    #[test]
    fn test_no_income_rejected() {
        assert_eq!(evaluate(&input(0, &[500], &[])), Err(ValidationError::NoIncome));
        assert_eq!(
            evaluate(&BudgetInput::default()),
            Err(ValidationError::NoIncome)
        );
    }

    #[test]
    fn test_high_fixed_and_excellent() {
        let report = evaluate(&input(10000, &[6000], &[1000])).unwrap();
        assert_eq!(report.balance, Money::from_units(3000));
        assert!((report.fixed_pct - 60.0).abs() < 1e-9);
        assert!((report.disposable_pct - 30.0).abs() < 1e-9);
        assert_eq!(report.state, BudgetState::Excellent);
        assert_eq!(report.classification(), Classification::Excellent);

        let t = titles(&report);
        assert_eq!(t[0], "Excellent savings");
        assert!(t.contains(&"High fixed expenses"));
        assert!(!t.contains(&"High variable expenses"));
    }

    #[test]
    fn test_deficit_clamps_disposable() {
        let report = evaluate(&input(5000, &[4000], &[2000])).unwrap();
        assert_eq!(report.state, BudgetState::Deficit);
        assert_eq!(report.balance, Money::from_units(-1000));
        assert_eq!(report.disposable, Money::zero());
        assert_eq!(report.disposable_pct, 0.0);
        assert!(report.emergency_fund.is_none());
        assert_eq!(report.advisories[0].tone, Tone::Danger);
        assert!(report.advisories[0].text.contains("$1,000"));
        // 80% fixed of income, 40% variable
        assert!(titles(&report).contains(&"High fixed expenses"));
        assert!(titles(&report).contains(&"High variable expenses"));
        assert_eq!(report.fixed_bar(), 80.0);
    }

    #[test]
    fn test_bars_capped_at_100() {
        let report = evaluate(&input(1000, &[3000], &[])).unwrap();
        assert!(report.fixed_pct > 100.0);
        assert_eq!(report.fixed_bar(), 100.0);
    }

    #[test]
    fn test_breakeven() {
        let report = evaluate(&input(5000, &[3000], &[2000])).unwrap();
        assert_eq!(report.state, BudgetState::Breakeven);
        assert_eq!(report.classification(), Classification::Tight);
        assert!(report.emergency_fund.is_none());
    }

    #[test]
    fn test_low_savings_and_good() {
        let low = evaluate(&input(10000, &[5000], &[4500])).unwrap();
        assert_eq!(low.state, BudgetState::LowSavings);
        assert!(low.advisories[0].text.contains("5.0%"));

        let good = evaluate(&input(10000, &[5000], &[3500])).unwrap();
        assert_eq!(good.state, BudgetState::Good);
        assert_eq!(good.classification(), Classification::Healthy);
    }

    #[test]
    fn test_emergency_fund() {
        // expenses 7000 -> target 42000, balance 3000 -> 14.0 months
        let report = evaluate(&input(10000, &[6000], &[1000])).unwrap();
        let fund = report.emergency_fund.clone().unwrap();
        assert_eq!(fund.target, Money::from_units(42000));
        assert_eq!(fund.months_of_cover, 14.0);
        let last = report.advisories.last().unwrap();
        assert_eq!(last.title, "Emergency fund");
        assert_eq!(last.text, "Target: $42,000 (14.0 months).");
    }

    #[test]
    fn test_percentages_sum_to_100_when_balanced() {
        for (income, fixed, variable) in [(10000, 3333, 1234), (777, 100, 50), (5000, 0, 0)] {
            let report = evaluate(&input(income, &[fixed], &[variable])).unwrap();
            let sum = report.fixed_pct + report.variable_pct + report.disposable_pct;
            assert!((sum - 100.0).abs() < 1e-6, "sum was {}", sum);
        }
    }

    #[test]
    fn test_savings_target_advisory() {
        let mut i = input(10000, &[6000], &[1000]);
        i.savings_target = Some(Money::from_units(4000));
        let report = evaluate(&i).unwrap();
        let last = report.advisories.last().unwrap();
        assert_eq!(last.title, "Savings target");
        assert!(last.text.contains("$1,000 short"));
        assert_eq!(report.state, BudgetState::Excellent);
    }

    #[test]
    fn test_huge_fields_do_not_overflow() {
        use crate::surface::{read_budget_input, BudgetFields, MemorySurface, MAX_FIELD_VALUE};

        let fields = BudgetFields::default();
        let surface = MemorySurface::new()
            .with_field("salary", "1e300")
            .with_field("rent", "1e300")
            .with_field("utilities", "1e300");
        let report = evaluate(&read_budget_input(&surface, &fields)).unwrap();

        let cap = Money::from_f64(MAX_FIELD_VALUE);
        assert_eq!(report.income, cap);
        assert_eq!(report.total_fixed, cap + cap);
        assert_eq!(report.balance, -cap);
        assert_eq!(report.state, BudgetState::Deficit);

        // Emergency fund is six times the expenses
        let surface = MemorySurface::new()
            .with_field("salary", "9e16")
            .with_field("rent", "2e16");
        let report = evaluate(&read_budget_input(&surface, &fields)).unwrap();
        assert_eq!(report.state, BudgetState::Breakeven);

        let surface = MemorySurface::new()
            .with_field("salary", "9e16")
            .with_field("rent", "2e11");
        let report = evaluate(&read_budget_input(&surface, &fields)).unwrap();
        let fund = report.emergency_fund.unwrap();
        assert_eq!(fund.target, Money::from_units(1_200_000_000_000));
    }

    #[test]
    fn test_running_totals() {
        let totals = BudgetEvaluator::running_totals(&input(0, &[100, 200], &[50]));
        assert_eq!(totals.income, Money::zero());
        assert_eq!(totals.fixed, Money::from_units(300));
        assert_eq!(totals.variable, Money::from_units(50));
    }
}
