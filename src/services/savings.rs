//! Savings planner service
//!
//! Works out how much has to be put aside every month (and week) to reach a
//! savings goal within a term, and judges how feasible that is given the
//! user's current monthly cash flow.

use chrono::{Months, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::error::ValidationError;
use crate::models::{Advisory, Classification, CurrencyFormat, Money, SavingsInput};

/// Share of income above which a goal is considered ambitious
const AMBITIOUS_PCT: f64 = 30.0;

/// Share of income at or below which a goal is considered very easy
const VERY_EASY_PCT: f64 = 10.0;

/// Weeks counted per month for the weekly figure
const WEEKS_PER_MONTH: f64 = 4.0;

/// How attainable a goal is given current cash flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Feasibility {
    /// Expenses already meet or exceed income
    Impossible,
    /// The monthly amount exceeds what is left after expenses
    Difficult,
    /// More than 30% of income is needed
    Ambitious,
    /// 10% of income or less is needed
    VeryEasy,
    /// Anything in between
    Achievable,
}

impl Feasibility {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Impossible => "impossible",
            Self::Difficult => "difficult",
            Self::Ambitious => "ambitious",
            Self::VeryEasy => "very easy",
            Self::Achievable => "achievable",
        }
    }
}

/// Cash-flow analysis attached to a plan when income and expenses are known
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeasibilityReport {
    /// Income minus expenses
    pub available: Money,
    /// `available` as a share of income
    pub available_pct: f64,
    /// Monthly amount required as a share of income
    pub required_pct: f64,
    pub outcome: Feasibility,
    /// Term that would fit the available amount (difficult goals only)
    pub suggested_term_months: Option<u32>,
    pub advisories: Vec<Advisory>,
}

/// Result of planning towards a savings goal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsPlan {
    pub goal: Money,
    pub current_savings: Money,
    pub remaining: Money,
    pub monthly_required: Money,
    pub weekly_required: Money,
    pub term_months: f64,
    pub feasibility: Option<FeasibilityReport>,
}

/// Start and expected completion of a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Timeline {
    /// Month name and year of the start, e.g. "March 2026"
    pub fn start_label(&self) -> String {
        self.start.format("%B %Y").to_string()
    }

    /// Month name and year of the completion
    pub fn end_label(&self) -> String {
        self.end.format("%B %Y").to_string()
    }
}

impl SavingsPlan {
    /// Calendar span of the plan starting on `start`
    ///
    /// The end date moves forward by the whole number of months in the term.
    pub fn timeline(&self, start: NaiveDate) -> Timeline {
        let months = self.term_months.trunc().clamp(0.0, u32::MAX as f64) as u32;
        let end = start
            .checked_add_months(Months::new(months))
            .unwrap_or(NaiveDate::MAX);
        Timeline { start, end }
    }

    /// Human-readable term, e.g. "1 month" or "12 months"
    pub fn term_label(&self) -> String {
        let unit = if self.term_months == 1.0 { "month" } else { "months" };
        format!("{} {}", self.term_months, unit)
    }

    /// Summary outcome of the plan
    pub fn classification(&self) -> Classification {
        match self.feasibility.as_ref().map(|f| f.outcome) {
            Some(Feasibility::Impossible) => Classification::Deficit,
            Some(Feasibility::Difficult) | Some(Feasibility::Ambitious) => Classification::Tight,
            Some(Feasibility::VeryEasy) => Classification::Excellent,
            Some(Feasibility::Achievable) | None => Classification::Healthy,
        }
    }
}

/// Service for savings goal planning
pub struct SavingsPlanner<'a> {
    currency: &'a CurrencyFormat,
}

impl<'a> SavingsPlanner<'a> {
    /// Create a new planner that formats amounts with `currency`
    pub fn new(currency: &'a CurrencyFormat) -> Self {
        Self { currency }
    }

    /// Validate the input and compute the plan
    pub fn plan(&self, input: &SavingsInput) -> Result<SavingsPlan, ValidationError> {
        Self::validate(input)?;

        let remaining = input.goal - input.current_savings;
        let monthly_required = remaining.div_f64(input.term_months);
        let weekly_required = monthly_required.div_f64(WEEKS_PER_MONTH);

        debug!(
            remaining = remaining.cents(),
            monthly = monthly_required.cents(),
            weekly = weekly_required.cents(),
            "computed savings plan"
        );

        let feasibility =
            if input.monthly_income.is_positive() && input.monthly_expenses.is_positive() {
                Some(self.analyze(
                    monthly_required,
                    input.term_months,
                    input.monthly_income,
                    input.monthly_expenses,
                ))
            } else {
                None
            };

        Ok(SavingsPlan {
            goal: input.goal,
            current_savings: input.current_savings,
            remaining,
            monthly_required,
            weekly_required,
            term_months: input.term_months,
            feasibility,
        })
    }

    /// Checks run in order; the first failure wins
    fn validate(input: &SavingsInput) -> Result<(), ValidationError> {
        if input.goal.is_zero() {
            return Err(ValidationError::MissingGoal);
        }
        if input.term_months == 0.0 || !input.term_months.is_finite() {
            return Err(ValidationError::MissingTerm);
        }
        if input.term_months < 1.0 {
            return Err(ValidationError::TermTooShort);
        }
        if input.current_savings >= input.goal {
            return Err(ValidationError::GoalAlreadyMet);
        }
        Ok(())
    }

    fn analyze(
        &self,
        monthly_required: Money,
        term_months: f64,
        income: Money,
        expenses: Money,
    ) -> FeasibilityReport {
        let fmt = self.currency;
        let available = income - expenses;
        let required_pct = monthly_required.percent_of(income);
        let available_pct = available.percent_of(income);

        let mut advisories = Vec::new();
        let mut suggested_term_months = None;

        let outcome = if !available.is_positive() {
            advisories.push(Advisory::danger(
                "Goal out of reach with your current finances",
                format!(
                    "You spend more than you earn ({} deficit). Balance your budget first.",
                    fmt.whole(available.abs())
                ),
            ));
            Feasibility::Impossible
        } else if monthly_required > available {
            let shortfall = monthly_required - available;
            let months =
                (monthly_required.as_f64() * term_months / available.as_f64()).ceil() as u32;
            suggested_term_months = Some(months);

            advisories.push(Advisory::warning(
                "Goal hard to reach",
                format!(
                    "You need to save {} but only have {} available. You would be {} short every month.",
                    fmt.whole(monthly_required),
                    fmt.whole(available),
                    fmt.whole(shortfall)
                ),
            ));
            advisories.push(Advisory::info(
                "Suggestion",
                format!(
                    "Extend the term to {} months to save {} a month, or cut expenses / raise income.",
                    months,
                    fmt.whole(available)
                ),
            ));
            Feasibility::Difficult
        } else if required_pct > AMBITIOUS_PCT {
            advisories.push(Advisory::warning(
                "Ambitious goal",
                format!(
                    "You need to save {:.1}% of your income. High, but possible if you trim variable expenses.",
                    required_pct
                ),
            ));
            Feasibility::Ambitious
        } else if required_pct <= VERY_EASY_PCT {
            advisories.push(Advisory::success(
                "Very achievable goal!",
                format!(
                    "You only need {:.1}% of your income ({}). Very easy to meet.",
                    required_pct,
                    fmt.whole(monthly_required)
                ),
            ));
            Feasibility::VeryEasy
        } else {
            advisories.push(Advisory::success(
                "Achievable goal",
                format!(
                    "You need to save {:.1}% of your income ({}). It is viable.",
                    required_pct,
                    fmt.whole(monthly_required)
                ),
            ));
            Feasibility::Achievable
        };

        advisories.push(Advisory::info(
            "Your current capacity",
            format!(
                "Monthly available: {} ({:.1}% of your income).",
                fmt.whole(available),
                available_pct
            ),
        ));

        debug!(outcome = outcome.label(), required_pct, "analyzed savings feasibility");

        FeasibilityReport {
            available,
            available_pct,
            required_pct,
            outcome,
            suggested_term_months,
            advisories,
        }
    }
}
