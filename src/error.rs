//! Custom error types for finplan
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Calculator input problems are modelled
//! separately as [`ValidationError`] so the UI layers can surface them as
//! transient alerts without treating them as failures of the program.

use thiserror::Error;

use crate::models::Tone;

/// Rejected calculator input
///
/// Every variant aborts the calculation before any result is produced. The
/// user corrects the form and tries again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Savings goal left empty or zero
    #[error("Please enter a savings goal.")]
    MissingGoal,

    /// Savings term left empty or zero
    #[error("Please enter the term in months.")]
    MissingTerm,

    /// Savings term below one month
    #[error("The term must be at least 1 month.")]
    TermTooShort,

    /// Current savings already cover the goal
    #[error("You already reached your goal! Your current savings are greater than or equal to the goal.")]
    GoalAlreadyMet,

    /// Monthly budget with no income at all
    #[error("Please enter at least one source of income to calculate your budget.")]
    NoIncome,

    /// Goal budget with zero or negative income
    #[error("Monthly income must be greater than zero.")]
    NonPositiveIncome,

    /// Goal budget with a negative savings target
    #[error("The savings target cannot be negative.")]
    NegativeSavingsTarget,

    /// Goal budget whose target is larger than the income
    #[error("The savings target cannot exceed your monthly income.")]
    TargetExceedsIncome,
}

impl ValidationError {
    /// Short machine-friendly code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingGoal => "missing goal",
            Self::MissingTerm => "missing term",
            Self::TermTooShort => "term too short",
            Self::GoalAlreadyMet => "goal already met",
            Self::NoIncome => "no income provided",
            Self::NonPositiveIncome => "income not positive",
            Self::NegativeSavingsTarget => "negative savings target",
            Self::TargetExceedsIncome => "target exceeds income",
        }
    }

    /// How prominently the alert for this error should be shown
    pub fn tone(&self) -> Tone {
        match self {
            Self::TermTooShort | Self::GoalAlreadyMet => Tone::Warning,
            _ => Tone::Danger,
        }
    }
}

/// The main error type for finplan operations
#[derive(Error, Debug)]
pub enum FinplanError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Calculator input rejected
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl FinplanError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The underlying validation error, if any
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FinplanError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinplanError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for FinplanError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<csv::Error> for FinplanError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for finplan operations
pub type FinplanResult<T> = Result<T, FinplanError>;
