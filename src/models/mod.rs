//! Core data models for finplan
//!
//! Value types shared by the calculators and the presentation layers:
//! money, calculator inputs, and advisory messages.

pub mod advisory;
pub mod input;
pub mod money;

pub use advisory::{Advisory, Classification, Tone};
pub use input::{BudgetInput, GoalBudgetInput, LineItem, SavingsInput};
pub use money::{CurrencyFormat, Money};
