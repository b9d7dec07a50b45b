//! finplan - personal finance calculators for the terminal
//!
//! Three calculators share one core: a savings planner, a monthly budget
//! evaluator and a savings-target check. Each reads its input from a form
//! surface, validates it, and returns a typed result carrying advisories.
//! The command line and the interactive TUI are two front ends over the
//! same surface.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Error types and the validation taxonomy
//! - `models`: Money, inputs, advisories
//! - `services`: The calculators
//! - `surface`: Named input fields and output regions
//! - `display`: Terminal text and surface rendering
//! - `export`: JSON, YAML and CSV output
//! - `nav`: Navigation menu state
//! - `alert`: Auto-dismissing alerts
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal UI
//!
//! # Example
//!
//! ```rust,ignore
//! use finplan_cli::models::{CurrencyFormat, Money, SavingsInput};
//! use finplan_cli::services::SavingsPlanner;
//!
//! let fmt = CurrencyFormat::default();
//! let plan = SavingsPlanner::new(&fmt).plan(&SavingsInput {
//!     goal: Money::from_units(12000),
//!     term_months: 12.0,
//!     ..Default::default()
//! })?;
//! assert_eq!(plan.monthly_required, Money::from_units(1000));
//! ```

pub mod alert;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod nav;
pub mod services;
pub mod surface;
pub mod tui;

pub use error::{FinplanError, FinplanResult};
