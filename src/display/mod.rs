//! Display formatting
//!
//! Two presentations of the same results: plain text for the terminal
//! ([`savings`], [`budget`], [`goal`]) and region writes onto a form
//! [`Surface`](crate::surface::Surface) ([`surface`]).

pub mod budget;
pub mod goal;
pub mod report;
pub mod savings;
pub mod surface;

pub use budget::{format_breakdown_table, format_budget_report};
pub use goal::format_goal_report;
pub use savings::format_savings_plan;
pub use surface::{
    parse_advisory_lines, regions, render_budget_report, render_budget_totals,
    render_goal_report, render_savings_plan,
};
