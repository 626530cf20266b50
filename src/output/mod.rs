mod dashboard;
mod format;
mod health;
mod runs;

pub(crate) use dashboard::{output_dashboard_json, print_dashboard_table};
pub(crate) use format::{NumberFormat, TableStyle};
pub(crate) use health::{format_health, output_health_json};
pub(crate) use runs::{RunTableOptions, output_results_json, print_results_table};
