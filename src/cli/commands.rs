//! CLI subcommand definitions
//!
//! One subcommand per dashboard view, plus health and theme management.

use clap::{Args, Subcommand, ValueEnum};

use crate::core::ResultFilter;

/// Main CLI commands
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Project list with pass/fail summaries (default)
    Dashboard {
        #[command(flatten)]
        history: HistoryArgs,
    },
    /// Run history of one project
    Project {
        /// Project name as reported by CI
        name: String,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Latest results across all projects
    Results {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Open the view behind a dashboard URL or path (e.g. /ci/project/web)
    Open {
        /// URL path as shown in the browser, prefix included
        path: String,
        #[command(flatten)]
        filter: FilterArgs,
        #[command(flatten)]
        history: HistoryArgs,
    },
    /// Check that the backend is reachable
    Health,
    /// Show or change the color theme
    Theme {
        #[arg(value_enum, default_value = "show")]
        action: ThemeAction,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub(crate) struct FilterArgs {
    /// Only runs with this status (e.g. success, failed)
    #[arg(long)]
    pub(crate) status: Option<String>,

    /// Only runs on this browser
    #[arg(long)]
    pub(crate) browser: Option<String>,

    /// Only specs whose path contains this text (project view only)
    #[arg(long)]
    pub(crate) spec: Option<String>,

    /// Maximum number of runs (server default: 100 per project, 200 overall)
    #[arg(short = 'n', long)]
    pub(crate) limit: Option<u32>,
}

impl From<&FilterArgs> for ResultFilter {
    fn from(args: &FilterArgs) -> Self {
        ResultFilter {
            status: args.status.clone(),
            browser: args.browser.clone(),
            spec: args.spec.clone(),
            limit: args.limit,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Args)]
pub(crate) struct HistoryArgs {
    /// Show each project's last N runs as a status strip
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub(crate) history: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ThemeAction {
    /// Print the active theme
    Show,
    /// Save the light theme
    Light,
    /// Save the dark theme
    Dark,
    /// Save the opposite of the active theme
    Toggle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_args_convert() {
        let args = FilterArgs {
            status: Some("failed".to_string()),
            browser: None,
            spec: Some("login".to_string()),
            limit: Some(10),
        };
        let filter = ResultFilter::from(&args);
        assert_eq!(filter.status.as_deref(), Some("failed"));
        assert_eq!(filter.spec.as_deref(), Some("login"));
        assert_eq!(filter.limit, Some(10));
        assert!(filter.browser.is_none());
    }
}
