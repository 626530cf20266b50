use rayon::prelude::*;

use crate::api::{FetchClient, all_results, health, list_projects, project_results};
use crate::cli::{Cli, Commands, ThemeAction};
use crate::core::{ProjectSummary, ResultFilter, Route};
use crate::error::{AppError, FetchError};
use crate::output::{
    RunTableOptions, TableStyle, format_health, output_dashboard_json, output_health_json,
    output_results_json, print_dashboard_table, print_results_table,
};
use crate::theme::{Theme, ThemeStore};
use crate::utils::emit_json;

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) client: &'a FetchClient,
    pub(crate) style: TableStyle<'a>,
    pub(crate) theme: Theme,
    pub(crate) theme_store: Option<&'a ThemeStore>,
}

impl CommandContext<'_> {
    fn json(&self) -> bool {
        self.cli.wants_json()
    }

    fn print_json(&self, json: &str) -> Result<(), AppError> {
        Ok(emit_json(json, self.cli.jq.as_deref())?)
    }
}

fn load_failed(what: impl Into<String>) -> impl FnOnce(FetchError) -> AppError {
    let what = what.into();
    move |source| AppError::Fetch { what, source }
}

/// Each project's last `limit` statuses, fetched in parallel.
///
/// A project whose history can't be loaded gets `None`; the others are
/// unaffected.
fn load_history(
    client: &FetchClient,
    projects: &[ProjectSummary],
    limit: u32,
    quiet: bool,
) -> Vec<Option<Vec<String>>> {
    let filter = ResultFilter {
        limit: Some(limit),
        ..ResultFilter::default()
    };
    projects
        .par_iter()
        .map(|project| match project_results(client, &project.project, &filter) {
            Ok(results) => Some(results.into_iter().map(|r| r.status).collect()),
            Err(e) => {
                if !quiet {
                    eprintln!("Warning: no history for {}: {}", project.project, e);
                }
                None
            }
        })
        .collect()
}

fn handle_dashboard(ctx: &CommandContext<'_>, history: u32) -> Result<(), AppError> {
    let projects = list_projects(ctx.client).map_err(load_failed("projects"))?;
    let recent = (history > 0).then(|| load_history(ctx.client, &projects, history, ctx.json()));

    if ctx.json() {
        let json = output_dashboard_json(&projects, recent.as_deref(), ctx.client.prefix());
        return ctx.print_json(&json);
    }
    if projects.is_empty() {
        println!("No test results reported yet.");
        return Ok(());
    }
    print_dashboard_table(&projects, recent.as_deref(), ctx.style);
    Ok(())
}

fn handle_project(
    ctx: &CommandContext<'_>,
    name: &str,
    filter: &ResultFilter,
) -> Result<(), AppError> {
    let results = project_results(ctx.client, name, filter)
        .map_err(load_failed(format!("results for {name}")))?;

    if ctx.json() {
        return ctx.print_json(&output_results_json(&results));
    }
    if results.is_empty() {
        println!("No runs found for project \"{name}\".");
        return Ok(());
    }
    let title = format!("{name} Run History");
    print_results_table(
        &results,
        RunTableOptions {
            title: &title,
            show_project: false,
        },
        ctx.style,
    );
    Ok(())
}

fn handle_results(ctx: &CommandContext<'_>, filter: &ResultFilter) -> Result<(), AppError> {
    let results = all_results(ctx.client, filter).map_err(load_failed("results"))?;

    if ctx.json() {
        return ctx.print_json(&output_results_json(&results));
    }
    if results.is_empty() {
        println!("No results found.");
        return Ok(());
    }
    print_results_table(
        &results,
        RunTableOptions {
            title: "All Results",
            show_project: true,
        },
        ctx.style,
    );
    Ok(())
}

/// Path component of a dashboard link; full URLs lose scheme and host
fn link_path(link: &str) -> &str {
    let link = link.trim();
    match link.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("/", |i| &rest[i..]),
        None => link,
    }
}

fn handle_open(
    ctx: &CommandContext<'_>,
    link: &str,
    filter: &ResultFilter,
    history: u32,
) -> Result<(), AppError> {
    let path = link_path(link);
    let route = Route::parse(path, ctx.client.prefix()).ok_or_else(|| AppError::UnknownRoute {
        path: path.to_string(),
    })?;

    match route {
        Route::Dashboard => handle_dashboard(ctx, history),
        Route::Project { name } => handle_project(ctx, &name, filter),
        Route::Results => handle_results(ctx, filter),
    }
}

fn handle_health(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let status = health(ctx.client).map_err(load_failed("health status"))?;
    let server = ctx.client.target("/");
    let server = server.trim_end_matches('/');

    if ctx.json() {
        return ctx.print_json(&output_health_json(&status, server));
    }
    println!("{}", format_health(&status, server, &ctx.style));
    Ok(())
}

fn handle_theme(ctx: &CommandContext<'_>, action: ThemeAction) -> Result<(), AppError> {
    let chosen = match action {
        ThemeAction::Show => None,
        ThemeAction::Light => Some(Theme::Light),
        ThemeAction::Dark => Some(Theme::Dark),
        ThemeAction::Toggle => Some(ctx.theme.toggled()),
    };

    let Some(theme) = chosen else {
        if ctx.json() {
            let json = serde_json::json!({ "theme": ctx.theme.as_str() }).to_string();
            return ctx.print_json(&json);
        }
        println!("{}", ctx.theme);
        return Ok(());
    };

    let store = ctx.theme_store.ok_or_else(|| AppError::SaveState {
        path: "state.json".to_string(),
        source: std::io::Error::other("no configuration directory available"),
    })?;
    store.save(theme)?;
    if !ctx.json() {
        println!("Theme set to {theme} ({})", store.path().display());
    }
    Ok(())
}

pub(crate) fn dispatch(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    match &ctx.cli.command {
        None => handle_dashboard(ctx, 0),
        Some(Commands::Dashboard { history }) => handle_dashboard(ctx, history.history),
        Some(Commands::Project { name, filter }) => {
            handle_project(ctx, name, &ResultFilter::from(filter))
        }
        Some(Commands::Results { filter }) => handle_results(ctx, &ResultFilter::from(filter)),
        Some(Commands::Open {
            path,
            filter,
            history,
        }) => handle_open(ctx, path, &ResultFilter::from(filter), history.history),
        Some(Commands::Health) => handle_health(ctx),
        Some(Commands::Theme { action }) => handle_theme(ctx, *action),
    }
}
