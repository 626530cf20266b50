use comfy_table::Cell;

use crate::core::{PathPrefix, ProjectSummary, Route, StatusClass, status_class};
use crate::output::format::{
    TableStyle, create_styled_table, format_number, format_percent, right_cell, to_pretty_json,
};
use crate::utils::format_date;

/// Recent statuses per project, newest first, aligned with the project list.
/// `None` when history was not requested or could not be loaded.
pub(crate) type History = [Option<Vec<String>>];

pub(crate) fn print_dashboard_table(
    projects: &[ProjectSummary],
    history: Option<&History>,
    style: TableStyle<'_>,
) {
    let mut table = create_styled_table();

    let mut header = vec![style.header("Project"), style.header("Latest")];
    if style.compact {
        header.extend([style.header("Runs"), style.header("Pass rate")]);
    } else {
        header.extend([
            style.header("Runs"),
            style.header("Passed"),
            style.header("Failed"),
            style.header("Pass rate"),
            style.header("Last run"),
        ]);
    }
    if history.is_some() {
        header.push(style.header("Recent"));
    }
    table.set_header(header);

    let palette = style.palette;
    let mut total_runs = 0i64;
    let mut failing = 0usize;

    for (i, project) in projects.iter().enumerate() {
        total_runs += project.total_runs;
        if StatusClass::of(&project.latest_status) == StatusClass::Failed {
            failing += 1;
        }

        let rate = format_percent(project.pass_rate(), style.number_format);
        let mut row = vec![Cell::new(&project.project), style.status(&project.latest_status)];
        if style.compact {
            row.extend([
                style.count(project.total_runs, None),
                right_cell(&rate, None, false),
            ]);
        } else {
            row.extend([
                style.count(project.total_runs, None),
                style.count(project.passed_runs, Some(palette.success)),
                style.count(project.failed_runs, Some(palette.failed)),
                right_cell(&rate, None, false),
                style.muted(&format_date(&project.last_run, style.timezone)),
            ]);
        }
        if let Some(history) = history {
            let strip = history
                .get(i)
                .and_then(Option::as_ref)
                .map(|statuses| style.strip(statuses))
                .unwrap_or_default();
            row.push(Cell::new(strip));
        }
        table.add_row(row);
    }

    println!("\n  Test Dashboard\n");
    println!("{table}");
    println!(
        "\n  {} projects, {} runs, {} failing | times in {}\n",
        format_number(projects.len() as i64, style.number_format),
        format_number(total_runs, style.number_format),
        failing,
        style.timezone
    );
    style.print_footer();
}

/// Project summaries as JSON; `href` is the project's page on the web dashboard
pub(crate) fn output_dashboard_json(
    projects: &[ProjectSummary],
    history: Option<&History>,
    prefix: &PathPrefix,
) -> String {
    let output: Vec<serde_json::Value> = projects
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let mut obj = serde_json::json!({
                "project": project.project,
                "latest_status": project.latest_status,
                "status_class": status_class(&project.latest_status),
                "total_runs": project.total_runs,
                "passed_runs": project.passed_runs,
                "failed_runs": project.failed_runs,
                "pass_rate": project.pass_rate(),
                "last_run": project.last_run,
                "href": Route::Project {
                    name: project.project.clone(),
                }
                .href(prefix),
            });
            if let Some(history) = history {
                obj["recent"] = match history.get(i).and_then(Option::as_ref) {
                    Some(statuses) => serde_json::json!(statuses),
                    None => serde_json::Value::Null,
                };
            }
            obj
        })
        .collect();

    to_pretty_json(&serde_json::Value::Array(output))
}
