use comfy_table::Cell;

use crate::core::{RunTally, TestResult, status_class};
use crate::output::format::{TableStyle, create_styled_table, format_number, to_pretty_json};
use crate::utils::format_date;

#[derive(Debug, Clone, Copy)]
pub(crate) struct RunTableOptions<'a> {
    pub(crate) title: &'a str,
    /// Hide the project column when every row belongs to the same project
    pub(crate) show_project: bool,
}

pub(crate) fn print_results_table(
    results: &[TestResult],
    options: RunTableOptions<'_>,
    style: TableStyle<'_>,
) {
    let mut table = create_styled_table();

    let mut header = vec![style.header("Time")];
    if options.show_project {
        header.push(style.header("Project"));
    }
    header.push(style.header("Spec"));
    if !style.compact {
        header.push(style.header("Browser"));
    }
    header.push(style.header("Status"));
    if !style.compact {
        header.extend([style.header("Pipeline"), style.header("Job")]);
    }
    table.set_header(header);

    for result in results {
        let mut row = vec![style.muted(&format_date(&result.created_at, style.timezone))];
        if options.show_project {
            row.push(Cell::new(&result.project));
        }
        row.push(Cell::new(&result.spec));
        if !style.compact {
            row.push(Cell::new(&result.browser));
        }
        row.push(style.status(&result.status));
        if !style.compact {
            row.extend([Cell::new(&result.pipeline_id), Cell::new(&result.job_id)]);
        }
        table.add_row(row);
    }

    let tally = RunTally::from_results(results);
    let fmt = style.number_format;

    println!("\n  {}\n", options.title);
    println!("{table}");
    println!(
        "\n  {} runs: {} passed, {} failed, {} other | times in {}\n",
        format_number(tally.total(), fmt),
        format_number(tally.passed, fmt),
        format_number(tally.failed, fmt),
        format_number(tally.other, fmt),
        style.timezone
    );
    style.print_footer();
}

pub(crate) fn output_results_json(results: &[TestResult]) -> String {
    let output: Vec<serde_json::Value> = results
        .iter()
        .map(|result| {
            serde_json::json!({
                "id": result.id,
                "project": result.project,
                "spec": result.spec,
                "browser": result.browser,
                "status": result.status,
                "status_class": status_class(&result.status),
                "pipeline_id": result.pipeline_id,
                "job_id": result.job_id,
                "job_url": result.job_url,
                "created_at": result.created_at,
            })
        })
        .collect();

    to_pretty_json(&serde_json::Value::Array(output))
}
