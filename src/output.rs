use colored::Colorize;

use crate::{
    dataset::QualityIssue,
    reports::{ReportResult, Table}
};

/// Output format for results
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
    Csv
}

/// Output options
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format:  OutputFormat,
    pub colored: bool,
    pub verbose: bool
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format:  OutputFormat::Text,
            colored: true,
            verbose: false
        }
    }
}

/// Format a set of report results based on output options
pub fn format_reports(results: &[ReportResult], opts: &OutputOptions) -> String {
    match opts.format {
        OutputFormat::Json => serde_json::to_string_pretty(results).unwrap_or_default(),
        OutputFormat::Yaml => serde_yaml::to_string(results).unwrap_or_default(),
        OutputFormat::Csv => format_csv(results),
        OutputFormat::Text => format_text(results, opts)
    }
}

/// Format data-quality warnings for terminal display
pub fn format_quality_issues(issues: &[QualityIssue], opts: &OutputOptions) -> String {
    let header = format!("Data quality warnings ({}):", issues.len());
    let mut output = if opts.colored {
        header.yellow().bold().to_string()
    } else {
        header
    };
    output.push('\n');
    for issue in issues {
        output.push_str(&format!(
            "  {} {}: {}\n",
            issue.location, issue.date, issue.message
        ));
    }
    output
}

fn format_text(results: &[ReportResult], opts: &OutputOptions) -> String {
    let mut output = String::new();
    for result in results {
        let title = format!("=== {} ===", result.name);
        if opts.colored {
            output.push_str(&title.cyan().bold().to_string());
        } else {
            output.push_str(&title);
        }
        output.push('\n');
        output.push_str(&render_table(&result.table));
        if opts.verbose {
            output.push_str(&format!(
                "Category: {}, Rows: {}\n",
                result.category,
                result.table.len()
            ));
        }
        output.push('\n');
    }
    output
}

fn render_table(table: &Table) -> String {
    if table.is_empty() {
        return String::from("(no rows)\n");
    }

    // Render every cell up front so column widths can be computed
    let rendered: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();

    let mut widths: Vec<usize> = table.columns.iter().map(|c| c.len()).collect();
    for row in &rendered {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() && cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let mut out = String::new();
    for (i, column) in table.columns.iter().enumerate() {
        out.push_str(&format!("{:<width$}  ", column, width = widths[i]));
    }
    out.push('\n');
    for width in &widths {
        out.push_str(&"-".repeat(*width));
        out.push_str("  ");
    }
    out.push('\n');
    for row in &rendered {
        for (i, cell) in row.iter().enumerate() {
            let width = widths.get(i).copied().unwrap_or(0);
            out.push_str(&format!("{:<width$}  ", cell, width = width));
        }
        out.push('\n');
    }
    out
}

fn format_csv(results: &[ReportResult]) -> String {
    let mut output = String::new();
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        // Comment line separates blocks when several reports are exported
        output.push_str(&format!("# {}\n", result.id));
        output.push_str(&table_to_csv(&result.table));
    }
    output
}

fn table_to_csv(table: &Table) -> String {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let header: Vec<&str> = table.columns.iter().map(|c| c.as_str()).collect();
    if writer.write_record(&header).is_err() {
        return String::new();
    }
    for row in &table.rows {
        let record: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
        if writer.write_record(&record).is_err() {
            return String::new();
        }
    }
    writer
        .into_inner()
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .unwrap_or_default()
}
