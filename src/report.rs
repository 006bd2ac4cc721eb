/*!
 * Reporting functionality for clipmd
 *
 * Renders a summary of a collection run as console tables using the
 * tabled library.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::delivery::Delivery;
use crate::types::Collection;
use crate::utils::{format_file_size, format_number};

/// Files listed individually before the table switches to the largest ten
const FULL_LISTING_LIMIT: usize = 15;
const TOP_FILES: usize = 10;

/// Information about a file in the report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReportInfo {
    /// Path as it appears in the block header
    pub path: String,
    /// Number of lines in the trimmed content
    pub lines: usize,
    /// Number of characters in the trimmed content
    pub chars: usize,
}

/// Statistics for one collection run
#[derive(Debug, Clone)]
pub struct CollectionReport {
    /// Root directory that was collected
    pub root: String,
    /// Time taken to collect and copy
    pub duration: Duration,
    /// Number of blocks copied
    pub files_collected: usize,
    /// Number of files skipped
    pub files_skipped: usize,
    /// Total number of lines
    pub total_lines: usize,
    /// Total number of characters
    pub total_chars: usize,
    /// Size of the clipboard payload in bytes
    pub output_bytes: usize,
    /// Details for each collected file, in traversal order
    pub file_details: Vec<FileReportInfo>,
}

impl CollectionReport {
    /// Build a report from a finished run
    pub fn new(collection: &Collection, delivery: &Delivery, duration: Duration) -> Self {
        let file_details: Vec<FileReportInfo> = collection
            .blocks
            .iter()
            .map(|block| FileReportInfo {
                path: block.path.clone(),
                lines: block.lines(),
                chars: block.chars(),
            })
            .collect();

        Self {
            root: collection.root().display().to_string(),
            duration,
            files_collected: delivery.blocks,
            files_skipped: delivery.skipped,
            total_lines: file_details.iter().map(|f| f.lines).sum(),
            total_chars: file_details.iter().map(|f| f.chars).sum(),
            output_bytes: delivery.bytes,
            file_details,
        }
    }
}

/// Report generator for collection runs
#[derive(Debug, Default)]
pub struct Reporter;

impl Reporter {
    pub fn new() -> Self {
        Self
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &CollectionReport) {
        println!("\n{}", self.generate_report(report));
    }

    /// Generate the report text
    pub fn generate_report(&self, report: &CollectionReport) -> String {
        let files_title = if report.file_details.len() > FULL_LISTING_LIMIT {
            "📋  TOP 10 LARGEST FILES BY CHARACTER COUNT"
        } else {
            "📋  COLLECTED FILES"
        };

        format!(
            "{}\n{}\n\n{}\n{}",
            files_title,
            self.create_files_table(report),
            "✅  COPY COMPLETE",
            self.create_summary_table(report)
        )
    }

    fn create_summary_table(&self, report: &CollectionReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: &'static str,

            #[tabled(rename = "Value")]
            value: String,
        }

        let rows = vec![
            SummaryRow {
                key: "📂 Root",
                value: report.root.clone(),
            },
            SummaryRow {
                key: "⏱️ Process Time",
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "📄 Files Collected",
                value: format_number(report.files_collected),
            },
            SummaryRow {
                key: "⚠️ Files Skipped",
                value: format_number(report.files_skipped),
            },
            SummaryRow {
                key: "📝 Total Lines",
                value: format_number(report.total_lines),
            },
            SummaryRow {
                key: "📦 LLM Tokens",
                value: format!(
                    "{} tokens (estimated)",
                    format_number(report.total_chars / 4)
                ),
            },
            SummaryRow {
                key: "📋 Clipboard Size",
                value: format_file_size(report.output_bytes as u64),
            },
        ];

        styled(Table::new(rows))
    }

    fn create_files_table(&self, report: &CollectionReport) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Lines")]
            lines: String,

            #[tabled(rename = "Est. Tokens")]
            tokens: String,
        }

        let files = largest_files(&report.file_details);

        let rows: Vec<FileRow> = files
            .into_iter()
            .map(|info| FileRow {
                path: info.path.clone(),
                lines: format_number(info.lines),
                tokens: format_number(info.chars / 4),
            })
            .collect();

        styled(Table::new(rows))
    }
}

/// All files when the listing is short, otherwise the largest ten by
/// character count
fn largest_files(details: &[FileReportInfo]) -> Vec<&FileReportInfo> {
    let mut files: Vec<&FileReportInfo> = details.iter().collect();
    if files.len() > FULL_LISTING_LIMIT {
        files.sort_by(|a, b| b.chars.cmp(&a.chars));
        files.truncate(TOP_FILES);
    }
    files
}

fn styled(mut table: Table) -> String {
    table
        .with(Style::rounded())
        .with(Padding::new(1, 1, 0, 0))
        .with(Modify::new(Columns::new(..)).with(Alignment::left()));

    table.to_string()
}
