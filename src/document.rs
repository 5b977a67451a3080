use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::error::ReportError;
use crate::filename::FilenameParser;
use crate::render::RowRenderer;
use crate::table::AccuracyTable;

/// Document preamble through the table header row
pub const PREAMBLE: &str = concat!(
    "\\documentclass{article}\n",
    "\\usepackage{geometry}\n",
    "\\usepackage{booktabs}\n",
    "\\usepackage{multirow}\n",
    "\\usepackage{xcolor}\n\n",
    "\\begin{document}\n\n",
    "\\begin{table}[htbp]\n",
    "\\centering\n",
    "\\caption{Accuracy Results}\n",
    "\\label{tab:accuracy_results}\n",
    "\\begin{tabular}{lcccccccccc}\n",
    "\\toprule\n",
    "\\textbf{Backbone} & \\textbf{Feature Fusion} & \\textbf{FD} & \\textbf{FS} & ",
    "\\textbf{MD} & \\textbf{MS} & \\textbf{SS} & \\textbf{BB} & \\textbf{SiBs} & ",
    "\\textbf{Average} \\\\\n",
);

/// Closing scaffold after the last body row
pub const CLOSING: &str = concat!(
    "\\bottomrule\n",
    "\\end{tabular}\n",
    "\\end{table}\n\n",
    "\\end{document}\n",
);

/// Outcome of one document run
#[derive(Debug, Clone, Default)]
pub struct ReportSummary {
    /// File the document was written to; empty when written to another sink
    pub output_path: PathBuf,
    /// Body rows written to the document
    pub rows_written: usize,
    /// `.csv` files whose names did not follow the naming pattern
    pub skipped_files: Vec<String>,
    /// Matching files that had no data rows
    pub empty_tables: Vec<String>,
    /// Backbones in the order their first row was written
    pub backbones: Vec<String>,
    pub processing_time: Duration,
}

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Output: {}\n  Rows written: {}\n  Backbones: {}\n  Skipped files: {}\n  Empty tables: {}\n  Processing time: {:?}",
            self.output_path.display(),
            self.rows_written,
            self.backbones.join(", "),
            self.skipped_files.len(),
            self.empty_tables.len(),
            self.processing_time
        )
    }
}

/// List the `.csv` entries of a directory.
///
/// Without `sort` the platform's listing order is kept as is.
pub fn list_csv_entries(dir: &Path, sort: bool) -> Result<Vec<PathBuf>, ReportError> {
    let entries = fs::read_dir(dir)?.map(|entry| entry.map(|e| e.path()));
    collect_csv_entries(entries, sort)
}

// Any unreadable entry fails the whole listing
fn collect_csv_entries<I>(entries: I, sort: bool) -> Result<Vec<PathBuf>, ReportError>
where
    I: IntoIterator<Item = io::Result<PathBuf>>,
{
    let mut entries = entries.into_iter().collect::<Result<Vec<_>, _>>()?;
    entries.retain(|path| {
        path.file_name()
            .map(|name| name.to_string_lossy().ends_with(".csv"))
            .unwrap_or(false)
    });

    if sort {
        entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }

    Ok(entries)
}

/// Write the complete LaTeX document for every accuracy CSV in `input_dir`
pub fn write_document<W: Write>(
    input_dir: &Path,
    writer: &mut W,
    sort: bool,
) -> Result<ReportSummary, ReportError> {
    let start_time = Instant::now();
    let parser = FilenameParser::new()?;
    let mut renderer = RowRenderer::new();
    let mut summary = ReportSummary::default();

    writer.write_all(PREAMBLE.as_bytes())?;

    for path in list_csv_entries(input_dir, sort)? {
        let filename = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let parsed = match parser.parse(&filename) {
            Some(parsed) => parsed,
            None => {
                log::warn!("Skipping {}: name does not match <backbone>_<fusion>_accuracy.csv", filename);
                summary.skipped_files.push(filename);
                continue;
            }
        };

        let table = AccuracyTable::from_path(&path)?;
        let row = renderer.render_row(&table, &parsed.backbone, &parsed.fusion_key)?;
        writer.write_all(row.as_bytes())?;

        if row.is_empty() {
            log::debug!("{} has no rows", filename);
            summary.empty_tables.push(filename);
        } else {
            log::debug!("Rendered {} ({} values)", filename, table.len());
            summary.rows_written += 1;
        }
    }

    writer.write_all(CLOSING.as_bytes())?;

    summary.backbones = renderer.backbones().to_vec();
    summary.processing_time = start_time.elapsed();
    Ok(summary)
}

/// Generate the LaTeX report described by the configuration, replacing any existing output file
pub fn generate_report(config: &Config) -> Result<ReportSummary, ReportError> {
    let input_dir = config.get_input_dir();
    let output_path = config.get_output_path();

    log::info!("Reading accuracy CSVs from: {}", input_dir.display());
    log::info!("Writing LaTeX table to: {}", output_path.display());

    let mut writer = BufWriter::new(File::create(&output_path)?);
    let mut summary = write_document(&input_dir, &mut writer, config.sort_entries)?;
    writer.flush()?;
    summary.output_path = output_path;

    log::info!("Report complete\n  {}", summary);
    Ok(summary)
}
