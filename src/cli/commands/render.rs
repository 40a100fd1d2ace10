//! `calcert render` command - format certificate tables from record files

use console::style;
use log::debug;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use tabled::builder::Builder;
use tabled::settings::Style;
use walkdir::WalkDir;

use crate::cli::helpers::or_dash;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{CertificateSheet, Config, RangeSheet, TraceabilityResolver};
use crate::entities::record::is_record_file;
use crate::entities::CalibrationRecord;

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Record files or directories (searched recursively for .yaml/.yml/.json)
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Continue with the next file after a file fails to load
    #[arg(long)]
    pub keep_going: bool,
}

/// A rendered record and where it came from
#[derive(Serialize)]
struct RenderedRecord {
    file: String,
    #[serde(flatten)]
    sheet: CertificateSheet,
}

pub fn run(args: RenderArgs, global: &GlobalOpts) -> Result<()> {
    let resolver = Config::load().with_tables(global.tables.clone()).resolver()?;
    let files = collect_record_files(&args.paths);
    if files.is_empty() {
        return Err(miette::miette!("No record files found"));
    }

    let mut rendered = Vec::with_capacity(files.len());
    let mut failed = 0usize;
    for path in &files {
        match CalibrationRecord::load(path) {
            Ok(record) => rendered.push(render_record(path, &record, &resolver)),
            Err(e) => {
                if !args.keep_going {
                    return Err(e.into());
                }
                failed += 1;
                eprintln!("{} {}", style("✗").red(), path.display());
                eprintln!("{:?}", miette::Report::new(e));
            }
        }
    }

    match global.output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rendered).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&rendered).into_diagnostic()?);
        }
        OutputFormat::Csv => write_accuracy_csv(&rendered, b',')?,
        OutputFormat::Tsv => write_accuracy_csv(&rendered, b'\t')?,
        OutputFormat::Auto | OutputFormat::Table => {
            for record in &rendered {
                print_sheet(record);
            }
        }
    }

    if failed > 0 {
        return Err(miette::miette!("{} of {} record file(s) failed to load", failed, files.len()));
    }
    Ok(())
}

fn render_record(path: &Path, record: &CalibrationRecord, resolver: &TraceabilityResolver) -> RenderedRecord {
    debug!("rendering {}", path.display());
    RenderedRecord {
        file: path.display().to_string(),
        sheet: CertificateSheet::build(record, resolver),
    }
}

/// Expand directories into the record files beneath them, sorted
pub fn collect_record_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(path)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file() && is_record_file(e.path()))
                .map(|e| e.into_path())
                .collect();
            found.sort();
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }
    files
}

fn print_sheet(record: &RenderedRecord) {
    let sheet = &record.sheet;
    println!("{}", style("─".repeat(60)).dim());
    println!(
        "{}: {}",
        style("Certificate").bold(),
        style(sheet.certificate_no.as_deref().unwrap_or(&record.file)).cyan()
    );
    println!("{}", style("─".repeat(60)).dim());

    for (idx, range) in sheet.ranges.iter().enumerate() {
        println!(
            "\n{} {}  {} {} to {} {}  (resolution {} {})",
            style("Range").bold(),
            idx + 1,
            or_dash(&range.range_min),
            range.unit_symbol,
            or_dash(&range.range_max),
            range.unit_symbol,
            or_dash(&range.resolution),
            range.unit_symbol,
        );
        print_range_tables(range);
    }

    println!("\n{}", style("Traceability").bold());
    println!("  {}", or_dash(&sheet.traceability));
    println!("{}  {}", style("Due date").bold(), sheet.due_date);
    println!();
}

fn print_range_tables(range: &RangeSheet) {
    let u = range.unit_symbol;

    if !range.accuracy.is_empty() {
        let mut builder = Builder::default();
        builder.push_record([
            "#".to_string(),
            format!("Nominal ({u})"),
            format!("Correction ({u})"),
            format!("Expanded uncertainty ({u})"),
            "k".to_string(),
        ]);
        for row in &range.accuracy {
            builder.push_record([
                row.point.to_string(),
                row.nominal.clone(),
                row.correction.clone(),
                row.expanded_uncertainty.clone(),
                row.coverage_factor.clone(),
            ]);
        }
        let mut table = builder.build();
        table.with(Style::rounded());
        println!("{}", style("Accuracy").underlined());
        println!("{}", table);
    }

    if !range.repeatability.is_empty() {
        let mut builder = Builder::default();
        builder.push_record([
            "#".to_string(),
            format!("Std deviation ({u})"),
            format!("Max difference ({u})"),
        ]);
        for row in &range.repeatability {
            builder.push_record([row.point.to_string(), row.std_dev.clone(), row.max_diff.clone()]);
        }
        let mut table = builder.build();
        table.with(Style::rounded());
        println!("{}", style("Repeatability").underlined());
        println!("{}", table);
    }

    let ecc = &range.eccentricity;
    if !ecc.values.is_empty() || !ecc.test_load.is_empty() {
        let mut builder = Builder::default();
        builder.push_record(["Position".to_string(), format!("Reading ({u})")]);
        for (pos, value) in ecc.values.iter().enumerate() {
            builder.push_record([(pos + 1).to_string(), value.clone()]);
        }
        println!(
            "{} (test load {} {u}, max error {} {u})",
            style("Eccentricity").underlined(),
            or_dash(&ecc.test_load),
            or_dash(&ecc.max_error),
        );
        let mut table = builder.build();
        table.with(Style::rounded());
        println!("{}", table);
    }
}

fn write_accuracy_csv(records: &[RenderedRecord], delimiter: u8) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(io::stdout());
    wtr.write_record([
        "certificate",
        "range",
        "unit",
        "point",
        "nominal",
        "correction",
        "expanded_uncertainty",
        "coverage_factor",
    ])
    .into_diagnostic()?;

    for record in records {
        let certificate = record.sheet.certificate_no.as_deref().unwrap_or(&record.file);
        for (idx, range) in record.sheet.ranges.iter().enumerate() {
            let range_no = (idx + 1).to_string();
            for row in &range.accuracy {
                let point = row.point.to_string();
                wtr.write_record([
                    certificate,
                    range_no.as_str(),
                    range.unit_symbol,
                    point.as_str(),
                    row.nominal.as_str(),
                    row.correction.as_str(),
                    row.expanded_uncertainty.as_str(),
                    row.coverage_factor.as_str(),
                ])
                .into_diagnostic()?;
            }
        }
    }
    wtr.flush().into_diagnostic()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_collect_record_files_walks_directories() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("2024/q1")).unwrap();
        fs::write(tmp.path().join("2024/q1/b.yaml"), "{}").unwrap();
        fs::write(tmp.path().join("2024/a.json"), "{}").unwrap();
        fs::write(tmp.path().join("2024/notes.txt"), "").unwrap();

        let files = collect_record_files(&[tmp.path().to_path_buf()]);
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| is_record_file(f)));
    }

    #[test]
    fn test_collect_keeps_explicit_files() {
        let explicit = PathBuf::from("missing.yaml");
        assert_eq!(collect_record_files(&[explicit.clone()]), vec![explicit]);
    }
}
