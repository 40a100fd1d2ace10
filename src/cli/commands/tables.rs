//! `calcert tables` command - show or validate traceability lookup tables

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::cli::helpers::{or_dash, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Config, TraceabilityTables, DEFAULT_LAB_INDEX};

#[derive(clap::Args, Debug)]
pub struct TablesArgs {
    /// Validate a lookup-table file instead of showing the active tables
    #[arg(long, value_name = "PATH")]
    pub check: Option<PathBuf>,
}

pub fn run(args: TablesArgs, global: &GlobalOpts) -> Result<()> {
    if let Some(path) = args.check {
        let tables = TraceabilityTables::load(&path)?;
        println!(
            "{} {} ({} countries, {} accreditation bodies, {} labs)",
            style("✓").green(),
            path.display(),
            tables.countries.len(),
            tables.accreditation_bodies.len(),
            tables.calibration_labs.len()
        );
        if tables.default_lab().is_none() {
            println!(
                "{} fewer than {} labs: records without a lab selection get no accreditation number",
                style("!").yellow(),
                DEFAULT_LAB_INDEX + 1
            );
        }
        return Ok(());
    }

    let tables = Config::load().with_tables(global.tables.clone()).tables()?;

    match global.output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&tables).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&tables).into_diagnostic()?);
        }
        _ => print_tables(&tables),
    }
    Ok(())
}

fn print_tables(tables: &TraceabilityTables) {
    println!("{}", style("Fixed statements").bold());
    for (code, statement) in &tables.map {
        println!("  {}  {}", style(code).cyan(), truncate_str(statement, 100));
    }

    println!("\n{}", style("Countries").bold());
    for (idx, country) in tables.countries.iter().enumerate() {
        let marker = if idx == 0 { " (default)" } else { "" };
        println!("  {}{}", country, style(marker).dim());
    }

    println!("\n{}", style("Accreditation bodies").bold());
    for (idx, body) in tables.accreditation_bodies.iter().enumerate() {
        let marker = if idx == 0 { " (default)" } else { "" };
        println!("  {}{}", body, style(marker).dim());
    }

    println!("\n{}", style("Calibration labs").bold());
    let mut builder = Builder::default();
    builder.push_record(["KEY", "ACCREDITATION", "LABEL", "SIGNATORY"].map(String::from));
    for (idx, lab) in tables.calibration_labs.iter().enumerate() {
        let key = if idx == DEFAULT_LAB_INDEX {
            format!("{} *", lab.value)
        } else {
            lab.value.clone()
        };
        builder.push_record([
            key,
            lab.accreditation_no.clone(),
            or_dash(lab.label.as_deref().unwrap_or_default()).to_string(),
            truncate_str(&lab.signatory, 48),
        ]);
    }
    let mut table = builder.build();
    table.with(Style::sharp());
    println!("{}", table);
    println!("{}", style("* default lab").dim());
}
