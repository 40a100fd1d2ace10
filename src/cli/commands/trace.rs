//! `calcert trace` command - resolve a traceability statement

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;
use crate::entities::TraceabilityConfig;

#[derive(clap::Args, Debug)]
pub struct TraceArgs {
    /// Traceability type code (1, 2 or 3)
    #[arg(long = "type", short = 't', value_name = "CODE")]
    pub traceability_type: Option<String>,

    /// Country for type 3 (default: first table entry)
    #[arg(long)]
    pub country: Option<String>,

    /// Accreditation body for type 3 (default: first table entry)
    #[arg(long)]
    pub body: Option<String>,

    /// Calibration lab key for type 3, repeatable (default: fifth table entry)
    #[arg(long = "lab", short = 'l', value_name = "KEY")]
    pub labs: Vec<String>,
}

#[derive(Serialize)]
struct TraceOutput<'a> {
    config: &'a TraceabilityConfig,
    labs: Vec<&'a str>,
    statement: &'a str,
}

impl TraceArgs {
    fn to_config(&self) -> TraceabilityConfig {
        TraceabilityConfig {
            traceability_type: self.traceability_type.clone(),
            traceability_country: self.country.clone(),
            traceability_accreditation_body: self.body.clone(),
            traceability_calibration_lab: if self.labs.is_empty() {
                None
            } else {
                Some(self.labs.clone())
            },
        }
    }
}

pub fn run(args: TraceArgs, global: &GlobalOpts) -> Result<()> {
    let resolver = Config::load().with_tables(global.tables.clone()).resolver()?;
    let config = args.to_config();
    let statement = resolver.resolve_statement(&config);

    let is_composed = config.traceability_type.as_deref().map(str::trim) == Some("3");
    let labs: Vec<&str> = if is_composed {
        resolver
            .matched_labs(&config)
            .iter()
            .map(|lab| lab.value.as_str())
            .collect()
    } else {
        Vec::new()
    };

    match global.output {
        OutputFormat::Json | OutputFormat::Yaml => {
            let output = TraceOutput {
                config: &config,
                labs,
                statement: &statement,
            };
            if global.output == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                print!("{}", serde_yml::to_string(&output).into_diagnostic()?);
            }
        }
        _ => {
            if statement.is_empty() {
                eprintln!(
                    "{} No traceability statement for this selection",
                    style("!").yellow()
                );
            }
            println!("{}", statement);
        }
    }

    Ok(())
}
