//! `calcert due` command - resolve a recalibration due date

use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{resolve_due_date, RawReading};
use crate::entities::{DateLike, DueDateRequest};

#[derive(clap::Args, Debug)]
pub struct DueArgs {
    /// Whether to compute the due date (yes) or use --due (no)
    #[arg(long, short = 'r', value_name = "yes|no")]
    pub requested: Option<String>,

    /// Calibration date (YYYY-MM-DD, DD/MM/YYYY, RFC 3339, ...)
    #[arg(long, short = 'c', value_name = "DATE")]
    pub calibrated: Option<String>,

    /// Months until recalibration
    #[arg(long, short = 'm', allow_negative_numbers = true)]
    pub months: Option<String>,

    /// Due date text used when --requested no
    #[arg(long, short = 'd', value_name = "TEXT")]
    pub due: Option<String>,
}

#[derive(Serialize)]
struct DueOutput<'a> {
    request: &'a DueDateRequest,
    due_date: &'a str,
}

impl From<DueArgs> for DueDateRequest {
    fn from(args: DueArgs) -> Self {
        DueDateRequest {
            due_date_requested: args.requested,
            date_calibrated: args.calibrated.map(DateLike::Text),
            due_date_duration: args.months.map(RawReading::Text),
            due_date: args.due,
        }
    }
}

pub fn run(args: DueArgs, global: &GlobalOpts) -> Result<()> {
    let request = DueDateRequest::from(args);
    let due_date = resolve_due_date(&request);

    let output = DueOutput {
        request: &request,
        due_date: &due_date,
    };
    match global.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?),
        OutputFormat::Yaml => print!("{}", serde_yml::to_string(&output).into_diagnostic()?),
        _ => println!("{}", due_date),
    }

    Ok(())
}
