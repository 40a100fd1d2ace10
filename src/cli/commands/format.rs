//! `calcert convert|uncertainty|correction|decimals|fixed` - one-shot formatting

use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{
    count_decimals, format_to_decimal_string, Config, RangeFormatter, RawReading, Reading,
};
use crate::entities::MassUnit;

#[derive(clap::Args, Debug)]
pub struct ValueArgs {
    /// Reading in grams
    #[arg(allow_negative_numbers = true)]
    pub value: String,

    /// Instrument resolution in grams
    #[arg(long, short = 'r', allow_negative_numbers = true)]
    pub resolution: f64,

    /// Display unit (default from config, else gram)
    #[arg(long, short = 'u', value_enum)]
    pub unit: Option<MassUnit>,
}

#[derive(clap::Args, Debug)]
pub struct DecimalsArgs {
    #[arg(allow_negative_numbers = true)]
    pub value: f64,
}

#[derive(clap::Args, Debug)]
pub struct FixedArgs {
    #[arg(allow_negative_numbers = true)]
    pub value: f64,

    /// Decimal places (negative values are treated as 0)
    #[arg(long, short = 'p', allow_negative_numbers = true)]
    pub precision: i32,
}

/// Which one-shot formatter to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Convert,
    Uncertainty,
    Correction,
}

#[derive(Serialize)]
struct FormattedValue<'a> {
    input: &'a str,
    resolution: f64,
    unit: MassUnit,
    display: String,
}

pub fn run(kind: ValueKind, args: ValueArgs, global: &GlobalOpts) -> Result<()> {
    let unit = args.unit.unwrap_or_else(|| Config::load().default_unit());
    let reading = parse_reading(&args.value);
    let fmt = RangeFormatter::new(args.resolution, unit);

    let display = match kind {
        ValueKind::Convert => fmt.value(reading),
        ValueKind::Uncertainty => fmt.uncertainty(reading),
        ValueKind::Correction => fmt.correction(reading),
    };

    let result = FormattedValue {
        input: &args.value,
        resolution: args.resolution,
        unit,
        display,
    };
    print_result(&result, &result.display, global)
}

pub fn run_decimals(args: DecimalsArgs, global: &GlobalOpts) -> Result<()> {
    let decimals = count_decimals(args.value);
    print_result(&decimals, &decimals.to_string(), global)
}

pub fn run_fixed(args: FixedArgs, global: &GlobalOpts) -> Result<()> {
    let display = format_to_decimal_string(args.value, args.precision);
    print_result(&display, &display, global)
}

/// Command-line values are text; numeric text counts as a reading
fn parse_reading(value: &str) -> Reading {
    RawReading::from(value).lenient()
}

fn print_result<T: Serialize>(value: &T, plain: &str, global: &GlobalOpts) -> Result<()> {
    match global.output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(value).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(value).into_diagnostic()?);
        }
        _ => println!("{}", plain),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reading() {
        assert_eq!(parse_reading("12.345"), Reading::Valid(12.345));
        assert_eq!(parse_reading("-0.5"), Reading::Valid(-0.5));
        assert_eq!(parse_reading("abc"), Reading::Invalid);
        assert_eq!(parse_reading("inf"), Reading::Invalid);
    }
}
