use clap::Parser;
use miette::Result;
use calcert::cli::commands::format::ValueKind;
use calcert::cli::{init_logging, Cli, Commands};

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    init_logging(cli.global.verbose);
    let global = &cli.global;

    match cli.command {
        Commands::Convert(args) => calcert::cli::commands::format::run(ValueKind::Convert, args, global),
        Commands::Uncertainty(args) => {
            calcert::cli::commands::format::run(ValueKind::Uncertainty, args, global)
        }
        Commands::Correction(args) => {
            calcert::cli::commands::format::run(ValueKind::Correction, args, global)
        }
        Commands::Decimals(args) => calcert::cli::commands::format::run_decimals(args, global),
        Commands::Fixed(args) => calcert::cli::commands::format::run_fixed(args, global),
        Commands::Trace(args) => calcert::cli::commands::trace::run(args, global),
        Commands::Due(args) => calcert::cli::commands::due::run(args, global),
        Commands::Render(args) => calcert::cli::commands::render::run(args, global),
        Commands::Tables(args) => calcert::cli::commands::tables::run(args, global),
        Commands::Completions(args) => calcert::cli::commands::completions::run(args),
    }
}
