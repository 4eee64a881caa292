use clap::Parser;

use clue_options::args::Args;
use clue_options::error::OptionsError;
use clue_options::options;
use clue_options::output::{self, args::OutputFormat};
use clue_options::visuals;

fn main() -> Result<(), OptionsError> {
    let args = Args::parse();

    let (parsed, leftovers) = match options::add_args(&args.mode, &args.rest) {
        Err(OptionsError::Usage(err)) => err.exit(),
        Err(err @ OptionsError::Mode(_)) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
        result => result?,
    };

    if !leftovers.is_empty() && !args.output.quiet {
        eprintln!(
            "Warning: ignoring arguments not recognized by mode '{}': {}",
            parsed.mode(),
            leftovers.join(" ")
        );
    }

    match args.output.format {
        OutputFormat::Table => visuals::print_detailed(&parsed, &leftovers),
        OutputFormat::Json => println!("{}", output::to_json(&parsed, &leftovers)?),
    }

    Ok(())
}
