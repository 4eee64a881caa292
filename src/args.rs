use crate::output::args::OutputArgs;
use clap::Parser;

// Top-level CLI parser. Everything after MODE is handed to the option registrar untouched.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Parse and display the CLUE analysis options for one mode",
    after_help = "Modes: resp_res, clusters, layers. Output options (--format, --quiet) must come before MODE; everything after MODE goes to the mode. Run 'clue-options <MODE> -- --help' to list a mode's options."
)]
pub struct Args {
    #[command(flatten)]
    pub output: OutputArgs,

    #[arg(value_name = "MODE", help = "Analysis mode: resp_res, clusters or layers")]
    pub mode: String,

    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "Arguments for the selected mode"
    )]
    pub rest: Vec<String>,
}
