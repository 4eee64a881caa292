use clap::{Args, ValueEnum};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Presentation of the parsed option set.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    #[arg(
        long,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Output format: table or json",
    )]
    pub format: OutputFormat,

    /// Suppress warnings about unrecognized arguments.
    #[arg(long, help = "Suppress warnings about unrecognized arguments")]
    pub quiet: bool,
}
