use clap::Args;

/// Global arguments that apply to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Alphabet to encode with or decode from
    #[arg(short = 'a', long, global = true, default_value = "standard")]
    pub alphabet: String,

    /// Minimum length of encoded output (overrides the alphabet's setting)
    #[arg(short = 'p', long, global = true, value_name = "N")]
    pub padding: Option<usize>,

    /// Suppress informational notices
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Maximum input size in bytes (0 = unlimited)
    #[arg(long, global = true, default_value = "104857600")]
    pub max_size: usize,

    /// Process files exceeding --max-size limit
    #[arg(long, global = true)]
    pub force: bool,
}
