mod args;
mod config;
mod global;
mod handlers;

use args::Commands;
use base62::AlphabetRegistry;
use clap::Parser;
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "base62")]
#[command(version)]
#[command(about = "Encode bytes and integers as compact, URL-safe base62 text", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.global.no_color {
        // SAFETY: set before any other thread exists; error rendering reads it later.
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }
    }

    let registry = AlphabetRegistry::load_with_overrides()?;
    if !cli.global.quiet {
        for warning in &registry.warnings {
            eprintln!("Warning: {}", warning);
        }
    }

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &cli.global, &registry),
        Commands::Decode(args) => handlers::decode::handle(args, &cli.global, &registry),
        Commands::IntEncode(args) => handlers::int::handle_encode(args, &cli.global, &registry),
        Commands::IntDecode(args) => handlers::int::handle_decode(args, &cli.global, &registry),
        Commands::List(args) => handlers::list::handle(args, &cli.global, &registry),
    }
}
