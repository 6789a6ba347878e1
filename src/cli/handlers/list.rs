use crate::cli::{args::ListArgs, global::GlobalArgs};
use base62::AlphabetRegistry;

pub fn handle(
    args: ListArgs,
    _global: &GlobalArgs,
    registry: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(&registry.alphabets)?);
        return Ok(());
    }

    println!("Available alphabets:\n");
    for (name, config) in &registry.alphabets {
        let count = config.chars.chars().count();
        let preview: String = config.chars.chars().take(20).collect();
        let suffix = if count > 20 { "..." } else { "" };
        let padding = if config.padding > 0 {
            format!("pad {}", config.padding)
        } else {
            String::new()
        };
        println!("  {:<15} {:<7} {}{}", name, padding, preview, suffix);
    }
    Ok(())
}
