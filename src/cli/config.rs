use crate::cli::global::GlobalArgs;
use base62::{AlphabetRegistry, Codec};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Builds the codec selected by `--alphabet`, applying `--padding` on top of
/// the alphabet's configured padding.
pub fn create_codec(
    registry: &AlphabetRegistry,
    global: &GlobalArgs,
) -> Result<Codec, Box<dyn std::error::Error>> {
    let mut codec = registry.codec(&global.alphabet)?;
    if let Some(padding) = global.padding {
        codec.set_padding(padding);
    }
    Ok(codec)
}

/// Reads the whole input from a file or stdin, enforcing `--max-size`.
pub fn read_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let Some(file_path) = file else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        check_size(buffer.len(), global)?;
        return Ok(buffer);
    };

    let file_size = fs::metadata(file_path)?.len() as usize;
    check_size(file_size, global)?;
    Ok(fs::read(file_path)?)
}

fn check_size(size: usize, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    if global.max_size == 0 || size <= global.max_size {
        return Ok(());
    }

    if global.force {
        if !global.quiet {
            eprintln!(
                "Warning: Processing large input ({} bytes, limit: {} bytes)",
                size, global.max_size
            );
        }
        Ok(())
    } else {
        Err(format!(
            "Input size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
            size, global.max_size
        )
        .into())
    }
}

/// Writes to the output file, or to stdout when none is given.
pub fn write_output(data: &[u8], output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => fs::write(path, data)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
