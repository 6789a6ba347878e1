use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode bytes as base62 text
    Encode(EncodeArgs),

    /// Decode base62 text back to bytes
    Decode(DecodeArgs),

    /// Encode a decimal integer of any size
    IntEncode(IntEncodeArgs),

    /// Decode base62 text to a decimal integer
    IntDecode(IntDecodeArgs),

    /// List available alphabets
    List(ListArgs),
}

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Left-pad the decoded output with zero bytes to this length
    #[arg(short = 'b', long, value_name = "N")]
    pub bytes: Option<usize>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for encoding an integer
#[derive(Args, Debug)]
pub struct IntEncodeArgs {
    /// Non-negative decimal integer
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

/// Arguments for decoding an integer
#[derive(Args, Debug)]
pub struct IntDecodeArgs {
    /// Base62 text
    pub value: String,

    /// Use the 64-bit floating-point power arithmetic (inexact for large values)
    #[arg(long)]
    pub approx: bool,
}

/// Arguments for listing alphabets
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
