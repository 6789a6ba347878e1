use crate::cli::{
    args::DecodeArgs,
    config::{create_codec, read_input, write_output},
    global::GlobalArgs,
};
use base62::AlphabetRegistry;

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    registry: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let codec = create_codec(registry, global)?;
    let input_data = read_input(args.file.as_ref(), global)?;

    let input_text =
        String::from_utf8(input_data).map_err(|_| "Input must be valid UTF-8 for decoding")?;
    let decoded = codec.decode_to_bytes(input_text.trim(), args.bytes)?;

    write_output(&decoded, args.output.as_deref())
}
