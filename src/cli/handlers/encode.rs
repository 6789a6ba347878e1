use crate::cli::{
    args::EncodeArgs,
    config::{create_codec, read_input, write_output},
    global::GlobalArgs,
};
use base62::AlphabetRegistry;

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    registry: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let codec = create_codec(registry, global)?;
    let input_data = read_input(args.file.as_ref(), global)?;

    let mut encoded = codec.encode_bytes(&input_data);
    encoded.push('\n');

    write_output(encoded.as_bytes(), args.output.as_deref())
}
