use crate::cli::{
    args::{IntDecodeArgs, IntEncodeArgs},
    config::create_codec,
    global::GlobalArgs,
};
use base62::{AlphabetRegistry, BigUint};

pub fn handle_encode(
    args: IntEncodeArgs,
    global: &GlobalArgs,
    registry: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let codec = create_codec(registry, global)?;
    let value = args.value.trim();

    let encoded = if value.starts_with('-') {
        // Surface the codec's own error for negatives that fit in 64 bits
        let n: i64 = value
            .parse()
            .map_err(|_| format!("'{}' is not a non-negative integer", value))?;
        codec.encode_int64(n)?
    } else {
        let n: BigUint = value
            .parse()
            .map_err(|_| format!("'{}' is not a non-negative integer", value))?;
        codec.encode_big_int(&n)
    };

    println!("{}", encoded);
    Ok(())
}

pub fn handle_decode(
    args: IntDecodeArgs,
    global: &GlobalArgs,
    registry: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let codec = create_codec(registry, global)?;
    let value = args.value.trim();

    if args.approx {
        println!("{}", codec.decode_to_int64_approx(value)?);
    } else {
        println!("{}", codec.decode_to_big_int(value)?);
    }
    Ok(())
}
