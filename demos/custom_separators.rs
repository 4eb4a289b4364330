//! Customizing the list separator and watching escaping at work.
//!
//! Run with: cargo run --example custom_separators

use std::error::Error;

use qslist::{IntegerCodec, ListCodec, StringCodec};

fn main() -> Result<(), Box<dyn Error>> {
    let tags = vec![
        "rust".to_string(),
        "urls, the hard parts".to_string(),
        "codecs".to_string(),
    ];

    // Default comma separator; the comma inside the second tag is escaped.
    println!("Default (comma):");
    let comma = ListCodec::new(StringCodec);
    println!("  {}\n", comma.serialize(&tags)?);

    // Pipe separator: the embedded comma no longer needs escaping.
    println!("Pipe separator:");
    let pipe = ListCodec::with_separator(StringCodec, "|")?;
    println!("  {}\n", pipe.serialize(&tags)?);

    // Multi-character separators work too.
    println!("Double-semicolon separator:");
    let double = ListCodec::with_separator(StringCodec, ";;")?;
    let encoded = double.serialize(&tags)?;
    println!("  {encoded}");
    println!("  decoded: {:?}\n", double.parse(&encoded));

    // Numbers don't contain separators, so their encoding stays flat.
    println!("Integer list:");
    let numbers = ListCodec::new(IntegerCodec::new());
    println!("  {}", numbers.serialize(&[3, 14, 159])?);

    // An empty separator is refused up front.
    println!("\nEmpty separator:");
    match ListCodec::with_separator(StringCodec, "") {
        Ok(_) => unreachable!(),
        Err(err) => println!("  rejected: {err}"),
    }

    Ok(())
}
