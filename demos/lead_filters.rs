//! Driving a filter list through a URL query parameter.
//!
//! Run with: cargo run --example lead_filters

use std::error::Error;

use qslist::{ListCodec, StringCodec};

fn main() -> Result<(), Box<dyn Error>> {
    let codec = ListCodec::new(StringCodec);

    // The filter state a page would keep: which lead statuses are checked.
    let mut lead_status = vec![
        "CONFIRMED".to_string(),
        "QUALIFIED".to_string(),
        "PENDING".to_string(),
    ];

    let query = codec.serialize(&lead_status)?;
    println!("Initial query value:");
    println!("  ?leadStatus={query}\n");

    // Unchecking a box removes its value from the list.
    lead_status.retain(|status| status != "QUALIFIED");
    let query = codec.serialize(&lead_status)?;
    println!("After unchecking QUALIFIED:");
    println!("  ?leadStatus={query}\n");

    // Restoring state from a shared URL.
    let restored = codec.parse_for_key(&query, "leadStatus");
    println!("Restored from the URL: {restored:?}");
    for status in ["CONFIRMED", "QUALIFIED", "PENDING"] {
        let checked = restored.iter().any(|s| s == status);
        println!("  [{}] {status}", if checked { "x" } else { " " });
    }
    println!();

    // A stale URL with a value this app no longer understands still loads;
    // comparison ignores ordering, so a reordered value is the same state.
    let reordered = codec.parse("PENDING,CONFIRMED");
    println!(
        "Reordered URL equals current state: {}",
        codec.equal(&reordered, &lead_status)
    );

    Ok(())
}
