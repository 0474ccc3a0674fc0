//! Walk a small mixed-radix product and classify a stream with duplicates.
//!
//! Run: `cargo run -p iterkit --example gray_walk`
//! The subscriber is set to DEBUG so the library's own events show up too.

use anyhow::{Context, Result};
use iterkit::prelude::*;
use tracing::Level;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(Level::DEBUG)
        .init();

    let mut walk = GrayProduct::new(&[3, 2, 2]).context("building gray walk")?;
    while let Some(digits) = walk.next_digits() {
        let digits = digits.to_vec();
        match walk.last_change() {
            Some(Change { index, delta }) => {
                println!("{digits:?}  (coordinate {index} moved {delta:+})")
            }
            None => println!("{digits:?}  (start)"),
        }
    }

    let stream = vec![
        Value::from("a"),
        Value::from(vec![1i64, 2]),
        Value::Tuple(vec![Value::Int(1), Value::Int(2)]),
        Value::from("a"),
        Value::from(vec![1i64, 2]),
    ];
    for (value, first) in is_unique_everseen(stream) {
        tracing::info!(?value, first, "classified");
    }

    let ids: Vec<u32> = vec![4, 8, 15, 16, 23, 42]
        .into_iter()
        .no_duplicates("id")
        .collect::<Result<_, _>>()?;
    println!("ids ok: {ids:?}");
    Ok(())
}
