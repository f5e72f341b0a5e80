//! Choosing the rendering path at run time through serde.
//!
//! Run with: cargo run --example runtime_dispatch

use ip_printer::{to_string, to_writer};
use serde::Serialize;
use std::error::Error;
use std::io;

#[derive(Serialize)]
struct Address(u8, u8, u8, u8);

#[derive(Serialize)]
struct Host {
    name: String,
    address: Address,
}

fn main() -> Result<(), Box<dyn Error>> {
    let gateway = Host {
        name: "gateway".to_string(),
        address: Address(192, 168, 0, 1),
    };

    // A tuple struct takes the tuple path
    to_writer(io::stdout().lock(), &gateway.address)?;

    // A named struct has no dotted rendering
    match to_string(&gateway) {
        Ok(rendered) => println!("{}", rendered),
        Err(err) => println!("rejected: {}", err),
    }

    Ok(())
}
