//! Every shape accepted by `print_ip`.
//!
//! Run with: cargo run --example shapes

use ip_printer::{print_ip, to_dotted, IpShape};
use std::collections::LinkedList;

fn main() {
    // Integers print their bytes, most significant first
    print_ip(-1i8);
    print_ip(0i16);
    print_ip(2130706433i32);
    print_ip(8875824491850138409i64);

    // Sequences print their elements in order
    print_ip(vec![10, 0, 0, 1]);
    print_ip([192u8, 168, 0, 1]);
    print_ip([8i16, 8, 4, 4].into_iter().collect::<LinkedList<_>>());
    print_ip(Vec::<i32>::new());

    // Strings print verbatim
    print_ip("Hello, World!");
    print_ip(String::from("1.2.3.4"));

    // Tuples print every slot in order
    print_ip((123, 456, 789, 0));
    print_ip((1, "a", 3.5));

    // Same-typed components without building a container first
    ip_printer::print_ip!(172, 16, 254, 1);

    let rendered = to_dotted(&0xC0A8_0001u32);
    println!("{} rendered as {}", <u32 as IpShape>::SHAPE, rendered);
}
