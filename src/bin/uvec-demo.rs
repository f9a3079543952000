//! Illustrative self-test: pack an axis direction, unpack it, print both.

use nether_uvec::{pack, shared_table, unpack};

fn main() {
    let code = pack(1.0, 0.0, 0.0);
    println!("packed (1, 0, 0) -> 0x{code:04X} ({code})");

    let [x, y, z] = unpack(code, shared_table());
    println!("unpacked -> ({x}, {y}, {z})");
}
