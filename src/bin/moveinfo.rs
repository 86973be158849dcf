//! Packed-move decoder. Takes one packed move integer as emitted by the
//! engine and prints the origin and destination coordinates plus every
//! flag property the move's flag byte matches.

use chesstools::moves::PackedMove;
use clap::Parser;

#[derive(Parser)]
#[command(about = "Decode a packed move into human-readable form", version)]
struct Args {
    /// The packed move, as a raw integer.
    packed_move: u32,
}

fn main() {
    let args = Args::parse();
    println!("{}", PackedMove::from_bits(args.packed_move));
}
