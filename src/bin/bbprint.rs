//! ASCII bitboard visualizer. Takes raw 64-bit bitboard values and draws
//! them as framed boards, several side by side when more than one is
//! given. Purely a debugging aid.

use chesstools::bitboard::Bitboard;
use chesstools::core::Rank;
use clap::Parser;
use itertools::Itertools;
use strum::IntoEnumIterator;

#[derive(Parser)]
#[command(about = "Draw bitboards as ASCII chess boards", version)]
struct Args {
    /// Bitboards to draw, as raw 64-bit integers.
    #[arg(required = true)]
    bitboards: Vec<u64>,

    /// Heading printed above the boards.
    #[arg(long, default_value = "Bitboards")]
    title: String,
}

const FRAME: &str = "  +---+---+---+---+---+---+---+---+";

fn print_side_by_side(boards: &[Bitboard]) {
    let frame = vec![FRAME; boards.len()].join("  ");
    println!("{frame}");
    for rank in Rank::iter().rev() {
        println!("{}", boards.iter().map(|board| board.rank_line(rank)).join("  "));
        println!("{frame}");
    }
    println!("{}", vec!["    a   b   c   d   e   f   g   h"; boards.len()].join("  "));
}

fn main() {
    let args = Args::parse();
    let boards: Vec<Bitboard> = args.bitboards.iter().copied().map(Bitboard::from_bits).collect();

    println!("\n{}:", args.title);
    if let [board] = boards.as_slice() {
        println!("{board}");
    } else {
        print_side_by_side(&boards);
    }
}
