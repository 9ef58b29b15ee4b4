//! Example printing a shuffled board to the terminal.
//!
//! This example shows how to:
//! - Build a tile set from an image descriptor and a grid size
//! - Shuffle it, optionally with a pinned seed for reproducibility
//! - Walk the arrangement slot by slot
//!
//! # Usage
//!
//! ```sh
//! cargo run --example shuffle_board
//! ```
//!
//! Pick a board size and a reproducible seed:
//!
//! ```sh
//! cargo run --example shuffle_board -- --size 4 --seed 7
//! ```

use clap::Parser;
use picslide_core::{GridSize, Slot};
use picslide_game::{ImageInfo, Shuffler, TileSet};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board dimension (clamped to 2-9).
    #[arg(long, value_name = "N", default_value_t = 3)]
    size: u8,

    /// PRNG seed; omit for a random board.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Side length of the (hypothetical) square image, in pixels.
    #[arg(long, value_name = "PX", default_value_t = 600)]
    side: u32,
}

fn main() {
    let args = Args::parse();
    let size = GridSize::new(args.size);
    let mut shuffler = args.seed.map_or_else(Shuffler::new, Shuffler::with_seed);

    let mut tiles = TileSet::build(ImageInfo { side_px: args.side }, size);
    shuffler.shuffle(&mut tiles);

    println!("Board ({size}x{size}), tile ids by slot ('.' is the blank):");
    for slot in Slot::all(size) {
        let tile = tiles.tile_at(slot).expect("every slot holds a tile");
        if tile.is_blank() {
            print!("   .");
        } else {
            print!("{:>4}", tile.id());
        }
        if slot.coord(size).col == size.get() - 1 {
            println!();
        }
    }
    println!();
    println!("Solved: {}", tiles.is_solved());
}
