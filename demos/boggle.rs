use anyhow::{bail, Result};
use rand::{rngs::StdRng, SeedableRng};
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use word_tiles::{SearchOptions, TileCollection};

/// Letter distribution: (tile, count, score)
const DISTRIBUTION: &[(&str, usize, i32)] = &[
    ("a", 9, 1),
    ("b", 2, 3),
    ("c", 2, 3),
    ("d", 4, 2),
    ("e", 12, 1),
    ("f", 2, 4),
    ("g", 3, 2),
    ("h", 2, 4),
    ("i", 9, 1),
    ("l", 4, 1),
    ("m", 2, 3),
    ("n", 6, 1),
    ("o", 8, 1),
    ("p", 2, 3),
    ("qu", 1, 10),
    ("r", 6, 1),
    ("s", 4, 1),
    ("t", 6, 1),
    ("u", 4, 1),
    ("w", 2, 4),
    ("y", 2, 4),
];

const WORDS: &[&str] = &[
    "tile", "quest", "search", "stone", "rain", "dog", "queen", "near", "tea", "arise",
];

/// Move the tiles of the play area back into the empty slots of the board.
fn reset(play: &mut TileCollection, board: &mut TileCollection) -> Result<()> {
    let played: Vec<_> = play.iter().filter(|t| !t.is_empty()).map(|t| t.id()).collect();
    for id in played {
        let slot = match board.first_empty_slot() {
            Some(slot) => board[slot].id(),
            None => bail!("Not enough empty slots to reset"),
        };
        play.exchange_with(board, id, slot)?;
    }
    Ok(())
}

fn run() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(123); // seeded to get reproducible results.
    let mut bag = TileCollection::from_distribution(DISTRIBUTION)?;
    bag.shuffle(&mut rng);
    let mut board = bag.select_random(&mut rng, 16, None)?;
    let mut play = TileCollection::empty(board.len());
    println!("board: {} ({} tiles left in bag)", board, bag.len());

    let options = SearchOptions::new().with_require_unique(true);
    for word in WORDS {
        let now = Instant::now();
        let found = board.search(word, &options)?;
        let elapsed = now.elapsed();
        let first = match found.first() {
            Some(first) => first,
            None => {
                println!("{:>8}: not found ({:?})", word, elapsed);
                continue;
            }
        };
        for (slot, tile) in first.iter().enumerate() {
            let target = play[slot].id();
            board.exchange_with(&mut play, tile.id(), target)?;
        }
        let score: i32 = first.iter().map(|t| t.score()).sum();
        println!(
            "{:>8}: {} ways, played \"{}\" for {} points ({:?})",
            word,
            found.len(),
            play,
            score,
            elapsed
        );
        reset(&mut play, &mut board)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    run()
}
