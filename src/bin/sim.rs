//! Plays one complete game through the engine: both fleets placed at random,
//! then each side sweeps the opponent's board in a shuffled order. Prints a
//! JSON summary on stdout.

use battlegrid::{init_logging, GameEngine, PlayerId, BOARD_SIZE};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value = "Player 1")]
    first: String,
    #[arg(long, default_value = "Player 2")]
    second: String,
}

fn sweep_order(rng: &mut SmallRng) -> Vec<(usize, usize)> {
    let mut cells: Vec<_> = (0..BOARD_SIZE)
        .flat_map(|r| (0..BOARD_SIZE).map(move |c| (r, c)))
        .collect();
    cells.shuffle(rng);
    cells
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let mut engine =
        GameEngine::new(&cli.first, &cli.second).map_err(|e| anyhow::anyhow!(e))?;
    while engine.current_placement_kind().is_some() {
        engine
            .place_next_ship_random(&mut rng)
            .map_err(|e| anyhow::anyhow!(e))?;
    }

    // Targets are popped from the back.
    let mut orders = [sweep_order(&mut rng), sweep_order(&mut rng)];
    let mut shots = [0usize; 2];
    let winner = loop {
        let shooter = engine.current_player();
        let (r, c) = orders[shooter.index()]
            .pop()
            .ok_or_else(|| anyhow::anyhow!("{} ran out of targets", shooter))?;
        let res = engine.fire(r, c).map_err(|e| anyhow::anyhow!(e))?;
        shots[shooter.index()] += 1;
        if res.game_over {
            break res.winner;
        }
    };

    let result = json!({
        "player1": {
            "name": engine.player(PlayerId::First).name(),
            "shots": shots[0],
        },
        "player2": {
            "name": engine.player(PlayerId::Second).name(),
            "shots": shots[1],
        },
        "turns": engine.turn_count(),
        "winner": winner,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
