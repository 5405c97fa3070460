use minesweeper::{
    init_logging, AutoPlayer, GameConfig, GameEngine, GameStatus, DEFAULT_MINES, DEFAULT_SIZE,
    MAX_SIZE,
};
use rand::{rngs::SmallRng, SeedableRng};
use serde::Serialize;

#[derive(Serialize)]
struct GameRecord {
    seed: u64,
    status: GameStatus,
    moves: usize,
    revealed: usize,
}

#[derive(Serialize)]
struct Summary {
    size: usize,
    mines: usize,
    games: usize,
    won: usize,
    lost: usize,
    results: Vec<GameRecord>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if !(3..=5).contains(&args.len()) {
        eprintln!("Usage: {} <games> <seed> [size] [mines]", args[0]);
        std::process::exit(1);
    }
    let games: usize = args[1].parse()?;
    let seed: u64 = args[2].parse()?;
    let size: usize = args.get(3).map(|s| s.parse::<usize>()).transpose()?.unwrap_or(DEFAULT_SIZE);
    let mines: usize = args.get(4).map(|s| s.parse::<usize>()).transpose()?.unwrap_or(DEFAULT_MINES);
    if size > MAX_SIZE {
        return Err(anyhow::anyhow!(
            "Board size {} is too large (max {})",
            size,
            MAX_SIZE
        ));
    }
    let config = GameConfig::new(size, mines);
    config.validate()?;

    let mut results = Vec::with_capacity(games);
    for i in 0..games {
        let game_seed = seed.wrapping_add(i as u64);
        let mut rng = SmallRng::seed_from_u64(game_seed);
        let mut engine = GameEngine::new(config, &mut rng)?;
        let status = engine.play(&mut AutoPlayer::new(), &mut rng, |_| {})?;
        results.push(GameRecord {
            seed: game_seed,
            status,
            moves: engine.moves(),
            revealed: engine.board().revealed_count(),
        });
    }

    let summary = Summary {
        size,
        mines,
        games,
        won: results.iter().filter(|r| r.status == GameStatus::Won).count(),
        lost: results.iter().filter(|r| r.status == GameStatus::Lost).count(),
        results,
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
