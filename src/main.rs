#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use minesweeper::{
    init_logging, ui, AutoPlayer, CliPlayer, GameConfig, GameEngine, GameStatus, DEFAULT_MINES,
    DEFAULT_SIZE, MAX_SIZE,
};

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::{thread, time::Duration};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone, Copy, Debug)]
#[cfg(feature = "std")]
struct GameArgs {
    #[arg(long, default_value_t = DEFAULT_SIZE, help = "Side length of the square board")]
    size: usize,
    #[arg(long, default_value_t = DEFAULT_MINES, help = "Number of mines to place")]
    mines: usize,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
impl Default for GameArgs {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            mines: DEFAULT_MINES,
            seed: None,
        }
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play in the terminal (the default).
    Play(GameArgs),
    /// Watch the automatic player clear a board.
    Auto {
        #[command(flatten)]
        game: GameArgs,
        #[arg(long, default_value_t = 200, help = "Pause between moves in milliseconds")]
        delay_ms: u64,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

/// Shown outside the redrawn area so it stays on screen.
#[cfg(feature = "std")]
fn print_seed(seed: Option<u64>) {
    if let Some(s) = seed {
        println!("\nUsing fixed seed: {} (game will be reproducible)", s);
    }
}

#[cfg(feature = "std")]
fn game_config(args: &GameArgs) -> anyhow::Result<GameConfig> {
    if args.size > MAX_SIZE {
        return Err(anyhow::anyhow!(
            "Board size {} is too large to display (max {})",
            args.size,
            MAX_SIZE
        ));
    }
    let config = GameConfig::new(args.size, args.mines);
    config.validate()?;
    Ok(config)
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play(GameArgs::default())) {
        Commands::Play(args) => run_interactive(&args),
        Commands::Auto { game, delay_ms } => run_auto(&game, Duration::from_millis(delay_ms)),
    }
}

#[cfg(feature = "std")]
fn run_interactive(args: &GameArgs) -> anyhow::Result<()> {
    let config = game_config(args)?;
    let mut rng = make_rng(args.seed);
    let mut player = CliPlayer::new();

    ui::clear_screen();
    ui::print_banner();
    print_seed(args.seed);
    if player.prompt("\nPress Enter to start...").is_none() {
        return Ok(());
    }

    loop {
        let mut engine = GameEngine::new(config, &mut rng)?;
        let status = engine.play(&mut player, &mut rng, |engine| ui::redraw(engine.board()))?;
        if status == GameStatus::InProgress {
            println!("Thanks for playing!");
            return Ok(());
        }
        ui::print_outcome(&engine);
        if !player.ask_replay() {
            println!("Thanks for playing!");
            return Ok(());
        }
    }
}

#[cfg(feature = "std")]
fn run_auto(args: &GameArgs, delay: Duration) -> anyhow::Result<()> {
    let config = game_config(args)?;
    let mut rng = make_rng(args.seed);
    let mut engine = GameEngine::new(config, &mut rng)?;
    let mut player = AutoPlayer::new();

    engine.play(&mut player, &mut rng, |engine| {
        ui::redraw(engine.board());
        thread::sleep(delay);
    })?;
    ui::print_outcome(&engine);
    println!("Moves: {}", engine.moves());
    print_seed(args.seed);
    Ok(())
}
