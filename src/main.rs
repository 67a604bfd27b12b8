use seabattle::{
    init_logging, print_match_view, AiPlayer, Board, FleetPlacer, FleetSpec, Match, MatchConfig,
    Player, RandomPlayer, Side, DEFAULT_SHOT_LIMIT, MAX_SHIP_SIZE,
};

use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an AI vs AI match on the local machine.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Second side shoots at random instead of hunting/targeting")]
        random_opponent: bool,
        #[arg(long, default_value_t = MAX_SHIP_SIZE, help = "Largest ship of the classic fleet")]
        max_ship: usize,
        #[arg(long, default_value_t = DEFAULT_SHOT_LIMIT)]
        shot_limit: usize,
        #[arg(long, help = "Give up placing a ship after this many rejected spots")]
        placement_attempts: Option<usize>,
        #[arg(long, help = "Only print the final boards")]
        quiet: bool,
    },
    /// Place one fleet and sink it by shooting its known decks at random.
    Demo {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn seeded(seed: Option<u64>, salt: u64) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(salt)),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            random_opponent,
            max_ship,
            shot_limit,
            placement_attempts,
            quiet,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let config = MatchConfig {
                fleet: FleetSpec::classic(max_ship),
                shot_limit,
                max_placement_attempts: placement_attempts,
            };
            let opponent: Box<dyn Player> = if random_opponent {
                Box::new(RandomPlayer::new())
            } else {
                Box::new(AiPlayer::new())
            };
            let first = Side::new("player1", Box::new(AiPlayer::new()), seeded(seed, 0));
            let second = Side::new("player2", opponent, seeded(seed, 1));
            let mut game = Match::new(first, second, &config)?;

            while game.winner().is_none() {
                let shot = game.step()?;
                if !quiet {
                    let shooter = game.side(shot.shooter).name();
                    println!("{:>8} -> {:<4} {:?}", shooter, shot.at.to_string(), shot.outcome);
                }
            }
            print_match_view(game.sides());
            let summary = game.summary();
            println!(
                "\n{} wins after {} shots",
                summary.winner.as_deref().unwrap_or("nobody"),
                summary.total_shots
            );
        }
        Commands::Demo { seed } => {
            let mut rng = seeded(seed, 0);
            let mut board = Board::new();
            FleetPlacer::default().place(&mut rng, &mut board)?;
            print!("{}", board);
            while let Some(at) = board.random_alive_deck(&mut rng) {
                let outcome = board.resolve_hit(at.col, at.row)?;
                println!("{} {:?}", at, outcome);
            }
            print!("{}", board);
        }
    }
    Ok(())
}
