use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{AiPlayer, Match, MatchConfig, Side};

fn main() -> anyhow::Result<()> {
    seabattle::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let first = Side::new("player1", Box::new(AiPlayer::new()), SmallRng::seed_from_u64(seed1));
    let second = Side::new("player2", Box::new(AiPlayer::new()), SmallRng::seed_from_u64(seed2));

    let mut game = Match::new(first, second, &MatchConfig::default())?;
    let summary = game.run()?;

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
