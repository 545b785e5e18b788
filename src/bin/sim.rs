use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde::Serialize;
use seabattle::{parse_fleet, AiPlayer, Game, GameConfig, GameStatus, ShotStats};

/// Play the computer against itself and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the random source.
    seed: u64,
    #[arg(long, default_value_t = 1, help = "Number of games to play with consecutive seeds")]
    games: u64,
    #[arg(long)]
    size: Option<usize>,
    #[arg(long)]
    fleet: Option<String>,
}

#[derive(Serialize)]
struct Side {
    status: GameStatus,
    #[serde(flatten)]
    stats: ShotStats,
}

#[derive(Serialize)]
struct Report {
    seed: u64,
    rounds: usize,
    player1: Side,
    player2: Side,
    winner: &'static str,
}

fn main() -> anyhow::Result<()> {
    seabattle::init_logging();
    let args = Args::parse();

    let mut config = GameConfig::default();
    if let Some(size) = args.size {
        config.board_size = size;
    }
    if let Some(fleet) = &args.fleet {
        config.fleet = parse_fleet(fleet)?;
    }

    for seed in args.seed..args.seed.saturating_add(args.games) {
        let report = simulate(config.clone(), seed)?;
        println!("{}", serde_json::to_string(&report)?);
    }
    Ok(())
}

fn simulate(config: GameConfig, seed: u64) -> anyhow::Result<Report> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut p1 = AiPlayer::new();
    let mut p2 = AiPlayer::new();
    let mut game = Game::new(config)?;
    game.setup(&mut p1, &mut p2, &mut rng)?;
    let status = game.run(&mut p1, &mut p2, &mut rng)?;

    let (s1, s2, winner) = match status {
        GameStatus::Won => (GameStatus::Won, GameStatus::Lost, "player1"),
        _ => (GameStatus::Lost, GameStatus::Won, "player2"),
    };
    Ok(Report {
        seed,
        rounds: game.rounds(),
        player1: Side {
            status: s1,
            stats: game.player_stats(),
        },
        player2: Side {
            status: s2,
            stats: game.opponent_stats(),
        },
        winner,
    })
}
