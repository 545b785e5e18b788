use seabattle::{
    init_logging, parse_fleet, AiPlayer, CliPlayer, Game, GameConfig, GameStatus, Player,
    DEFAULT_BOARD_SIZE,
};

use clap::{Args, Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
struct GameArgs {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE, help = "Rows and columns of each board (1-26)")]
    size: usize,
    #[arg(long, conflicts_with = "full_fleet", help = "Comma separated fleet, e.g. P5,B4,S3,L1")]
    fleet: Option<String>,
    #[arg(long, help = "Play with the larger eight-ship fleet")]
    full_fleet: bool,
}

impl GameArgs {
    fn config(&self) -> anyhow::Result<GameConfig> {
        let mut config = if self.full_fleet {
            GameConfig::full_fleet()
        } else {
            GameConfig::default()
        };
        config.board_size = self.size;
        if let Some(fleet) = &self.fleet {
            config.fleet = parse_fleet(fleet)?;
        }
        config.validate()?;
        Ok(config)
    }

    fn rng(&self) -> SmallRng {
        match self.seed {
            Some(s) => {
                println!("Using fixed seed: {} (game will be reproducible)", s);
                SmallRng::seed_from_u64(s)
            }
            None => {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            }
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in this terminal.
    Play {
        #[command(flatten)]
        game: GameArgs,
        #[arg(long, help = "Show the computer's ships (debugging aid)")]
        reveal: bool,
    },
    /// Watch the computer play against itself.
    Watch {
        #[command(flatten)]
        game: GameArgs,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { game: args, reveal } => {
            let config = args.config()?;
            let mut rng = args.rng();
            let mut human = CliPlayer::stdio().reveal_opponent(reveal);
            let mut computer = AiPlayer::new();
            let status = play(config, &mut human, &mut computer, &mut rng)?;
            match status {
                GameStatus::Won => println!("You won!\n"),
                GameStatus::Lost => println!("The computer won.\n"),
                GameStatus::InProgress => {}
            }
        }
        Commands::Watch { game: args } => {
            let config = args.config()?;
            let mut rng = args.rng();
            let mut first = AiPlayer::new();
            let mut second = AiPlayer::new();
            let mut game = Game::new(config)?;
            game.setup(&mut first, &mut second, &mut rng)?;
            let status = game.run(&mut first, &mut second, &mut rng)?;
            println!("\n\tFIRST FLEET\n{}", game.player_board().full_view());
            println!("\tSECOND FLEET\n{}", game.opponent_board().full_view());
            println!(
                "{} after {} rounds",
                match status {
                    GameStatus::Won => "First computer won",
                    _ => "Second computer won",
                },
                game.rounds()
            );
        }
    }
    println!("Game over");
    Ok(())
}

fn play(
    config: GameConfig,
    human: &mut impl Player,
    computer: &mut impl Player,
    rng: &mut SmallRng,
) -> anyhow::Result<GameStatus> {
    let mut game = Game::new(config)?;
    game.setup(human, computer, rng)?;
    game.run(human, computer, rng)
}
