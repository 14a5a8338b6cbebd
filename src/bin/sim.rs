use clap::Parser;
use naval_warfare::{init_logging, Game, Player, RandomTargeter};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

/// Run an automated battle between two randomly placed fleets.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value = "Player 1")]
    player_1: String,
    #[arg(long, default_value = "Player 2")]
    player_2: String,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Print both boards after the battle")]
    show_boards: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    let mut player_1 = Player::new(&cli.player_1);
    let mut player_2 = Player::new(&cli.player_2);
    player_1.place_fleet_randomly(&mut rng)?;
    player_2.place_fleet_randomly(&mut rng)?;

    let mut game = Game::new(player_1, player_2);
    let mut targeter = RandomTargeter::new(rng);
    game.play(&mut targeter)?;

    let winner = game.winner()?;
    let result = json!({
        "winner": winner.name(),
        "remaining_ships": winner.remaining_ships(),
        "turns": game.turns().len(),
    });
    println!("{}", serde_json::to_string(&result)?);

    if cli.show_boards {
        for player in [game.player_1(), game.player_2()] {
            println!("Final board from {}:\n{}", player.name(), player.board());
        }
    }
    Ok(())
}
