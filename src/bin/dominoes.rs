//! Interactive dominoes against the computer.
//!
//! Enter `n` to attach your n-th piece to the right end of the snake, `-n`
//! for the left end, or `0` to draw from the stock (pass when it is empty).

use std::io::{self, BufRead};

use clap::Parser;
use dominoes::{DominoError, GameConfig, GameEngine, Seat, Status, TileContainer};

#[derive(Debug, Parser)]
#[command(about = "Play double-six dominoes against the computer")]
struct Args {
    #[arg(long, help = "Seed for the deal (random when omitted)")]
    seed: Option<u64>,

    #[arg(
        long,
        default_value_t = 64,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Deals to try before giving up on an opening double"
    )]
    max_deal_attempts: u32,
}

fn board(engine: &GameEngine) -> String {
    let pieces: Vec<String> = engine
        .player_hand()
        .iter()
        .enumerate()
        .map(|(i, tile)| format!("{}:{}", i + 1, tile))
        .collect();

    let status = match (engine.status(), engine.turn()) {
        (Status::InProgress, Seat::Computer) => {
            "Status: Computer is about to make a move. Press Enter to continue..."
        }
        (Status::InProgress, Seat::Player) => {
            "Status: It's your turn to make a move. Enter your command."
        }
        (Status::WonByPlayer, _) => "Status: The game is over. You won!",
        (Status::WonByComputer, _) => "Status: The game is over. The computer won!",
        (Status::Draw, _) => "Status: The game is over. It's a draw!",
    };

    format!(
        "{}\nStock size: {}\nComputer pieces: {}\n\n{}\n\nYour pieces:\n{}\n\n{}",
        "=".repeat(70),
        engine.stock().len(),
        engine.computer_hand().len(),
        engine.chain(),
        pieces.join("\n"),
        status
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    let config = GameConfig::new(seed).with_max_deal_attempts(args.max_deal_attempts);
    let mut engine = GameEngine::new(&config)?;
    log::info!("playing with seed {seed}");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !engine.status().is_terminal() {
        println!("{}", board(&engine));

        match engine.turn() {
            Seat::Computer => {
                if lines.next().transpose()?.is_none() {
                    return Ok(());
                }
                engine.computer_turn()?;
            }
            Seat::Player => loop {
                let Some(command) = lines.next().transpose()? else {
                    return Ok(());
                };
                match engine.submit_human_move(&command) {
                    Ok(_) => break,
                    Err(DominoError::RejectedCommand(reason)) => {
                        println!("Invalid input ({reason}). Please try again.");
                    }
                    Err(err) => return Err(err.into()),
                }
            },
        }
    }

    println!("{}", board(&engine));
    Ok(())
}
