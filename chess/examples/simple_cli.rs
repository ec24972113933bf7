// Simple command-line application to play chess

use chessrules::{board::PrettyStyle, Color, Game, Move};
use clap::Parser;
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(name = "simple_cli", about = "Play chess against yourself in the terminal")]
struct Args {
    /// Start position: piece placement and side to move, e.g. "8/8/8/8/8/1q6/2k5/K7 w"
    #[arg(long)]
    fen: Option<String>,

    /// Draw the board with Unicode chess symbols
    #[arg(long)]
    utf8: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut game = match &args.fen {
        Some(fen) => match fen.parse::<Game>() {
            Ok(game) => game,
            Err(e) => {
                eprintln!("Bad position: {}", e);
                std::process::exit(1);
            }
        },
        None => Game::new(),
    };
    let style = if args.utf8 {
        PrettyStyle::Utf8
    } else {
        PrettyStyle::Ascii
    };

    let mut stdin = io::stdin().lock();
    loop {
        println!("{}", game.pretty(style));
        if let Some(outcome) = game.outcome(game.side()) {
            println!("Game finished: {}", outcome);
            break;
        }
        if game.is_in_check(game.side()) {
            println!("Check!");
        }

        let side = match game.side() {
            Color::White => "White",
            Color::Black => "Black",
        };
        print!("{} move (or \"moves\", \"quit\"): ", side);
        io::stdout().flush().unwrap();
        let mut s = String::new();
        if stdin.read_line(&mut s).unwrap() == 0 {
            break;
        }
        let s = s.trim();

        match s {
            "quit" => break,
            "moves" => {
                let moves: Vec<_> = game.moves().iter().map(ToString::to_string).collect();
                println!("{}", moves.join(" "));
                println!();
                continue;
            }
            _ => {}
        }

        let mv = match s.parse::<Move>() {
            Ok(mv) => mv,
            Err(e) => {
                println!("Bad move: {}", e);
                println!();
                continue;
            }
        };
        if let Err(e) = game.make_move(mv) {
            println!("Illegal move: {}", e);
        }
        println!();
    }
}
