// Simple command-line application to explore checkers moves
//
// Pass `--short` or `--flying` (or `--king=<rule>`) to let kings move. Set
// `RUST_LOG=checkers=trace` to see every capture explored by the move generator.

use checkers::{Board, Piece, Rules, Square};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

fn parse_squares<'a>(args: impl Iterator<Item = &'a str>) -> Result<Vec<Square>, String> {
    args.map(|s| Square::from_str(s).map_err(|e| format!("bad square {:?}: {}", s, e)))
        .collect()
}

fn run_command(board: &mut Board, rules: &Rules, line: &str) -> Result<(), String> {
    // Squares are written as `(r,c)`, so split on closing parentheses as well
    let line = line.replace(')', ") ");
    let mut words = line.split_whitespace();
    let cmd = words.next().unwrap_or("");
    let args: Vec<&str> = words.collect();
    match cmd {
        "moves" => {
            let squares = parse_squares(args.into_iter())?;
            let origin = match squares.as_slice() {
                [origin] => *origin,
                _ => return Err("usage: moves (r,c)".to_string()),
            };
            let moves = board.get_moves_with(rules, origin, false);
            if moves.is_empty() {
                println!("No moves");
            } else {
                print!("{}", moves);
            }
        }
        "move" => {
            let squares = parse_squares(args.into_iter())?;
            let (origin, path) = match squares.split_first() {
                Some(split) => split,
                None => return Err("usage: move (r,c) (r,c)...".to_string()),
            };
            *board = board
                .make_move_with(rules, *origin, path)
                .map_err(|e| e.to_string())?;
        }
        "set" => {
            let (sq, piece) = match args.as_slice() {
                [sq, piece] => (*sq, *piece),
                _ => return Err("usage: set (r,c) <w|b|W|B>".to_string()),
            };
            let sq = Square::from_str(sq).map_err(|e| e.to_string())?;
            let piece = Piece::from_str(piece).map_err(|e| e.to_string())?;
            board.set(sq, piece);
        }
        "remove" => {
            for sq in parse_squares(args.into_iter())? {
                board.remove(sq);
            }
        }
        "reset" => *board = Board::initial(),
        _ => return Err(format!("unknown command {:?}", cmd)),
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let rules = match Rules::from_args(std::env::args().skip(1)) {
        Ok(rules) => rules,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("usage: simple_cli [--immobile | --short | --flying | --king=<rule>]");
            std::process::exit(1);
        }
    };

    let mut stdin = io::stdin().lock();
    let mut board = Board::initial();
    println!("Kings: {}", rules.king);
    println!("Commands: moves, move, set, remove, reset, quit");

    loop {
        println!("{}", board.pretty());
        print!("> ");
        io::stdout().flush().unwrap();
        let mut s = String::new();
        if stdin.read_line(&mut s).unwrap() == 0 {
            break;
        }
        let s = s.trim();
        if s == "quit" {
            break;
        }
        if s.is_empty() {
            continue;
        }
        if let Err(e) = run_command(&mut board, &rules, s) {
            println!("Error: {}", e);
        }
        println!();
    }
}
