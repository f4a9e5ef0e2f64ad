//! Interactive driver for the minichess engine

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};

use minichess::core::moves::Move;
use minichess::game::{GameSession, Mode};

#[derive(Parser, Debug)]
#[command(about = "Play a 6x5 chess variant against the engine", long_about = None)]
struct Args {
    /// Who the engine plays for
    #[arg(long, value_enum, default_value = "ai")]
    mode: Mode,

    /// Search depth for the White engine (ai-vs-ai mode)
    #[arg(long, default_value_t = 2)]
    white_depth: u8,

    /// Search depth for the Black engine
    #[arg(long, default_value_t = 2)]
    black_depth: u8,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut session = GameSession::new();
    session.new_game(args.mode, args.white_depth, args.black_depth);

    println!("{}", session.board());
    print_help();

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        let line = input.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match command {
            // A bare Enter steps the engine match forward.
            "" => {
                if args.mode == Mode::AiVsAi {
                    play_engine_move(&mut session);
                }
            }
            "move" | "m" => play_human_move(&mut session, rest, args.mode),
            "select" | "s" => show_selection(&mut session, rest),
            "ai" => play_engine_move(&mut session),
            "new" => {
                session.new_game(args.mode, args.white_depth, args.black_depth);
                println!("{}", session.board());
            }
            "board" | "d" => println!("{}", session.board()),
            "json" => println!("{}", serde_json::to_string_pretty(&session.state())?),
            "help" => print_help(),
            "quit" | "exit" => break,
            _ => println!("Unknown command '{command}', try 'help'"),
        }
    }

    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  move <from><to>   play a move, e.g. 'move b2b3'");
    println!("  select <square>   show legal destinations, e.g. 'select b2'");
    println!("  ai                let the engine move for the side to play");
    println!("  new               restart the game");
    println!("  board             print the position");
    println!("  json              print the full state as JSON");
    println!("  quit              leave");
}

fn play_human_move(session: &mut GameSession, text: &str, mode: Mode) {
    let mv = match Move::from_text(text) {
        Some(mv) => mv,
        None => {
            println!("Cannot parse '{text}', expected something like b2b3");
            return;
        }
    };
    let from = mv.from();
    let selected = session.select_square(from.row(), from.col());
    if selected.selected_piece != Some((from.row(), from.col())) {
        println!("{}", selected.message);
        return;
    }
    let to = mv.to();
    let state = session.make_move(from.row(), from.col(), to.row(), to.col());
    println!("{}", session.board());
    if !state.message.is_empty() {
        println!("{}", state.message);
    }
    // In the one-engine mode the reply comes immediately.
    if mode == Mode::Ai && !state.game_over && state.turn == minichess::Side::Black {
        play_engine_move(session);
    }
}

fn show_selection(session: &mut GameSession, text: &str) {
    let square = match minichess::Square::from_algebraic(text) {
        Some(sq) => sq,
        None => {
            println!("Cannot parse '{text}', expected something like b2");
            return;
        }
    };
    let state = session.select_square(square.row(), square.col());
    if state.selected_piece == Some((square.row(), square.col())) {
        let dests: Vec<String> = state
            .valid_moves
            .iter()
            .filter_map(|&(row, col)| minichess::Square::try_new(row, col))
            .map(|sq| sq.to_algebraic())
            .collect();
        if dests.is_empty() {
            println!("{square} has no legal moves");
        } else {
            println!("{} can go to: {}", square, dests.join(" "));
        }
    } else {
        println!("{}", state.message);
    }
}

fn play_engine_move(session: &mut GameSession) {
    let state = session.request_ai_move();
    println!("{}", session.board());
    if let Some(nodes) = state.nodes_evaluated {
        if let Some(((fr, fc), (tr, tc))) = state.last_move {
            let text = match (
                minichess::Square::try_new(fr, fc),
                minichess::Square::try_new(tr, tc),
            ) {
                (Some(from), Some(to)) => format!("{from}{to}"),
                _ => String::new(),
            };
            println!("Engine played {text} ({nodes} nodes)");
        }
    }
    if !state.message.is_empty() {
        println!("{}", state.message);
    }
}
