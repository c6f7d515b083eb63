//! PGN-style export of a move history.
//!
//! Writes a header block and numbered movetext using the engine's short move
//! notation ("1. e4 e5 2. Nf3 ..."). That notation names only the destination,
//! so the output is meant for reading and logs; it is not parsed back.

use std::collections::BTreeMap;

use chrono::Local;

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

/// Today's date in PGN `YYYY.MM.DD` form.
pub fn pgn_date_today() -> String {
    Local::now().format("%Y.%m.%d").to_string()
}

pub fn write_pgn(initial_state: &GameState, moves: &[Move], result: &str) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Ply Chess Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), pgn_date_today());
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert("Result".to_owned(), normalize_result(result).to_owned());

    let initial_fen = initial_state.get_fen();
    if initial_fen != STARTING_POSITION_FEN {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("FEN".to_owned(), initial_fen);
    }

    write_pgn_with_headers(initial_state.side_to_move(), moves, &headers)
}

pub fn write_pgn_with_headers(
    first_mover: Color,
    moves: &[Move],
    headers: &BTreeMap<String, String>,
) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");

    let movetext = write_move_list(first_mover, moves);
    if !movetext.is_empty() {
        out.push_str(&movetext);
        out.push(' ');
    }
    out.push_str(result);
    out.push('\n');

    out
}

/// Numbered movetext. A list that starts with Black opens with `1...`.
pub fn write_move_list(first_mover: Color, moves: &[Move]) -> String {
    let offset = match first_mover {
        Color::White => 0,
        Color::Black => 1,
    };

    let mut parts = Vec::<String>::with_capacity(moves.len());
    for (index, mv) in moves.iter().enumerate() {
        let ply = index + offset;
        let number = (ply / 2) + 1;
        if ply % 2 == 0 {
            parts.push(format!("{}. {}", number, mv.notation()));
        } else if index == 0 {
            parts.push(format!("{}... {}", number, mv.notation()));
        } else {
            parts.push(mv.notation());
        }
    }

    parts.join(" ")
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

fn normalize_result(result: &str) -> &str {
    if is_result_token(result) {
        result
    } else {
        "*"
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('"', "\\\"")
}
