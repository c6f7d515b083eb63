//! FEN-to-GameState parser.
//!
//! Reads the placement, side, castling and en-passant fields. The two clock
//! fields are optional and ignored; this engine keeps no move clocks.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 4 && fields.len() != 6 {
        return Err(invalid(format!("expected 4 or 6 fields, found {}", fields.len())));
    }

    let board = parse_board(fields[0])?;
    let side_to_move = parse_side_to_move(fields[1])?;
    let castling_rights = parse_castling_rights(fields[2])?;
    let en_passant_square = parse_en_passant_square(fields[3], side_to_move)?;

    for clock in fields.iter().skip(4) {
        clock
            .parse::<u16>()
            .map_err(|_| invalid(format!("invalid move clock: {clock}")))?;
    }

    GameState::from_parts(board, side_to_move, castling_rights, en_passant_square)
}

fn invalid(reason: String) -> ChessError {
    ChessError::InvalidFen(reason)
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks".to_owned()));
    }

    let mut board: Board = [[None; 8]; 8];
    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("invalid empty-square count '{ch}'")));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(format!("invalid piece character '{ch}'")))?;
            if col >= 8 {
                return Err(invalid(format!("rank '{rank_str}' has too many files")));
            }
            board[row][col] = Some(piece);
            col += 1;
        }

        if col != 8 {
            return Err(invalid(format!("rank '{rank_str}' does not sum to 8 files")));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    let mut rights = CastlingRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.white_kingside = true,
            'Q' => rights.white_queenside = true,
            'k' => rights.black_kingside = true,
            'q' => rights.black_queenside = true,
            _ => return Err(invalid(format!("invalid castling rights character: {ch}"))),
        }
    }

    Ok(rights)
}

/// The target must lie on the rank skipped by the opponent's double push:
/// rank 6 with White to move, rank 3 with Black to move.
fn parse_en_passant_square(en_passant_part: &str, side_to_move: Color) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| invalid(format!("invalid en-passant square: {en_passant_part}")))?;

    let expected_row = match side_to_move {
        Color::White => 2,
        Color::Black => 5,
    };
    if square.row != expected_row {
        return Err(invalid(format!(
            "en-passant square {en_passant_part} is not on the skipped rank for {side_to_move:?} to move"
        )));
    }

    Ok(Some(square))
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    PieceKind::from_code(ch).map(|kind| Piece::new(color, kind))
}
